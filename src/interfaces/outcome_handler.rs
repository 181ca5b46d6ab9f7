// ============================================================================
// Outcome Handler Interface
// Defines the contract for observing operation outcomes
// ============================================================================

use crate::domain::Operation;
use crate::numeric::ArithmeticError;
use chrono::{DateTime, Utc};
use num_bigint::BigInt;
use parking_lot::Mutex;
use tracing::Level;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Outcome of one operation, as seen by the calculator before any policy is applied
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OperationReport {
    pub operation: Operation,
    pub outcome: Result<BigInt, ArithmeticError>,
    pub timestamp: DateTime<Utc>,
}

impl OperationReport {
    pub fn new(operation: Operation, outcome: Result<BigInt, ArithmeticError>) -> Self {
        Self {
            operation,
            outcome,
            timestamp: Utc::now(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.outcome.is_ok()
    }
}

/// Outcome handler trait for observing calculator results
/// Implementations can handle logging, metrics, auditing, etc.
pub trait OutcomeHandler: Send + Sync {
    /// Handle one operation report
    fn on_report(&self, report: OperationReport);
}

/// No-op outcome handler
pub struct NoOpOutcomeHandler;

impl OutcomeHandler for NoOpOutcomeHandler {
    fn on_report(&self, _report: OperationReport) {}
}

/// Logging outcome handler
pub struct LoggingOutcomeHandler;

impl LoggingOutcomeHandler {
    /// Rejected operands log at debug, failed computations at warn
    pub fn level_for(err: &ArithmeticError) -> Level {
        if err.is_validation_failure() {
            Level::DEBUG
        } else {
            Level::WARN
        }
    }
}

impl OutcomeHandler for LoggingOutcomeHandler {
    fn on_report(&self, report: OperationReport) {
        match &report.outcome {
            Ok(value) => tracing::debug!("{}: {}", report.operation, value),
            Err(err) if Self::level_for(err) == Level::WARN => {
                tracing::warn!("{} failed: {}", report.operation, err)
            },
            Err(err) => tracing::debug!("{} rejected: {}", report.operation, err),
        }
    }
}

/// Keeps every report in memory, in arrival order
#[derive(Default)]
pub struct RecordingOutcomeHandler {
    reports: Mutex<Vec<OperationReport>>,
}

impl RecordingOutcomeHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the reports received so far
    pub fn reports(&self) -> Vec<OperationReport> {
        self.reports.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.reports.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.lock().is_empty()
    }
}

impl OutcomeHandler for RecordingOutcomeHandler {
    fn on_report(&self, report: OperationReport) {
        self.reports.lock().push(report);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noop_handler() {
        let handler = NoOpOutcomeHandler;
        handler.on_report(OperationReport::new(Operation::Sum, Ok(BigInt::from(3))));
        // Should not panic
    }

    #[test]
    fn test_logging_handler() {
        let handler = LoggingOutcomeHandler;
        handler.on_report(OperationReport::new(
            Operation::Division,
            Err(ArithmeticError::ZeroNotAllowed),
        ));
    }

    #[test]
    fn test_logging_level_follows_failure_kind() {
        let rejected = ArithmeticError::NegativeNotAllowed { value: -4 };
        let failed = ArithmeticError::NonIntegerDivision {
            dividend: BigInt::from(10),
            divisor: BigInt::from(3),
        };
        assert_eq!(LoggingOutcomeHandler::level_for(&rejected), Level::DEBUG);
        assert_eq!(LoggingOutcomeHandler::level_for(&failed), Level::WARN);

        let handler = LoggingOutcomeHandler;
        handler.on_report(OperationReport::new(Operation::Factorial, Err(rejected)));
        handler.on_report(OperationReport::new(Operation::Division, Err(failed)));
    }

    #[test]
    fn test_recording_handler_keeps_order() {
        let handler = RecordingOutcomeHandler::new();
        assert!(handler.is_empty());

        handler.on_report(OperationReport::new(Operation::Sum, Ok(BigInt::from(3))));
        handler.on_report(OperationReport::new(
            Operation::Factorial,
            Err(ArithmeticError::NegativeNotAllowed { value: -1 }),
        ));

        let reports = handler.reports();
        assert_eq!(handler.len(), 2);
        assert_eq!(reports[0].operation, Operation::Sum);
        assert!(reports[0].is_success());
        assert_eq!(reports[1].operation, Operation::Factorial);
        assert!(!reports[1].is_success());
    }
}
