// ============================================================================
// Interfaces Module
// Contracts for observing and reporting operation outcomes
// ============================================================================

mod outcome_handler;
mod safe_executor;

pub use outcome_handler::{
    LoggingOutcomeHandler, NoOpOutcomeHandler, OperationReport, OutcomeHandler,
    RecordingOutcomeHandler,
};
pub use safe_executor::SafeExecutor;
