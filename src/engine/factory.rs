// ============================================================================
// Calculator Factory
// Creates calculators with proper configuration
// ============================================================================

use crate::domain::{CalculatorConfig, EvaluationPolicy};
use crate::engine::Calculator;
use crate::interfaces::OutcomeHandler;
use std::sync::Arc;

// ============================================================================
// Factory Functions
// ============================================================================

/// Creates a calculator from configuration
///
/// # Arguments
/// * `config` - Calculator configuration
/// * `handler` - Handler receiving every operation outcome
///
/// # Example
/// ```
/// use integer_arithmetic::prelude::*;
/// use num_bigint::BigInt;
/// use std::sync::Arc;
///
/// let config = CalculatorConfig::lenient_roots();
/// let calculator = create_from_config(config, Arc::new(NoOpOutcomeHandler)).unwrap();
/// assert_eq!(calculator.square_root_of(63).unwrap(), BigInt::from(7));
/// ```
pub fn create_from_config(
    config: CalculatorConfig,
    handler: Arc<dyn OutcomeHandler>,
) -> Result<Calculator, String> {
    Calculator::new(config, handler)
}

// ============================================================================
// Builder Pattern
// ============================================================================

/// Builder for creating calculators with fluent API
///
/// # Example
/// ```
/// use integer_arithmetic::prelude::*;
/// use num_bigint::BigInt;
/// use std::sync::Arc;
///
/// let calculator = CalculatorBuilder::new()
///     .permissive()
///     .with_max_factorial_input(1_000)
///     .build(Arc::new(LoggingOutcomeHandler))
///     .unwrap();
/// assert_eq!(calculator.division_of([12, 0]).unwrap(), BigInt::from(0));
/// ```
#[derive(Debug, Clone, Default)]
pub struct CalculatorBuilder {
    config: CalculatorConfig,
}

impl CalculatorBuilder {
    /// Create a new builder with the strict default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail fast on every error
    pub fn strict(mut self) -> Self {
        self.config.policy = EvaluationPolicy::Strict;
        self
    }

    /// Drop missing operands and substitute zero for failures
    pub fn permissive(mut self) -> Self {
        self.config.policy = EvaluationPolicy::Permissive;
        self
    }

    /// Return floor roots for non-square inputs
    pub fn accept_approximate_roots(mut self) -> Self {
        self.config.accept_approximate_roots = true;
        self
    }

    /// Set the largest accepted factorial input
    pub fn with_max_factorial_input(mut self, limit: i64) -> Self {
        self.config.max_factorial_input = Some(limit);
        self
    }

    /// Set the largest accepted Fibonacci index
    pub fn with_max_fibonacci_index(mut self, limit: i64) -> Self {
        self.config.max_fibonacci_index = Some(limit);
        self
    }

    /// Get the current configuration (for inspection)
    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Build the calculator
    pub fn build(self, handler: Arc<dyn OutcomeHandler>) -> Result<Calculator, String> {
        create_from_config(self.config, handler)
    }
}
