// ============================================================================
// Calculator Configuration
// Evaluation policy and resource ceilings for the configurable calculator
// ============================================================================

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Evaluation Policy
// ============================================================================

/// How the calculator treats missing operands and failed operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum EvaluationPolicy {
    /// Fail fast with a typed error
    /// - Missing operands are rejected
    /// - Every failure reaches the caller
    #[default]
    Strict,

    /// Alternate mode kept for callers that must always get a number
    /// - Missing operands are dropped before evaluation (identity of the reduction)
    /// - Any remaining failure evaluates to zero
    Permissive,
}

// ============================================================================
// Complete Calculator Configuration
// ============================================================================

/// Configuration for a [`Calculator`](crate::engine::Calculator)
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CalculatorConfig {
    /// Failure and missing-operand policy
    pub policy: EvaluationPolicy,

    /// Return the floor root instead of failing when the input is not a perfect square
    pub accept_approximate_roots: bool,

    /// Optional: largest accepted factorial input
    /// None means unlimited
    pub max_factorial_input: Option<i64>,

    /// Optional: largest accepted Fibonacci index or iteration count
    /// None means unlimited
    pub max_fibonacci_index: Option<i64>,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self::new(EvaluationPolicy::Strict)
    }
}

impl CalculatorConfig {
    /// Create a new configuration with the given policy
    pub fn new(policy: EvaluationPolicy) -> Self {
        Self {
            policy,
            accept_approximate_roots: false,
            max_factorial_input: None,
            max_fibonacci_index: None,
        }
    }

    /// Builder method: Accept floor approximations from square root
    pub fn with_approximate_roots(mut self, accept: bool) -> Self {
        self.accept_approximate_roots = accept;
        self
    }

    /// Builder method: Set the largest accepted factorial input
    pub fn with_max_factorial_input(mut self, limit: i64) -> Self {
        self.max_factorial_input = Some(limit);
        self
    }

    /// Builder method: Set the largest accepted Fibonacci index
    pub fn with_max_fibonacci_index(mut self, limit: i64) -> Self {
        self.max_fibonacci_index = Some(limit);
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if let Some(limit) = self.max_factorial_input {
            if limit < 0 {
                return Err("Factorial limit cannot be negative".to_string());
            }
        }

        if let Some(limit) = self.max_fibonacci_index {
            if limit < 0 {
                return Err("Fibonacci limit cannot be negative".to_string());
            }
        }

        Ok(())
    }

    /// Whether failures are reported to the caller
    pub fn is_strict(&self) -> bool {
        self.policy == EvaluationPolicy::Strict
    }
}

// ============================================================================
// Preset Configurations (Factory Methods)
// ============================================================================

impl CalculatorConfig {
    /// Canonical fail-fast configuration
    pub fn strict() -> Self {
        Self::new(EvaluationPolicy::Strict)
    }

    /// Missing operands skipped, failures evaluate to zero
    pub fn permissive() -> Self {
        Self::new(EvaluationPolicy::Permissive)
    }

    /// Strict, except that square root returns its floor approximation
    pub fn lenient_roots() -> Self {
        Self::strict().with_approximate_roots(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_creation() {
        let config = CalculatorConfig::default();

        assert_eq!(config.policy, EvaluationPolicy::Strict);
        assert!(!config.accept_approximate_roots);
        assert!(config.is_strict());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = CalculatorConfig::permissive()
            .with_max_factorial_input(1_000)
            .with_max_fibonacci_index(10_000);

        assert_eq!(config.max_factorial_input, Some(1_000));
        assert_eq!(config.max_fibonacci_index, Some(10_000));
        assert!(!config.is_strict());
    }

    #[test]
    fn test_validation() {
        let config = CalculatorConfig::strict().with_max_factorial_input(-1);
        assert!(config.validate().is_err());

        let config = CalculatorConfig::strict().with_max_fibonacci_index(-5);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_preset_configs() {
        assert!(CalculatorConfig::lenient_roots().accept_approximate_roots);
        assert!(CalculatorConfig::lenient_roots().is_strict());
        assert_eq!(
            CalculatorConfig::permissive().policy,
            EvaluationPolicy::Permissive
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        let config = CalculatorConfig::lenient_roots().with_max_factorial_input(500);
        let json = serde_json::to_string(&config).unwrap();
        let parsed: CalculatorConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }
}
