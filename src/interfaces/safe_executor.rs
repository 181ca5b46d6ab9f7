// ============================================================================
// Safe Executor
// Runs an operation for reporting and substitutes a fallback on failure
// ============================================================================

use crate::numeric::ArithmeticResult;
use num_bigint::BigInt;
use num_traits::Zero;

/// Reporting helper for callers that must always print a number.
///
/// Failures are logged and replaced by a fallback value. This belongs to the
/// reporting side only: the engine itself never substitutes values.
pub struct SafeExecutor;

impl SafeExecutor {
    /// Run `operation`, falling back to zero on failure.
    pub fn execute<F>(operation: F) -> BigInt
    where
        F: FnOnce() -> ArithmeticResult<BigInt>,
    {
        Self::execute_or(operation, BigInt::zero())
    }

    /// Run `operation`, falling back to `fallback` on failure.
    pub fn execute_or<F>(operation: F, fallback: BigInt) -> BigInt
    where
        F: FnOnce() -> ArithmeticResult<BigInt>,
    {
        match operation() {
            Ok(value) => value,
            Err(err) => {
                tracing::error!(kind = ?err.kind(), "error received: {}", err);
                fallback
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{division_of, square_root_of, sum_of};

    #[test]
    fn test_success_passes_through() {
        assert_eq!(SafeExecutor::execute(|| sum_of([4, 7])), BigInt::from(11));
    }

    #[test]
    fn test_failure_falls_back_to_zero() {
        assert_eq!(SafeExecutor::execute(|| division_of([12, 0])), BigInt::zero());
        assert_eq!(SafeExecutor::execute(|| square_root_of(63)), BigInt::zero());
    }

    #[test]
    fn test_custom_fallback() {
        assert_eq!(
            SafeExecutor::execute_or(|| division_of([10, 3]), BigInt::from(-1)),
            BigInt::from(-1)
        );
    }
}
