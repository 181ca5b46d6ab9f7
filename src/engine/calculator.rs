// ============================================================================
// Calculator
// Configurable front end over the strict engine operations
// ============================================================================

use super::{
    average_of, difference_of, division_of, factorial_of, fibonacci_at, fibonacci_iterations,
    maximum_of, minimum_of, percent_of, percentage_of, product_of,
    square_root_of, sum_of, sum_of_squares_of,
};
use crate::domain::{
    without_missing, CalculatorConfig, IntoOperands, Operand, OperandList, Operation,
};
use crate::interfaces::{NoOpOutcomeHandler, OperationReport, OutcomeHandler};
use crate::numeric::{ArithmeticError, ArithmeticResult};
use crate::validation::{require_min_arity, require_non_empty, require_within};
use num_bigint::BigInt;
use num_traits::Zero;
use std::sync::Arc;

/// Runs engine operations under a [`CalculatorConfig`] and reports every outcome.
///
/// The free functions in [`crate::engine`] always fail fast. The calculator adds
/// the configured policy on top: optional ceilings, approximate square roots, and
/// the permissive mode that treats missing operands as the identity of the
/// reduction and turns failures into zero. The handler always sees the true
/// outcome, before approximations or the permissive zero are applied.
pub struct Calculator {
    config: CalculatorConfig,
    handler: Arc<dyn OutcomeHandler>,
}

impl Calculator {
    /// Create a calculator, validating the configuration first
    pub fn new(config: CalculatorConfig, handler: Arc<dyn OutcomeHandler>) -> Result<Self, String> {
        config.validate()?;
        Ok(Self { config, handler })
    }

    /// Strict calculator without reporting
    pub fn strict() -> Self {
        Self {
            config: CalculatorConfig::strict(),
            handler: Arc::new(NoOpOutcomeHandler),
        }
    }

    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    // ========================================================================
    // List Operations
    // ========================================================================

    pub fn sum_of(&self, values: impl IntoOperands) -> ArithmeticResult<BigInt> {
        self.evaluate_list(Operation::Sum, values, |operands| sum_of(operands))
    }

    pub fn difference_of(&self, values: impl IntoOperands) -> ArithmeticResult<BigInt> {
        self.evaluate_list(Operation::Difference, values, |operands| difference_of(operands))
    }

    pub fn product_of(&self, values: impl IntoOperands) -> ArithmeticResult<BigInt> {
        self.evaluate_list(Operation::Product, values, |operands| product_of(operands))
    }

    pub fn division_of(&self, values: impl IntoOperands) -> ArithmeticResult<BigInt> {
        self.evaluate_list(Operation::Division, values, |operands| division_of(operands))
    }

    pub fn sum_of_squares_of(&self, values: impl IntoOperands) -> ArithmeticResult<BigInt> {
        self.evaluate_list(Operation::SumOfSquares, values, |operands| sum_of_squares_of(operands))
    }

    pub fn average_of(&self, values: impl IntoOperands) -> ArithmeticResult<BigInt> {
        self.evaluate_list(Operation::Average, values, |operands| average_of(operands))
    }

    pub fn maximum_of(&self, values: impl IntoOperands) -> ArithmeticResult<BigInt> {
        self.evaluate_list(Operation::Maximum, values, |operands| maximum_of(operands))
    }

    pub fn minimum_of(&self, values: impl IntoOperands) -> ArithmeticResult<BigInt> {
        self.evaluate_list(Operation::Minimum, values, |operands| minimum_of(operands))
    }

    // ========================================================================
    // Unary and Binary Operations
    // ========================================================================

    pub fn factorial_of(&self, value: impl Into<Operand>) -> ArithmeticResult<BigInt> {
        let value = value.into();
        let limit = self.config.max_factorial_input;
        self.evaluate(Operation::Factorial, || {
            Self::check_limit(value, limit)?;
            factorial_of(value)
        })
    }

    /// Exact square root, or the floor root when approximations are accepted
    pub fn square_root_of(&self, value: impl Into<Operand>) -> ArithmeticResult<BigInt> {
        let value = value.into();
        let outcome = self.report(Operation::SquareRoot, square_root_of(value));

        let outcome = match outcome {
            Err(ArithmeticError::NotPerfectSquare { approximation, .. })
                if self.config.accept_approximate_roots =>
            {
                tracing::debug!(?value, %approximation, "accepting approximate root");
                Ok(approximation)
            },
            other => other,
        };
        self.apply_policy(Operation::SquareRoot, outcome)
    }

    pub fn percent_of(
        &self,
        total: impl Into<Operand>,
        percent: impl Into<Operand>,
    ) -> ArithmeticResult<BigInt> {
        let (total, percent) = (total.into(), percent.into());
        self.evaluate(Operation::PercentOf, || percent_of(total, percent))
    }

    pub fn percentage_of(
        &self,
        total: impl Into<Operand>,
        part: impl Into<Operand>,
    ) -> ArithmeticResult<BigInt> {
        let (total, part) = (total.into(), part.into());
        self.evaluate(Operation::PercentageOf, || percentage_of(total, part))
    }

    pub fn fibonacci_at(&self, n: impl Into<Operand>) -> ArithmeticResult<BigInt> {
        let n = n.into();
        let limit = self.config.max_fibonacci_index;
        self.evaluate(Operation::Fibonacci, || {
            Self::check_limit(n, limit)?;
            fibonacci_at(n)
        })
    }

    pub fn fibonacci_iterations(
        &self,
        start: impl Into<Operand>,
        iterations: impl Into<Operand>,
    ) -> ArithmeticResult<BigInt> {
        let (start, iterations) = (start.into(), iterations.into());
        let limit = self.config.max_fibonacci_index;
        self.evaluate(Operation::FibonacciIterations, || {
            Self::check_limit(iterations, limit)?;
            fibonacci_iterations(start, iterations)
        })
    }

    // ========================================================================
    // Policy
    // ========================================================================

    /// Run a list operation under the missing-operand policy.
    ///
    /// Permissive mode checks emptiness and arity on the list as given, then
    /// drops the missing entries. A binary reduction left short is padded with
    /// its identity.
    fn evaluate_list<V, F>(
        &self,
        operation: Operation,
        values: V,
        compute: F,
    ) -> ArithmeticResult<BigInt>
    where
        V: IntoOperands,
        F: FnOnce(OperandList) -> ArithmeticResult<BigInt>,
    {
        let operands = values.into_operands();
        if self.config.is_strict() {
            return self.evaluate(operation, || compute(operands));
        }

        self.evaluate(operation, || compute(Self::fill_missing(operation, operands)?))
    }

    fn fill_missing(operation: Operation, operands: OperandList) -> ArithmeticResult<OperandList> {
        let required = operation.min_arity().unwrap_or(1);
        require_non_empty(&operands)?;
        require_min_arity(&operands, required)?;

        let mut present = without_missing(&operands);
        if let Some(identity) = operation.identity() {
            if !present.is_empty() {
                while present.len() < required {
                    present.push(Some(identity));
                }
            }
        }
        Ok(present)
    }

    /// A missing value or an unset limit always passes
    fn check_limit(value: Operand, limit: Option<i64>) -> ArithmeticResult<()> {
        match value {
            Some(v) => require_within(v, limit),
            None => Ok(()),
        }
    }

    /// Run one operation, report it, then apply the failure policy
    fn evaluate<F>(&self, operation: Operation, compute: F) -> ArithmeticResult<BigInt>
    where
        F: FnOnce() -> ArithmeticResult<BigInt>,
    {
        let outcome = self.report(operation, compute());
        self.apply_policy(operation, outcome)
    }

    fn report(
        &self,
        operation: Operation,
        outcome: ArithmeticResult<BigInt>,
    ) -> ArithmeticResult<BigInt> {
        self.handler
            .on_report(OperationReport::new(operation, outcome.clone()));
        outcome
    }

    fn apply_policy(
        &self,
        operation: Operation,
        outcome: ArithmeticResult<BigInt>,
    ) -> ArithmeticResult<BigInt> {
        match outcome {
            Err(err) if !self.config.is_strict() => {
                tracing::warn!(%operation, error = %err, "permissive mode: substituting zero");
                Ok(BigInt::zero())
            },
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interfaces::RecordingOutcomeHandler;
    use crate::numeric::ErrorKind;

    fn recording(config: CalculatorConfig) -> (Calculator, Arc<RecordingOutcomeHandler>) {
        let handler = Arc::new(RecordingOutcomeHandler::new());
        let calculator = Calculator::new(config, handler.clone()).unwrap();
        (calculator, handler)
    }

    #[test]
    fn test_strict_matches_engine() {
        let calc = Calculator::strict();
        assert_eq!(calc.sum_of([4, 7]).unwrap(), BigInt::from(11));
        assert_eq!(calc.division_of([12, 6, 2]).unwrap(), BigInt::from(1));
        assert_eq!(
            calc.division_of([10, 3]).unwrap_err().kind(),
            ErrorKind::NonIntegerDivision
        );
        assert_eq!(
            calc.sum_of([Some(1), None]).unwrap_err(),
            ArithmeticError::NullOperand { index: 1 }
        );
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = CalculatorConfig::strict().with_max_factorial_input(-1);
        assert!(Calculator::new(config, Arc::new(NoOpOutcomeHandler)).is_err());
    }

    #[test]
    fn test_permissive_drops_missing_operands() {
        let calc = Calculator::new(CalculatorConfig::permissive(), Arc::new(NoOpOutcomeHandler))
            .unwrap();
        // missing operands act as the identity of the reduction
        assert_eq!(calc.product_of([Some(3), None, Some(7)]).unwrap(), BigInt::from(21));
        assert_eq!(calc.sum_of([Some(3), None, Some(7)]).unwrap(), BigInt::from(10));
        assert_eq!(calc.average_of([Some(4), None, Some(8)]).unwrap(), BigInt::from(6));
    }

    #[test]
    fn test_permissive_substitutes_zero() {
        let calc = Calculator::new(CalculatorConfig::permissive(), Arc::new(NoOpOutcomeHandler))
            .unwrap();
        assert_eq!(calc.division_of([12, 0]).unwrap(), BigInt::zero());
        assert_eq!(calc.factorial_of(-1).unwrap(), BigInt::zero());
        assert_eq!(calc.square_root_of(63).unwrap(), BigInt::zero());
        // arity is checked before missing operands are dropped
        assert_eq!(calc.sum_of([Some(3)]).unwrap(), BigInt::zero());
        assert_eq!(calc.sum_of(Vec::<Operand>::new()).unwrap(), BigInt::zero());
        assert_eq!(calc.maximum_of([None::<i64>]).unwrap(), BigInt::zero());
    }

    #[test]
    fn test_permissive_missing_operand_is_identity() {
        let (calc, handler) = recording(CalculatorConfig::permissive());
        assert_eq!(calc.product_of([Some(3), None]).unwrap(), BigInt::from(3));
        assert_eq!(calc.sum_of([Some(3), None]).unwrap(), BigInt::from(3));
        assert_eq!(calc.difference_of([Some(3), None]).unwrap(), BigInt::from(3));
        assert_eq!(calc.division_of([Some(12), None]).unwrap(), BigInt::from(12));
        assert_eq!(calc.division_of([None, Some(12), Some(6)]).unwrap(), BigInt::from(2));

        // nothing was substituted, every report is a success
        assert!(handler.reports().iter().all(OperationReport::is_success));
    }

    #[test]
    fn test_handler_sees_true_outcome() {
        let (calc, handler) = recording(CalculatorConfig::permissive());
        assert_eq!(calc.division_of([10, 3]).unwrap(), BigInt::zero());

        let reports = handler.reports();
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].operation, Operation::Division);
        assert_eq!(
            reports[0].outcome.as_ref().unwrap_err().kind(),
            ErrorKind::NonIntegerDivision
        );
    }

    #[test]
    fn test_approximate_roots() {
        let (calc, handler) = recording(CalculatorConfig::lenient_roots());
        assert_eq!(calc.square_root_of(63).unwrap(), BigInt::from(7));
        assert_eq!(calc.square_root_of(64).unwrap(), BigInt::from(8));
        assert_eq!(
            calc.square_root_of(0).unwrap_err(),
            ArithmeticError::ZeroNotAllowed
        );
        assert_eq!(handler.len(), 3);
    }

    #[test]
    fn test_approximate_root_reports_true_outcome() {
        let (calc, handler) = recording(CalculatorConfig::lenient_roots());
        assert_eq!(calc.square_root_of(63).unwrap(), BigInt::from(7));

        let reports = handler.reports();
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].operation, Operation::SquareRoot);
        let err = reports[0].outcome.as_ref().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotPerfectSquare);
        assert_eq!(err.approximation(), Some(&BigInt::from(7)));
    }

    #[test]
    fn test_factorial_limit() {
        let calc = Calculator::new(
            CalculatorConfig::strict().with_max_factorial_input(10),
            Arc::new(NoOpOutcomeHandler),
        )
        .unwrap();
        assert_eq!(calc.factorial_of(10).unwrap(), BigInt::from(3_628_800));
        assert_eq!(
            calc.factorial_of(11).unwrap_err(),
            ArithmeticError::LimitExceeded {
                limit: 10,
                value: 11
            }
        );
        // sign is checked before the ceiling
        assert_eq!(
            calc.factorial_of(-1).unwrap_err().kind(),
            ErrorKind::NegativeNotAllowed
        );
    }

    #[test]
    fn test_fibonacci_limit() {
        let calc = Calculator::new(
            CalculatorConfig::strict().with_max_fibonacci_index(50),
            Arc::new(NoOpOutcomeHandler),
        )
        .unwrap();
        assert_eq!(calc.fibonacci_at(10).unwrap(), BigInt::from(55));
        assert_eq!(
            calc.fibonacci_at(51).unwrap_err().kind(),
            ErrorKind::LimitExceeded
        );
        assert_eq!(
            calc.fibonacci_iterations(25, 51).unwrap_err().kind(),
            ErrorKind::LimitExceeded
        );
        assert_eq!(calc.fibonacci_iterations(25, 8).unwrap(), BigInt::from(720));
    }

    #[test]
    fn test_percentages() {
        let calc = Calculator::strict();
        assert_eq!(calc.percent_of(400, 65).unwrap(), BigInt::from(260));
        assert_eq!(calc.percentage_of(400, 260).unwrap(), BigInt::from(65));
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        let calc = Calculator::strict();
        assert_eq!(calc.factorial_of(30).unwrap(), calc.factorial_of(30).unwrap());
        assert_eq!(calc.square_root_of(63), calc.square_root_of(63));
    }
}
