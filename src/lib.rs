// ============================================================================
// Integer Arithmetic Library
// Arbitrary-precision integer operations with fail-fast operand validation
// ============================================================================

//! # Integer Arithmetic
//!
//! Arbitrary-precision arithmetic over 64-bit operands: sums, differences,
//! products, exact chained division, powers, factorial, integer square root,
//! extrema, averages, percentages and Fibonacci terms.
//!
//! ## Features
//!
//! - **Unbounded results** backed by `num-bigint`, so factorials and long
//!   products never overflow
//! - **Ordered validation**: emptiness, arity, presence, then domain checks;
//!   the first violated guard is the error you get
//! - **Typed errors** with context, including the floor root of a non-square
//! - **Exact rounding** for percentages through a fixed-point intermediate
//! - **Configurable calculator** with a permissive mode and outcome reporting
//!
//! ## Example
//!
//! ```rust
//! use integer_arithmetic::prelude::*;
//! use num_bigint::BigInt;
//!
//! assert_eq!(factorial_of(5).unwrap(), BigInt::from(120));
//! assert_eq!(division_of([12, 6, 2]).unwrap(), BigInt::from(1));
//!
//! // Not a perfect square: the error carries the floor root
//! let err = square_root_of(63).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::NotPerfectSquare);
//! assert_eq!(err.approximation(), Some(&BigInt::from(7)));
//!
//! // Reporting side: log the failure and print zero instead
//! let shown = SafeExecutor::execute(|| division_of([10, 3]));
//! assert_eq!(shown, BigInt::from(0));
//! ```

pub mod domain;
pub mod engine;
pub mod interfaces;
pub mod numeric;
pub mod validation;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{
        CalculatorConfig, EvaluationPolicy, IntoOperands, Operand, OperandList, Operation,
    };
    pub use crate::engine::{
        average_of, create_from_config, difference_of, division_of, factorial_of, fibonacci_at,
        fibonacci_iterations, floor_square_root_of, maximum_of, minimum_of, percent_of,
        percentage_of, product_of, square_root_of, sum_of, sum_of_squares_of, Approximation,
        Calculator, CalculatorBuilder,
    };
    pub use crate::interfaces::{
        LoggingOutcomeHandler, NoOpOutcomeHandler, OperationReport, OutcomeHandler,
        RecordingOutcomeHandler, SafeExecutor,
    };
    pub use crate::numeric::{ArithmeticError, ArithmeticResult, ErrorKind};
}
