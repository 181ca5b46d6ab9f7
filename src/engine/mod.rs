// ============================================================================
// Engine Module
// The arithmetic operations and the configurable calculator
// ============================================================================
//
// Every free function validates its operands, then computes over BigInt.
// They are pure and fail fast: the first violated guard is returned and no
// fallback value is ever substituted.

mod aggregate;
mod calculator;
mod division;
mod percentage;
mod roots;
mod sequences;

pub mod factory;

pub use aggregate::{
    average_of, difference_of, maximum_of, minimum_of, product_of, sum_of, sum_of_squares_of,
};
pub use calculator::Calculator;
pub use division::division_of;
pub use factory::{create_from_config, CalculatorBuilder};
pub use percentage::{percent_of, percentage_of};
pub use roots::{floor_square_root_of, square_root_of, Approximation};
pub use sequences::{factorial_of, fibonacci_at, fibonacci_iterations};
