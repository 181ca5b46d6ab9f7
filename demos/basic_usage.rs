// ============================================================================
// Basic Usage Example
// ============================================================================

use integer_arithmetic::prelude::*;
use num_bigint::BigInt;
use std::sync::Arc;

fn show(description: &str, operation: impl FnOnce() -> ArithmeticResult<BigInt>) {
    let result = SafeExecutor::execute(operation);
    println!("{}: {}", description, result);
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Integer Arithmetic Example ===\n");

    show("sum of [4, 7]", || sum_of([4, 7]));
    show("product of [3, 7]", || product_of([3, 7]));
    show("factorial of 5", || factorial_of(5));
    show("difference of [8, 6, 3, 5, 8]", || difference_of([8, 6, 3, 5, 8]));
    show("division of [12, 6, 2]", || division_of([12, 6, 2]));
    show("sum of squares of [3, 6, 2]", || sum_of_squares_of([3, 6, 2]));
    show("average of [3, 6, 5, 2]", || average_of([3, 6, 5, 2]));
    show("65% of 400", || percent_of(400, 65));
    show("65 parts of 400", || percentage_of(400, 65));
    show("maximum of [-50, 6, -12, 3, 0]", || maximum_of([-50, 6, -12, 3, 0]));
    show("minimum of [-50, 6, 12, 3, 0]", || minimum_of([-50, 6, 12, 3, 0]));
    show("square root of 63", || square_root_of(63));
    show(
        "fibonacci iterations starting from 25 with 8 iterations",
        || fibonacci_iterations(25, 8),
    );

    println!("\n=== Calculator ===");
    let calculator = CalculatorBuilder::new()
        .accept_approximate_roots()
        .with_max_factorial_input(10_000)
        .build(Arc::new(LoggingOutcomeHandler))
        .expect("valid configuration");

    show("approximate square root of 63", || {
        calculator.square_root_of(63)
    });
    show("factorial of 25", || calculator.factorial_of(25));
    show("factorial of 20000", || calculator.factorial_of(20_000));
    show("fibonacci at 90", || calculator.fibonacci_at(90));
}
