// ============================================================================
// Aggregate Operations
// Reductions over operand lists: sum, difference, product, squares, mean, extrema
// ============================================================================

use crate::domain::{IntoOperands, Operation};
use crate::numeric::{ArithmeticError, ArithmeticResult};
use crate::validation::{require_operands, Values};
use num_bigint::BigInt;
use num_traits::{One, Zero};

/// Validate a list operation's operands against its minimum arity.
fn operands_for(operation: Operation, values: impl IntoOperands) -> ArithmeticResult<Values> {
    let operands = values.into_operands();
    require_operands(&operands, operation.min_arity().unwrap_or(1))
}

/// Running sum, left to right. Requires at least two present values.
pub fn sum_of(values: impl IntoOperands) -> ArithmeticResult<BigInt> {
    let values = operands_for(Operation::Sum, values)?;
    Ok(values.iter().fold(BigInt::zero(), |acc, &v| acc + v))
}

/// `values[0] - values[1] - values[2] ...` in sequence order.
pub fn difference_of(values: impl IntoOperands) -> ArithmeticResult<BigInt> {
    let values = operands_for(Operation::Difference, values)?;
    let (first, rest) = values.split_first().ok_or(ArithmeticError::EmptyInput)?;
    Ok(rest.iter().fold(BigInt::from(*first), |acc, &v| acc - v))
}

/// Running product. Requires at least two present values.
pub fn product_of(values: impl IntoOperands) -> ArithmeticResult<BigInt> {
    let values = operands_for(Operation::Product, values)?;
    Ok(values.iter().fold(BigInt::one(), |acc, &v| acc * v))
}

/// Σ(v²) over at least one value.
pub fn sum_of_squares_of(values: impl IntoOperands) -> ArithmeticResult<BigInt> {
    let values = operands_for(Operation::SumOfSquares, values)?;
    Ok(values.iter().fold(BigInt::zero(), |acc, &v| {
        let v = BigInt::from(v);
        acc + &v * &v
    }))
}

/// Integer mean of at least one value, truncated toward zero.
pub fn average_of(values: impl IntoOperands) -> ArithmeticResult<BigInt> {
    let values = operands_for(Operation::Average, values)?;
    let sum = values.iter().fold(BigInt::zero(), |acc, &v| acc + v);
    Ok(sum / BigInt::from(values.len()))
}

/// Largest of at least one value.
pub fn maximum_of(values: impl IntoOperands) -> ArithmeticResult<BigInt> {
    let values = operands_for(Operation::Maximum, values)?;
    values
        .iter()
        .map(|&v| BigInt::from(v))
        .max()
        .ok_or(ArithmeticError::EmptyInput)
}

/// Smallest of at least one value.
pub fn minimum_of(values: impl IntoOperands) -> ArithmeticResult<BigInt> {
    let values = operands_for(Operation::Minimum, values)?;
    values
        .iter()
        .map(|&v| BigInt::from(v))
        .min()
        .ok_or(ArithmeticError::EmptyInput)
}
