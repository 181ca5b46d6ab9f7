// ============================================================================
// Arithmetic Errors
// Typed failures for operand validation and integer arithmetic
// ============================================================================

use num_bigint::BigInt;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Errors that can occur while validating operands or computing a result.
///
/// Each variant carries the context needed to build its description, so the
/// `Display` output is the human-readable message of the failure.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ArithmeticError {
    /// The operand sequence has no elements
    EmptyInput,
    /// Fewer operands than the operation requires
    InsufficientOperands { required: usize, actual: usize },
    /// The operand at `index` is missing
    NullOperand { index: usize },
    /// An operand must be nonzero
    ZeroNotAllowed,
    /// An operand must be non-negative
    NegativeNotAllowed { value: i64 },
    /// A chained division hit a zero divisor
    DivisionByZero { dividend: BigInt },
    /// A chained division step left a remainder
    NonIntegerDivision { dividend: BigInt, divisor: BigInt },
    /// No exact integer square root exists; `approximation` is the floor root
    NotPerfectSquare { value: i64, approximation: BigInt },
    /// Input is above a configured ceiling
    LimitExceeded { limit: i64, value: i64 },
}

/// Fieldless mirror of [`ArithmeticError`] for matching on the failure kind only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ErrorKind {
    EmptyInput,
    InsufficientOperands,
    NullOperand,
    ZeroNotAllowed,
    NegativeNotAllowed,
    DivisionByZero,
    NonIntegerDivision,
    NotPerfectSquare,
    LimitExceeded,
}

impl ArithmeticError {
    /// The kind of this error, without its context.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ArithmeticError::EmptyInput => ErrorKind::EmptyInput,
            ArithmeticError::InsufficientOperands { .. } => ErrorKind::InsufficientOperands,
            ArithmeticError::NullOperand { .. } => ErrorKind::NullOperand,
            ArithmeticError::ZeroNotAllowed => ErrorKind::ZeroNotAllowed,
            ArithmeticError::NegativeNotAllowed { .. } => ErrorKind::NegativeNotAllowed,
            ArithmeticError::DivisionByZero { .. } => ErrorKind::DivisionByZero,
            ArithmeticError::NonIntegerDivision { .. } => ErrorKind::NonIntegerDivision,
            ArithmeticError::NotPerfectSquare { .. } => ErrorKind::NotPerfectSquare,
            ArithmeticError::LimitExceeded { .. } => ErrorKind::LimitExceeded,
        }
    }

    /// Floor approximation carried by `NotPerfectSquare`, `None` for every other kind.
    pub fn approximation(&self) -> Option<&BigInt> {
        match self {
            ArithmeticError::NotPerfectSquare { approximation, .. } => Some(approximation),
            _ => None,
        }
    }

    /// Whether this failure is a rejected operand rather than a failed computation.
    pub fn is_validation_failure(&self) -> bool {
        matches!(
            self.kind(),
            ErrorKind::EmptyInput
                | ErrorKind::InsufficientOperands
                | ErrorKind::NullOperand
                | ErrorKind::ZeroNotAllowed
                | ErrorKind::NegativeNotAllowed
                | ErrorKind::LimitExceeded
        )
    }
}

impl fmt::Display for ArithmeticError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArithmeticError::EmptyInput => write!(f, "no values were provided"),
            ArithmeticError::InsufficientOperands { required, actual } => write!(
                f,
                "at least {} values are required, {} provided",
                required, actual
            ),
            ArithmeticError::NullOperand { index } => {
                write!(f, "value at position {} is missing", index)
            },
            ArithmeticError::ZeroNotAllowed => write!(f, "value must not be zero"),
            ArithmeticError::NegativeNotAllowed { value } => {
                write!(f, "value must not be negative: {}", value)
            },
            ArithmeticError::DivisionByZero { dividend } => {
                write!(f, "division of {} by zero", dividend)
            },
            ArithmeticError::NonIntegerDivision { dividend, divisor } => write!(
                f,
                "division of {} by {} is not an integer",
                dividend, divisor
            ),
            ArithmeticError::NotPerfectSquare {
                value,
                approximation,
            } => write!(
                f,
                "{} is not a perfect square, approximation: {}",
                value, approximation
            ),
            ArithmeticError::LimitExceeded { limit, value } => {
                write!(f, "value {} exceeds the configured limit {}", value, limit)
            },
        }
    }
}

impl std::error::Error for ArithmeticError {}

/// Result type alias for arithmetic operations
pub type ArithmeticResult<T> = Result<T, ArithmeticError>;
