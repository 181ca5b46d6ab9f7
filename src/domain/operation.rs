// ============================================================================
// Operations
// Names of the arithmetic operations, used in reports and logs
// ============================================================================

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Every operation the engine exposes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Operation {
    Sum,
    Difference,
    Product,
    Division,
    SumOfSquares,
    Average,
    Maximum,
    Minimum,
    Factorial,
    SquareRoot,
    PercentOf,
    PercentageOf,
    Fibonacci,
    FibonacciIterations,
}

impl Operation {
    /// Minimum number of operands for operations taking a list, `None` otherwise.
    pub fn min_arity(self) -> Option<usize> {
        match self {
            Operation::Sum | Operation::Difference | Operation::Product | Operation::Division => {
                Some(2)
            },
            Operation::SumOfSquares
            | Operation::Average
            | Operation::Maximum
            | Operation::Minimum => Some(1),
            _ => None,
        }
    }

    /// Operand that leaves a binary reduction unchanged when appended.
    pub fn identity(self) -> Option<i64> {
        match self {
            Operation::Sum | Operation::Difference => Some(0),
            Operation::Product | Operation::Division => Some(1),
            _ => None,
        }
    }

    /// Human-readable name
    pub fn name(self) -> &'static str {
        match self {
            Operation::Sum => "sum of",
            Operation::Difference => "difference of",
            Operation::Product => "product of",
            Operation::Division => "division of",
            Operation::SumOfSquares => "sum of squares of",
            Operation::Average => "average of",
            Operation::Maximum => "maximum of",
            Operation::Minimum => "minimum of",
            Operation::Factorial => "factorial of",
            Operation::SquareRoot => "square root of",
            Operation::PercentOf => "percent of",
            Operation::PercentageOf => "percentage of",
            Operation::Fibonacci => "fibonacci at",
            Operation::FibonacciIterations => "fibonacci iterations from",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
