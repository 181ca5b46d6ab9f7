// ============================================================================
// Chained Division
// Exact sequential division that aborts on any remainder
// ============================================================================

use crate::domain::{IntoOperands, Operation};
use crate::numeric::{ArithmeticError, ArithmeticResult};
use crate::validation::require_operands;
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::Zero;

/// Divide `values[0]` by each following value in order.
///
/// Every step must divide exactly: a zero divisor fails with `DivisionByZero`,
/// a nonzero remainder fails with `NonIntegerDivision`. No partial or rounded
/// quotient is ever returned.
///
/// ```
/// use integer_arithmetic::engine::division_of;
/// use integer_arithmetic::numeric::ErrorKind;
/// use num_bigint::BigInt;
///
/// assert_eq!(division_of([12, 6, 2]).unwrap(), BigInt::from(1));
/// assert_eq!(division_of([10, 3]).unwrap_err().kind(), ErrorKind::NonIntegerDivision);
/// ```
pub fn division_of(values: impl IntoOperands) -> ArithmeticResult<BigInt> {
    let operands = values.into_operands();
    let values = require_operands(&operands, Operation::Division.min_arity().unwrap_or(2))?;
    let (first, divisors) = values.split_first().ok_or(ArithmeticError::EmptyInput)?;

    let mut quotient = BigInt::from(*first);
    for &divisor in divisors {
        if divisor == 0 {
            return Err(ArithmeticError::DivisionByZero { dividend: quotient });
        }

        let divisor = BigInt::from(divisor);
        let (next, remainder) = quotient.div_rem(&divisor);
        if !remainder.is_zero() {
            return Err(ArithmeticError::NonIntegerDivision {
                dividend: quotient,
                divisor,
            });
        }
        quotient = next;
    }

    Ok(quotient)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::ErrorKind;

    #[test]
    fn test_division_chain() {
        assert_eq!(division_of([12, 6, 2]).unwrap(), BigInt::from(1));
        assert_eq!(division_of([100, 5]).unwrap(), BigInt::from(20));
        assert_eq!(division_of([0, 5]).unwrap(), BigInt::from(0));
    }

    #[test]
    fn test_division_with_negative_operands() {
        assert_eq!(division_of([-12, 4]).unwrap(), BigInt::from(-3));
        assert_eq!(division_of([12, -4, -3]).unwrap(), BigInt::from(1));
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(
            division_of([12, 0]).unwrap_err(),
            ArithmeticError::DivisionByZero {
                dividend: BigInt::from(12)
            }
        );
        assert_eq!(
            division_of([12, 6, 0]).unwrap_err(),
            ArithmeticError::DivisionByZero {
                dividend: BigInt::from(2)
            }
        );
    }

    #[test]
    fn test_non_integer_division() {
        assert_eq!(
            division_of([10, 3]).unwrap_err(),
            ArithmeticError::NonIntegerDivision {
                dividend: BigInt::from(10),
                divisor: BigInt::from(3),
            }
        );
        // the first failing step is reported
        assert_eq!(
            division_of([10, 3, 0]).unwrap_err().kind(),
            ErrorKind::NonIntegerDivision
        );
        assert_eq!(
            division_of([12, 6, 4]).unwrap_err().kind(),
            ErrorKind::NonIntegerDivision
        );
    }

    #[test]
    fn test_division_validation() {
        assert_eq!(division_of([12]).unwrap_err().kind(), ErrorKind::InsufficientOperands);
        assert_eq!(
            division_of([Some(12), None]).unwrap_err(),
            ArithmeticError::NullOperand { index: 1 }
        );
        // presence is checked before any divisor
        assert_eq!(
            division_of([Some(12), Some(0), None]).unwrap_err().kind(),
            ErrorKind::NullOperand
        );
    }

    #[test]
    fn test_division_of_extreme_values() {
        assert_eq!(division_of([i64::MIN, -1]).unwrap(), -BigInt::from(i64::MIN));
    }
}
