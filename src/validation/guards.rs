// ============================================================================
// Operand Guards
// Independent checks that reject malformed operands before computation
// ============================================================================
//
// Operations compose these in a fixed order:
//   emptiness -> arity -> presence -> domain (zero / negative)
// so the first violated guard is the one reported.

use crate::domain::Operand;
use crate::numeric::{ArithmeticError, ArithmeticResult};
use smallvec::SmallVec;

/// Operands that passed the presence check
pub type Values = SmallVec<[i64; 8]>;

/// Fails with `EmptyInput` if there are no operands.
#[inline]
pub fn require_non_empty(operands: &[Operand]) -> ArithmeticResult<()> {
    if operands.is_empty() {
        return Err(ArithmeticError::EmptyInput);
    }
    Ok(())
}

/// Fails with `InsufficientOperands` if fewer than `required` operands are given.
#[inline]
pub fn require_min_arity(operands: &[Operand], required: usize) -> ArithmeticResult<()> {
    if operands.len() < required {
        return Err(ArithmeticError::InsufficientOperands {
            required,
            actual: operands.len(),
        });
    }
    Ok(())
}

/// Fails with `NullOperand` at the first missing operand, otherwise
/// returns the unwrapped values in order.
pub fn require_all_present(operands: &[Operand]) -> ArithmeticResult<Values> {
    operands
        .iter()
        .enumerate()
        .map(|(index, &operand)| operand.ok_or(ArithmeticError::NullOperand { index }))
        .collect()
}

/// Unary form of [`require_all_present`].
#[inline]
pub fn require_present(operand: Operand) -> ArithmeticResult<i64> {
    operand.ok_or(ArithmeticError::NullOperand { index: 0 })
}

/// Fails with `ZeroNotAllowed` if `value` is zero.
#[inline]
pub fn require_non_zero(value: i64) -> ArithmeticResult<()> {
    if value == 0 {
        return Err(ArithmeticError::ZeroNotAllowed);
    }
    Ok(())
}

/// Fails with `NegativeNotAllowed` if `value` is below zero.
#[inline]
pub fn require_non_negative(value: i64) -> ArithmeticResult<()> {
    if value < 0 {
        return Err(ArithmeticError::NegativeNotAllowed { value });
    }
    Ok(())
}

/// Fails with `LimitExceeded` if `value` is above `limit`. No limit always passes.
#[inline]
pub fn require_within(value: i64, limit: Option<i64>) -> ArithmeticResult<()> {
    match limit {
        Some(limit) if value > limit => Err(ArithmeticError::LimitExceeded { limit, value }),
        _ => Ok(()),
    }
}

/// Emptiness, arity and presence checks for a list operation, in that order.
pub fn require_operands(operands: &[Operand], min_arity: usize) -> ArithmeticResult<Values> {
    require_non_empty(operands)?;
    require_min_arity(operands, min_arity)?;
    require_all_present(operands)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::ErrorKind;

    #[test]
    fn test_require_non_empty() {
        assert_eq!(require_non_empty(&[]), Err(ArithmeticError::EmptyInput));
        assert!(require_non_empty(&[None]).is_ok());
    }

    #[test]
    fn test_require_min_arity() {
        assert_eq!(
            require_min_arity(&[Some(1)], 2),
            Err(ArithmeticError::InsufficientOperands {
                required: 2,
                actual: 1
            })
        );
        assert!(require_min_arity(&[Some(1), Some(2)], 2).is_ok());
    }

    #[test]
    fn test_require_all_present_reports_first_missing() {
        let result = require_all_present(&[Some(1), None, Some(3), None]);
        assert_eq!(result, Err(ArithmeticError::NullOperand { index: 1 }));

        let values = require_all_present(&[Some(1), Some(2)]).unwrap();
        assert_eq!(values.as_slice(), &[1, 2]);
    }

    #[test]
    fn test_require_present() {
        assert_eq!(require_present(Some(4)), Ok(4));
        assert_eq!(
            require_present(None),
            Err(ArithmeticError::NullOperand { index: 0 })
        );
    }

    #[test]
    fn test_domain_guards() {
        assert_eq!(require_non_zero(0), Err(ArithmeticError::ZeroNotAllowed));
        assert!(require_non_zero(-1).is_ok());

        assert_eq!(
            require_non_negative(-3),
            Err(ArithmeticError::NegativeNotAllowed { value: -3 })
        );
        assert!(require_non_negative(0).is_ok());
    }

    #[test]
    fn test_require_within() {
        assert!(require_within(10, None).is_ok());
        assert!(require_within(10, Some(10)).is_ok());
        assert_eq!(
            require_within(11, Some(10)),
            Err(ArithmeticError::LimitExceeded {
                limit: 10,
                value: 11
            })
        );
    }

    #[test]
    fn test_guard_ordering() {
        // Empty beats arity
        assert_eq!(
            require_operands(&[], 2).unwrap_err().kind(),
            ErrorKind::EmptyInput
        );
        // Arity beats presence
        assert_eq!(
            require_operands(&[None], 2).unwrap_err().kind(),
            ErrorKind::InsufficientOperands
        );
        assert_eq!(
            require_operands(&[Some(1), None], 2).unwrap_err().kind(),
            ErrorKind::NullOperand
        );
    }
}
