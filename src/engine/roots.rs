// ============================================================================
// Integer Square Root
// Binary search over candidate roots with approximate-root signaling
// ============================================================================

use crate::domain::Operand;
use crate::numeric::{ArithmeticError, ArithmeticResult};
use crate::validation::{require_non_negative, require_non_zero, require_present};
use num_bigint::BigInt;
use num_traits::One;
use std::cmp::Ordering;

/// Floor square root together with whether it is exact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Approximation {
    /// ⌊√value⌋
    pub value: BigInt,
    /// `value² == input`
    pub exact: bool,
}

/// Exact integer square root of a positive value.
///
/// Searches `[1, (value + 1) / 2]`. When no candidate squares to `value`
/// the call fails with `NotPerfectSquare`, carrying the floor root so the
/// caller can still use it.
///
/// ```
/// use integer_arithmetic::engine::square_root_of;
/// use num_bigint::BigInt;
///
/// assert_eq!(square_root_of(64).unwrap(), BigInt::from(8));
/// let err = square_root_of(63).unwrap_err();
/// assert_eq!(err.approximation(), Some(&BigInt::from(7)));
/// ```
pub fn square_root_of(value: impl Into<Operand>) -> ArithmeticResult<BigInt> {
    let value = require_present(value.into())?;
    require_non_zero(value)?;
    require_non_negative(value)?;

    let n = BigInt::from(value);
    let mut lo = BigInt::one();
    let mut hi: BigInt = (&n + 1) >> 1u32;

    while lo <= hi {
        let mid: BigInt = (&lo + &hi) >> 1u32;
        match (&mid * &mid).cmp(&n) {
            Ordering::Greater => hi = mid - 1,
            Ordering::Less => lo = mid + 1,
            Ordering::Equal => return Ok(mid),
        }
    }

    // hi is now the largest candidate whose square stays below n
    Err(ArithmeticError::NotPerfectSquare {
        value,
        approximation: hi,
    })
}

/// Floor square root that treats a non-square input as an approximate success.
///
/// Validation failures are still reported as errors.
pub fn floor_square_root_of(value: impl Into<Operand>) -> ArithmeticResult<Approximation> {
    match square_root_of(value) {
        Ok(root) => Ok(Approximation {
            value: root,
            exact: true,
        }),
        Err(ArithmeticError::NotPerfectSquare { approximation, .. }) => Ok(Approximation {
            value: approximation,
            exact: false,
        }),
        Err(err) => Err(err),
    }
}
