// ============================================================================
// Percentages
// Floor percent-of and half-up rounded percentage
// ============================================================================

use crate::domain::Operand;
use crate::numeric::{ArithmeticResult, FixedRatio};
use crate::validation::{require_non_negative, require_non_zero, require_present};
use num_bigint::BigInt;

/// `⌊percent × total / 100⌋` for non-negative `total` and `percent`.
pub fn percent_of(
    total: impl Into<Operand>,
    percent: impl Into<Operand>,
) -> ArithmeticResult<BigInt> {
    let total = require_present(total.into())?;
    let percent = require_present(percent.into())?;
    require_non_negative(total)?;
    require_non_negative(percent)?;

    Ok(BigInt::from(percent) * total / 100)
}

/// Share of `part` in `total` as a whole percentage.
///
/// `part / total` is first rounded half-up to two decimals, then scaled to a
/// percentage and rounded to zero decimals, so `0.125` gives `13`.
///
/// ```
/// use integer_arithmetic::engine::percentage_of;
/// use num_bigint::BigInt;
///
/// assert_eq!(percentage_of(400, 260).unwrap(), BigInt::from(65));
/// assert_eq!(percentage_of(8, 1).unwrap(), BigInt::from(13));
/// ```
pub fn percentage_of(
    total: impl Into<Operand>,
    part: impl Into<Operand>,
) -> ArithmeticResult<BigInt> {
    let total = require_present(total.into())?;
    let part = require_present(part.into())?;
    require_non_zero(total)?;
    require_non_negative(total)?;
    require_non_negative(part)?;

    let ratio = FixedRatio::<2>::from_ratio(&BigInt::from(part), &BigInt::from(total))?;
    Ok(ratio.mul_int(100).round_to_integer())
}
