// ============================================================================
// Fixed-Point Ratio
// Exact scaled ratios with compile-time precision and round half-up
// ============================================================================

use super::errors::{ArithmeticError, ArithmeticResult};
use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{Signed, ToPrimitive, Zero};
use std::fmt;

/// Fixed-point ratio with compile-time precision.
///
/// Internally stores `value × 10^DECIMALS` as an arbitrary-precision integer,
/// so no binary floating point is involved anywhere in the rounding path.
///
/// # Type Parameter
/// - `DECIMALS`: Number of decimal places (0-18). Default is 2.
///
/// # Example
/// ```
/// use integer_arithmetic::numeric::FixedRatio;
/// use num_bigint::BigInt;
///
/// let ratio = FixedRatio::<2>::from_ratio(&BigInt::from(1), &BigInt::from(8)).unwrap();
/// assert_eq!(ratio.to_string(), "0.13");
/// assert_eq!(ratio.mul_int(100).round_to_integer(), BigInt::from(13));
/// ```
#[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FixedRatio<const DECIMALS: u8 = 2>(BigInt);

// ============================================================================
// Scale Constants
// ============================================================================

/// Compute 10^n at compile time
const fn pow10(n: u8) -> i64 {
    let mut result: i64 = 1;
    let mut i = 0;
    while i < n {
        result *= 10;
        i += 1;
    }
    result
}

/// Divide rounding half away from zero.
///
/// `denominator` must be nonzero.
fn div_round_half_up(numerator: &BigInt, denominator: &BigInt) -> BigInt {
    let (quotient, remainder) = numerator.div_rem(denominator);
    if remainder.is_zero() {
        return quotient;
    }

    let twice_remainder = remainder.magnitude() * 2u32;
    if &twice_remainder < denominator.magnitude() {
        return quotient;
    }

    if numerator.is_negative() != denominator.is_negative() {
        quotient - 1
    } else {
        quotient + 1
    }
}

impl<const D: u8> FixedRatio<D> {
    /// The scale factor (10^DECIMALS)
    pub const SCALE: i64 = pow10(D);

    // ========================================================================
    // Construction
    // ========================================================================

    /// Create from raw internal representation (already scaled).
    #[inline]
    pub fn from_raw(raw: BigInt) -> Self {
        Self(raw)
    }

    /// Create from a whole number.
    pub fn from_integer(value: impl Into<BigInt>) -> Self {
        Self(value.into() * Self::SCALE)
    }

    /// Create `numerator / denominator` rounded half-up at the last decimal.
    ///
    /// # Errors
    /// Returns `DivisionByZero` if `denominator` is zero.
    pub fn from_ratio(numerator: &BigInt, denominator: &BigInt) -> ArithmeticResult<Self> {
        if denominator.is_zero() {
            return Err(ArithmeticError::DivisionByZero {
                dividend: numerator.clone(),
            });
        }

        let scaled = numerator * Self::SCALE;
        Ok(Self(div_round_half_up(&scaled, denominator)))
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Get the raw internal value (scaled).
    #[inline]
    pub fn raw_value(&self) -> &BigInt {
        &self.0
    }

    /// Get the integer part (truncated toward zero).
    pub fn integer_part(&self) -> BigInt {
        &self.0 / Self::SCALE
    }

    /// Get the fractional part as a positive value.
    pub fn fractional_part(&self) -> u64 {
        (&self.0 % Self::SCALE)
            .magnitude()
            .to_u64()
            .unwrap_or_default()
    }

    /// Check if value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Check if value is negative.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.0.is_negative()
    }

    // ========================================================================
    // Arithmetic Operations
    // ========================================================================

    /// Multiply by a whole number (no rescaling needed).
    pub fn mul_int(&self, rhs: i64) -> Self {
        Self(&self.0 * rhs)
    }

    /// Round to a whole number, half away from zero.
    pub fn round_to_integer(&self) -> BigInt {
        div_round_half_up(&self.0, &BigInt::from(Self::SCALE))
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl<const D: u8> fmt::Debug for FixedRatio<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FixedRatio<{}>({}, raw={})", D, self, self.0)
    }
}

impl<const D: u8> fmt::Display for FixedRatio<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let int_part = self.integer_part();
        let frac_part = self.fractional_part();

        if D == 0 {
            write!(f, "{}", int_part)
        } else if self.is_negative() && int_part.is_zero() {
            // -0.xx
            write!(f, "-0.{:0>width$}", frac_part, width = D as usize)
        } else {
            write!(f, "{}.{:0>width$}", int_part, frac_part, width = D as usize)
        }
    }
}

// ============================================================================
// Conversion to rust_decimal (for API boundaries)
// ============================================================================

impl<const D: u8> FixedRatio<D> {
    /// Convert to `rust_decimal::Decimal`.
    ///
    /// Returns `None` when the scaled value does not fit the 96-bit mantissa.
    pub fn to_decimal(&self) -> Option<rust_decimal::Decimal> {
        let raw = self.0.to_i128()?;
        rust_decimal::Decimal::try_from_i128_with_scale(raw, D as u32).ok()
    }
}

// ============================================================================
// Tests
// ============================================================================
