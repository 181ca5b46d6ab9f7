// ============================================================================
// Sequences
// Factorial and Fibonacci over arbitrary-precision integers
// ============================================================================

use crate::domain::Operand;
use crate::numeric::ArithmeticResult;
use crate::validation::{require_non_negative, require_present};
use num_bigint::BigInt;
use num_traits::{One, Zero};
use std::mem;

/// `value!` for `value >= 0`; `0! == 1`.
pub fn factorial_of(value: impl Into<Operand>) -> ArithmeticResult<BigInt> {
    let value = require_present(value.into())?;
    require_non_negative(value)?;

    Ok((1..=value).fold(BigInt::one(), |acc, i| acc * i))
}

/// n-th term of `a(0) = 0, a(1) = 1, a(k) = a(k-1) + a(k-2)`.
pub fn fibonacci_at(n: impl Into<Operand>) -> ArithmeticResult<BigInt> {
    let n = require_present(n.into())?;
    require_non_negative(n)?;

    let mut a = BigInt::zero();
    let mut b = BigInt::one();
    for _ in 0..n {
        let next = &a + &b;
        a = mem::replace(&mut b, next);
    }
    Ok(a)
}

/// Fibonacci-style recurrence seeded from `start` instead of `0, 1`.
///
/// The second term is seeded as `⌊start · 8 / 5⌋`, a golden-ratio style
/// heuristic rather than an exact identity, and the recurrence then advances
/// `iterations - 1` times. A start of 1 returns the seed directly.
///
/// ```
/// use integer_arithmetic::engine::fibonacci_iterations;
/// use num_bigint::BigInt;
///
/// assert_eq!(fibonacci_iterations(25, 8).unwrap(), BigInt::from(720));
/// ```
pub fn fibonacci_iterations(
    start: impl Into<Operand>,
    iterations: impl Into<Operand>,
) -> ArithmeticResult<BigInt> {
    let start = require_present(start.into())?;
    let iterations = require_present(iterations.into())?;
    require_non_negative(start)?;
    require_non_negative(iterations)?;

    let mut a = BigInt::from(start);
    let mut b: BigInt = &a * 8 / 5;
    if start == 1 {
        return Ok(b);
    }

    for _ in 2..=iterations {
        let next = &a + &b;
        a = mem::replace(&mut b, next);
    }
    Ok(a)
}
