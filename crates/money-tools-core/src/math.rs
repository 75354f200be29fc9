use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::error::MoneyToolsError;
use crate::MoneyToolsResult;

// ---------------------------------------------------------------------------
// Decimal math helpers (no f64, no MathematicalOps)
// ---------------------------------------------------------------------------

const LN_2: Decimal = dec!(0.6931471805599453094172321);
const LN_SERIES_TERMS: u32 = 24;

/// Raise `base` to a non-negative integer power by square-and-multiply.
/// Returns `None` when the result leaves the Decimal range.
pub fn checked_pow_int(base: Decimal, n: u64) -> Option<Decimal> {
    let mut result = Decimal::ONE;
    let mut b = base;
    let mut exp = n;
    while exp > 0 {
        if exp & 1 == 1 {
            result = result.checked_mul(b)?;
        }
        exp >>= 1;
        if exp > 0 {
            b = b.checked_mul(b)?;
        }
    }
    Some(result)
}

/// `(1 + rate)^n`, reporting overflow against `context`.
pub fn growth_factor(rate: Decimal, n: u64, context: &str) -> MoneyToolsResult<Decimal> {
    checked_pow_int(Decimal::ONE + rate, n).ok_or_else(|| MoneyToolsError::overflow(context))
}

/// Natural logarithm for positive `x`.
///
/// Range-reduces `x` into [0.5, 2] by powers of two, then sums
/// ln(x) = 2 * sum_{k>=0} u^(2k+1) / (2k+1) with u = (x-1)/(x+1).
/// Returns `None` for `x <= 0`.
pub fn ln(x: Decimal) -> Option<Decimal> {
    if x <= Decimal::ZERO {
        return None;
    }
    if x == Decimal::ONE {
        return Some(Decimal::ZERO);
    }
    let two = dec!(2);
    let mut val = x;
    let mut k: i64 = 0;
    while val > two {
        val /= two;
        k += 1;
    }
    while val < dec!(0.5) {
        val *= two;
        k -= 1;
    }
    let u = (val - Decimal::ONE) / (val + Decimal::ONE);
    let u2 = u * u;
    let mut term = u;
    let mut sum = u;
    for n in 1..=LN_SERIES_TERMS {
        term *= u2;
        if term.is_zero() {
            break;
        }
        sum += term / Decimal::from(2 * n + 1);
    }
    Some(two * sum + Decimal::from(k) * LN_2)
}

/// Smallest integer >= `x`, as a month or unit count.
pub fn ceil_count(x: Decimal, context: &str) -> MoneyToolsResult<u64> {
    if x <= Decimal::ZERO {
        return Ok(0);
    }
    x.ceil()
        .to_u64()
        .ok_or_else(|| MoneyToolsError::overflow(context))
}
