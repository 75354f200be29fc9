use rust_decimal::Decimal;

use crate::error::MoneyToolsError;
use crate::math::growth_factor;
use crate::types::{Money, Rate};
use crate::MoneyToolsResult;

/// Level payment that retires `principal` over `nper` periods at `rate`.
///
/// `nper` is coerced to at least one period so a zero term never divides by
/// zero.
pub fn amortizing_payment(principal: Money, rate: Rate, nper: u64) -> MoneyToolsResult<Money> {
    let n = nper.max(1);
    if rate.is_zero() {
        return principal
            .checked_div(Decimal::from(n))
            .ok_or_else(|| MoneyToolsError::overflow("amortizing payment"));
    }

    let factor = growth_factor(rate, n, "amortization factor")?;
    // 1 - (1+r)^-n, written over the positive power to stay in range
    let discount = Decimal::ONE - Decimal::ONE / factor;
    if discount.is_zero() {
        return Err(MoneyToolsError::overflow("amortization discount"));
    }

    principal
        .checked_mul(rate)
        .and_then(|interest| interest.checked_div(discount))
        .ok_or_else(|| MoneyToolsError::overflow("amortizing payment"))
}

/// Future value of an ordinary annuity: `pmt * ((1+r)^n - 1) / r`.
pub fn annuity_future_value(pmt: Money, rate: Rate, nper: u64) -> MoneyToolsResult<Money> {
    if rate.is_zero() {
        return pmt
            .checked_mul(Decimal::from(nper))
            .ok_or_else(|| MoneyToolsError::overflow("annuity future value"));
    }
    let factor = growth_factor(rate, nper, "annuity future value")?;
    (factor - Decimal::ONE)
        .checked_div(rate)
        .and_then(|growth| pmt.checked_mul(growth))
        .ok_or_else(|| MoneyToolsError::overflow("annuity future value"))
}

/// Future value of a lump sum plus a level end-of-period contribution.
pub fn future_value(
    present_value: Money,
    pmt: Money,
    rate: Rate,
    nper: u64,
) -> MoneyToolsResult<Money> {
    let factor = growth_factor(rate, nper, "future value")?;
    let grown = present_value
        .checked_mul(factor)
        .ok_or_else(|| MoneyToolsError::overflow("future value"))?;
    let annuity = annuity_future_value(pmt, rate, nper)?;
    grown
        .checked_add(annuity)
        .ok_or_else(|| MoneyToolsError::overflow("future value"))
}

/// Balance left after `k` level payments against a balance accruing at `rate`.
pub fn remaining_balance(balance: Money, pmt: Money, rate: Rate, k: u64) -> MoneyToolsResult<Money> {
    future_value(balance, -pmt, rate, k)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_payment_zero_rate_is_simple_division() {
        let pmt = amortizing_payment(dec!(1200), Decimal::ZERO, 12).unwrap();
        assert_eq!(pmt, dec!(100));
    }

    #[test]
    fn test_payment_zero_term_coerced_to_one() {
        let pmt = amortizing_payment(dec!(500), Decimal::ZERO, 0).unwrap();
        assert_eq!(pmt, dec!(500));
    }

    #[test]
    fn test_payment_retires_balance() {
        let rate = dec!(0.01);
        let pmt = amortizing_payment(dec!(10000), rate, 24).unwrap();
        let left = remaining_balance(dec!(10000), pmt, rate, 24).unwrap();
        assert!(left.abs() < dec!(0.000001), "left {left}");
    }

    #[test]
    fn test_annuity_fv_zero_rate() {
        let fv = annuity_future_value(dec!(250), Decimal::ZERO, 8).unwrap();
        assert_eq!(fv, dec!(2000));
    }

    #[test]
    fn test_future_value_lump_sum() {
        // 1000 at 10% for 2 periods = 1210
        let fv = future_value(dec!(1000), Decimal::ZERO, dec!(0.10), 2).unwrap();
        assert_eq!(fv, dec!(1210));
    }
}
