use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::MoneyToolsError;
use crate::math::{ceil_count, ln};
use crate::time_value::remaining_balance;
use crate::types::{ensure_non_negative, monthly_rate, Money, PayoffHorizon, Percent, Rate};
use crate::MoneyToolsResult;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayoffInput {
    pub balance: Money,
    pub annual_rate_percent: Percent,
    pub monthly_payment: Money,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayoffResult {
    pub months_to_payoff: PayoffHorizon,
    /// Interest charged in the first month at the current balance.
    pub first_month_interest: Money,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_paid: Option<Money>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_interest: Option<Money>,
}

/// Months of level payments needed to retire a revolving balance.
///
/// A payment that does not exceed the first month's interest never retires
/// the balance and yields `PayoffHorizon::Never`. The final month's payment
/// is only what is left, so `total_paid` is usually below `payment * months`.
pub fn payoff_horizon(input: &PayoffInput) -> MoneyToolsResult<PayoffResult> {
    ensure_non_negative("balance", input.balance)?;
    ensure_non_negative("annual_rate_percent", input.annual_rate_percent)?;

    let r = monthly_rate(input.annual_rate_percent);
    let payment = input.monthly_payment;
    let first_month_interest = input
        .balance
        .checked_mul(r)
        .ok_or_else(|| MoneyToolsError::overflow("payoff interest"))?;

    if input.balance.is_zero() {
        return Ok(PayoffResult {
            months_to_payoff: PayoffHorizon::Months(0),
            first_month_interest,
            total_paid: Some(Decimal::ZERO),
            total_interest: Some(Decimal::ZERO),
        });
    }

    if payment <= first_month_interest {
        return Ok(PayoffResult {
            months_to_payoff: PayoffHorizon::Never,
            first_month_interest,
            total_paid: None,
            total_interest: None,
        });
    }

    let months = months_to_payoff(input.balance, payment, r, first_month_interest)?;
    let before_last = remaining_balance(input.balance, payment, r, months - 1)?;
    let final_payment = Decimal::ONE
        .checked_add(r)
        .and_then(|growth| before_last.checked_mul(growth))
        .ok_or_else(|| MoneyToolsError::overflow("payoff final payment"))?;
    let total_paid = payment
        .checked_mul(Decimal::from(months - 1))
        .and_then(|full| full.checked_add(final_payment))
        .ok_or_else(|| MoneyToolsError::overflow("payoff total paid"))?;
    let total_interest = total_paid
        .checked_sub(input.balance)
        .ok_or_else(|| MoneyToolsError::overflow("payoff total interest"))?;

    Ok(PayoffResult {
        months_to_payoff: PayoffHorizon::Months(months),
        first_month_interest,
        total_paid: Some(total_paid),
        total_interest: Some(total_interest),
    })
}

/// `ceil(ln(P / (P - B*r)) / ln(1 + r))`, or `ceil(B / P)` at a zero rate,
/// confirmed against the closed-form remaining balance.
fn months_to_payoff(balance: Money, payment: Money, r: Rate, interest: Money) -> MoneyToolsResult<u64> {
    let estimate = if r.is_zero() {
        let months = balance
            .checked_div(payment)
            .ok_or_else(|| MoneyToolsError::overflow("payoff horizon"))?;
        ceil_count(months, "payoff horizon")?
    } else {
        let ratio = payment
            .checked_div(payment - interest)
            .ok_or_else(|| MoneyToolsError::overflow("payoff horizon"))?;
        match (ln(ratio), ln(Decimal::ONE + r)) {
            (Some(num), Some(den)) if den > Decimal::ZERO => {
                let months = num
                    .checked_div(den)
                    .ok_or_else(|| MoneyToolsError::overflow("payoff horizon"))?;
                ceil_count(months, "payoff horizon")?
            }
            _ => return Err(MoneyToolsError::overflow("payoff horizon")),
        }
    };

    let mut months = estimate.max(1);
    while remaining_balance(balance, payment, r, months)? > Decimal::ZERO {
        months += 1;
    }
    while months > 1 && remaining_balance(balance, payment, r, months - 1)? <= Decimal::ZERO {
        months -= 1;
    }
    if months != estimate {
        tracing::debug!(estimate, months, "payoff horizon corrected");
    }
    Ok(months)
}
