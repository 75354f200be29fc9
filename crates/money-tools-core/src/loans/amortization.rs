use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::MoneyToolsError;
use crate::time_value::amortizing_payment;
use crate::types::{ensure_non_negative, monthly_rate, Money, Percent};
use crate::MoneyToolsResult;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// A generic fixed-rate amortizing loan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanInput {
    pub principal: Money,
    pub annual_rate_percent: Percent,
    /// Repayment term. A zero term is treated as one month.
    pub term_months: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanResult {
    pub monthly_payment: Money,
    pub total_paid: Money,
    pub total_interest: Money,
}

// ---------------------------------------------------------------------------
// Core function
// ---------------------------------------------------------------------------

/// Monthly payment, total paid and total interest of a level-payment loan.
///
/// `payment = P * r / (1 - (1 + r)^-n)` with `r` the monthly rate, falling
/// back to `P / n` at a zero rate.
pub fn amortize(input: &LoanInput) -> MoneyToolsResult<LoanResult> {
    ensure_non_negative("principal", input.principal)?;
    ensure_non_negative("annual_rate_percent", input.annual_rate_percent)?;

    let n = u64::from(input.term_months.max(1));
    let r = monthly_rate(input.annual_rate_percent);

    let monthly_payment = amortizing_payment(input.principal, r, n)?;
    let total_paid = monthly_payment
        .checked_mul(Decimal::from(n))
        .ok_or_else(|| MoneyToolsError::overflow("loan total paid"))?;
    let total_interest = total_paid
        .checked_sub(input.principal)
        .ok_or_else(|| MoneyToolsError::overflow("loan total interest"))?;

    Ok(LoanResult {
        monthly_payment,
        total_paid,
        total_interest,
    })
}
