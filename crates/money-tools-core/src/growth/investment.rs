use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::MoneyToolsError;
use crate::growth::series::BalanceSeries;
use crate::time_value::future_value;
use crate::types::{ensure_non_negative, monthly_rate, Money, Percent};
use crate::MoneyToolsResult;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvestmentInput {
    pub initial: Money,
    #[serde(default)]
    pub monthly_contribution: Money,
    pub annual_rate_percent: Percent,
    pub term_months: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct InvestmentResult {
    pub final_balance: Money,
    pub total_contributed: Money,
    pub total_growth: Money,
    pub series: BalanceSeries,
}

/// Month-by-month projection of a balance that compounds monthly and
/// receives a contribution at the end of each month.
///
/// The final balance is taken from the recurrence itself; the closed form is
/// evaluated first so that inputs which would overflow are rejected before
/// any series is handed out.
pub fn project_investment(input: &InvestmentInput) -> MoneyToolsResult<InvestmentResult> {
    validate(input)?;
    future_value_closed_form(input)?;

    let series = BalanceSeries::new(
        input.initial,
        input.monthly_contribution,
        monthly_rate(input.annual_rate_percent),
        input.term_months,
    );
    let final_balance = series.closing_balance();
    let total_contributed = input
        .monthly_contribution
        .checked_mul(Decimal::from(input.term_months))
        .and_then(|deposits| deposits.checked_add(input.initial))
        .ok_or_else(|| MoneyToolsError::overflow("total contributed"))?;

    Ok(InvestmentResult {
        final_balance,
        total_contributed,
        total_growth: final_balance - total_contributed,
        series,
    })
}

/// Final balance only, via `initial*(1+r)^n + c*((1+r)^n - 1)/r`.
pub fn future_value_closed_form(input: &InvestmentInput) -> MoneyToolsResult<Money> {
    validate(input)?;
    future_value(
        input.initial,
        input.monthly_contribution,
        monthly_rate(input.annual_rate_percent),
        u64::from(input.term_months),
    )
}

fn validate(input: &InvestmentInput) -> MoneyToolsResult<()> {
    ensure_non_negative("initial", input.initial)?;
    ensure_non_negative("monthly_contribution", input.monthly_contribution)?;
    ensure_non_negative("annual_rate_percent", input.annual_rate_percent)
}
