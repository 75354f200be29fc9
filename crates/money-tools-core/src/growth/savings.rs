use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::MoneyToolsError;
use crate::growth::series::BalanceSeries;
use crate::math::{ceil_count, ln};
use crate::time_value::annuity_future_value;
use crate::types::{ensure_non_negative, monthly_rate, Horizon, Money, Percent, Rate};
use crate::MoneyToolsResult;

/// Upper bound on the number of points in a savings chart series.
pub const MAX_SAVINGS_SERIES_MONTHS: u32 = 240;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavingsInput {
    pub goal: Money,
    /// Non-positive deposits never reach a positive goal.
    pub monthly_deposit: Money,
    pub annual_rate_percent: Percent,
}

#[derive(Debug, Clone, Serialize)]
pub struct SavingsResult {
    pub months_required: Horizon,
    /// Capped at `MAX_SAVINGS_SERIES_MONTHS` points.
    pub series: BalanceSeries,
}

/// Smallest whole number of monthly deposits whose compounded value reaches
/// the goal, plus a chart series of the balance.
pub fn savings_goal(input: &SavingsInput) -> MoneyToolsResult<SavingsResult> {
    ensure_non_negative("goal", input.goal)?;
    ensure_non_negative("annual_rate_percent", input.annual_rate_percent)?;

    let r = monthly_rate(input.annual_rate_percent);
    let months_required = months_to_goal(input.goal, input.monthly_deposit, r)?;

    let series_len = match months_required {
        Horizon::Months(m) => m.min(u64::from(MAX_SAVINGS_SERIES_MONTHS)) as u32,
        Horizon::Unreachable => MAX_SAVINGS_SERIES_MONTHS,
    };
    let deposit = input.monthly_deposit.max(Decimal::ZERO);

    Ok(SavingsResult {
        months_required,
        series: BalanceSeries::new(Decimal::ZERO, deposit, r, series_len),
    })
}

/// Goal-seek on the future value of an ordinary annuity.
///
/// Closed form `ceil(ln(1 + r*goal/deposit) / ln(1 + r))`, then nudged so
/// that the annuity value at `m` reaches the goal and the value at `m - 1`
/// does not.
pub fn months_to_goal(goal: Money, deposit: Money, r: Rate) -> MoneyToolsResult<Horizon> {
    if deposit <= Decimal::ZERO {
        return Ok(Horizon::Unreachable);
    }
    if goal.is_zero() {
        return Ok(Horizon::Months(0));
    }
    if r.is_zero() {
        let months = goal
            .checked_div(deposit)
            .ok_or_else(|| MoneyToolsError::overflow("savings horizon"))?;
        return Ok(Horizon::Months(ceil_count(months, "savings horizon")?));
    }

    let log_arg = r
        .checked_mul(goal)
        .and_then(|x| x.checked_div(deposit))
        .and_then(|x| x.checked_add(Decimal::ONE))
        .ok_or_else(|| MoneyToolsError::overflow("savings horizon"))?;
    let (Some(numerator), Some(denominator)) = (ln(log_arg), ln(Decimal::ONE + r)) else {
        return Ok(Horizon::Unreachable);
    };
    if denominator <= Decimal::ZERO {
        return Ok(Horizon::Unreachable);
    }

    let estimate = ceil_count(numerator / denominator, "savings horizon")?;
    let months = snap_to_goal(goal, deposit, r, estimate)?;
    if months != estimate {
        tracing::debug!(estimate, months, "savings horizon corrected");
    }
    Ok(Horizon::Months(months))
}

fn snap_to_goal(goal: Money, deposit: Money, r: Rate, estimate: u64) -> MoneyToolsResult<u64> {
    let mut months = estimate.max(1);
    while annuity_future_value(deposit, r, months)? < goal {
        months += 1;
    }
    while months > 1 && annuity_future_value(deposit, r, months - 1)? >= goal {
        months -= 1;
    }
    Ok(months)
}
