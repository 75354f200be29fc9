use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::MoneyToolsError;
use crate::math::growth_factor;
use crate::types::{ensure_non_negative, Money, Percent};
use crate::MoneyToolsResult;

// ---------------------------------------------------------------------------
// Compound interest
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompoundInterestInput {
    pub principal: Money,
    pub annual_rate_percent: Percent,
    /// Compounding periods per year; zero is treated as annual compounding.
    pub compounds_per_year: u32,
    pub years: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompoundInterestResult {
    pub future_value: Money,
    pub interest_earned: Money,
    pub periods: u64,
}

/// `A = P * (1 + r/n)^(n*t)`
pub fn compound_interest(input: &CompoundInterestInput) -> MoneyToolsResult<CompoundInterestResult> {
    ensure_non_negative("principal", input.principal)?;
    ensure_non_negative("annual_rate_percent", input.annual_rate_percent)?;

    let n = input.compounds_per_year.max(1);
    let periods = u64::from(n) * u64::from(input.years);
    let periodic_rate = input.annual_rate_percent / dec!(100) / Decimal::from(n);

    let factor = growth_factor(periodic_rate, periods, "compound interest")?;
    let future_value = input
        .principal
        .checked_mul(factor)
        .ok_or_else(|| MoneyToolsError::overflow("compound interest"))?;

    Ok(CompoundInterestResult {
        future_value,
        interest_earned: future_value - input.principal,
        periods,
    })
}

// ---------------------------------------------------------------------------
// Inflation
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InflationInput {
    pub amount: Money,
    /// May be negative (deflation) but must stay above -100%.
    pub annual_inflation_percent: Percent,
    pub years: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InflationResult {
    /// Today's-money value of `amount` after `years` of inflation.
    pub purchasing_power: Money,
    pub value_lost: Money,
    /// Nominal amount needed after `years` to match today's `amount`.
    pub equivalent_future_cost: Money,
}

pub fn inflation_impact(input: &InflationInput) -> MoneyToolsResult<InflationResult> {
    ensure_non_negative("amount", input.amount)?;
    if input.annual_inflation_percent <= dec!(-100) {
        return Err(MoneyToolsError::invalid(
            "annual_inflation_percent",
            "must be greater than -100%",
        ));
    }

    let rate = input.annual_inflation_percent / dec!(100);
    let factor = growth_factor(rate, u64::from(input.years), "inflation factor")?;
    let purchasing_power = input
        .amount
        .checked_div(factor)
        .ok_or_else(|| MoneyToolsError::overflow("inflation purchasing power"))?;
    let equivalent_future_cost = input
        .amount
        .checked_mul(factor)
        .ok_or_else(|| MoneyToolsError::overflow("inflation future cost"))?;

    Ok(InflationResult {
        purchasing_power,
        value_lost: input.amount - purchasing_power,
        equivalent_future_cost,
    })
}
