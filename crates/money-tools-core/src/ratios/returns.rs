use serde::{Deserialize, Serialize};

use crate::error::MoneyToolsError;
use crate::types::{Money, Ratio};
use crate::MoneyToolsResult;

// ---------------------------------------------------------------------------
// Return on investment
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoiInput {
    /// Final value received from the investment.
    pub gain: Money,
    pub cost: Money,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoiResult {
    pub net_return: Money,
    pub roi: Ratio,
}

/// `(gain - cost) / cost * 100`, undefined for a zero cost.
pub fn return_on_investment(input: &RoiInput) -> MoneyToolsResult<RoiResult> {
    let net_return = input
        .gain
        .checked_sub(input.cost)
        .ok_or_else(|| MoneyToolsError::overflow("net return"))?;
    Ok(RoiResult {
        net_return,
        roi: Ratio::percent_of(net_return, input.cost, "return on investment")?,
    })
}

// ---------------------------------------------------------------------------
// Debt-to-income
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DtiInput {
    pub monthly_debt_payments: Money,
    pub monthly_income: Money,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DtiResult {
    pub dti: Ratio,
}

/// `debt / income * 100`, undefined for a zero income.
pub fn debt_to_income(input: &DtiInput) -> MoneyToolsResult<DtiResult> {
    Ok(DtiResult {
        dti: Ratio::percent_of(
            input.monthly_debt_payments,
            input.monthly_income,
            "debt-to-income",
        )?,
    })
}
