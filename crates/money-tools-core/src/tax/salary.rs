use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::MoneyToolsError;
use crate::tax::brackets::TaxBracketTable;
use crate::types::{ensure_non_negative, Money, Percent, Ratio};
use crate::MoneyToolsResult;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalaryTaxInput {
    pub annual_gross: Money,
}

/// The part of income falling inside one bracket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BracketSlice {
    pub lower: Money,
    pub upper: Option<Money>,
    pub rate_percent: Percent,
    pub taxable_income: Money,
    pub tax: Money,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryTaxResult {
    pub annual_gross: Money,
    pub annual_tax: Money,
    pub annual_net: Money,
    pub monthly_net: Money,
    pub effective_rate: Ratio,
    pub marginal_rate_percent: Percent,
    pub breakdown: Vec<BracketSlice>,
}

/// Progressive tax: every bracket below the gross income taxes the slice of
/// income between its threshold and the next one.
pub fn estimate_salary_tax(
    table: &TaxBracketTable,
    input: &SalaryTaxInput,
) -> MoneyToolsResult<SalaryTaxResult> {
    ensure_non_negative("annual_gross", input.annual_gross)?;
    let gross = input.annual_gross;

    let mut breakdown = Vec::new();
    let mut annual_tax = Decimal::ZERO;
    let mut marginal_rate = Decimal::ZERO;

    for (bracket, upper) in table.bands() {
        if gross <= bracket.threshold && !bracket.threshold.is_zero() {
            break;
        }
        let ceiling = upper.map_or(gross, |u| u.min(gross));
        let taxable_income = (ceiling - bracket.threshold).max(Decimal::ZERO);
        let tax = taxable_income
            .checked_mul(bracket.rate)
            .ok_or_else(|| MoneyToolsError::overflow("bracket tax"))?;

        annual_tax = annual_tax
            .checked_add(tax)
            .ok_or_else(|| MoneyToolsError::overflow("annual tax"))?;
        marginal_rate = bracket.rate;
        breakdown.push(BracketSlice {
            lower: bracket.threshold,
            upper,
            rate_percent: bracket.rate * dec!(100),
            taxable_income,
            tax,
        });
    }

    let annual_net = gross - annual_tax;
    Ok(SalaryTaxResult {
        annual_gross: gross,
        annual_tax,
        annual_net,
        monthly_net: annual_net / dec!(12),
        effective_rate: Ratio::percent_of(annual_tax, gross, "effective tax rate")?,
        marginal_rate_percent: marginal_rate * dec!(100),
        breakdown,
    })
}

impl TaxBracketTable {
    pub fn estimate(&self, input: &SalaryTaxInput) -> MoneyToolsResult<SalaryTaxResult> {
        estimate_salary_tax(self, input)
    }
}
