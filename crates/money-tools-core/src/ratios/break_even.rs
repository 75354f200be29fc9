use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::MoneyToolsError;
use crate::math::ceil_count;
use crate::types::{ensure_non_negative, Money};
use crate::MoneyToolsResult;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BreakEvenInput {
    pub fixed_costs: Money,
    pub price_per_unit: Money,
    pub variable_cost_per_unit: Money,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BreakEvenResult {
    Reached { units: u64, revenue: Money },
    /// Each unit sold loses money or breaks exactly even.
    Unreachable,
}

impl BreakEvenResult {
    pub fn units(&self) -> Option<u64> {
        match self {
            BreakEvenResult::Reached { units, .. } => Some(*units),
            BreakEvenResult::Unreachable => None,
        }
    }
}

/// Whole units needed for the per-unit contribution margin to cover fixed
/// costs, and the revenue at that volume.
pub fn break_even(input: &BreakEvenInput) -> MoneyToolsResult<BreakEvenResult> {
    ensure_non_negative("fixed_costs", input.fixed_costs)?;

    let contribution = input
        .price_per_unit
        .checked_sub(input.variable_cost_per_unit)
        .ok_or_else(|| MoneyToolsError::overflow("contribution margin"))?;
    if contribution <= Decimal::ZERO {
        return Ok(BreakEvenResult::Unreachable);
    }

    let exact = input
        .fixed_costs
        .checked_div(contribution)
        .ok_or_else(|| MoneyToolsError::overflow("break-even units"))?;
    let units = ceil_count(exact, "break-even units")?;
    let revenue = input
        .price_per_unit
        .checked_mul(Decimal::from(units))
        .ok_or_else(|| MoneyToolsError::overflow("break-even revenue"))?;

    Ok(BreakEvenResult::Reached { units, revenue })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn input(fixed: Decimal, price: Decimal, variable: Decimal) -> BreakEvenInput {
        BreakEvenInput {
            fixed_costs: fixed,
            price_per_unit: price,
            variable_cost_per_unit: variable,
        }
    }

    #[test]
    fn test_break_even_rounds_units_up() {
        let result = break_even(&input(dec!(5000), dec!(50), dec!(20))).unwrap();
        assert_eq!(
            result,
            BreakEvenResult::Reached {
                units: 167,
                revenue: dec!(8350)
            }
        );
    }

    #[test]
    fn test_zero_contribution_unreachable() {
        let result = break_even(&input(dec!(5000), dec!(50), dec!(50))).unwrap();
        assert_eq!(result, BreakEvenResult::Unreachable);
    }

    #[test]
    fn test_negative_contribution_unreachable() {
        let result = break_even(&input(dec!(5000), dec!(40), dec!(50))).unwrap();
        assert_eq!(result.units(), None);
    }

    #[test]
    fn test_no_fixed_costs_needs_no_units() {
        let result = break_even(&input(Decimal::ZERO, dec!(50), dec!(20))).unwrap();
        assert_eq!(result.units(), Some(0));
    }

    #[test]
    fn test_negative_fixed_costs_rejected() {
        assert!(break_even(&input(dec!(-1), dec!(50), dec!(20))).is_err());
    }
}
