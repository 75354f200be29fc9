use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::MoneyToolsError;
use crate::types::{Money, Ratio};
use crate::MoneyToolsResult;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetCategory {
    pub name: String,
    pub monthly_amount: Money,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetInput {
    pub categories: Vec<BudgetCategory>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryShare {
    pub name: String,
    pub monthly_amount: Money,
    pub share: Ratio,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetSummary {
    pub total_monthly: Money,
    pub total_annual: Money,
    pub categories: Vec<CategoryShare>,
}

/// Monthly and annual spending totals with each category's share of the
/// monthly total. Category order is preserved.
pub fn summarize_budget(input: &BudgetInput) -> MoneyToolsResult<BudgetSummary> {
    for category in &input.categories {
        if category.monthly_amount < Decimal::ZERO {
            return Err(MoneyToolsError::InvalidInput {
                field: format!("categories[{}].monthly_amount", category.name),
                reason: "must be >= 0".into(),
            });
        }
    }

    let total_monthly = input
        .categories
        .iter()
        .try_fold(Decimal::ZERO, |acc, c| acc.checked_add(c.monthly_amount))
        .ok_or_else(|| MoneyToolsError::overflow("budget total"))?;

    let total_annual = total_monthly
        .checked_mul(dec!(12))
        .ok_or_else(|| MoneyToolsError::overflow("budget annual total"))?;

    let categories = input
        .categories
        .iter()
        .map(|c| -> MoneyToolsResult<CategoryShare> {
            Ok(CategoryShare {
                name: c.name.clone(),
                monthly_amount: c.monthly_amount,
                share: Ratio::percent_of(c.monthly_amount, total_monthly, "budget share")?,
            })
        })
        .collect::<MoneyToolsResult<Vec<_>>>()?;

    Ok(BudgetSummary {
        total_monthly,
        total_annual,
        categories,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(name: &str, amount: Decimal) -> BudgetCategory {
        BudgetCategory {
            name: name.into(),
            monthly_amount: amount,
        }
    }

    #[test]
    fn test_totals_and_shares() {
        let input = BudgetInput {
            categories: vec![
                category("Rent/Mortgage", dec!(1200)),
                category("Food", dec!(400)),
                category("Transport", dec!(150)),
                category("Savings", dec!(250)),
            ],
        };
        let summary = summarize_budget(&input).unwrap();
        assert_eq!(summary.total_monthly, dec!(2000));
        assert_eq!(summary.total_annual, dec!(24000));
        assert_eq!(summary.categories[0].share, Ratio::Percent(dec!(60)));
        let share_sum: Decimal = summary
            .categories
            .iter()
            .filter_map(|c| c.share.value())
            .sum();
        assert_eq!(share_sum, dec!(100));
    }

    #[test]
    fn test_empty_budget_has_no_shares() {
        let summary = summarize_budget(&BudgetInput { categories: vec![] }).unwrap();
        assert_eq!(summary.total_monthly, Decimal::ZERO);
        assert!(summary.categories.is_empty());
    }

    #[test]
    fn test_all_zero_categories_are_undefined_shares() {
        let input = BudgetInput {
            categories: vec![category("Misc", Decimal::ZERO)],
        };
        let summary = summarize_budget(&input).unwrap();
        assert_eq!(summary.categories[0].share, Ratio::Undefined);
    }

    #[test]
    fn test_annual_total_overflow() {
        let input = BudgetInput {
            categories: vec![category("Everything", dec!(10000000000000000000000000000))],
        };
        assert!(matches!(
            summarize_budget(&input),
            Err(MoneyToolsError::Overflow { .. })
        ));
    }

    #[test]
    fn test_negative_amount_rejected() {
        let input = BudgetInput {
            categories: vec![category("Refund", dec!(-10))],
        };
        assert!(summarize_budget(&input).is_err());
    }
}
