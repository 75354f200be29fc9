use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::MoneyToolsError;
use crate::types::{Money, Rate};
use crate::MoneyToolsResult;

/// Income from `threshold` up to the next bracket's threshold is taxed at
/// `rate` (decimal, 0.12 = 12%).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    pub threshold: Money,
    pub rate: Rate,
}

/// Ordered progressive bracket table.
///
/// Invariants, checked at construction: non-empty, first threshold is zero,
/// thresholds strictly ascending, every rate within [0, 1].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<TaxBracket>", into = "Vec<TaxBracket>")]
pub struct TaxBracketTable {
    brackets: Vec<TaxBracket>,
}

impl TaxBracketTable {
    pub fn new(brackets: Vec<TaxBracket>) -> MoneyToolsResult<Self> {
        let first = brackets
            .first()
            .ok_or_else(|| MoneyToolsError::InvalidTable("tax table has no brackets".into()))?;
        if !first.threshold.is_zero() {
            return Err(MoneyToolsError::InvalidTable(format!(
                "first bracket must start at 0, found {}",
                first.threshold
            )));
        }
        for pair in brackets.windows(2) {
            if pair[1].threshold <= pair[0].threshold {
                return Err(MoneyToolsError::InvalidTable(format!(
                    "bracket thresholds must ascend: {} follows {}",
                    pair[1].threshold, pair[0].threshold
                )));
            }
        }
        if let Some(bad) = brackets
            .iter()
            .find(|b| b.rate < Decimal::ZERO || b.rate > Decimal::ONE)
        {
            return Err(MoneyToolsError::InvalidTable(format!(
                "bracket rate {} at threshold {} is outside [0, 1]",
                bad.rate, bad.threshold
            )));
        }
        Ok(Self { brackets })
    }

    pub fn brackets(&self) -> &[TaxBracket] {
        &self.brackets
    }

    /// Each bracket paired with the threshold where the next one begins.
    pub(crate) fn bands(&self) -> impl Iterator<Item = (&TaxBracket, Option<Money>)> {
        self.brackets.iter().enumerate().map(|(i, bracket)| {
            let upper = self.brackets.get(i + 1).map(|next| next.threshold);
            (bracket, upper)
        })
    }
}

/// Simplified US-style sample brackets.
impl Default for TaxBracketTable {
    fn default() -> Self {
        Self {
            brackets: vec![
                TaxBracket {
                    threshold: Decimal::ZERO,
                    rate: dec!(0.10),
                },
                TaxBracket {
                    threshold: dec!(11000),
                    rate: dec!(0.12),
                },
                TaxBracket {
                    threshold: dec!(44725),
                    rate: dec!(0.22),
                },
                TaxBracket {
                    threshold: dec!(95375),
                    rate: dec!(0.24),
                },
            ],
        }
    }
}

impl TryFrom<Vec<TaxBracket>> for TaxBracketTable {
    type Error = MoneyToolsError;

    fn try_from(brackets: Vec<TaxBracket>) -> MoneyToolsResult<Self> {
        Self::new(brackets)
    }
}

impl From<TaxBracketTable> for Vec<TaxBracket> {
    fn from(table: TaxBracketTable) -> Self {
        table.brackets
    }
}
