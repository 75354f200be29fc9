use std::collections::BTreeMap;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::MoneyToolsError;
use crate::types::{ensure_non_negative, Money};
use crate::MoneyToolsResult;

/// Units of each currency per one unit of the base currency.
///
/// Codes are stored upper-case. A code missing from the table is priced at
/// 1, i.e. treated as the base currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BTreeMap<String, Decimal>", into = "BTreeMap<String, Decimal>")]
pub struct CurrencyRateTable {
    rates: BTreeMap<String, Decimal>,
}

impl CurrencyRateTable {
    pub fn new(rates: BTreeMap<String, Decimal>) -> MoneyToolsResult<Self> {
        let mut normalized = BTreeMap::new();
        for (code, rate) in rates {
            let code = normalize_code(&code);
            if code.is_empty() {
                return Err(MoneyToolsError::InvalidTable(
                    "currency code must not be empty".into(),
                ));
            }
            if rate <= Decimal::ZERO {
                return Err(MoneyToolsError::InvalidTable(format!(
                    "rate for {code} must be > 0, found {rate}"
                )));
            }
            normalized.insert(code, rate);
        }
        Ok(Self { rates: normalized })
    }

    /// Rate for `code`, falling back to 1 for unknown codes.
    pub fn rate(&self, code: &str) -> Decimal {
        self.rates
            .get(&normalize_code(code))
            .copied()
            .unwrap_or(Decimal::ONE)
    }

    pub fn contains(&self, code: &str) -> bool {
        self.rates.contains_key(&normalize_code(code))
    }

    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.rates.keys().map(String::as_str)
    }

    pub fn convert(&self, input: &ConversionInput) -> MoneyToolsResult<Conversion> {
        convert_currency(self, input)
    }
}

/// Static demo rates against USD.
impl Default for CurrencyRateTable {
    fn default() -> Self {
        let rates = [
            ("USD", dec!(1)),
            ("EUR", dec!(0.92)),
            ("GBP", dec!(0.79)),
            ("JPY", dec!(156.5)),
            ("CAD", dec!(1.36)),
        ]
        .into_iter()
        .map(|(code, rate)| (code.to_string(), rate))
        .collect();
        Self { rates }
    }
}

impl TryFrom<BTreeMap<String, Decimal>> for CurrencyRateTable {
    type Error = MoneyToolsError;

    fn try_from(rates: BTreeMap<String, Decimal>) -> MoneyToolsResult<Self> {
        Self::new(rates)
    }
}

impl From<CurrencyRateTable> for BTreeMap<String, Decimal> {
    fn from(table: CurrencyRateTable) -> Self {
        table.rates
    }
}

fn normalize_code(code: &str) -> String {
    code.trim().to_ascii_uppercase()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionInput {
    pub amount: Money,
    pub from: String,
    pub to: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversion {
    pub amount: Money,
    pub from: String,
    pub to: String,
    /// Units of `to` per unit of `from`.
    pub cross_rate: Decimal,
    pub converted: Money,
    /// Codes that were not in the table and were priced at 1.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub unknown_codes: Vec<String>,
}

/// `amount / rate[from] * rate[to]`
pub fn convert_currency(
    table: &CurrencyRateTable,
    input: &ConversionInput,
) -> MoneyToolsResult<Conversion> {
    ensure_non_negative("amount", input.amount)?;

    let from = normalize_code(&input.from);
    let to = normalize_code(&input.to);
    let from_rate = table.rate(&from);
    let to_rate = table.rate(&to);

    let converted = input
        .amount
        .checked_div(from_rate)
        .and_then(|base| base.checked_mul(to_rate))
        .ok_or_else(|| MoneyToolsError::overflow("currency conversion"))?;
    let cross_rate = to_rate
        .checked_div(from_rate)
        .ok_or_else(|| MoneyToolsError::overflow("cross rate"))?;
    let mut unknown_codes: Vec<String> = [&from, &to]
        .into_iter()
        .filter(|code| !table.contains(code))
        .cloned()
        .collect();
    unknown_codes.dedup();

    Ok(Conversion {
        amount: input.amount,
        cross_rate,
        converted,
        from,
        to,
        unknown_codes,
    })
}
