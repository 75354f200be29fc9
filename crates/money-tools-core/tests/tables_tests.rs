use std::collections::BTreeMap;

use money_tools_core::fx::{convert_currency, ConversionInput, CurrencyRateTable};
use money_tools_core::tax::{estimate_salary_tax, SalaryTaxInput, TaxBracket, TaxBracketTable};
use money_tools_core::{MoneyToolsError, Ratio};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

// ===========================================================================
// Salary tax
// ===========================================================================

fn gross(amount: Decimal) -> SalaryTaxInput {
    SalaryTaxInput {
        annual_gross: amount,
    }
}

#[test]
fn test_income_above_top_threshold_uses_every_bracket() {
    let result = estimate_salary_tax(&TaxBracketTable::default(), &gross(dec!(100000))).unwrap();

    assert_eq!(result.annual_tax, dec!(17400));
    assert_eq!(result.marginal_rate_percent, dec!(24));
    assert_eq!(result.breakdown.len(), 4);
    assert_eq!(result.breakdown[3].taxable_income, dec!(4625));
    assert_eq!(result.breakdown[3].upper, None);
    assert_eq!(result.annual_net, dec!(82600));
    assert_eq!(result.effective_rate, Ratio::Percent(dec!(17.4)));
}

#[test]
fn test_zero_income_has_undefined_effective_rate() {
    let result = estimate_salary_tax(&TaxBracketTable::default(), &gross(Decimal::ZERO)).unwrap();
    assert_eq!(result.annual_tax, Decimal::ZERO);
    assert_eq!(result.effective_rate, Ratio::Undefined);
}

#[test]
fn test_bracket_table_loads_from_json() {
    let json = r#"[
        { "threshold": "0", "rate": "0" },
        { "threshold": "12570", "rate": "0.2" },
        { "threshold": "50270", "rate": "0.4" }
    ]"#;
    let table: TaxBracketTable = serde_json::from_str(json).unwrap();
    let result = table.estimate(&gross(dec!(30000))).unwrap();
    // (30000 - 12570) * 20%
    assert_eq!(result.annual_tax, dec!(3486));
}

#[test]
fn test_bracket_table_rejects_descending_thresholds() {
    let err = TaxBracketTable::new(vec![
        TaxBracket {
            threshold: dec!(0),
            rate: dec!(0.1),
        },
        TaxBracket {
            threshold: dec!(5000),
            rate: dec!(0.2),
        },
        TaxBracket {
            threshold: dec!(4000),
            rate: dec!(0.3),
        },
    ])
    .unwrap_err();
    assert!(matches!(err, MoneyToolsError::InvalidTable(_)));
}

#[test]
fn test_bracket_table_rejects_rates_above_one() {
    let json = r#"[{ "threshold": 0, "rate": 1.5 }]"#;
    assert!(serde_json::from_str::<TaxBracketTable>(json).is_err());
}

// ===========================================================================
// Currency
// ===========================================================================

fn conversion(amount: Decimal, from: &str, to: &str) -> ConversionInput {
    ConversionInput {
        amount,
        from: from.into(),
        to: to.into(),
    }
}

#[test]
fn test_cross_rate_through_base() {
    let table = CurrencyRateTable::default();
    let result = convert_currency(&table, &conversion(dec!(100), "EUR", "JPY")).unwrap();
    assert!((result.converted - dec!(17010.87)).abs() < dec!(0.005));
    assert!(result.unknown_codes.is_empty());
}

#[test]
fn test_codes_are_case_insensitive() {
    let table = CurrencyRateTable::default();
    let result = convert_currency(&table, &conversion(dec!(100), "usd", " gbp ")).unwrap();
    assert_eq!(result.converted, dec!(79));
    assert_eq!(result.from, "USD");
    assert_eq!(result.to, "GBP");
}

#[test]
fn test_unknown_code_is_priced_as_base() {
    let table = CurrencyRateTable::default();
    let result = convert_currency(&table, &conversion(dec!(50), "XYZ", "EUR")).unwrap();
    assert_eq!(result.converted, dec!(46));
    assert_eq!(result.unknown_codes, vec!["XYZ".to_string()]);

    let same = convert_currency(&table, &conversion(dec!(50), "XYZ", "xyz")).unwrap();
    assert_eq!(same.unknown_codes, vec!["XYZ".to_string()]);
    assert_eq!(same.converted, dec!(50));
}

#[test]
fn test_custom_rate_table() {
    let mut rates = BTreeMap::new();
    rates.insert("usd".to_string(), dec!(1));
    rates.insert("chf".to_string(), dec!(0.9));
    let table = CurrencyRateTable::new(rates).unwrap();
    assert!(table.contains("CHF"));
    assert_eq!(table.codes().collect::<Vec<_>>(), vec!["CHF", "USD"]);
    assert_eq!(table.rate("EUR"), Decimal::ONE);
}

#[test]
fn test_non_positive_rate_rejected() {
    let json = r#"{ "USD": 1, "EUR": 0 }"#;
    assert!(serde_json::from_str::<CurrencyRateTable>(json).is_err());
}

proptest! {
    #[test]
    fn prop_conversion_round_trips(
        cents in 0u64..1_000_000_000,
        from in prop::sample::select(vec!["USD", "EUR", "GBP", "JPY", "CAD"]),
        to in prop::sample::select(vec!["USD", "EUR", "GBP", "JPY", "CAD"]),
    ) {
        let table = CurrencyRateTable::default();
        let amount = Decimal::new(cents as i64, 2);
        let there = convert_currency(&table, &conversion(amount, from, to)).unwrap();
        let back = convert_currency(&table, &conversion(there.converted, to, from)).unwrap();
        prop_assert!((back.converted - amount).abs() < dec!(0.0000001));
    }

    #[test]
    fn prop_tax_never_exceeds_income(income in 0u64..10_000_000) {
        let result = estimate_salary_tax(&TaxBracketTable::default(), &gross(Decimal::from(income))).unwrap();
        prop_assert!(result.annual_tax <= result.annual_gross);
        prop_assert!(result.annual_tax >= Decimal::ZERO);
        let sliced: Decimal = result.breakdown.iter().map(|s| s.taxable_income).sum();
        prop_assert_eq!(sliced, result.annual_gross);
    }
}
