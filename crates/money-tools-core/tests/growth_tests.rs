use money_tools_core::growth::{compound, investment, savings, series::BalanceSeries};
use money_tools_core::Horizon;
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn simulate(deposit: Decimal, monthly_rate: Decimal, months: u64) -> Decimal {
    let mut balance = Decimal::ZERO;
    for _ in 0..months {
        balance = balance * (Decimal::ONE + monthly_rate) + deposit;
    }
    balance
}

// ===========================================================================
// Savings goal
// ===========================================================================

#[test]
fn test_savings_series_starts_at_first_deposit() {
    let result = savings::savings_goal(&savings::SavingsInput {
        goal: dec!(20000),
        monthly_deposit: dec!(500),
        annual_rate_percent: dec!(5),
    })
    .unwrap();

    let points: Vec<_> = result.series.iter().collect();
    assert_eq!(points.len(), 38);
    assert_eq!(points[0].month, 1);
    assert_eq!(points[0].balance, dec!(500));
    assert!(points[36].balance < dec!(20000));
    assert!(points[37].balance >= dec!(20000));
}

#[test]
fn test_savings_serializes_unreachable_marker() {
    let result = savings::savings_goal(&savings::SavingsInput {
        goal: dec!(1000),
        monthly_deposit: dec!(0),
        annual_rate_percent: dec!(5),
    })
    .unwrap();
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["months_required"], serde_json::json!("unreachable"));
    assert_eq!(json["series"].as_array().map(Vec::len), Some(240));
}

#[test]
fn test_tiny_rate_matches_zero_rate_count() {
    let horizon = savings::months_to_goal(dec!(1200), dec!(100), dec!(0.0000001)).unwrap();
    assert_eq!(horizon, Horizon::Months(12));
}

// ===========================================================================
// Investment and series
// ===========================================================================

#[test]
fn test_series_restarts_on_every_iteration() {
    let series = BalanceSeries::new(dec!(100), dec!(10), dec!(0.01), 3);
    let first: Vec<_> = series.iter().collect();
    let second: Vec<_> = (&series).into_iter().collect();
    assert_eq!(first, second);
    assert_eq!(first[0].balance, dec!(111));
    assert_eq!(series.opening_balance(), dec!(100));
}

#[test]
fn test_series_halts_instead_of_overflowing() {
    let series = BalanceSeries::new(Decimal::MAX / dec!(2), Decimal::ZERO, dec!(1), 10);
    let points: Vec<_> = series.iter().collect();
    assert!(points.len() < 10);
}

#[test]
fn test_investment_series_is_json_list() {
    let result = investment::project_investment(&investment::InvestmentInput {
        initial: dec!(1000),
        monthly_contribution: dec!(100),
        annual_rate_percent: dec!(0),
        term_months: 2,
    })
    .unwrap();
    let json = serde_json::to_value(&result).unwrap();
    let points = json["series"].as_array().unwrap();
    assert_eq!(points.len(), 2);
    assert_eq!(points[1]["month"], serde_json::json!(2));
    let balance: Decimal = serde_json::from_value(points[1]["balance"].clone()).unwrap();
    assert_eq!(balance, dec!(1200));
}

// ===========================================================================
// Compound interest and inflation
// ===========================================================================

#[test]
fn test_compound_annual_matches_investment_without_contributions() {
    let compound = compound::compound_interest(&compound::CompoundInterestInput {
        principal: dec!(10000),
        annual_rate_percent: dec!(6),
        compounds_per_year: 12,
        years: 10,
    })
    .unwrap();
    let projected = investment::future_value_closed_form(&investment::InvestmentInput {
        initial: dec!(10000),
        monthly_contribution: Decimal::ZERO,
        annual_rate_percent: dec!(6),
        term_months: 120,
    })
    .unwrap();
    assert!((compound.future_value - projected).abs() < dec!(0.0000001));
    assert!((compound.future_value - dec!(18193.97)).abs() < dec!(0.005));
}

#[test]
fn test_deflation_raises_purchasing_power() {
    let result = compound::inflation_impact(&compound::InflationInput {
        amount: dec!(1000),
        annual_inflation_percent: dec!(-2),
        years: 3,
    })
    .unwrap();
    assert!(result.purchasing_power > dec!(1000));
    assert!(result.value_lost < Decimal::ZERO);
}

// ===========================================================================
// Properties
// ===========================================================================

proptest! {
    #[test]
    fn prop_savings_horizon_is_minimal(
        goal in 1u32..100_000,
        deposit in 50u32..5_000,
        rate_bp in 0u32..1500,
    ) {
        let goal = Decimal::from(goal);
        let deposit = Decimal::from(deposit);
        let rate = Decimal::new(i64::from(rate_bp), 2);
        let r = rate / dec!(1200);

        let months = savings::months_to_goal(goal, deposit, r).unwrap().months().unwrap();
        let tolerance = dec!(0.0000001);
        prop_assert!(months >= 1);
        prop_assert!(simulate(deposit, r, months) >= goal - tolerance);
        prop_assert!(simulate(deposit, r, months - 1) < goal + tolerance);
    }

    #[test]
    fn prop_recurrence_matches_closed_form(
        initial in 0u32..100_000,
        contribution in 0u32..5_000,
        rate_bp in 0u32..2000,
        term in 0u32..360,
    ) {
        let input = investment::InvestmentInput {
            initial: Decimal::from(initial),
            monthly_contribution: Decimal::from(contribution),
            annual_rate_percent: Decimal::new(i64::from(rate_bp), 2),
            term_months: term,
        };
        let projected = investment::project_investment(&input).unwrap();
        let closed = investment::future_value_closed_form(&input).unwrap();
        prop_assert!((projected.final_balance - closed).abs() < dec!(0.0001));
        prop_assert_eq!(projected.series.len(), term as usize);
    }
}
