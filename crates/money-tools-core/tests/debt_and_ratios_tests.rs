use money_tools_core::budget::planner::{summarize_budget, BudgetCategory, BudgetInput};
use money_tools_core::debt::payoff::{payoff_horizon, PayoffInput};
use money_tools_core::ratios::break_even::{break_even, BreakEvenInput, BreakEvenResult};
use money_tools_core::ratios::returns::{debt_to_income, return_on_investment, DtiInput, RoiInput};
use money_tools_core::{PayoffHorizon, Ratio};
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn balance_after(balance: Decimal, monthly_rate: Decimal, payment: Decimal, months: u64) -> Decimal {
    let mut b = balance;
    for _ in 0..months {
        b = b * (Decimal::ONE + monthly_rate) - payment;
    }
    b
}

// ===========================================================================
// Payoff
// ===========================================================================

#[test]
fn test_payoff_final_payment_is_partial() {
    let result = payoff_horizon(&PayoffInput {
        balance: dec!(1000),
        annual_rate_percent: dec!(0),
        monthly_payment: dec!(300),
    })
    .unwrap();
    assert_eq!(result.months_to_payoff.months(), Some(4));
    assert_eq!(result.months_to_payoff.to_string(), "4");
    // three payments of 300 and a final 100
    assert_eq!(result.total_paid, Some(dec!(1000)));
}

#[test]
fn test_payoff_never_displays_infinity() {
    let result = payoff_horizon(&PayoffInput {
        balance: dec!(10000),
        annual_rate_percent: dec!(24),
        monthly_payment: dec!(150),
    })
    .unwrap();
    assert_eq!(result.months_to_payoff, PayoffHorizon::Never);
    assert_eq!(result.months_to_payoff.to_string(), "∞");
    assert_eq!(result.first_month_interest, dec!(200));
}

#[test]
fn test_negative_balance_rejected() {
    let result = payoff_horizon(&PayoffInput {
        balance: dec!(-1),
        annual_rate_percent: dec!(10),
        monthly_payment: dec!(10),
    });
    assert!(result.is_err());
}

// ===========================================================================
// Ratios
// ===========================================================================

#[test]
fn test_roi_default_scenario() {
    let result = return_on_investment(&RoiInput {
        gain: dec!(15000),
        cost: dec!(10000),
    })
    .unwrap();
    assert_eq!(result.net_return, dec!(5000));
    assert_eq!(result.roi, Ratio::Percent(dec!(50)));
    assert_eq!(result.roi.to_string(), "50.00%");
}

#[test]
fn test_dti_zero_income_is_undefined() {
    let result = debt_to_income(&DtiInput {
        monthly_debt_payments: dec!(1500),
        monthly_income: Decimal::ZERO,
    })
    .unwrap();
    assert_eq!(result.dti, Ratio::Undefined);
    assert_eq!(
        serde_json::to_value(&result).unwrap(),
        serde_json::json!({ "dti": "undefined" })
    );
}

#[test]
fn test_dti_default_scenario() {
    let result = debt_to_income(&DtiInput {
        monthly_debt_payments: dec!(1500),
        monthly_income: dec!(5000),
    })
    .unwrap();
    assert_eq!(result.dti, Ratio::Percent(dec!(30)));
}

#[test]
fn test_break_even_rounds_units_up() {
    let result = break_even(&BreakEvenInput {
        fixed_costs: dec!(10000),
        price_per_unit: dec!(50),
        variable_cost_per_unit: dec!(30),
    })
    .unwrap();
    assert_eq!(
        result,
        BreakEvenResult::Reached {
            units: 500,
            revenue: dec!(25000)
        }
    );

    let uneven = break_even(&BreakEvenInput {
        fixed_costs: dec!(1000),
        price_per_unit: dec!(10),
        variable_cost_per_unit: dec!(7),
    })
    .unwrap();
    assert_eq!(uneven.units(), Some(334));
}

#[test]
fn test_break_even_unreachable_without_margin() {
    let result = break_even(&BreakEvenInput {
        fixed_costs: dec!(1000),
        price_per_unit: dec!(10),
        variable_cost_per_unit: dec!(10),
    })
    .unwrap();
    assert_eq!(result, BreakEvenResult::Unreachable);
    assert_eq!(result.units(), None);
}

// ===========================================================================
// Budget
// ===========================================================================

#[test]
fn test_budget_preserves_category_order() {
    let summary = summarize_budget(&BudgetInput {
        categories: vec![
            BudgetCategory {
                name: "Utilities".into(),
                monthly_amount: dec!(150),
            },
            BudgetCategory {
                name: "Rent".into(),
                monthly_amount: dec!(850),
            },
        ],
    })
    .unwrap();
    let names: Vec<_> = summary.categories.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Utilities", "Rent"]);
    assert_eq!(summary.categories[1].share, Ratio::Percent(dec!(85)));
}

// ===========================================================================
// Properties
// ===========================================================================

proptest! {
    #[test]
    fn prop_payoff_horizon_is_minimal(
        balance in 100u32..50_000,
        rate_bp in 0u32..3000,
        extra in 10u32..2_000,
    ) {
        let balance = Decimal::from(balance);
        let rate = Decimal::new(i64::from(rate_bp), 2);
        let r = rate / dec!(1200);
        let payment = balance * r + Decimal::from(extra);

        let result = payoff_horizon(&PayoffInput {
            balance,
            annual_rate_percent: rate,
            monthly_payment: payment,
        })
        .unwrap();
        let months = result.months_to_payoff.months().unwrap();
        let tolerance = dec!(0.0000001);
        prop_assert!(months >= 1);
        prop_assert!(balance_after(balance, r, payment, months) <= tolerance);
        prop_assert!(balance_after(balance, r, payment, months - 1) > -tolerance);
    }

    #[test]
    fn prop_ratios_are_pure(gain in 0u32..1_000_000, cost in 0u32..1_000_000) {
        let input = RoiInput { gain: Decimal::from(gain), cost: Decimal::from(cost) };
        let first = return_on_investment(&input).unwrap();
        prop_assert_eq!(&first, &return_on_investment(&input).unwrap());
        prop_assert_eq!(first.roi == Ratio::Undefined, cost == 0);
    }
}
