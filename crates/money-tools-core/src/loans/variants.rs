use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::MoneyToolsError;
use crate::loans::amortization::{amortize, LoanInput, LoanResult};
use crate::math::growth_factor;
use crate::types::{ensure_non_negative, monthly_rate, Money, Percent};
use crate::MoneyToolsResult;

// ---------------------------------------------------------------------------
// Auto loan
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AutoLoanInput {
    pub vehicle_price: Money,
    #[serde(default)]
    pub trade_in_value: Money,
    #[serde(default)]
    pub down_payment: Money,
    /// Tax, title and dealer fees rolled into the loan.
    #[serde(default)]
    pub fees: Money,
    pub annual_rate_percent: Percent,
    pub term_months: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutoLoanResult {
    pub amount_financed: Money,
    pub loan: LoanResult,
}

/// Amount financed is `price - trade_in - down + fees`, floored at zero.
pub fn auto_loan(input: &AutoLoanInput) -> MoneyToolsResult<AutoLoanResult> {
    ensure_non_negative("vehicle_price", input.vehicle_price)?;
    ensure_non_negative("trade_in_value", input.trade_in_value)?;
    ensure_non_negative("down_payment", input.down_payment)?;
    ensure_non_negative("fees", input.fees)?;

    let amount_financed = input
        .vehicle_price
        .checked_add(input.fees)
        .and_then(|gross| gross.checked_sub(input.trade_in_value))
        .and_then(|net| net.checked_sub(input.down_payment))
        .ok_or_else(|| MoneyToolsError::overflow("amount financed"))?
        .max(Decimal::ZERO);

    let loan = amortize(&LoanInput {
        principal: amount_financed,
        annual_rate_percent: input.annual_rate_percent,
        term_months: input.term_months,
    })?;

    Ok(AutoLoanResult {
        amount_financed,
        loan,
    })
}

// ---------------------------------------------------------------------------
// Mortgage
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MortgageInput {
    pub home_price: Money,
    #[serde(default)]
    pub down_payment: Money,
    pub annual_rate_percent: Percent,
    pub term_months: u32,
    #[serde(default)]
    pub annual_property_tax: Money,
    #[serde(default)]
    pub annual_insurance: Money,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MortgageResult {
    pub principal: Money,
    pub principal_and_interest: LoanResult,
    pub monthly_property_tax: Money,
    pub monthly_insurance: Money,
    /// Principal and interest plus the monthly share of tax and insurance.
    pub total_monthly_payment: Money,
}

pub fn mortgage(input: &MortgageInput) -> MoneyToolsResult<MortgageResult> {
    ensure_non_negative("home_price", input.home_price)?;
    ensure_non_negative("down_payment", input.down_payment)?;
    ensure_non_negative("annual_property_tax", input.annual_property_tax)?;
    ensure_non_negative("annual_insurance", input.annual_insurance)?;

    let principal = (input.home_price - input.down_payment).max(Decimal::ZERO);
    let principal_and_interest = amortize(&LoanInput {
        principal,
        annual_rate_percent: input.annual_rate_percent,
        term_months: input.term_months,
    })?;

    let monthly_property_tax = input.annual_property_tax / dec!(12);
    let monthly_insurance = input.annual_insurance / dec!(12);
    let total_monthly_payment = principal_and_interest
        .monthly_payment
        .checked_add(monthly_property_tax)
        .and_then(|subtotal| subtotal.checked_add(monthly_insurance))
        .ok_or_else(|| MoneyToolsError::overflow("total monthly payment"))?;

    Ok(MortgageResult {
        principal,
        principal_and_interest,
        monthly_property_tax,
        monthly_insurance,
        total_monthly_payment,
    })
}

// ---------------------------------------------------------------------------
// Student loan
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentLoanInput {
    pub balance: Money,
    pub annual_rate_percent: Percent,
    /// Repayment term after the grace period ends.
    pub term_months: u32,
    /// Months before repayment starts; interest accrues and capitalizes.
    #[serde(default)]
    pub grace_months: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentLoanResult {
    pub balance_at_repayment: Money,
    pub capitalized_interest: Money,
    pub loan: LoanResult,
}

/// The balance compounds monthly through the grace period, then amortizes.
pub fn student_loan(input: &StudentLoanInput) -> MoneyToolsResult<StudentLoanResult> {
    ensure_non_negative("balance", input.balance)?;
    ensure_non_negative("annual_rate_percent", input.annual_rate_percent)?;

    let r = monthly_rate(input.annual_rate_percent);
    let accrual = growth_factor(r, u64::from(input.grace_months), "grace period accrual")?;
    let balance_at_repayment = input
        .balance
        .checked_mul(accrual)
        .ok_or_else(|| MoneyToolsError::overflow("grace period accrual"))?;

    let loan = amortize(&LoanInput {
        principal: balance_at_repayment,
        annual_rate_percent: input.annual_rate_percent,
        term_months: input.term_months,
    })?;

    Ok(StudentLoanResult {
        balance_at_repayment,
        // accrual >= 1, so the balance only grows
        capitalized_interest: balance_at_repayment - input.balance,
        loan,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_auto_loan_financed_amount() {
        let input = AutoLoanInput {
            vehicle_price: dec!(30000),
            trade_in_value: dec!(0),
            down_payment: dec!(3000),
            fees: dec!(500),
            annual_rate_percent: dec!(4.5),
            term_months: 60,
        };
        let result = auto_loan(&input).unwrap();
        assert_eq!(result.amount_financed, dec!(27500));
        // 27.5k at 4.5% over 5 years is roughly $512.68/month
        assert!((result.loan.monthly_payment - dec!(512.68)).abs() < dec!(0.01));
    }

    #[test]
    fn test_auto_loan_clamps_financed_at_zero() {
        let input = AutoLoanInput {
            vehicle_price: dec!(10000),
            trade_in_value: dec!(8000),
            down_payment: dec!(5000),
            fees: dec!(0),
            annual_rate_percent: dec!(6),
            term_months: 36,
        };
        let result = auto_loan(&input).unwrap();
        assert_eq!(result.amount_financed, Decimal::ZERO);
        assert_eq!(result.loan.monthly_payment, Decimal::ZERO);
    }

    #[test]
    fn test_auto_loan_huge_fees_overflow() {
        let input = AutoLoanInput {
            vehicle_price: dec!(70000000000000000000000000000),
            trade_in_value: dec!(0),
            down_payment: dec!(0),
            fees: dec!(70000000000000000000000000000),
            annual_rate_percent: dec!(5),
            term_months: 60,
        };
        assert!(matches!(
            auto_loan(&input),
            Err(MoneyToolsError::Overflow { .. })
        ));
    }

    #[test]
    fn test_mortgage_adds_tax_and_insurance() {
        let input = MortgageInput {
            home_price: dec!(350000),
            down_payment: dec!(70000),
            annual_rate_percent: dec!(4),
            term_months: 360,
            annual_property_tax: dec!(3000),
            annual_insurance: dec!(1200),
        };
        let result = mortgage(&input).unwrap();
        assert_eq!(result.principal, dec!(280000));
        assert_eq!(result.monthly_property_tax, dec!(250));
        assert_eq!(result.monthly_insurance, dec!(100));
        // P&I on 280k at 4% / 30y is about $1,336.76
        let pi = result.principal_and_interest.monthly_payment;
        assert!((pi - dec!(1336.76)).abs() < dec!(0.01), "P&I {pi}");
        assert!((result.total_monthly_payment - pi - dec!(350)).abs() < dec!(0.0000001));
    }

    #[test]
    fn test_student_loan_without_grace_matches_plain_loan() {
        let input = StudentLoanInput {
            balance: dec!(30000),
            annual_rate_percent: dec!(5),
            term_months: 120,
            grace_months: 0,
        };
        let result = student_loan(&input).unwrap();
        let plain = amortize(&LoanInput {
            principal: dec!(30000),
            annual_rate_percent: dec!(5),
            term_months: 120,
        })
        .unwrap();
        assert_eq!(result.capitalized_interest, Decimal::ZERO);
        assert_eq!(result.loan, plain);
    }

    #[test]
    fn test_student_loan_huge_balance_overflows() {
        let input = StudentLoanInput {
            balance: dec!(70000000000000000000000000000),
            annual_rate_percent: dec!(12),
            term_months: 120,
            grace_months: 24,
        };
        assert!(matches!(
            student_loan(&input),
            Err(MoneyToolsError::Overflow { .. })
        ));
    }

    #[test]
    fn test_student_loan_grace_capitalizes_interest() {
        let input = StudentLoanInput {
            balance: dec!(30000),
            annual_rate_percent: dec!(5),
            term_months: 120,
            grace_months: 6,
        };
        let result = student_loan(&input).unwrap();
        // 30000 * (1 + 0.05/12)^6 ~= 30757.86
        assert!((result.balance_at_repayment - dec!(30757.86)).abs() < dec!(0.01));
        assert!(result.capitalized_interest > dec!(750));
    }
}
