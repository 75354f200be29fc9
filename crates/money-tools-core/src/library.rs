use std::time::Instant;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::budget::planner::{summarize_budget, BudgetInput, BudgetSummary};
use crate::debt::payoff::{payoff_horizon, PayoffInput, PayoffResult};
use crate::fx::{convert_currency, Conversion, ConversionInput, CurrencyRateTable};
use crate::growth::compound::{
    compound_interest, inflation_impact, CompoundInterestInput, CompoundInterestResult,
    InflationInput, InflationResult,
};
use crate::growth::investment::{project_investment, InvestmentInput, InvestmentResult};
use crate::growth::savings::{savings_goal, SavingsInput, SavingsResult, MAX_SAVINGS_SERIES_MONTHS};
use crate::loans::amortization::{amortize, LoanInput, LoanResult};
use crate::loans::variants::{
    auto_loan, mortgage, student_loan, AutoLoanInput, AutoLoanResult, MortgageInput,
    MortgageResult, StudentLoanInput, StudentLoanResult,
};
use crate::ratios::break_even::{break_even, BreakEvenInput, BreakEvenResult};
use crate::ratios::returns::{
    debt_to_income, return_on_investment, DtiInput, DtiResult, RoiInput, RoiResult,
};
use crate::tax::{estimate_salary_tax, SalaryTaxInput, SalaryTaxResult, TaxBracketTable};
use crate::types::{with_metadata, ComputationOutput, Horizon, PayoffHorizon, Ratio};
use crate::MoneyToolsResult;

// ---------------------------------------------------------------------------
// Requests and results
// ---------------------------------------------------------------------------

/// One calculator invocation, tagged by `"calculator"` in JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "calculator", rename_all = "snake_case")]
pub enum CalculatorRequest {
    Loan(LoanInput),
    AutoLoan(AutoLoanInput),
    Mortgage(MortgageInput),
    StudentLoan(StudentLoanInput),
    Savings(SavingsInput),
    Investment(InvestmentInput),
    CompoundInterest(CompoundInterestInput),
    Inflation(InflationInput),
    Roi(RoiInput),
    Dti(DtiInput),
    Payoff(PayoffInput),
    SalaryTax(SalaryTaxInput),
    Currency(ConversionInput),
    Budget(BudgetInput),
    BreakEven(BreakEvenInput),
}

impl CalculatorRequest {
    pub fn name(&self) -> &'static str {
        match self {
            CalculatorRequest::Loan(_) => "loan",
            CalculatorRequest::AutoLoan(_) => "auto_loan",
            CalculatorRequest::Mortgage(_) => "mortgage",
            CalculatorRequest::StudentLoan(_) => "student_loan",
            CalculatorRequest::Savings(_) => "savings",
            CalculatorRequest::Investment(_) => "investment",
            CalculatorRequest::CompoundInterest(_) => "compound_interest",
            CalculatorRequest::Inflation(_) => "inflation",
            CalculatorRequest::Roi(_) => "roi",
            CalculatorRequest::Dti(_) => "dti",
            CalculatorRequest::Payoff(_) => "payoff",
            CalculatorRequest::SalaryTax(_) => "salary_tax",
            CalculatorRequest::Currency(_) => "currency",
            CalculatorRequest::Budget(_) => "budget",
            CalculatorRequest::BreakEven(_) => "break_even",
        }
    }

    fn methodology(&self) -> &'static str {
        match self {
            CalculatorRequest::Loan(_) => "Level-payment amortization",
            CalculatorRequest::AutoLoan(_) => {
                "Level-payment amortization of price less trade-in and down payment plus fees"
            }
            CalculatorRequest::Mortgage(_) => {
                "Level-payment amortization plus monthly property tax and insurance"
            }
            CalculatorRequest::StudentLoan(_) => {
                "Grace-period interest capitalization followed by level-payment amortization"
            }
            CalculatorRequest::Savings(_) => "Goal-seek on the future value of an ordinary annuity",
            CalculatorRequest::Investment(_) => {
                "Monthly compounding with end-of-month contributions"
            }
            CalculatorRequest::CompoundInterest(_) => "Periodic compound interest A = P(1 + r/n)^(nt)",
            CalculatorRequest::Inflation(_) => "Annual compounding of inflation",
            CalculatorRequest::Roi(_) => "Return on investment (gain - cost) / cost",
            CalculatorRequest::Dti(_) => "Debt-to-income ratio",
            CalculatorRequest::Payoff(_) => "Payoff horizon of a level payment against monthly interest",
            CalculatorRequest::SalaryTax(_) => "Progressive bracket tax",
            CalculatorRequest::Currency(_) => "Cross rate through the base currency",
            CalculatorRequest::Budget(_) => "Category totals and shares",
            CalculatorRequest::BreakEven(_) => "Fixed costs over per-unit contribution margin",
        }
    }
}

/// Result of a dispatched calculator; serializes as the inner result.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum CalculatorResult {
    Loan(LoanResult),
    AutoLoan(AutoLoanResult),
    Mortgage(MortgageResult),
    StudentLoan(StudentLoanResult),
    Savings(SavingsResult),
    Investment(InvestmentResult),
    CompoundInterest(CompoundInterestResult),
    Inflation(InflationResult),
    Roi(RoiResult),
    Dti(DtiResult),
    Payoff(PayoffResult),
    SalaryTax(SalaryTaxResult),
    Currency(Conversion),
    Budget(BudgetSummary),
    BreakEven(BreakEvenResult),
}

// ---------------------------------------------------------------------------
// Library
// ---------------------------------------------------------------------------

/// The formula layer with its configuration tables.
///
/// Both tables are injected at construction and never mutated, so a library
/// value can be shared freely between callers. Deserializes from a tables
/// document (`{"tax_brackets": [...], "currency_rates": {...}}`) in which a
/// missing section falls back to the built-in table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FinanceFormulaLibrary {
    tax_brackets: TaxBracketTable,
    currency_rates: CurrencyRateTable,
}

impl FinanceFormulaLibrary {
    pub fn new(tax_brackets: TaxBracketTable, currency_rates: CurrencyRateTable) -> Self {
        Self {
            tax_brackets,
            currency_rates,
        }
    }

    pub fn tax_brackets(&self) -> &TaxBracketTable {
        &self.tax_brackets
    }

    pub fn currency_rates(&self) -> &CurrencyRateTable {
        &self.currency_rates
    }

    pub fn estimate_salary_tax(&self, input: &SalaryTaxInput) -> MoneyToolsResult<SalaryTaxResult> {
        estimate_salary_tax(&self.tax_brackets, input)
    }

    pub fn convert_currency(&self, input: &ConversionInput) -> MoneyToolsResult<Conversion> {
        convert_currency(&self.currency_rates, input)
    }

    /// Run one calculator and wrap its result in the computation envelope.
    pub fn evaluate(
        &self,
        request: &CalculatorRequest,
    ) -> MoneyToolsResult<ComputationOutput<CalculatorResult>> {
        let start = Instant::now();
        let mut warnings: Vec<String> = Vec::new();

        let result = match request {
            CalculatorRequest::Loan(input) => {
                warn_zero_term(input.term_months, &mut warnings);
                CalculatorResult::Loan(amortize(input)?)
            }
            CalculatorRequest::AutoLoan(input) => {
                warn_zero_term(input.term_months, &mut warnings);
                let out = auto_loan(input)?;
                if out.amount_financed.is_zero()
                    && (input.vehicle_price > Decimal::ZERO || input.fees > Decimal::ZERO)
                {
                    warnings.push(
                        "Trade-in and down payment cover the price; amount financed set to 0".into(),
                    );
                }
                CalculatorResult::AutoLoan(out)
            }
            CalculatorRequest::Mortgage(input) => {
                warn_zero_term(input.term_months, &mut warnings);
                if input.down_payment > input.home_price {
                    warnings.push("Down payment exceeds home price; principal set to 0".into());
                }
                CalculatorResult::Mortgage(mortgage(input)?)
            }
            CalculatorRequest::StudentLoan(input) => {
                warn_zero_term(input.term_months, &mut warnings);
                CalculatorResult::StudentLoan(student_loan(input)?)
            }
            CalculatorRequest::Savings(input) => {
                let out = savings_goal(input)?;
                match out.months_required {
                    Horizon::Unreachable => warnings.push(
                        "Monthly deposit must be positive to reach the goal".into(),
                    ),
                    Horizon::Months(m) if m > u64::from(MAX_SAVINGS_SERIES_MONTHS) => {
                        warnings.push(format!(
                            "Series truncated to {MAX_SAVINGS_SERIES_MONTHS} of {m} months"
                        ))
                    }
                    Horizon::Months(_) => {}
                }
                CalculatorResult::Savings(out)
            }
            CalculatorRequest::Investment(input) => {
                CalculatorResult::Investment(project_investment(input)?)
            }
            CalculatorRequest::CompoundInterest(input) => {
                if input.compounds_per_year == 0 {
                    warnings.push("Compounding frequency of 0 treated as annual".into());
                }
                CalculatorResult::CompoundInterest(compound_interest(input)?)
            }
            CalculatorRequest::Inflation(input) => {
                CalculatorResult::Inflation(inflation_impact(input)?)
            }
            CalculatorRequest::Roi(input) => {
                let out = return_on_investment(input)?;
                if out.roi == Ratio::Undefined {
                    warnings.push("Cost is zero; ROI is undefined".into());
                }
                CalculatorResult::Roi(out)
            }
            CalculatorRequest::Dti(input) => {
                let out = debt_to_income(input)?;
                if out.dti == Ratio::Undefined {
                    warnings.push("Income is zero; DTI is undefined".into());
                }
                CalculatorResult::Dti(out)
            }
            CalculatorRequest::Payoff(input) => {
                let out = payoff_horizon(input)?;
                if out.months_to_payoff == PayoffHorizon::Never {
                    warnings.push(format!(
                        "Monthly payment of {} does not exceed the first month's interest of {}",
                        input.monthly_payment,
                        out.first_month_interest.round_dp(2)
                    ));
                }
                CalculatorResult::Payoff(out)
            }
            CalculatorRequest::SalaryTax(input) => {
                CalculatorResult::SalaryTax(self.estimate_salary_tax(input)?)
            }
            CalculatorRequest::Currency(input) => {
                let out = self.convert_currency(input)?;
                if !out.unknown_codes.is_empty() {
                    warnings.push(format!(
                        "Unknown currency code(s) {} priced as the base currency",
                        out.unknown_codes.join(", ")
                    ));
                }
                CalculatorResult::Currency(out)
            }
            CalculatorRequest::Budget(input) => CalculatorResult::Budget(summarize_budget(input)?),
            CalculatorRequest::BreakEven(input) => {
                let out = break_even(input)?;
                if out == BreakEvenResult::Unreachable {
                    warnings.push("Price per unit does not exceed variable cost per unit".into());
                }
                CalculatorResult::BreakEven(out)
            }
        };

        let elapsed = start.elapsed().as_micros() as u64;
        tracing::debug!(
            calculator = request.name(),
            warnings = warnings.len(),
            elapsed_us = elapsed,
            "calculator evaluated"
        );

        Ok(with_metadata(
            request.methodology(),
            request,
            warnings,
            elapsed,
            result,
        ))
    }
}

fn warn_zero_term(term_months: u32, warnings: &mut Vec<String>) {
    if term_months == 0 {
        warnings.push("Term of 0 months treated as 1 month".into());
    }
}
