use napi::Result as NapiResult;
use napi_derive::napi;

use money_tools_core::budget::planner::BudgetInput;
use money_tools_core::debt::payoff::PayoffInput;
use money_tools_core::fx::ConversionInput;
use money_tools_core::growth::compound::{CompoundInterestInput, InflationInput};
use money_tools_core::growth::investment::InvestmentInput;
use money_tools_core::growth::savings::SavingsInput;
use money_tools_core::loans::amortization::LoanInput;
use money_tools_core::loans::variants::{AutoLoanInput, MortgageInput, StudentLoanInput};
use money_tools_core::ratios::break_even::BreakEvenInput;
use money_tools_core::ratios::returns::{DtiInput, RoiInput};
use money_tools_core::tax::SalaryTaxInput;
use money_tools_core::{CalculatorRequest, FinanceFormulaLibrary};

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

/// Library from an optional tables document; `None` uses the built-in tables.
fn library_from(tables_json: Option<String>) -> NapiResult<FinanceFormulaLibrary> {
    match tables_json {
        Some(json) => serde_json::from_str(&json).map_err(to_napi_error),
        None => Ok(FinanceFormulaLibrary::default()),
    }
}

fn run(library: &FinanceFormulaLibrary, request: CalculatorRequest) -> NapiResult<String> {
    let output = library.evaluate(&request).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

fn parse<T: serde::de::DeserializeOwned>(input_json: &str) -> NapiResult<T> {
    serde_json::from_str(input_json).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Generic dispatch
// ---------------------------------------------------------------------------

/// Evaluate a tagged request (`{"calculator": "loan", ...}`).
#[napi]
pub fn evaluate(request_json: String, tables_json: Option<String>) -> NapiResult<String> {
    let library = library_from(tables_json)?;
    let request: CalculatorRequest = parse(&request_json)?;
    run(&library, request)
}

// ---------------------------------------------------------------------------
// Loans
// ---------------------------------------------------------------------------

#[napi]
pub fn calculate_loan(input_json: String) -> NapiResult<String> {
    let input: LoanInput = parse(&input_json)?;
    run(&FinanceFormulaLibrary::default(), CalculatorRequest::Loan(input))
}

#[napi]
pub fn calculate_auto_loan(input_json: String) -> NapiResult<String> {
    let input: AutoLoanInput = parse(&input_json)?;
    run(&FinanceFormulaLibrary::default(), CalculatorRequest::AutoLoan(input))
}

#[napi]
pub fn calculate_mortgage(input_json: String) -> NapiResult<String> {
    let input: MortgageInput = parse(&input_json)?;
    run(&FinanceFormulaLibrary::default(), CalculatorRequest::Mortgage(input))
}

#[napi]
pub fn calculate_student_loan(input_json: String) -> NapiResult<String> {
    let input: StudentLoanInput = parse(&input_json)?;
    run(&FinanceFormulaLibrary::default(), CalculatorRequest::StudentLoan(input))
}

// ---------------------------------------------------------------------------
// Growth
// ---------------------------------------------------------------------------

#[napi]
pub fn savings_goal(input_json: String) -> NapiResult<String> {
    let input: SavingsInput = parse(&input_json)?;
    run(&FinanceFormulaLibrary::default(), CalculatorRequest::Savings(input))
}

#[napi]
pub fn project_investment(input_json: String) -> NapiResult<String> {
    let input: InvestmentInput = parse(&input_json)?;
    run(&FinanceFormulaLibrary::default(), CalculatorRequest::Investment(input))
}

#[napi]
pub fn compound_interest(input_json: String) -> NapiResult<String> {
    let input: CompoundInterestInput = parse(&input_json)?;
    run(&FinanceFormulaLibrary::default(), CalculatorRequest::CompoundInterest(input))
}

#[napi]
pub fn inflation_impact(input_json: String) -> NapiResult<String> {
    let input: InflationInput = parse(&input_json)?;
    run(&FinanceFormulaLibrary::default(), CalculatorRequest::Inflation(input))
}

// ---------------------------------------------------------------------------
// Debt and ratios
// ---------------------------------------------------------------------------

#[napi]
pub fn payoff_horizon(input_json: String) -> NapiResult<String> {
    let input: PayoffInput = parse(&input_json)?;
    run(&FinanceFormulaLibrary::default(), CalculatorRequest::Payoff(input))
}

#[napi]
pub fn return_on_investment(input_json: String) -> NapiResult<String> {
    let input: RoiInput = parse(&input_json)?;
    run(&FinanceFormulaLibrary::default(), CalculatorRequest::Roi(input))
}

#[napi]
pub fn debt_to_income(input_json: String) -> NapiResult<String> {
    let input: DtiInput = parse(&input_json)?;
    run(&FinanceFormulaLibrary::default(), CalculatorRequest::Dti(input))
}

#[napi]
pub fn break_even(input_json: String) -> NapiResult<String> {
    let input: BreakEvenInput = parse(&input_json)?;
    run(&FinanceFormulaLibrary::default(), CalculatorRequest::BreakEven(input))
}

#[napi]
pub fn summarize_budget(input_json: String) -> NapiResult<String> {
    let input: BudgetInput = parse(&input_json)?;
    run(&FinanceFormulaLibrary::default(), CalculatorRequest::Budget(input))
}

// ---------------------------------------------------------------------------
// Table-driven calculators
// ---------------------------------------------------------------------------

#[napi]
pub fn estimate_salary_tax(input_json: String, tables_json: Option<String>) -> NapiResult<String> {
    let library = library_from(tables_json)?;
    let input: SalaryTaxInput = parse(&input_json)?;
    run(&library, CalculatorRequest::SalaryTax(input))
}

#[napi]
pub fn convert_currency(input_json: String, tables_json: Option<String>) -> NapiResult<String> {
    let library = library_from(tables_json)?;
    let input: ConversionInput = parse(&input_json)?;
    run(&library, CalculatorRequest::Currency(input))
}
