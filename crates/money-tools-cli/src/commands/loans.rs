use clap::Args;
use rust_decimal::Decimal;

use money_tools_core::loans::amortization::LoanInput;
use money_tools_core::loans::variants::{AutoLoanInput, MortgageInput, StudentLoanInput};
use money_tools_core::{CalculatorRequest, FinanceFormulaLibrary};

use super::{evaluate, read_structured, CommandResult};

/// Arguments for a generic fixed-rate loan
#[derive(Args)]
pub struct LoanArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Amount borrowed
    #[arg(long)]
    pub principal: Option<Decimal>,

    /// Annual interest rate in percent (5 = 5%)
    #[arg(long)]
    pub rate: Option<Decimal>,

    /// Term in months
    #[arg(long)]
    pub term_months: Option<u32>,
}

pub fn run_loan(args: LoanArgs, library: &FinanceFormulaLibrary) -> CommandResult {
    let loan_input: LoanInput = match read_structured(args.input.as_deref())? {
        Some(input) => input,
        None => LoanInput {
            principal: args
                .principal
                .ok_or("--principal is required (or provide --input)")?,
            annual_rate_percent: args.rate.ok_or("--rate is required (or provide --input)")?,
            term_months: args
                .term_months
                .ok_or("--term-months is required (or provide --input)")?,
        },
    };
    evaluate(library, CalculatorRequest::Loan(loan_input))
}

/// Arguments for an auto loan
#[derive(Args)]
pub struct AutoLoanArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Vehicle price
    #[arg(long)]
    pub price: Option<Decimal>,

    /// Trade-in value of the current vehicle
    #[arg(long, default_value = "0")]
    pub trade_in: Decimal,

    /// Cash down payment
    #[arg(long, default_value = "0")]
    pub down_payment: Decimal,

    /// Taxes and fees rolled into the loan
    #[arg(long, default_value = "0")]
    pub fees: Decimal,

    /// Annual interest rate in percent
    #[arg(long)]
    pub rate: Option<Decimal>,

    /// Term in months
    #[arg(long, default_value = "60")]
    pub term_months: u32,
}

pub fn run_auto_loan(args: AutoLoanArgs, library: &FinanceFormulaLibrary) -> CommandResult {
    let auto_input: AutoLoanInput = match read_structured(args.input.as_deref())? {
        Some(input) => input,
        None => AutoLoanInput {
            vehicle_price: args.price.ok_or("--price is required (or provide --input)")?,
            trade_in_value: args.trade_in,
            down_payment: args.down_payment,
            fees: args.fees,
            annual_rate_percent: args.rate.ok_or("--rate is required (or provide --input)")?,
            term_months: args.term_months,
        },
    };
    evaluate(library, CalculatorRequest::AutoLoan(auto_input))
}

/// Arguments for a mortgage
#[derive(Args)]
pub struct MortgageArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Purchase price of the home
    #[arg(long)]
    pub price: Option<Decimal>,

    /// Down payment
    #[arg(long, default_value = "0")]
    pub down_payment: Decimal,

    /// Annual interest rate in percent
    #[arg(long)]
    pub rate: Option<Decimal>,

    /// Term in months
    #[arg(long, default_value = "360")]
    pub term_months: u32,

    /// Annual property tax
    #[arg(long, default_value = "0")]
    pub property_tax: Decimal,

    /// Annual homeowner's insurance
    #[arg(long, default_value = "0")]
    pub insurance: Decimal,
}

pub fn run_mortgage(args: MortgageArgs, library: &FinanceFormulaLibrary) -> CommandResult {
    let mortgage_input: MortgageInput = match read_structured(args.input.as_deref())? {
        Some(input) => input,
        None => MortgageInput {
            home_price: args.price.ok_or("--price is required (or provide --input)")?,
            down_payment: args.down_payment,
            annual_rate_percent: args.rate.ok_or("--rate is required (or provide --input)")?,
            term_months: args.term_months,
            annual_property_tax: args.property_tax,
            annual_insurance: args.insurance,
        },
    };
    evaluate(library, CalculatorRequest::Mortgage(mortgage_input))
}

/// Arguments for a student loan
#[derive(Args)]
pub struct StudentLoanArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Balance when the grace period starts
    #[arg(long)]
    pub balance: Option<Decimal>,

    /// Annual interest rate in percent
    #[arg(long)]
    pub rate: Option<Decimal>,

    /// Repayment term in months
    #[arg(long, default_value = "120")]
    pub term_months: u32,

    /// Months of grace before repayment starts
    #[arg(long, default_value = "0")]
    pub grace_months: u32,
}

pub fn run_student_loan(args: StudentLoanArgs, library: &FinanceFormulaLibrary) -> CommandResult {
    let student_input: StudentLoanInput = match read_structured(args.input.as_deref())? {
        Some(input) => input,
        None => StudentLoanInput {
            balance: args.balance.ok_or("--balance is required (or provide --input)")?,
            annual_rate_percent: args.rate.ok_or("--rate is required (or provide --input)")?,
            term_months: args.term_months,
            grace_months: args.grace_months,
        },
    };
    evaluate(library, CalculatorRequest::StudentLoan(student_input))
}
