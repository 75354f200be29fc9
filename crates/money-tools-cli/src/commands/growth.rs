use clap::Args;
use rust_decimal::Decimal;

use money_tools_core::growth::compound::{CompoundInterestInput, InflationInput};
use money_tools_core::growth::investment::InvestmentInput;
use money_tools_core::growth::savings::SavingsInput;
use money_tools_core::{CalculatorRequest, FinanceFormulaLibrary};

use super::{evaluate, read_structured, CommandResult};

/// Arguments for the savings goal calculator
#[derive(Args)]
pub struct SavingsArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Savings target
    #[arg(long)]
    pub goal: Option<Decimal>,

    /// Deposit made at the end of each month
    #[arg(long, allow_hyphen_values = true)]
    pub monthly_deposit: Option<Decimal>,

    /// Annual interest rate in percent
    #[arg(long, default_value = "0")]
    pub rate: Decimal,
}

pub fn run_savings(args: SavingsArgs, library: &FinanceFormulaLibrary) -> CommandResult {
    let savings_input: SavingsInput = match read_structured(args.input.as_deref())? {
        Some(input) => input,
        None => SavingsInput {
            goal: args.goal.ok_or("--goal is required (or provide --input)")?,
            monthly_deposit: args
                .monthly_deposit
                .ok_or("--monthly-deposit is required (or provide --input)")?,
            annual_rate_percent: args.rate,
        },
    };
    evaluate(library, CalculatorRequest::Savings(savings_input))
}

/// Arguments for an investment projection
#[derive(Args)]
pub struct InvestmentArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Starting balance
    #[arg(long, default_value = "0")]
    pub initial: Decimal,

    /// Contribution added at the end of each month
    #[arg(long, default_value = "0")]
    pub monthly_contribution: Decimal,

    /// Expected annual return in percent
    #[arg(long)]
    pub rate: Option<Decimal>,

    /// Horizon in months
    #[arg(long)]
    pub term_months: Option<u32>,
}

pub fn run_investment(args: InvestmentArgs, library: &FinanceFormulaLibrary) -> CommandResult {
    let investment_input: InvestmentInput = match read_structured(args.input.as_deref())? {
        Some(input) => input,
        None => InvestmentInput {
            initial: args.initial,
            monthly_contribution: args.monthly_contribution,
            annual_rate_percent: args.rate.ok_or("--rate is required (or provide --input)")?,
            term_months: args
                .term_months
                .ok_or("--term-months is required (or provide --input)")?,
        },
    };
    evaluate(library, CalculatorRequest::Investment(investment_input))
}

/// Arguments for periodic compound interest
#[derive(Args)]
pub struct CompoundArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Starting amount
    #[arg(long)]
    pub principal: Option<Decimal>,

    /// Annual interest rate in percent
    #[arg(long)]
    pub rate: Option<Decimal>,

    /// Compounding periods per year
    #[arg(long, default_value = "12")]
    pub compounds_per_year: u32,

    /// Number of years
    #[arg(long)]
    pub years: Option<u32>,
}

pub fn run_compound(args: CompoundArgs, library: &FinanceFormulaLibrary) -> CommandResult {
    let compound_input: CompoundInterestInput = match read_structured(args.input.as_deref())? {
        Some(input) => input,
        None => CompoundInterestInput {
            principal: args
                .principal
                .ok_or("--principal is required (or provide --input)")?,
            annual_rate_percent: args.rate.ok_or("--rate is required (or provide --input)")?,
            compounds_per_year: args.compounds_per_year,
            years: args.years.ok_or("--years is required (or provide --input)")?,
        },
    };
    evaluate(library, CalculatorRequest::CompoundInterest(compound_input))
}

/// Arguments for the inflation calculator
#[derive(Args)]
pub struct InflationArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Amount in today's money
    #[arg(long)]
    pub amount: Option<Decimal>,

    /// Annual inflation in percent (negative for deflation)
    #[arg(long, allow_hyphen_values = true)]
    pub inflation: Option<Decimal>,

    /// Number of years
    #[arg(long)]
    pub years: Option<u32>,
}

pub fn run_inflation(args: InflationArgs, library: &FinanceFormulaLibrary) -> CommandResult {
    let inflation_input: InflationInput = match read_structured(args.input.as_deref())? {
        Some(input) => input,
        None => InflationInput {
            amount: args.amount.ok_or("--amount is required (or provide --input)")?,
            annual_inflation_percent: args
                .inflation
                .ok_or("--inflation is required (or provide --input)")?,
            years: args.years.ok_or("--years is required (or provide --input)")?,
        },
    };
    evaluate(library, CalculatorRequest::Inflation(inflation_input))
}
