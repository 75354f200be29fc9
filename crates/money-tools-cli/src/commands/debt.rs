use clap::Args;
use rust_decimal::Decimal;

use money_tools_core::debt::payoff::PayoffInput;
use money_tools_core::{CalculatorRequest, FinanceFormulaLibrary};

use super::{evaluate, read_structured, CommandResult};

/// Arguments for credit card payoff
#[derive(Args)]
pub struct PayoffArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Current balance
    #[arg(long)]
    pub balance: Option<Decimal>,

    /// Annual percentage rate
    #[arg(long)]
    pub apr: Option<Decimal>,

    /// Fixed monthly payment
    #[arg(long)]
    pub payment: Option<Decimal>,
}

pub fn run_payoff(args: PayoffArgs, library: &FinanceFormulaLibrary) -> CommandResult {
    let payoff_input: PayoffInput = match read_structured(args.input.as_deref())? {
        Some(input) => input,
        None => PayoffInput {
            balance: args.balance.ok_or("--balance is required (or provide --input)")?,
            annual_rate_percent: args.apr.ok_or("--apr is required (or provide --input)")?,
            monthly_payment: args.payment.ok_or("--payment is required (or provide --input)")?,
        },
    };
    evaluate(library, CalculatorRequest::Payoff(payoff_input))
}
