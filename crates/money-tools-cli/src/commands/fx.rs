use clap::Args;
use rust_decimal::Decimal;

use money_tools_core::fx::ConversionInput;
use money_tools_core::{CalculatorRequest, FinanceFormulaLibrary};

use super::{evaluate, read_structured, CommandResult};

/// Arguments for currency conversion
#[derive(Args)]
pub struct ConvertArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Amount to convert
    #[arg(long)]
    pub amount: Option<Decimal>,

    /// Source currency code
    #[arg(long, default_value = "USD")]
    pub from: String,

    /// Target currency code
    #[arg(long)]
    pub to: Option<String>,
}

pub fn run_convert(args: ConvertArgs, library: &FinanceFormulaLibrary) -> CommandResult {
    let conversion_input: ConversionInput = match read_structured(args.input.as_deref())? {
        Some(input) => input,
        None => ConversionInput {
            amount: args.amount.ok_or("--amount is required (or provide --input)")?,
            from: args.from,
            to: args.to.ok_or("--to is required (or provide --input)")?,
        },
    };
    evaluate(library, CalculatorRequest::Currency(conversion_input))
}
