use clap::Args;
use rust_decimal::Decimal;

use money_tools_core::tax::SalaryTaxInput;
use money_tools_core::{CalculatorRequest, FinanceFormulaLibrary};

use super::{evaluate, read_structured, CommandResult};

/// Arguments for the salary tax estimate
#[derive(Args)]
pub struct TaxArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Annual gross salary
    #[arg(long)]
    pub gross: Option<Decimal>,
}

pub fn run_tax(args: TaxArgs, library: &FinanceFormulaLibrary) -> CommandResult {
    let tax_input: SalaryTaxInput = match read_structured(args.input.as_deref())? {
        Some(input) => input,
        None => SalaryTaxInput {
            annual_gross: args.gross.ok_or("--gross is required (or provide --input)")?,
        },
    };
    evaluate(library, CalculatorRequest::SalaryTax(tax_input))
}
