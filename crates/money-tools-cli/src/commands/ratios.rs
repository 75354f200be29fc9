use clap::Args;
use rust_decimal::Decimal;

use money_tools_core::ratios::break_even::BreakEvenInput;
use money_tools_core::ratios::returns::{DtiInput, RoiInput};
use money_tools_core::{CalculatorRequest, FinanceFormulaLibrary};

use super::{evaluate, read_structured, CommandResult};

/// Arguments for return on investment
#[derive(Args)]
pub struct RoiArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Final value received
    #[arg(long, allow_hyphen_values = true)]
    pub gain: Option<Decimal>,

    /// Amount invested
    #[arg(long, allow_hyphen_values = true)]
    pub cost: Option<Decimal>,
}

pub fn run_roi(args: RoiArgs, library: &FinanceFormulaLibrary) -> CommandResult {
    let roi_input: RoiInput = match read_structured(args.input.as_deref())? {
        Some(input) => input,
        None => RoiInput {
            gain: args.gain.ok_or("--gain is required (or provide --input)")?,
            cost: args.cost.ok_or("--cost is required (or provide --input)")?,
        },
    };
    evaluate(library, CalculatorRequest::Roi(roi_input))
}

/// Arguments for debt-to-income
#[derive(Args)]
pub struct DtiArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Total monthly debt payments
    #[arg(long)]
    pub monthly_debt: Option<Decimal>,

    /// Gross monthly income
    #[arg(long)]
    pub monthly_income: Option<Decimal>,
}

pub fn run_dti(args: DtiArgs, library: &FinanceFormulaLibrary) -> CommandResult {
    let dti_input: DtiInput = match read_structured(args.input.as_deref())? {
        Some(input) => input,
        None => DtiInput {
            monthly_debt_payments: args
                .monthly_debt
                .ok_or("--monthly-debt is required (or provide --input)")?,
            monthly_income: args
                .monthly_income
                .ok_or("--monthly-income is required (or provide --input)")?,
        },
    };
    evaluate(library, CalculatorRequest::Dti(dti_input))
}

/// Arguments for break-even analysis
#[derive(Args)]
pub struct BreakEvenArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Fixed costs to recover
    #[arg(long)]
    pub fixed_costs: Option<Decimal>,

    /// Selling price per unit
    #[arg(long)]
    pub price: Option<Decimal>,

    /// Variable cost per unit
    #[arg(long)]
    pub variable_cost: Option<Decimal>,
}

pub fn run_break_even(args: BreakEvenArgs, library: &FinanceFormulaLibrary) -> CommandResult {
    let break_even_input: BreakEvenInput = match read_structured(args.input.as_deref())? {
        Some(input) => input,
        None => BreakEvenInput {
            fixed_costs: args
                .fixed_costs
                .ok_or("--fixed-costs is required (or provide --input)")?,
            price_per_unit: args.price.ok_or("--price is required (or provide --input)")?,
            variable_cost_per_unit: args
                .variable_cost
                .ok_or("--variable-cost is required (or provide --input)")?,
        },
    };
    evaluate(library, CalculatorRequest::BreakEven(break_even_input))
}
