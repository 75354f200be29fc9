use clap::Args;
use rust_decimal::Decimal;

use money_tools_core::budget::planner::{BudgetCategory, BudgetInput};
use money_tools_core::{CalculatorRequest, FinanceFormulaLibrary};

use super::{evaluate, read_structured, CommandResult};

/// Arguments for the budget planner
#[derive(Args)]
pub struct BudgetArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Monthly category as NAME=AMOUNT (repeatable, e.g. --category Rent=1200)
    #[arg(long = "category", value_parser = parse_category)]
    pub categories: Vec<BudgetCategory>,
}

pub fn run_budget(args: BudgetArgs, library: &FinanceFormulaLibrary) -> CommandResult {
    let budget_input: BudgetInput = match read_structured(args.input.as_deref())? {
        Some(input) => input,
        None => {
            if args.categories.is_empty() {
                return Err("at least one --category is required (or provide --input)".into());
            }
            BudgetInput {
                categories: args.categories,
            }
        }
    };
    evaluate(library, CalculatorRequest::Budget(budget_input))
}

fn parse_category(raw: &str) -> Result<BudgetCategory, String> {
    let (name, amount) = raw
        .rsplit_once('=')
        .ok_or_else(|| format!("expected NAME=AMOUNT, got '{raw}'"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("category name missing in '{raw}'"));
    }
    let monthly_amount: Decimal = amount
        .trim()
        .parse()
        .map_err(|e| format!("invalid amount in '{raw}': {e}"))?;
    Ok(BudgetCategory {
        name: name.to_string(),
        monthly_amount,
    })
}
