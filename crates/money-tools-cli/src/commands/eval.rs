use clap::Args;

use money_tools_core::{CalculatorRequest, FinanceFormulaLibrary};

use super::{evaluate, read_structured, CommandResult};

/// Arguments for evaluating a tagged request
#[derive(Args)]
pub struct EvalArgs {
    /// Path to JSON request file ({"calculator": "...", ...})
    #[arg(long)]
    pub input: Option<String>,
}

pub fn run_eval(args: EvalArgs, library: &FinanceFormulaLibrary) -> CommandResult {
    let request: CalculatorRequest = read_structured(args.input.as_deref())?
        .ok_or("--input <file.json> or stdin required for eval")?;
    tracing::debug!(calculator = request.name(), "evaluating tagged request");
    evaluate(library, request)
}
