pub mod budget;
pub mod debt;
pub mod eval;
pub mod fx;
pub mod growth;
pub mod loans;
pub mod ratios;
pub mod tax;

use std::error::Error;

use money_tools_core::{CalculatorRequest, FinanceFormulaLibrary};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::input;

pub type CommandResult = Result<Value, Box<dyn Error>>;

/// Structured input from `--input <file.json>` or piped stdin. `None` means
/// the command should build its input from flags.
pub fn read_structured<T: DeserializeOwned>(path: Option<&str>) -> Result<Option<T>, Box<dyn Error>> {
    if let Some(path) = path {
        return Ok(Some(input::file::read_json(path)?));
    }
    match input::stdin::read_stdin()? {
        Some(data) => Ok(Some(serde_json::from_value(data)?)),
        None => Ok(None),
    }
}

/// Run `request` through the library and render the envelope as JSON.
pub fn evaluate(library: &FinanceFormulaLibrary, request: CalculatorRequest) -> CommandResult {
    let output = library.evaluate(&request)?;
    Ok(serde_json::to_value(output)?)
}
