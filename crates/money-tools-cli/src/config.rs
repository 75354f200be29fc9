use std::error::Error;

use money_tools_core::FinanceFormulaLibrary;

use crate::input;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TablesFormat {
    Json,
    Yaml,
}

/// Build the formula library, reading tables from `path` when given.
///
/// The file holds optional `tax_brackets` and `currency_rates` sections;
/// a missing section keeps the built-in table.
pub fn load_library(path: Option<&str>) -> Result<FinanceFormulaLibrary, Box<dyn Error>> {
    let Some(path) = path else {
        return Ok(FinanceFormulaLibrary::default());
    };

    let (resolved, contents) = input::file::read_text(path)?;
    let format = match resolved.extension().and_then(|e| e.to_str()) {
        Some("yaml") | Some("yml") => TablesFormat::Yaml,
        _ => TablesFormat::Json,
    };
    let library = parse_tables(&contents, format)
        .map_err(|e| format!("Invalid tables file '{}': {}", resolved.display(), e))?;

    tracing::debug!(
        path = %resolved.display(),
        tax_brackets = library.tax_brackets().brackets().len(),
        currencies = library.currency_rates().codes().count(),
        "loaded configuration tables"
    );
    Ok(library)
}

fn parse_tables(contents: &str, format: TablesFormat) -> Result<FinanceFormulaLibrary, Box<dyn Error>> {
    let library: FinanceFormulaLibrary = match format {
        TablesFormat::Json => serde_json::from_str(contents)?,
        TablesFormat::Yaml => serde_yaml::from_str(contents)?,
    };
    Ok(library)
}
