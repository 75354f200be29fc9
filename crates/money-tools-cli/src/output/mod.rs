pub mod csv_out;
pub mod json;
pub mod minimal;
pub mod table;

use crate::OutputFormat;
use serde_json::Value;

/// Dispatch output to the appropriate formatter.
pub fn format_output(format: &OutputFormat, value: &Value) {
    match format {
        OutputFormat::Json => json::print_json(value),
        OutputFormat::Table => table::print_table(value),
        OutputFormat::Csv => csv_out::print_csv(value),
        OutputFormat::Minimal => minimal::print_minimal(value),
    }
}

/// Result fields that may carry a sentinel string instead of a number.
const SENTINEL_FIELDS: [&str; 6] = [
    "months_required",
    "months_to_payoff",
    "roi",
    "dti",
    "share",
    "effective_rate",
];

/// Human rendering of a single JSON value shared by the text formatters.
///
/// The one-field wrappers `{"months": n}` and `{"percent": x}` collapse to
/// their number. Strings are printed as they are.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        Value::Array(arr) => {
            let items: Vec<String> = arr.iter().map(display_value).collect();
            items.join(", ")
        }
        Value::Object(map) => {
            if map.len() == 1 {
                if let Some(months) = map.get("months") {
                    return display_value(months);
                }
                if let Some(percent) = map.get("percent") {
                    return format!("{}%", display_value(percent));
                }
            }
            serde_json::to_string(value).unwrap_or_default()
        }
    }
}

/// Like [`display_value`], but shows sentinels as `∞` (unreachable, never)
/// or `—` (undefined). Only for values known to be sentinel-bearing: a
/// top-level result or one of [`SENTINEL_FIELDS`].
pub fn display_sentinel(value: &Value) -> String {
    match value.as_str() {
        Some("unreachable") | Some("never") => "∞".to_string(),
        Some("undefined") => "—".to_string(),
        _ => display_value(value),
    }
}

/// Render the value of the result field `key`.
pub fn display_field(key: &str, value: &Value) -> String {
    if SENTINEL_FIELDS.contains(&key) {
        display_sentinel(value)
    } else {
        display_value(value)
    }
}
