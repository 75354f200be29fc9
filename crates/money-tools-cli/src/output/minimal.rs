use serde_json::{Map, Value};

use super::{display_field, display_sentinel};

// Headline fields, most specific first.
const PRIORITY_KEYS: [&str; 14] = [
    "total_monthly_payment",
    "monthly_payment",
    "months_required",
    "months_to_payoff",
    "final_balance",
    "future_value",
    "purchasing_power",
    "roi",
    "dti",
    "annual_tax",
    "converted",
    "total_monthly",
    "units",
    "net_return",
];

/// Print just the key answer value from the output.
pub fn print_minimal(value: &Value) {
    println!("{}", minimal_answer(value));
}

fn minimal_answer(value: &Value) -> String {
    let result = value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value);

    match result {
        Value::Object(map) => {
            if let Some((key, found)) = find_priority(map) {
                return display_field(key, found);
            }
            match map.iter().next() {
                Some((key, val)) => format!("{}: {}", key, display_field(key, val)),
                None => String::new(),
            }
        }
        other => display_sentinel(other),
    }
}

/// Look for a priority key in `map`, then one level down in nested objects
/// (auto loans nest the payment under `loan`, break-even under `reached`).
fn find_priority(map: &Map<String, Value>) -> Option<(&'static str, &Value)> {
    for key in PRIORITY_KEYS {
        if let Some(val) = map.get(key).filter(|v| !v.is_null()) {
            return Some((key, val));
        }
    }
    for key in PRIORITY_KEYS {
        for nested in map.values().filter_map(Value::as_object) {
            if let Some(val) = nested.get(key).filter(|v| !v.is_null()) {
                return Some((key, val));
            }
        }
    }
    None
}
