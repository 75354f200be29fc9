use serde_json::Value;
use std::io;

use super::{display_field, display_sentinel, display_value};

/// Write output as CSV to stdout.
///
/// The result object becomes `field,value` rows; a result that carries a
/// `series` is written as `month,balance` rows instead.
pub fn print_csv(value: &Value) {
    let stdout = io::stdout();
    let mut wtr = csv::Writer::from_writer(stdout.lock());

    let result = value.as_object().and_then(|m| m.get("result"));
    match result {
        Some(Value::Object(result)) => {
            if let Some(Value::Array(series)) = result.get("series") {
                write_array_csv(&mut wtr, series);
            } else {
                let _ = wtr.write_record(["field", "value"]);
                for (key, val) in result {
                    let _ = wtr.write_record([key.as_str(), &display_field(key, val)]);
                }
            }
        }
        Some(other) => {
            let _ = wtr.write_record(["result"]);
            let _ = wtr.write_record([&display_sentinel(other)]);
        }
        None => {
            let _ = wtr.write_record([&display_value(value)]);
        }
    }

    let _ = wtr.flush();
}

fn write_array_csv(wtr: &mut csv::Writer<io::StdoutLock<'_>>, arr: &[Value]) {
    let Some(Value::Object(first)) = arr.first() else {
        return;
    };

    let headers: Vec<&str> = first.keys().map(|k| k.as_str()).collect();
    let _ = wtr.write_record(&headers);

    for item in arr {
        if let Value::Object(map) = item {
            let row: Vec<String> = headers
                .iter()
                .map(|h| map.get(*h).map(|v| display_field(h, v)).unwrap_or_default())
                .collect();
            let _ = wtr.write_record(&row);
        }
    }
}
