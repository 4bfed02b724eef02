use serde_json::Value;
use tabled::{builder::Builder, Table};

use super::{CURRENCY_SYMBOL, MONEY_FIELDS};

/// Format output as a table using the tabled crate.
///
/// Two shapes arrive here: the computation envelope (`result` object plus
/// warnings and methodology) and the breakdown series (array of bars).
pub fn print_table(value: &Value) {
    match value {
        Value::Object(map) => {
            if let Some(Value::Object(result)) = map.get("result") {
                print_result_table(result, map);
            } else {
                print_record_table(map);
            }
        }
        Value::Array(arr) => print_series_table(arr),
        _ => println!("{}", value),
    }
}

fn print_result_table(result: &serde_json::Map<String, Value>, envelope: &serde_json::Map<String, Value>) {
    let mut builder = Builder::default();
    builder.push_record(["Field", "Value"]);
    for (key, val) in result {
        builder.push_record([key.as_str(), &display_value(key, val)]);
    }
    println!("{}", Table::from(builder));

    if let Some(Value::Array(warnings)) = envelope.get("warnings") {
        if !warnings.is_empty() {
            println!("\nWarnings:");
            for w in warnings {
                if let Value::String(s) = w {
                    println!("  - {}", s);
                }
            }
        }
    }

    if let Some(Value::String(meth)) = envelope.get("methodology") {
        println!("\nMethodology: {}", meth);
    }
}

fn print_record_table(map: &serde_json::Map<String, Value>) {
    let mut builder = Builder::default();
    builder.push_record(["Field", "Value"]);
    for (key, val) in map {
        builder.push_record([key.as_str(), &display_value(key, val)]);
    }
    println!("{}", Table::from(builder));
}

/// Breakdown bars: one row per bar, in series order.
fn print_series_table(arr: &[Value]) {
    if arr.is_empty() {
        println!("(empty)");
        return;
    }

    let mut builder = Builder::default();
    builder.push_record(["Label", "Value", "Color"]);
    for bar in arr {
        let label = bar.get("label").and_then(Value::as_str).unwrap_or("");
        let value = bar
            .get("value")
            .map(|v| display_value("value", v))
            .unwrap_or_default();
        let color = bar.get("color").and_then(Value::as_str).unwrap_or("");
        builder.push_record([label, &value, color]);
    }
    println!("{}", Table::from(builder));
}

fn display_value(key: &str, value: &Value) -> String {
    let raw = match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        other => serde_json::to_string(other).unwrap_or_default(),
    };

    if MONEY_FIELDS.contains(&key) {
        format!("{} {}", CURRENCY_SYMBOL, raw)
    } else {
        raw
    }
}
