use serde_json::Value;

/// Print just the key answer value from the output.
///
/// For a computation envelope that is the monthly installment; for the
/// breakdown series, one `label: value` line per bar.
pub fn print_minimal(value: &Value) {
    if let Value::Array(arr) = value {
        for bar in arr {
            let label = bar.get("label").and_then(Value::as_str).unwrap_or("?");
            let val = bar.get("value").map(format_minimal).unwrap_or_default();
            println!("{}: {}", label, val);
        }
        return;
    }

    let result_obj = value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value);

    let priority_keys = ["monthly_installment", "total_payment", "total_interest"];

    if let Value::Object(map) = result_obj {
        for key in &priority_keys {
            if let Some(val) = map.get(*key) {
                if !val.is_null() {
                    println!("{}", format_minimal(val));
                    return;
                }
            }
        }

        if let Some((key, val)) = map.iter().next() {
            println!("{}: {}", key, format_minimal(val));
            return;
        }
    }

    println!("{}", format_minimal(result_obj));
}

fn format_minimal(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}
