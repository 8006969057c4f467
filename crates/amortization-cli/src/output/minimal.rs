use serde_json::Value;

/// Fields that best answer each command, in priority order.
const HEADLINE_KEYS: [&str; 4] = [
    "rounded_payment",
    "remaining_balance",
    "final_payment",
    "monthly_payment",
];

/// Print just the headline number of a result envelope.
pub fn print_minimal(value: &Value) {
    let result = value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value);

    if let Value::Object(map) = result {
        let headline = HEADLINE_KEYS
            .iter()
            .find_map(|key| map.get(*key).filter(|v| !v.is_null()));
        if let Some(val) = headline {
            println!("{}", scalar(val));
            return;
        }
        if let Some((key, val)) = map.iter().find(|(_, v)| !v.is_array()) {
            println!("{}: {}", key, scalar(val));
            return;
        }
    }

    println!("{}", scalar(result));
}

fn scalar(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "null".to_string(),
        other => other.to_string(),
    }
}
