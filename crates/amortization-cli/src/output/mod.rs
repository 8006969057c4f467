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

/// Splits a result object into its scalar fields and its first array of
/// row objects (the schedule, when there is one).
pub(crate) fn split_rows(
    result: &serde_json::Map<String, Value>,
) -> (Vec<(&String, &Value)>, Option<&[Value]>) {
    let mut scalars = Vec::new();
    let mut rows = None;
    for (key, val) in result {
        match val {
            Value::Array(items) if rows.is_none() && items.iter().all(Value::is_object) => {
                rows = Some(items.as_slice());
            }
            _ => scalars.push((key, val)),
        }
    }
    (scalars, rows)
}

/// Column names of a row table, taken from the first row, "month" first.
pub(crate) fn row_headers(rows: &[Value]) -> Vec<String> {
    let mut headers: Vec<String> = rows
        .first()
        .and_then(Value::as_object)
        .map(|first| first.keys().cloned().collect())
        .unwrap_or_default();
    headers.sort_by_key(|h| h != "month");
    headers
}

pub(crate) fn cell(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        Value::Array(items) => items.iter().map(cell).collect::<Vec<_>>().join(", "),
        other => other.to_string(),
    }
}
