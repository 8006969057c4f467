use serde_json::{Map, Value};
use tabled::{builder::Builder, Table};

use super::{cell, row_headers, split_rows};

/// Format a result envelope as tables: scalar fields, then the schedule.
pub fn print_table(value: &Value) {
    let Some(envelope) = value.as_object() else {
        println!("{}", value);
        return;
    };

    match envelope.get("result") {
        Some(Value::Object(result)) => print_result(result),
        Some(other) => println!("{}", cell(other)),
        None => print_fields(envelope.iter().collect()),
    }

    if let Some(Value::Array(warnings)) = envelope.get("warnings") {
        if !warnings.is_empty() {
            println!("\nWarnings:");
            for w in warnings.iter().filter_map(Value::as_str) {
                println!("  - {}", w);
            }
        }
    }

    if let Some(Value::String(meth)) = envelope.get("methodology") {
        println!("\nMethodology: {}", meth);
    }
}

fn print_result(result: &Map<String, Value>) {
    let (scalars, rows) = split_rows(result);
    if !scalars.is_empty() {
        print_fields(scalars);
    }
    if let Some(rows) = rows {
        println!();
        print_rows(rows);
    }
}

fn print_fields(fields: Vec<(&String, &Value)>) {
    let mut builder = Builder::default();
    builder.push_record(["Field", "Value"]);
    for (key, val) in fields {
        builder.push_record([key.clone(), cell(val)]);
    }
    println!("{}", Table::from(builder));
}

fn print_rows(rows: &[Value]) {
    if rows.is_empty() {
        println!("(empty)");
        return;
    }

    let headers = row_headers(rows);
    let mut builder = Builder::default();
    builder.push_record(headers.clone());
    for row in rows.iter().filter_map(Value::as_object) {
        builder.push_record(
            headers
                .iter()
                .map(|h| row.get(h).map(cell).unwrap_or_default()),
        );
    }
    println!("{}", Table::from(builder));
}
