use serde_json::Value;
use std::io;

use super::{cell, row_headers, split_rows};

/// Write output as CSV to stdout. A schedule becomes one record per month;
/// anything else becomes field,value pairs.
pub fn print_csv(value: &Value) {
    let mut wtr = csv::Writer::from_writer(io::stdout().lock());

    let result = value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value);

    let written = match result {
        Value::Object(map) => match split_rows(map) {
            (_, Some(rows)) => write_rows(&mut wtr, rows),
            (scalars, None) => write_fields(&mut wtr, scalars),
        },
        Value::Array(rows) => write_rows(&mut wtr, rows),
        other => wtr.write_record([cell(other)]),
    };

    if let Err(e) = written.and_then(|_| wtr.flush().map_err(csv::Error::from)) {
        eprintln!("CSV output error: {}", e);
    }
}

fn write_fields<W: io::Write>(wtr: &mut csv::Writer<W>, fields: Vec<(&String, &Value)>) -> csv::Result<()> {
    wtr.write_record(["field", "value"])?;
    for (key, val) in fields {
        wtr.write_record([key.clone(), cell(val)])?;
    }
    Ok(())
}

fn write_rows<W: io::Write>(wtr: &mut csv::Writer<W>, rows: &[Value]) -> csv::Result<()> {
    let headers = row_headers(rows);
    if headers.is_empty() {
        return Ok(());
    }
    wtr.write_record(&headers)?;
    for row in rows.iter().filter_map(Value::as_object) {
        wtr.write_record(headers.iter().map(|h| row.get(h).map(cell).unwrap_or_default()))?;
    }
    Ok(())
}
