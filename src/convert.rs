use serde_json::{Map, Value};

use crate::error::ClientError;

pub type Row = Vec<Value>;
pub type Table = Vec<Row>;
pub type Record = Map<String, Value>;

/// Convert a header-first table into records keyed by the header row.
///
/// Row 0 supplies the field names; every following row is zipped against it
/// positionally. Missing trailing cells and empty strings come back as null.
pub fn table_to_records(table: &[Row]) -> Result<Vec<Record>, ClientError> {
    let (header, rows) = table.split_first().ok_or(ClientError::InvalidData)?;
    let keys: Vec<String> = header.iter().map(key_of).collect();
    Ok(rows
        .iter()
        .map(|row| {
            keys.iter()
                .enumerate()
                .map(|(i, key)| (key.clone(), normalize(row.get(i))))
                .collect()
        })
        .collect())
}

/// Convert records into a table of rows, optionally prefixed with a header
/// row derived from the key order of the first record.
///
/// Records are flattened in their own key order and are not re-aligned
/// against the first record; callers are responsible for handing in records
/// that share a single key order.
pub fn records_to_table(records: &[Record], include_header: bool) -> Result<Table, ClientError> {
    let first = records.first().ok_or(ClientError::InvalidData)?;
    let mut table = Table::with_capacity(records.len() + usize::from(include_header));
    if include_header {
        table.push(first.keys().map(|key| Value::String(key.clone())).collect());
    }
    for record in records {
        table.push(record.values().cloned().collect());
    }
    Ok(table)
}

fn key_of(cell: &Value) -> String {
    match cell {
        Value::String(name) => name.clone(),
        other => other.to_string(),
    }
}

fn normalize(cell: Option<&Value>) -> Value {
    match cell {
        None | Some(Value::Null) => Value::Null,
        Some(Value::String(text)) if text.is_empty() => Value::Null,
        Some(value) => value.clone(),
    }
}
