//! Conversion of loosely typed JSON into tables

use super::{Cell, Table, TableError};
use serde_json::{Map, Value};

pub(super) fn table_from_json(value: &Value) -> Result<Table, TableError> {
    match value {
        Value::Object(columns) => from_column_map(columns),
        Value::Array(records) => from_records(records),
        other => Err(TableError::NotATable(describe(other).to_string())),
    }
}

/// `{"A": [1, 2], "B": [3, 4]}`
fn from_column_map(columns: &Map<String, Value>) -> Result<Table, TableError> {
    let mut table = Table::new();
    for (name, values) in columns {
        let values = values.as_array().ok_or_else(|| {
            TableError::NotATable(format!("column '{}' holding {}", name, describe(values)))
        })?;
        table.push_column(name.as_str(), values.iter().map(cell_from_json))?;
    }
    Ok(table)
}

/// `[{"A": 1, "B": 3}, {"A": 2, "B": 4}]`; a key missing from a record is null.
fn from_records(records: &[Value]) -> Result<Table, TableError> {
    let mut names: Vec<&str> = Vec::new();
    let mut objects = Vec::with_capacity(records.len());

    for record in records {
        let object = record.as_object().ok_or_else(|| {
            TableError::NotATable(format!("an array containing {}", describe(record)))
        })?;
        for key in object.keys() {
            if !names.contains(&key.as_str()) {
                names.push(key);
            }
        }
        objects.push(object);
    }

    let mut table = Table::new();
    for name in names {
        let values = objects
            .iter()
            .map(|object| object.get(name).map_or(Cell::Null, cell_from_json));
        table.push_column(name, values)?;
    }
    Ok(table)
}

fn cell_from_json(value: &Value) -> Cell {
    match value {
        Value::Null => Cell::Null,
        Value::Bool(b) => Cell::Bool(*b),
        Value::Number(n) => match n.as_i64() {
            Some(i) => Cell::Int(i),
            None => n.as_f64().map_or(Cell::Null, Cell::Float),
        },
        Value::String(s) => Cell::Str(s.clone()),
        nested => Cell::Str(nested.to_string()),
    }
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
