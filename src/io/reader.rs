use std::collections::HashSet;
use std::io::{BufRead, BufReader, Read};

use serde_json::{Map, Value};

use crate::io::{Format, IoError};

/// Reads input as a list of values. A top-level JSON or YAML array is
/// flattened; any other single document becomes a one-element list.
pub fn read_values<R: Read>(reader: R, format: Format) -> Result<Vec<Value>, IoError> {
    match format {
        Format::Json => Ok(flatten(serde_json::from_reader(reader)?)),
        Format::Yaml => {
            let yaml_value: serde_yaml::Value = serde_yaml::from_reader(reader)?;
            Ok(flatten(serde_json::to_value(yaml_value)?))
        }
        Format::Csv => read_csv_rows(reader),
        Format::Jsonl => read_json_lines(reader),
    }
}

/// Reads input as a record collection ready for the checks.
pub fn read_records<R: Read>(reader: R, format: Format) -> Result<Value, IoError> {
    read_values(reader, format).map(Value::Array)
}

fn flatten(value: Value) -> Vec<Value> {
    match value {
        Value::Array(items) => items,
        single => vec![single],
    }
}

/// Each row becomes a record keyed by header; cells stay strings.
fn read_csv_rows<R: Read>(reader: R) -> Result<Vec<Value>, IoError> {
    let mut csv_reader = csv::ReaderBuilder::new().from_reader(reader);
    let headers = csv_reader.headers()?.clone();
    let mut seen = HashSet::with_capacity(headers.len());
    if let Some(repeated) = headers.iter().find(|header| !seen.insert(*header)) {
        return Err(IoError::DuplicateHeader {
            header: repeated.to_string(),
        });
    }

    let mut rows = Vec::new();
    for row in csv_reader.records() {
        let row = row?;
        let record: Map<String, Value> = headers
            .iter()
            .zip(row.iter())
            .map(|(key, cell)| (key.to_string(), Value::String(cell.to_string())))
            .collect();
        rows.push(Value::Object(record));
    }
    Ok(rows)
}

fn read_json_lines<R: Read>(reader: R) -> Result<Vec<Value>, IoError> {
    let mut values = Vec::new();
    for line in BufReader::new(reader).lines() {
        let line = line?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            values.push(serde_json::from_str(trimmed)?);
        }
    }
    Ok(values)
}
