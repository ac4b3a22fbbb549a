//! JSON corpus loading for the CLI.
//!
//! Two input shapes are accepted: a plain JSON array of strings (one document
//! per element), or a JSON array of records whose named string fields are fed
//! through the incremental mutator. Errors are descriptive strings for the
//! CLI to print; the library core never does I/O.

use serde_json::Value;
use std::fs;

/// Load a document list: a JSON array of strings.
pub fn load_documents(path: &str) -> Result<Vec<String>, String> {
    let raw = fs::read_to_string(path).map_err(|e| format!("Failed to read {}: {}", path, e))?;
    let documents: Vec<String> =
        serde_json::from_str(&raw).map_err(|e| format!("Invalid document list JSON: {}", e))?;
    Ok(documents)
}

/// Load a record list: a JSON array of objects (e.g. the movies.json shape,
/// `[{ "id": 1, "title": ..., "overview": ... }, ...]`).
pub fn load_records(path: &str) -> Result<Vec<Value>, String> {
    let raw = fs::read_to_string(path).map_err(|e| format!("Failed to read {}: {}", path, e))?;
    let value: Value =
        serde_json::from_str(&raw).map_err(|e| format!("Invalid record list JSON: {}", e))?;

    match value {
        Value::Array(records) => {
            if let Some(bad) = records.iter().find(|r| !r.is_object()) {
                return Err(format!("Expected an array of objects, found: {}", bad));
            }
            Ok(records)
        }
        other => Err(format!(
            "Expected a JSON array of records, found {}",
            json_kind(&other)
        )),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
