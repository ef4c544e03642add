//! JSON loading helpers for manifests and descriptors.

use std::path::Path;

use serde_json::Value;

use crate::errors::Result;

/// Read and parse the JSON file at `path`.
pub fn read_json(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Read and parse the JSON file at `path`, or `None` on any read or parse error.
///
/// Callers check existence first, so `None` after a successful existence
/// check means "present but invalid".
#[must_use]
pub fn load_json(path: &Path) -> Option<Value> {
    match read_json(path) {
        Ok(v) => Some(v),
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "cannot load JSON");
            None
        }
    }
}

/// Returns `true` if a JSON field counts as present.
///
/// `null`, `false`, `0`, and `""` are absent; objects and arrays (even empty)
/// are present.
#[must_use]
pub fn is_present(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_) | Value::Object(_)) => true,
    }
}

/// Render a JSON value for a report line: strings bare, everything else as JSON.
#[must_use]
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
