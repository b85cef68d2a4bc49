//! Deep dot-path access into JSON values
//!
//! Supports:
//! - `a.b.c` (object field access, own keys only)
//! - `items.0.name` (numeric segment as array index)
//!
//! Does NOT support:
//! - Bracket syntax, filters, wildcards, slices
//! - Keys that themselves contain a literal `.`
//!
//! Absence is a value, never an error: any missing segment or
//! non-traversable intermediate resolves to the sentinel.

use serde_json::Value;

/// Resolve a dot-delimited path, borrowing from the root.
///
/// `None` when any segment is missing or an intermediate value is not an
/// object or array.
pub fn deep_get<'a>(root: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = root;

    for segment in path.split('.') {
        current = match current {
            Value::Object(map) => map.get(segment)?,
            Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }

    Some(current)
}

/// Owned convenience form: `Value::Null` is the absent sentinel.
pub fn deep_get_or_null(root: &Value, path: &str) -> Value {
    deep_get(root, path).cloned().unwrap_or(Value::Null)
}
