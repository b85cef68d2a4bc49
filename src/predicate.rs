//! Value predicates and the no-op placeholder
//!
//! Total, never-panicking checks over `serde_json::Value`. Callers treat
//! absence as a normal case, so these return plain booleans and never
//! error.

use serde_json::Value;

/// Plain structured value: an object, not an array, not null.
pub fn is_plain_object(value: &Value) -> bool {
    value.is_object()
}

/// The absent-value sentinel (`Value::Null`).
pub fn is_absent(value: &Value) -> bool {
    value.is_null()
}

/// Placeholder for optional callback slots. Does nothing.
pub fn noop() {}
