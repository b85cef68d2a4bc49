//! Non-throwing JSON wrappers
//!
//! Absence and failure are values here: parse failure hands the original
//! text back unchanged, stringify failure is `None`. Neither function can
//! error.

use serde::Serialize;
use serde_json::Value;

/// Parse `text` as JSON, or return it unchanged as a string value.
pub fn try_parse(text: &str) -> Value {
    serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string()))
}

/// Serialize to a JSON string, or `None` if serialization fails.
pub fn try_stringify<T: Serialize>(value: &T) -> Option<String> {
    serde_json::to_string(value).ok()
}
