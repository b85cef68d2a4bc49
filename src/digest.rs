//! Content digests over canonical JSON
//!
//! Serializes a value to a canonical text form (JSON with sorted object
//! keys), then hashes the bytes with BLAKE3. Structurally equal inputs
//! produce identical digests regardless of map insertion order.
//!
//! Deliberately no guarding against non-serializable input: the underlying
//! serialization fault propagates as [`SundryError::Serialization`].

use serde::Serialize;

use crate::error::SundryError;

/// Compute a 64-char lowercase hex digest of any serializable value.
///
/// Canonicalizes through `serde_json::Value` first: its object maps are
/// key-ordered, so `HashMap` iteration order in the input cannot leak into
/// the digest.
pub fn content_digest<T: Serialize>(value: &T) -> Result<String, SundryError> {
    let canonical = serde_json::to_value(value)?;
    let text = serde_json::to_string(&canonical)?;
    Ok(blake3::hash(text.as_bytes()).to_hex().to_string())
}
