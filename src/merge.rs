//! Recursive JSON merge
//!
//! Merges own keys of `source` into `target`. Where both sides hold an
//! object at the same key the merge recurses; anything else means the
//! source value overwrites wholesale. Arrays are opaque scalars here:
//! replaced, never concatenated or merged element-wise.

use serde_json::Value;

/// Merge `source` into `target`, consuming both and returning the result.
///
/// If either top-level input is not an object, `target` is returned
/// unchanged.
pub fn deep_merge(target: Value, source: Value) -> Value {
    match (target, source) {
        (Value::Object(mut target_map), Value::Object(source_map)) => {
            for (key, source_value) in source_map {
                match target_map.get_mut(&key) {
                    Some(existing) if existing.is_object() && source_value.is_object() => {
                        let previous = existing.take();
                        *existing = deep_merge(previous, source_value);
                    }
                    _ => {
                        target_map.insert(key, source_value);
                    }
                }
            }
            Value::Object(target_map)
        }
        (target, _) => target,
    }
}
