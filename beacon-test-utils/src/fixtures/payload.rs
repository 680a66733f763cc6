//! JSON field report submissions for tests.
//!
//! Payloads are built as raw JSON so tests exercise the same decode step as HTTP requests.

use serde_json::{json, Value};

/// Smallest submission that passes validation and relation resolution.
pub fn minimal(user_id: i32, dtype_id: i32) -> Value {
    json!({
        "summary": "Flood X",
        "user": user_id,
        "dtype": dtype_id,
        "start_date": "2020-05-01",
    })
}

/// Merge `extra` keys into `base`, overwriting existing keys.
pub fn with(mut base: Value, extra: Value) -> Value {
    if let (Some(base), Value::Object(extra)) = (base.as_object_mut(), extra) {
        for (key, value) in extra {
            base.insert(key, value);
        }
    }

    base
}

/// Remove `key` from `base`.
pub fn without(mut base: Value, key: &str) -> Value {
    if let Some(base) = base.as_object_mut() {
        base.remove(key);
    }

    base
}
