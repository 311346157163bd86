//! Query-string serialization for operation parameters.
//!
//! # Design
//! Parameters are flat: with `serialize`, structured values (keyboards,
//! entity lists) travel as compact JSON text inside a single parameter, which
//! is what the platform expects. Strings are inserted as-is rather than JSON-quoted.
//!
//! `serialize` percent-encodes keys and values and drops `null` entries.
//! `serialize_raw` reproduces the older wire behavior: no encoding, no
//! omission, and plain string coercion of every value. A `null` entry is
//! written as `key=null`, a list as its comma-joined elements and an object
//! as `[object Object]`.

use serde_json::{Map, Value};

/// Serialize `params` as `k1=v1&k2=v2`, percent-encoded, skipping nulls.
pub fn serialize(params: &Map<String, Value>) -> String {
    params
        .iter()
        .filter(|(_, value)| !value.is_null())
        .map(|(key, value)| {
            format!(
                "{}={}",
                urlencoding::encode(key),
                urlencoding::encode(&scalar_text(value))
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}

/// Serialize `params` as `k1=v1&k2=v2` with no encoding and no omission.
pub fn serialize_raw(params: &Map<String, Value>) -> String {
    params
        .iter()
        .map(|(key, value)| format!("{key}={}", coerced_text(value)))
        .collect::<Vec<_>>()
        .join("&")
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn coerced_text(value: &Value) -> String {
    match value {
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                // Joined list elements render null as empty.
                Value::Null => String::new(),
                other => coerced_text(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
        other => scalar_text(other),
    }
}
