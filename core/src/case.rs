//! Key-casing transform between the wire convention (`snake_case`) and the
//! host convention (`camelCase`).
//!
//! # Design
//! The string rewrites are character-class substitutions, not word-boundary
//! analysis: `_x` becomes `X` one way and `X` becomes `_x` the other. A run
//! of capitals therefore expands into several underscore pairs.
//!
//! The value transforms walk lists and objects. Object keys are always
//! rewritten; object values are only visited when they are themselves lists
//! or objects, so scalar data (message text, ids) is never touched. A bare
//! string or a string inside a list *is* rewritten, since at that position it
//! cannot be told apart from a field name (`allowed_updates`, for instance).

use serde_json::{Map, Value};

/// Rewrite every `_` followed by a lowercase ASCII letter into that letter
/// uppercased.
pub fn camel_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();
    while let Some(c) = chars.next() {
        match (c, chars.peek()) {
            ('_', Some(next)) if next.is_ascii_lowercase() => {
                out.push(next.to_ascii_uppercase());
                chars.next();
            }
            _ => out.push(c),
        }
    }
    out
}

/// Rewrite every uppercase ASCII letter into `_` followed by its lowercase form.
pub fn snake_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len() + 4);
    for c in input.chars() {
        if c.is_ascii_uppercase() {
            out.push('_');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// Convert a wire value into host casing.
pub fn to_host_case(value: &Value) -> Value {
    transform(value, camel_case)
}

/// Convert a host value into wire casing.
pub fn to_wire_case(value: &Value) -> Value {
    transform(value, snake_case)
}

/// Wire-case the entries of a host object.
pub fn object_to_wire_case(map: &Map<String, Value>) -> Map<String, Value> {
    transform_object(map, snake_case)
}

fn transform(value: &Value, rename: fn(&str) -> String) -> Value {
    match value {
        Value::String(s) => Value::String(rename(s)),
        Value::Array(items) => Value::Array(items.iter().map(|v| transform(v, rename)).collect()),
        Value::Object(map) => Value::Object(transform_object(map, rename)),
        other => other.clone(),
    }
}

fn transform_object(map: &Map<String, Value>, rename: fn(&str) -> String) -> Map<String, Value> {
    map.iter()
        .map(|(key, value)| {
            let value = match value {
                Value::Array(_) | Value::Object(_) => transform(value, rename),
                other => other.clone(),
            };
            (rename(key), value)
        })
        .collect()
}
