//! Extraction of the text to analyze from a request body.
//!
//! Request bodies are loosely typed: the body may be any JSON value and its
//! `text` field may hold anything. Falsy values (`null`, `false`, `0`, `""`)
//! and a missing field all mean "no text". Every other value is stringified
//! the way a dynamically typed caller would see it, so `["hey!"]` reads as
//! `hey!` and an object reads as `[object Object]`.

use std::borrow::Cow;

use serde_json::Value;

/// Placeholder string for object values.
const OBJECT_STRING: &str = "[object Object]";

/// Returns the text carried by `body["text"]`, or `""` if the body is not an
/// object or has no usable `text`.
pub fn text_field(body: &Value) -> Cow<'_, str> {
    coerce_text(body.get("text"))
}

/// Coerces an optional JSON value into the string to analyze.
pub fn coerce_text(value: Option<&Value>) -> Cow<'_, str> {
    match value {
        None | Some(Value::Null) | Some(Value::Bool(false)) => Cow::Borrowed(""),
        Some(Value::Number(n)) if n.as_f64() == Some(0.0) => Cow::Borrowed(""),
        Some(Value::String(s)) => Cow::Borrowed(s.as_str()),
        Some(other) => Cow::Owned(stringify(other)),
    }
}

fn stringify(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Array(items) => items.iter().map(stringify).collect::<Vec<_>>().join(","),
        Value::Object(_) => OBJECT_STRING.to_string(),
    }
}
