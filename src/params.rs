//! Parameter mappings
//!
//! Defaults, custom params and generated query args all share one JSON-like
//! representation: a string-keyed map of `serde_json::Value`.

use serde_json::{Map, Value};

/// String-keyed parameter mapping.
pub type ParamMap = Map<String, Value>;

/// Whether a value counts as "not provided".
///
/// `null`, `false`, numeric zero, `""`, `"0"`, empty sequences and empty
/// mappings are all empty.
pub fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64().map(|f| f == 0.0).unwrap_or(false),
        Value::String(s) => s.is_empty() || s == "0",
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}

/// Coerce an arbitrary value into a mapping; anything else becomes empty.
pub fn into_param_map(value: Value) -> ParamMap {
    match value {
        Value::Object(map) => map,
        _ => ParamMap::new(),
    }
}

/// Non-empty string field of a mapping.
pub(crate) fn str_field<'a>(map: &'a ParamMap, key: &str) -> Option<&'a str> {
    map.get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

/// First non-empty value among several alias keys.
pub(crate) fn first_present<'a>(map: &'a ParamMap, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .filter_map(|key| map.get(*key))
        .find(|value| !is_empty_value(value))
}
