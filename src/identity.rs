//! Item reference resolution
//!
//! Some fields hold either a content item identifier or a template reference
//! such as `theme-slug//template-slug` (saved while editing a template).
//! Template references are resolved against the item being rendered.

use crate::context::RenderContext;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

static TEMPLATE_REFERENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[a-z\-]+//[a-z\-]+").expect("template pattern is valid"));

/// Whether `value` is a template reference string.
pub fn is_template_reference(value: &Value) -> bool {
    value
        .as_str()
        .map(|s| TEMPLATE_REFERENCE.is_match(s))
        .unwrap_or(false)
}

/// Whether `value` should be treated as a content item identifier.
///
/// Integers always are. Any string that does not look like a template
/// reference is accepted too, numeric or not, and so is every other value.
pub fn is_content_identifier(value: &Value) -> bool {
    value.is_i64() || value.is_u64() || !is_template_reference(value)
}

/// Resolve a configured item reference to the identifier to query with.
///
/// `true` and template references mean "the item being rendered" and yield
/// `None` when the context has no current item. Digit-only strings become
/// integers; other identifiers are passed through as given.
pub fn resolve_item_reference(value: &Value, context: &dyn RenderContext) -> Option<Value> {
    if value == &Value::Bool(true) || !is_content_identifier(value) {
        return context.current_item_id().map(Value::from);
    }
    Some(normalize_identifier(value))
}

/// Digit-only strings and integral floats become integers.
pub(crate) fn normalize_identifier(value: &Value) -> Value {
    match value {
        Value::String(raw) => {
            let s = raw.trim();
            if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) {
                s.parse::<u64>()
                    .map(Value::from)
                    .unwrap_or_else(|_| value.clone())
            } else {
                value.clone()
            }
        }
        Value::Number(n) if !n.is_i64() && !n.is_u64() => match n.as_f64() {
            Some(f) if f.fract() == 0.0 && f >= 0.0 && f <= u64::MAX as f64 => {
                Value::from(f as u64)
            }
            _ => value.clone(),
        },
        _ => value.clone(),
    }
}

/// Item identifier usable in an id list, if `value` normalises to one.
pub(crate) fn as_item_id(value: &Value) -> Option<u64> {
    normalize_identifier(value).as_u64()
}
