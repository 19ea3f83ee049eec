//! Shared shape of the meta and taxonomy filters.
//!
//! Payloads are either a bare sequence of conditions or a mapping of the form
//! `{ "relation": "OR", "queries": [...] }`. The generated filter puts the
//! relation first, followed by one entry per surviving condition keyed by
//! its position.

use crate::params::ParamMap;
use serde_json::Value;
use tracing::warn;

/// Relation and raw condition entries of a filter payload.
pub(crate) fn split_payload(payload: &Value) -> (Option<&str>, Vec<&Value>) {
    match payload {
        Value::Array(entries) => (None, entries.iter().collect()),
        Value::Object(map) if map.contains_key("queries") => {
            let relation = map.get("relation").and_then(Value::as_str);
            let entries = match map.get("queries") {
                Some(Value::Array(entries)) => entries.iter().collect(),
                // Sparse sequences arrive as index-keyed mappings.
                Some(Value::Object(entries)) => entries.values().collect(),
                Some(Value::Null) | None => Vec::new(),
                Some(other) => {
                    warn!(queries = %other, "Filter queries is not a sequence; ignoring");
                    Vec::new()
                }
            };
            (relation, entries)
        }
        Value::Object(_) => (None, vec![payload]),
        other => {
            warn!(payload = %other, "Filter payload is neither a sequence nor a mapping");
            (None, Vec::new())
        }
    }
}

/// Condition entries that are mappings; anything else is dropped.
pub(crate) fn condition_maps<'a>(rule: &str, entries: Vec<&'a Value>) -> Vec<&'a ParamMap> {
    entries
        .into_iter()
        .filter_map(|entry| {
            let map = entry.as_object();
            if map.is_none() {
                warn!(rule, entry = %entry, "Skipping filter condition that is not a mapping");
            }
            map
        })
        .collect()
}

/// Assemble the filter structure, or `None` when no condition survived.
pub(crate) fn build_filter(relation: Option<&str>, clauses: Vec<ParamMap>) -> Option<Value> {
    if clauses.is_empty() {
        return None;
    }

    let mut filter = ParamMap::new();
    if clauses.len() > 1 {
        filter.insert(
            "relation".to_string(),
            Value::from(normalize_relation(relation)),
        );
    }
    for (index, clause) in clauses.into_iter().enumerate() {
        filter.insert(index.to_string(), Value::Object(clause));
    }
    Some(Value::Object(filter))
}

fn normalize_relation(relation: Option<&str>) -> &'static str {
    match relation.map(|r| r.trim().to_ascii_uppercase()).as_deref() {
        Some("OR") => "OR",
        None | Some("") | Some("AND") => "AND",
        Some(other) => {
            warn!(relation = other, "Unknown filter relation; using AND");
            "AND"
        }
    }
}

const NUMERIC_META_TYPES: &[&str] = &["NUMERIC", "DECIMAL", "SIGNED", "UNSIGNED"];

/// Numeric strings become numbers when the comparison type is numeric and
/// the number prints back to the same text; everything else is kept as is.
pub(crate) fn typed_meta_value(value: &Value, meta_type: Option<&str>) -> Value {
    let numeric_type = meta_type
        .map(|t| t.trim().to_ascii_uppercase())
        .map(|t| NUMERIC_META_TYPES.iter().any(|n| t.starts_with(n)))
        .unwrap_or(false);
    let Some(s) = value.as_str().filter(|_| numeric_type) else {
        return value.clone();
    };

    let parsed = match s.parse::<i64>() {
        Ok(int) => Value::from(int),
        Err(_) => match s.parse::<f64>() {
            Ok(float) if float.is_finite() => Value::from(float),
            _ => return value.clone(),
        },
    };
    if parsed.to_string() == s {
        parsed
    } else {
        value.clone()
    }
}
