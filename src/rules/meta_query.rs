//! `meta_query`: custom field conditions.

use super::filter::{build_filter, condition_maps, split_payload, typed_meta_value};
use super::{ParamRule, RuleInput};
use crate::params::{first_present, ParamMap};
use serde_json::Value;
use tracing::warn;

pub struct MetaQuery;

impl ParamRule for MetaQuery {
    fn key(&self) -> &'static str {
        "meta_query"
    }

    fn apply(&self, input: &RuleInput<'_>) -> ParamMap {
        let (relation, entries) = split_payload(input.payload(self.key()));
        let clauses: Vec<ParamMap> = condition_maps(self.key(), entries)
            .into_iter()
            .filter_map(meta_clause)
            .collect();

        let mut args = ParamMap::new();
        if let Some(filter) = build_filter(relation, clauses) {
            args.insert("meta_query".to_string(), filter);
        }
        args
    }
}

fn meta_clause(entry: &ParamMap) -> Option<ParamMap> {
    let mut clause = ParamMap::new();

    if let Some(key) = first_present(entry, &["key", "meta_key"]) {
        clause.insert("key".to_string(), key.clone());
    }

    let compare = first_present(entry, &["compare", "meta_compare"])
        .and_then(Value::as_str)
        .map(|c| c.trim().to_ascii_uppercase());
    let compares_existence = matches!(compare.as_deref(), Some("EXISTS") | Some("NOT EXISTS"));

    let meta_type = first_present(entry, &["type", "meta_type"]);

    // Zero is a legitimate meta value, so only null and "" count as missing.
    let value = ["value", "meta_value"]
        .iter()
        .filter_map(|k| entry.get(*k))
        .find(|v| !v.is_null() && v.as_str() != Some(""));
    if let (Some(value), false) = (value, compares_existence) {
        clause.insert(
            "value".to_string(),
            typed_meta_value(value, meta_type.and_then(Value::as_str)),
        );
    }

    if let Some(compare) = compare {
        clause.insert("compare".to_string(), Value::from(compare));
    }
    if let Some(meta_type) = meta_type {
        clause.insert("type".to_string(), meta_type.clone());
    }

    if clause.is_empty() {
        warn!(entry = ?entry, "Skipping meta condition with no usable fields");
        return None;
    }
    Some(clause)
}
