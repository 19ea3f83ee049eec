//! `include_posts`: pin the listing to hand-picked items.

use super::{ParamRule, RuleInput};
use crate::identity::as_item_id;
use crate::params::{is_empty_value, ParamMap};
use serde_json::Value;
use tracing::warn;

pub struct IncludePosts;

impl ParamRule for IncludePosts {
    fn key(&self) -> &'static str {
        "include_posts"
    }

    fn apply(&self, input: &RuleInput<'_>) -> ParamMap {
        let entries: Vec<&Value> = match input.payload(self.key()) {
            Value::Array(entries) => entries.iter().collect(),
            single => vec![single],
        };

        let mut ids: Vec<Value> = Vec::new();
        for entry in entries {
            match extract_id(entry) {
                Some(id) if !ids.contains(&id) => ids.push(id),
                Some(_) => {}
                None => warn!(entry = %entry, "Skipping include entry without an identifier"),
            }
        }

        let mut args = ParamMap::new();
        if !ids.is_empty() {
            args.insert("post__in".to_string(), Value::Array(ids));
        }
        args
    }
}

/// Entries are bare identifiers or picker objects carrying an `id`.
fn extract_id(entry: &Value) -> Option<Value> {
    let candidate = match entry {
        Value::Object(map) => map.get("id")?,
        other => other,
    };
    if is_empty_value(candidate) {
        return None;
    }
    as_item_id(candidate).map(Value::from)
}
