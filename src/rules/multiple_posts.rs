//! `multiple_posts`: query several content types at once.

use super::{ParamRule, RuleInput};
use crate::params::{is_empty_value, ParamMap};
use serde_json::Value;

pub struct MultiplePosts;

impl ParamRule for MultiplePosts {
    fn key(&self) -> &'static str {
        "multiple_posts"
    }

    /// The default block's content type comes first, then the extra ones.
    fn apply(&self, input: &RuleInput<'_>) -> ParamMap {
        let mut post_types: Vec<Value> = Vec::new();
        let mut push = |value: &Value| {
            if !is_empty_value(value) && !post_types.contains(value) {
                post_types.push(value.clone());
            }
        };

        for source in [input.defaults.get("post_type"), Some(input.payload(self.key()))]
            .into_iter()
            .flatten()
        {
            match source {
                Value::Array(items) => items.iter().for_each(&mut push),
                other => push(other),
            }
        }

        let mut args = ParamMap::new();
        if !post_types.is_empty() {
            args.insert("post_type".to_string(), Value::Array(post_types));
        }
        args
    }
}
