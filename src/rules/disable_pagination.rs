//! `disable_pagination`: fetch every match in one page.

use super::{ParamRule, RuleInput};
use crate::params::ParamMap;
use serde_json::Value;

pub struct DisablePagination;

impl ParamRule for DisablePagination {
    fn key(&self) -> &'static str {
        "disable_pagination"
    }

    fn apply(&self, _input: &RuleInput<'_>) -> ParamMap {
        let mut args = ParamMap::new();
        args.insert("nopaging".to_string(), Value::Bool(true));
        args.insert("posts_per_page".to_string(), Value::from(-1));
        // Skips counting total rows, so no pagination links are generated.
        args.insert("no_found_rows".to_string(), Value::Bool(true));
        args
    }
}
