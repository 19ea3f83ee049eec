//! `post_parent`: restrict the listing to children of one item.

use super::{ParamRule, RuleInput};
use crate::identity::{as_item_id, resolve_item_reference};
use crate::params::ParamMap;
use serde_json::Value;
use tracing::{debug, warn};

pub struct PostParent;

impl ParamRule for PostParent {
    fn key(&self) -> &'static str {
        "post_parent"
    }

    /// A template reference means "children of whatever the template is
    /// rendering", so it resolves to the current item.
    fn apply(&self, input: &RuleInput<'_>) -> ParamMap {
        let mut args = ParamMap::new();
        match resolve_item_reference(input.payload(self.key()), input.context) {
            Some(reference) => match as_item_id(&reference) {
                Some(parent_id) => {
                    args.insert("post_parent".to_string(), Value::from(parent_id));
                }
                None => warn!(reference = %reference, "Parent is not an integer id; ignoring"),
            },
            None => debug!("Template parent reference with no current item"),
        }
        args
    }
}
