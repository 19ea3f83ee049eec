//! `exclude_current`: keep the item being rendered out of its own listing.

use super::{ParamRule, RuleInput};
use crate::identity::{as_item_id, resolve_item_reference};
use crate::params::ParamMap;
use serde_json::Value;
use tracing::{debug, warn};

pub struct ExcludeCurrent;

impl ParamRule for ExcludeCurrent {
    fn key(&self) -> &'static str {
        "exclude_current"
    }

    fn apply(&self, input: &RuleInput<'_>) -> ParamMap {
        let mut args = ParamMap::new();
        match resolve_item_reference(input.payload(self.key()), input.context) {
            Some(reference) => match as_item_id(&reference) {
                Some(item_id) => {
                    args.insert(
                        "post__not_in".to_string(),
                        Value::Array(vec![Value::from(item_id)]),
                    );
                }
                None => warn!(reference = %reference, "Excluded item is not an integer id; ignoring"),
            },
            None => debug!("No current item to exclude"),
        }
        args
    }
}
