//! Param Rules
//!
//! Each rule owns one custom param key and, when that key is active, turns its
//! payload into entries for the generated query args. Rules run in the fixed
//! order of [`KNOWN_RULES`]; a rule later in the list overrides any key an
//! earlier rule wrote.

use crate::context::RenderContext;
use crate::params::ParamMap;
use serde_json::Value;

mod date_query;
mod disable_pagination;
mod exclude_current;
mod filter;
mod include_posts;
mod meta_query;
mod multiple_posts;
mod post_parent;
mod tax_query;

pub use date_query::DateQuery;
pub use disable_pagination::DisablePagination;
pub use exclude_current::ExcludeCurrent;
pub use include_posts::IncludePosts;
pub use meta_query::MetaQuery;
pub use multiple_posts::MultiplePosts;
pub use post_parent::PostParent;
pub use tax_query::TaxQuery;

static NULL: Value = Value::Null;

/// Read-only inputs handed to a rule.
pub struct RuleInput<'a> {
    pub defaults: &'a ParamMap,
    pub custom: &'a ParamMap,
    pub context: &'a dyn RenderContext,
}

impl<'a> RuleInput<'a> {
    /// The rule's own custom payload.
    ///
    /// Only called for active rules, so a missing key is not expected; it
    /// reads as `null` rather than failing.
    pub fn payload(&self, key: &str) -> &'a Value {
        self.custom.get(key).unwrap_or(&NULL)
    }
}

/// A self-contained parameter transformation keyed by a custom param name.
pub trait ParamRule: Send + Sync {
    /// Custom param key that activates this rule.
    fn key(&self) -> &'static str;

    /// Entries this rule contributes to the query args.
    fn apply(&self, input: &RuleInput<'_>) -> ParamMap;
}

/// Every rule, in evaluation order.
pub static KNOWN_RULES: [&dyn ParamRule; 8] = [
    &MultiplePosts,
    &ExcludeCurrent,
    &IncludePosts,
    &MetaQuery,
    &DateQuery,
    &DisablePagination,
    &TaxQuery,
    &PostParent,
];

/// Names of all known rules, in evaluation order.
pub fn rule_names() -> Vec<&'static str> {
    KNOWN_RULES.iter().map(|rule| rule.key()).collect()
}
