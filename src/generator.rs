//! Query Params Generator
//!
//! Owns the default and custom params for one listing render, runs every
//! active rule once in declared order, and collects their contributions into
//! the query args handed to the content query engine.

use crate::context::{RenderContext, StaticContext};
use crate::params::{into_param_map, is_empty_value, ParamMap};
use crate::rules::{ParamRule, RuleInput, KNOWN_RULES};
use serde_json::Value;
use tracing::{debug, trace};

/// Builds query args from default params and custom rule params.
///
/// Inputs are never mutated. [`process_all`](Self::process_all) rebuilds the
/// query args from scratch, so calling it repeatedly gives the same result.
pub struct ParamGenerator {
    default_params: ParamMap,
    custom_params: ParamMap,
    context: Box<dyn RenderContext>,
    query_args: ParamMap,
}

impl ParamGenerator {
    /// Create a generator; non-mapping arguments are treated as empty.
    pub fn new(default_params: Value, custom_params: Value) -> Self {
        Self::from_maps(into_param_map(default_params), into_param_map(custom_params))
    }

    pub fn from_maps(default_params: ParamMap, custom_params: ParamMap) -> Self {
        Self {
            default_params,
            custom_params,
            context: Box::new(StaticContext::default()),
            query_args: ParamMap::new(),
        }
    }

    /// Render with the given ambient context instead of the default one.
    pub fn with_context<C: RenderContext + 'static>(mut self, context: C) -> Self {
        self.context = Box::new(context);
        self
    }

    pub fn default_params(&self) -> &ParamMap {
        &self.default_params
    }

    /// Whether `name` is set to a non-empty value.
    pub fn has_custom_param(&self, name: &str) -> bool {
        self.custom_params
            .get(name)
            .map(|value| !is_empty_value(value))
            .unwrap_or(false)
    }

    /// The value of `name`, or `None` when it is missing or empty.
    pub fn get_custom_param(&self, name: &str) -> Option<&Value> {
        if self.has_custom_param(name) {
            self.custom_params.get(name)
        } else {
            None
        }
    }

    /// Run every known rule whose param is active.
    pub fn process_all(&mut self) {
        self.process_rules(&KNOWN_RULES);
    }

    pub(crate) fn process_rules(&mut self, rules: &[&dyn ParamRule]) {
        let input = RuleInput {
            defaults: &self.default_params,
            custom: &self.custom_params,
            context: self.context.as_ref(),
        };

        let mut query_args = ParamMap::new();
        for rule in rules {
            let name = rule.key();
            if !self.has_custom_param(name) {
                trace!(rule = name, "Param rule inactive");
                continue;
            }
            let contributions = rule.apply(&input);
            debug!(
                rule = name,
                keys = ?contributions.keys().collect::<Vec<_>>(),
                "Applied param rule"
            );
            query_args.extend(contributions);
        }

        debug!(keys = query_args.len(), "Query args generated");
        self.query_args = query_args;
    }

    /// Query args accumulated so far; empty until `process_all` runs.
    pub fn query_args(&self) -> &ParamMap {
        &self.query_args
    }

    pub fn into_query_args(self) -> ParamMap {
        self.query_args
    }

    /// Default params with the generated query args layered on top.
    pub fn merged_query_args(&self) -> ParamMap {
        let mut merged = self.default_params.clone();
        merged.extend(self.query_args.clone());
        merged
    }
}

/// One-shot generation for callers that only need the result.
pub fn generate_query_args<C: RenderContext + 'static>(
    default_params: Value,
    custom_params: Value,
    context: C,
) -> ParamMap {
    let mut generator = ParamGenerator::new(default_params, custom_params).with_context(context);
    generator.process_all();
    generator.into_query_args()
}
