//! `tax_query`: taxonomy term conditions.

use super::filter::{build_filter, condition_maps, split_payload};
use super::{ParamRule, RuleInput};
use crate::params::{is_empty_value, str_field, ParamMap};
use serde_json::Value;
use tracing::warn;

pub struct TaxQuery;

impl ParamRule for TaxQuery {
    fn key(&self) -> &'static str {
        "tax_query"
    }

    fn apply(&self, input: &RuleInput<'_>) -> ParamMap {
        let (relation, entries) = split_payload(input.payload(self.key()));
        let clauses: Vec<ParamMap> = condition_maps(self.key(), entries)
            .into_iter()
            .filter_map(tax_clause)
            .collect();

        let mut args = ParamMap::new();
        if let Some(filter) = build_filter(relation, clauses) {
            args.insert("tax_query".to_string(), filter);
        }
        args
    }
}

fn tax_clause(entry: &ParamMap) -> Option<ParamMap> {
    let Some(taxonomy) = str_field(entry, "taxonomy") else {
        warn!(entry = ?entry, "Skipping taxonomy condition without a taxonomy");
        return None;
    };

    let operator = str_field(entry, "operator").map(str::to_ascii_uppercase);
    let needs_terms = !matches!(operator.as_deref(), Some("EXISTS") | Some("NOT EXISTS"));

    let terms: Vec<Value> = match entry.get("terms") {
        Some(Value::Array(terms)) => terms
            .iter()
            .filter(|term| !is_empty_value(term))
            .cloned()
            .collect(),
        Some(term) if !is_empty_value(term) => vec![term.clone()],
        _ => Vec::new(),
    };
    if needs_terms && terms.is_empty() {
        warn!(taxonomy, "Skipping taxonomy condition without terms");
        return None;
    }

    let mut clause = ParamMap::new();
    clause.insert("taxonomy".to_string(), Value::from(taxonomy));
    if !terms.is_empty() {
        clause.insert("terms".to_string(), Value::Array(terms));
    }
    if let Some(field) = str_field(entry, "field") {
        clause.insert("field".to_string(), Value::from(field));
    }
    if let Some(operator) = operator {
        clause.insert("operator".to_string(), Value::from(operator));
    }
    if let Some(include_children) = entry.get("include_children").and_then(Value::as_bool) {
        clause.insert(
            "include_children".to_string(),
            Value::Bool(include_children),
        );
    }
    Some(clause)
}
