//! `date_query`: publish/modified date windows.
//!
//! A named `range` (relative to the render date) takes precedence over an
//! explicit `before`/`after`/`between` relation.

use super::{ParamRule, RuleInput};
use crate::params::{is_empty_value, str_field, ParamMap};
use chrono::{Datelike, Months, NaiveDate};
use serde_json::Value;
use tracing::{debug, warn};

const DATE_FORMAT: &str = "%Y-%m-%d";

pub struct DateQuery;

impl ParamRule for DateQuery {
    fn key(&self) -> &'static str {
        "date_query"
    }

    fn apply(&self, input: &RuleInput<'_>) -> ParamMap {
        let mut args = ParamMap::new();
        let Some(payload) = input.payload(self.key()).as_object() else {
            warn!("date_query payload is not a mapping; ignoring");
            return args;
        };
        let today = input.context.today();

        let mut clause = ParamMap::new();
        if let Some(range) = str_field(payload, "range") {
            match range_bounds(range, today) {
                Some((after, before)) => {
                    clause.insert("after".to_string(), format_date(after));
                    clause.insert("before".to_string(), format_date(before));
                }
                None => warn!(range, "Unknown date range"),
            }
        }
        if clause.is_empty() {
            relation_bounds(payload, today, &mut clause);
        }
        if clause.is_empty() {
            debug!("date_query produced no bounds");
            return args;
        }

        let inclusive = payload
            .get("inclusive")
            .map(|v| !is_empty_value(v))
            .unwrap_or(false);
        clause.insert("inclusive".to_string(), Value::Bool(inclusive));
        if let Some(column) = str_field(payload, "column") {
            clause.insert("column".to_string(), Value::from(column));
        }

        args.insert(
            "date_query".to_string(),
            Value::Array(vec![Value::Object(clause)]),
        );
        args
    }
}

/// `(after, before)` for a named range ending today.
fn range_bounds(range: &str, today: NaiveDate) -> Option<(NaiveDate, NaiveDate)> {
    match range {
        "last-month" => {
            let end = today.with_day(1)?.pred_opt()?;
            Some((end.with_day(1)?, end))
        }
        "three-months" => months_back(today, 3),
        "six-months" => months_back(today, 6),
        "twelve-months" => months_back(today, 12),
        _ => None,
    }
}

fn months_back(today: NaiveDate, months: u32) -> Option<(NaiveDate, NaiveDate)> {
    Some((today.checked_sub_months(Months::new(months))?, today))
}

fn relation_bounds(payload: &ParamMap, today: NaiveDate, clause: &mut ParamMap) {
    let Some(relation) = str_field(payload, "relation") else {
        return;
    };
    let primary = date_field(payload, "date_primary", today);

    match relation.to_ascii_lowercase().as_str() {
        bound @ ("before" | "after") => {
            if let Some(date) = primary {
                clause.insert(bound.to_string(), date);
            }
        }
        "between" => {
            if let Some(date) = primary {
                clause.insert("after".to_string(), date);
            }
            if let Some(date) = date_field(payload, "date_secondary", today) {
                clause.insert("before".to_string(), date);
            }
        }
        other => warn!(relation = other, "Unknown date relation"),
    }
}

fn date_field(payload: &ParamMap, key: &str, today: NaiveDate) -> Option<Value> {
    let date = str_field(payload, key)?;
    if date.eq_ignore_ascii_case("current") {
        return Some(format_date(today));
    }
    Some(Value::from(date))
}

fn format_date(date: NaiveDate) -> Value {
    Value::from(date.format(DATE_FORMAT).to_string())
}
