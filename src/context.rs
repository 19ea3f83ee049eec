//! Render Context
//!
//! Ambient state a listing is rendered in. Rules only ever read from it.

use chrono::{NaiveDate, Utc};

/// Read-only view of the page currently being rendered.
pub trait RenderContext {
    /// Identifier of the content item being rendered, if any.
    fn current_item_id(&self) -> Option<u64>;

    /// Calendar date relative date ranges are computed from.
    fn today(&self) -> NaiveDate;
}

/// Fixed render context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticContext {
    pub current_item_id: Option<u64>,
    pub today: NaiveDate,
}

impl StaticContext {
    pub fn new(current_item_id: Option<u64>, today: NaiveDate) -> Self {
        Self {
            current_item_id,
            today,
        }
    }

    /// Context for rendering the given item today.
    pub fn for_item(item_id: u64) -> Self {
        Self {
            current_item_id: Some(item_id),
            ..Self::default()
        }
    }
}

impl Default for StaticContext {
    fn default() -> Self {
        Self {
            current_item_id: None,
            today: Utc::now().date_naive(),
        }
    }
}

impl RenderContext for StaticContext {
    fn current_item_id(&self) -> Option<u64> {
        self.current_item_id
    }

    fn today(&self) -> NaiveDate {
        self.today
    }
}
