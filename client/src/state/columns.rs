//! Column list and detail page state.
//!
//! DESIGN
//! ======
//! Each page owns its own signal over these plain structs; nothing here is
//! shared between pages, so list and detail views cannot interfere.

#[cfg(test)]
#[path = "columns_test.rs"]
mod columns_test;

use crate::net::api::FetchError;
use crate::net::types::{ColumnDetail, ColumnSummary};

/// Column list page state backed by `/api/columns`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ColumnsState {
    pub items: Vec<ColumnSummary>,
    pub loading: bool,
    pub error: Option<String>,
}

impl ColumnsState {
    /// Initial state for a page that is about to fetch.
    #[must_use]
    pub fn pending() -> Self {
        Self { loading: true, ..Self::default() }
    }

    /// Fold a fetch result into the state. Items are kept in response order.
    pub fn apply(&mut self, result: Result<Vec<ColumnSummary>, String>) {
        self.loading = false;
        match result {
            Ok(items) => {
                self.items = items;
                self.error = None;
            }
            Err(e) => {
                self.items.clear();
                self.error = Some(e);
            }
        }
    }
}

/// Column detail page state backed by `/api/columns/{slug}`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ColumnDetailState {
    #[default]
    Loading,
    Loaded(ColumnDetail),
    NotFound,
    Failed(String),
}

impl From<Result<ColumnDetail, FetchError>> for ColumnDetailState {
    fn from(result: Result<ColumnDetail, FetchError>) -> Self {
        match result {
            Ok(detail) => Self::Loaded(detail),
            Err(FetchError::NotFound) => Self::NotFound,
            Err(FetchError::Failed(e)) => Self::Failed(e),
        }
    }
}

impl ColumnDetailState {
    /// State for a fetch issued for `requested`, or `None` when the route has
    /// since moved to `current` and the result is stale.
    #[must_use]
    pub fn for_slug(requested: &str, current: &str, result: Result<ColumnDetail, FetchError>) -> Option<Self> {
        (requested == current).then(|| Self::from(result))
    }
}
