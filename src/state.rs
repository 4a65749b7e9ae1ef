//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It holds the column store loaded at startup. The store is immutable for
//! the process lifetime, so it is shared behind a plain `Arc`.

use std::sync::Arc;

use crate::content::ColumnStore;

/// Shared application state, injected into Axum handlers via State extractor.
#[derive(Clone)]
pub struct AppState {
    pub columns: Arc<ColumnStore>,
}

impl AppState {
    #[must_use]
    pub fn new(columns: ColumnStore) -> Self {
        Self { columns: Arc::new(columns) }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
