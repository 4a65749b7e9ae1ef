//! Column JSON routes backing the list and detail pages.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use guardpost_ui::net::types::{ColumnDetail, ColumnSummary};

use crate::state::AppState;

/// `GET /api/columns` — all column summaries in loader order.
pub async fn list_columns(State(state): State<AppState>) -> Json<Vec<ColumnSummary>> {
    Json(state.columns.all_columns())
}

/// `GET /api/columns/:slug` — one column including its markdown body.
pub async fn get_column(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<ColumnDetail>, StatusCode> {
    state
        .columns
        .column(&slug)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

#[cfg(test)]
#[path = "columns_test.rs"]
mod columns_test;
