//! REST API helpers for loading column content.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs, since pages fetch after hydration.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics so a failed fetch degrades
//! to an error line on the page without crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{ColumnDetail, ColumnSummary};

/// Outcome of a detail fetch that distinguishes "no such column".
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FetchError {
    NotFound,
    Failed(String),
}

#[cfg(any(test, feature = "hydrate"))]
const COLUMNS_ENDPOINT: &str = "/api/columns";

#[cfg(any(test, feature = "hydrate"))]
fn column_endpoint(slug: &str) -> String {
    format!("{COLUMNS_ENDPOINT}/{slug}")
}

#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(status: u16) -> String {
    format!("column request failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn classify_status(status: u16) -> Option<FetchError> {
    match status {
        200..=299 => None,
        404 => Some(FetchError::NotFound),
        other => Some(FetchError::Failed(request_failed_message(other))),
    }
}

/// Fetch all column summaries from `/api/columns`.
///
/// # Errors
///
/// Returns an error string if the request fails or the body is malformed.
pub async fn fetch_columns() -> Result<Vec<ColumnSummary>, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(COLUMNS_ENDPOINT)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message(resp.status()));
        }
        resp.json::<Vec<ColumnSummary>>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Fetch one column from `/api/columns/{slug}`.
///
/// # Errors
///
/// Returns `FetchError::NotFound` for unknown slugs and `FetchError::Failed`
/// for transport or decoding problems.
pub async fn fetch_column(slug: &str) -> Result<ColumnDetail, FetchError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&column_endpoint(slug))
            .send()
            .await
            .map_err(|e| FetchError::Failed(e.to_string()))?;
        if let Some(err) = classify_status(resp.status()) {
            return Err(err);
        }
        resp.json::<ColumnDetail>()
            .await
            .map_err(|e| FetchError::Failed(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = slug;
        Err(FetchError::Failed("not available on server".to_owned()))
    }
}
