//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module stitches the column JSON API together with Leptos SSR
//! rendering under a single Axum router. The compiled UI bundle is served
//! from `/pkg`; any path no route claims falls through to the public static
//! directory (column and promo images), and paths that match no file there
//! render the app's not-found page with a 404 status.

pub mod columns;

use std::path::{Path, PathBuf};

use axum::Router;
use axum::body::Body;
use axum::extract::{Request, State};
use axum::handler::Handler;
use axum::http::StatusCode;
use axum::response::Response;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// JSON API routes consumed by the hydrated pages.
fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/api/columns", get(columns::list_columns))
        .route("/api/columns/{slug}", get(columns::get_column))
        .route("/healthz", get(healthz))
        .with_state(state)
}

/// Full site: API routes + Leptos SSR pages + `/pkg` bundle + public files.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `Cargo.toml` `[package.metadata.leptos]` section).
pub fn site(state: AppState, public_dir: &Path) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(guardpost_ui::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || guardpost_ui::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(api_routes(state)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .fallback_service(
            ServeDir::new(public_dir).not_found_service(not_found.with_state(leptos_options.clone())),
        )
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

/// Render the app for a path nothing else claimed; the router's fallback
/// shows the not-found page.
async fn not_found(State(options): State<LeptosOptions>, req: Request<Body>) -> Response {
    let handler = leptos_axum::render_app_to_stream_with_context(
        {
            let options = options.clone();
            move || provide_context(options.clone())
        },
        move || guardpost_ui::app::shell(options.clone()),
    );
    let mut response = handler(req).await;
    *response.status_mut() = StatusCode::NOT_FOUND;
    response
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;
