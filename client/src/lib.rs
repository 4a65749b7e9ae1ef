//! # guardpost-ui
//!
//! Leptos frontend for the GUARDPOST marketing site: the promo image grid
//! with scroll-triggered reveal cards, and the column list/detail pages.
//!
//! Built with `ssr` for server rendering inside the axum binary and with
//! `hydrate` for the browser bundle.

pub mod app;
pub mod components;
pub mod content;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
