//! Network-facing types and HTTP helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! `types` is shared with the server crate; `api` wraps the JSON endpoints
//! the hydrated pages call.

pub mod api;
pub mod types;
