//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and component
//! logic to improve reuse and testability.

pub mod caption;
pub mod markdown;
pub mod reveal;
#[cfg(feature = "hydrate")]
pub mod viewport;
