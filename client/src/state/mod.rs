//! Page-level client state.
//!
//! DESIGN
//! ======
//! State is split by page so each view depends on a small focused model.
//! Reveal-card visibility is not here: it is private to each card instance.

pub mod columns;
