//! Hand-authored site content compiled into the bundle.

pub mod promo;
