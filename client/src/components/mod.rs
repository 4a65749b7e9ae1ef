//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render column cards and promo cards from plain props; only
//! `reveal_card` holds per-instance state.

pub mod column_card;
pub mod column_list;
pub mod image_grid;
pub mod responsive_image;
pub mod reveal_card;
pub mod site_header;
