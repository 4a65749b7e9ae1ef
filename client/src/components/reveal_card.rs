//! Promo card that slides into view the first time it becomes visible.
//!
//! DESIGN
//! ======
//! Visibility is private to each card: a `RwSignal<RevealState>` created per
//! instance and driven by `util::viewport::watch_reveal` after hydration.
//! Server-rendered markup always starts `Hidden`, matching the first client
//! render.

#[cfg(test)]
#[path = "reveal_card_test.rs"]
mod reveal_card_test;

use leptos::prelude::*;

use crate::components::responsive_image::ResponsiveImage;
use crate::content::promo::PromoImageEntry;
use crate::util::caption::split_caption;
use crate::util::reveal::RevealState;

/// Cards at indices below this get the eager-load hint.
pub const PRIORITY_IMAGE_COUNT: usize = 6;

pub const PROMO_IMAGE_SIZES: &str = "(max-width: 768px) 100vw, (max-width: 1024px) 50vw, 33vw";

/// Whether the card at `index` requests priority image loading.
#[must_use]
pub fn wants_priority(index: usize) -> bool {
    index < PRIORITY_IMAGE_COUNT
}

/// One image + two-line caption + badge, revealed on first intersection.
#[component]
pub fn RevealCard(entry: PromoImageEntry, index: usize) -> impl IntoView {
    let card_ref = NodeRef::<leptos::html::Div>::new();
    let reveal = RwSignal::new(RevealState::Hidden);

    #[cfg(feature = "hydrate")]
    crate::util::viewport::watch_reveal(card_ref, reveal, crate::util::reveal::RevealOptions::default());

    let (first_line, second_line) = split_caption(entry.top_text);

    view! {
        <div class="reveal-card" node_ref=card_ref style=move || reveal.get().style()>
            <div class="reveal-card__media">
                <ResponsiveImage
                    src=entry.image_url
                    alt=entry.bottom_text
                    fill=true
                    priority=wants_priority(index)
                    sizes=PROMO_IMAGE_SIZES
                />
            </div>
            <div class="reveal-card__overlay">
                <div class="reveal-card__spacer"></div>
                <div class="reveal-card__caption">
                    {first_line}
                    <br/>
                    {second_line}
                </div>
                <div class="reveal-card__badge">
                    <span class="reveal-card__badge-text">{entry.bottom_text}</span>
                </div>
            </div>
        </div>
    }
}
