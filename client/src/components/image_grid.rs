//! Promo image grid for the home page.

use leptos::prelude::*;

use crate::components::reveal_card::RevealCard;
use crate::content::promo::PROMO_ENTRIES;

/// Renders one `RevealCard` per promo entry, passing the entry's index for
/// the eager-load rule.
#[component]
pub fn ImageGrid() -> impl IntoView {
    view! {
        <div class="image-grid">
            {PROMO_ENTRIES
                .iter()
                .enumerate()
                .map(|(index, entry)| view! { <RevealCard entry=*entry index=index/> })
                .collect_view()}
        </div>
    }
}
