//! Link card for one column on the list page.

use leptos::prelude::*;

use crate::components::responsive_image::ResponsiveImage;
use crate::net::types::ColumnSummary;

pub const COLUMN_IMAGE_SIZES: &str = "(max-width: 768px) 100vw, 33vw";

/// Detail route for a column.
#[must_use]
pub fn column_href(slug: &str) -> String {
    format!("/column/{slug}")
}

/// A clickable card linking to the column's detail page.
#[component]
pub fn ColumnCard(href: String, column: ColumnSummary) -> impl IntoView {
    let alt = column.title.clone();

    view! {
        <a class="column-card" href=href>
            <div class="column-card__inner">
                <div class="column-card__media">
                    <ResponsiveImage src=column.image alt=alt fill=true sizes=COLUMN_IMAGE_SIZES/>
                </div>
                <div class="column-card__body">
                    <h2 class="column-card__title">{column.title}</h2>
                    <p class="column-card__excerpt">{column.excerpt}</p>
                </div>
            </div>
        </a>
    }
}
