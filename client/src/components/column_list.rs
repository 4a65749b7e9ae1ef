//! Column list: a 1:1 projection of summaries onto link cards.
//!
//! DESIGN
//! ======
//! No filtering, sorting, or pagination happens here. The loader decides
//! order; this view keys each card by slug and keeps input order.

#[cfg(test)]
#[path = "column_list_test.rs"]
mod column_list_test;

use leptos::prelude::*;

use crate::components::column_card::{ColumnCard, column_href};
use crate::net::types::ColumnSummary;

/// Render model for one card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColumnCardEntry {
    /// Rendering key (the slug).
    pub key: String,
    pub href: String,
    pub column: ColumnSummary,
}

/// One entry per summary, in input order.
#[must_use]
pub fn column_card_entries(columns: &[ColumnSummary]) -> Vec<ColumnCardEntry> {
    columns
        .iter()
        .map(|column| ColumnCardEntry {
            key: column.slug.clone(),
            href: column_href(&column.slug),
            column: column.clone(),
        })
        .collect()
}

#[component]
pub fn ColumnList(#[prop(into)] columns: Signal<Vec<ColumnSummary>>) -> impl IntoView {
    view! {
        <div class="column-list">
            <For
                each=move || column_card_entries(&columns.get())
                key=|entry: &ColumnCardEntry| entry.key.clone()
                children=move |entry: ColumnCardEntry| {
                    view! { <ColumnCard href=entry.href column=entry.column/> }
                }
            />
        </div>
    }
}
