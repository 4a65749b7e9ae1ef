//! Column list page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Fetches summaries from `/api/columns` after hydration and hands them to
//! `ColumnList` unchanged. SSR renders the loading placeholder so the first
//! client render matches.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::column_list::ColumnList;
use crate::state::columns::ColumnsState;

#[component]
pub fn ColumnListPage() -> impl IntoView {
    let columns = RwSignal::new(ColumnsState::pending());

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = crate::net::api::fetch_columns().await;
        if let Err(e) = &result {
            log::warn!("column list fetch failed: {e}");
        }
        // The page may have been left before the fetch resolved.
        let _ = columns.try_update(|state| state.apply(result));
    });

    let items = Signal::derive(move || columns.get().items);

    view! {
        <Title text="コラム | GUARDPOST"/>
        <div class="column-page">
            <div class="column-page__inner">
                <h1 class="column-page__heading">"コラム"</h1>
                <Show when=move || columns.get().error.is_some()>
                    <p class="column-page__error">
                        {move || columns.get().error.unwrap_or_default()}
                    </p>
                </Show>
                <Show
                    when=move || !columns.get().loading
                    fallback=move || view! { <p class="column-page__loading">"Loading columns..."</p> }
                >
                    <ColumnList columns=items/>
                </Show>
            </div>
        </div>
    }
}
