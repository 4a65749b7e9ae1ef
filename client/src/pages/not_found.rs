//! Fallback view for unknown routes.

use leptos::prelude::*;
use leptos_meta::Title;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <Title text="Not found | GUARDPOST"/>
        <div class="not-found-page">
            <p>"Page not found."</p>
            <a href="/">"トップへ戻る"</a>
        </div>
    }
}
