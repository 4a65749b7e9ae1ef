//! Top navigation shared by every page.

use leptos::prelude::*;

#[component]
pub fn SiteHeader() -> impl IntoView {
    view! {
        <header class="site-header">
            <a class="site-header__brand" href="/">"GUARDPOST"</a>
            <nav class="site-header__nav">
                <a class="site-header__link" href="/">"サービス"</a>
                <a class="site-header__link" href="/column">"コラム"</a>
            </nav>
        </header>
    }
}
