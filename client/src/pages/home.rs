//! Landing page with the promo image grid.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::image_grid::ImageGrid;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="GUARDPOST | 警備サービス"/>
        <div class="home-page">
            <section class="home-page__hero">
                <h1 class="home-page__heading">"SECURITY SERVICES"</h1>
                <p class="home-page__lead">"交通誘導から要人警護まで、現場の安全を守ります。"</p>
            </section>
            <section class="home-page__services">
                <ImageGrid/>
            </section>
            <section class="home-page__columns">
                <a class="btn home-page__column-link" href="/column">"コラムを読む"</a>
            </section>
        </div>
    }
}
