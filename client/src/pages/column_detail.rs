//! Column detail page at `/column/:slug`.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_params_map;

use crate::components::responsive_image::ResponsiveImage;
use crate::net::types::ColumnDetail;
use crate::state::columns::ColumnDetailState;
use crate::util::markdown::render_markdown_html;

#[component]
pub fn ColumnDetailPage() -> impl IntoView {
    let params = use_params_map();
    let slug = move || params.read().get("slug").unwrap_or_default();
    let detail = RwSignal::new(ColumnDetailState::Loading);

    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        let requested = slug();
        detail.set(ColumnDetailState::Loading);
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_column(&requested).await;
            // None once the page is gone.
            let Some(current) = params.try_with_untracked(|p| p.get("slug").unwrap_or_default()) else {
                return;
            };
            if let Some(next) = ColumnDetailState::for_slug(&requested, &current, result) {
                let _ = detail.try_set(next);
            }
        });
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = slug;

    view! {
        <div class="column-detail-page">
            {move || match detail.get() {
                ColumnDetailState::Loading => {
                    view! { <p class="column-detail-page__status">"Loading column..."</p> }.into_any()
                }
                ColumnDetailState::NotFound => {
                    view! {
                        <Title text="Not found | GUARDPOST"/>
                        <div class="column-detail-page__status">
                            <p>"Column not found."</p>
                            <a href="/column">"コラム一覧へ戻る"</a>
                        </div>
                    }
                        .into_any()
                }
                ColumnDetailState::Failed(e) => {
                    view! { <p class="column-detail-page__error">{e}</p> }.into_any()
                }
                ColumnDetailState::Loaded(column) => view! { <ColumnArticle column=column/> }.into_any(),
            }}
        </div>
    }
}

#[component]
fn ColumnArticle(column: ColumnDetail) -> impl IntoView {
    let body_html = render_markdown_html(&column.body);
    let page_title = format!("{} | GUARDPOST", column.title);
    let alt = column.title.clone();

    view! {
        <Title text=page_title/>
        <article class="column-article">
            <h1 class="column-article__title">{column.title}</h1>
            {column.date.map(|date| { let datetime = date.clone(); view! { <time class="column-article__date" datetime=datetime>{date}</time> } })}
            <div class="column-article__hero">
                <ResponsiveImage src=column.image alt=alt fill=true priority=true sizes="100vw"/>
            </div>
            <div class="column-article__body" inner_html=body_html></div>
            <a class="column-article__back" href="/column">"コラム一覧へ戻る"</a>
        </article>
    }
}
