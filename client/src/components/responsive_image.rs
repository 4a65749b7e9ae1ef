//! Image element with fill, priority, and responsive-size hints.

#[cfg(test)]
#[path = "responsive_image_test.rs"]
mod responsive_image_test;

use leptos::prelude::*;

/// Loading attributes derived from the priority hint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageLoading {
    pub loading: &'static str,
    pub fetch_priority: &'static str,
}

impl ImageLoading {
    #[must_use]
    pub fn for_priority(priority: bool) -> Self {
        if priority {
            Self { loading: "eager", fetch_priority: "high" }
        } else {
            Self { loading: "lazy", fetch_priority: "auto" }
        }
    }
}

/// `<img>` that optionally fills its positioned container.
///
/// `priority` requests an eager, high-priority fetch for above-the-fold
/// images; everything else loads lazily.
#[component]
pub fn ResponsiveImage(
    #[prop(into)] src: String,
    #[prop(into)] alt: String,
    #[prop(optional)] fill: bool,
    #[prop(optional)] priority: bool,
    #[prop(optional, into)] sizes: Option<String>,
) -> impl IntoView {
    let hints = ImageLoading::for_priority(priority);

    view! {
        <img
            class="responsive-image"
            class:responsive-image--fill=fill
            src=src
            alt=alt
            sizes=sizes
            loading=hints.loading
            fetchpriority=hints.fetch_priority
            decoding="async"
        />
    }
}
