//! Browser `IntersectionObserver` binding for reveal cards.
//!
//! Each card gets its own observer. The controller lives in a local
//! `StoredValue` owned by the card component; `on_cleanup` takes it out and
//! drops it, which unobserves the captured element and disconnects the
//! observer. Requires a browser environment.

use leptos::prelude::*;
use wasm_bindgen::JsCast as _;
use wasm_bindgen::closure::Closure;

use super::reveal::{IntersectionSample, RevealController, RevealOptions, RevealState, ViewportWatcher};

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>;

/// `ViewportWatcher` backed by one `IntersectionObserver`.
pub struct BrowserWatcher {
    observer: web_sys::IntersectionObserver,
    _callback: ObserverCallback,
}

impl BrowserWatcher {
    fn new(options: RevealOptions, callback: ObserverCallback) -> Option<Self> {
        let init = web_sys::IntersectionObserverInit::new();
        init.set_root_margin(options.root_margin);
        init.set_threshold(&wasm_bindgen::JsValue::from_f64(options.threshold));
        let observer =
            web_sys::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init).ok()?;
        Some(Self { observer, _callback: callback })
    }
}

impl ViewportWatcher for BrowserWatcher {
    type Target = web_sys::Element;

    fn observe(&self, target: &Self::Target) {
        self.observer.observe(target);
    }

    fn unobserve(&self, target: &Self::Target) {
        self.observer.unobserve(target);
    }
}

impl Drop for BrowserWatcher {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Drive `state` from viewport intersections of the element behind `node_ref`.
///
/// Must be called from the card component body so cleanup is tied to the
/// card's owner.
pub fn watch_reveal(node_ref: NodeRef<leptos::html::Div>, state: RwSignal<RevealState>, options: RevealOptions) {
    let slot = StoredValue::new_local(None::<RevealController<BrowserWatcher>>);

    Effect::new(move || {
        if slot.with_value(Option::is_some) {
            return;
        }
        let Some(el) = node_ref.get() else {
            return;
        };
        let target: web_sys::Element = el.into();

        let callback: ObserverCallback = Closure::wrap(Box::new(
            move |entries: js_sys::Array, _observer: web_sys::IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<web_sys::IntersectionObserverEntry>() else {
                        continue;
                    };
                    let sample = IntersectionSample {
                        target: entry.target(),
                        is_intersecting: entry.is_intersecting(),
                        ratio: entry.intersection_ratio(),
                    };
                    let revealed = slot
                        .try_update_value(|controller| controller.as_mut().is_some_and(|c| c.handle(&sample)))
                        .unwrap_or(false);
                    if revealed {
                        state.set(RevealState::Revealed);
                    }
                }
            },
        )
            as Box<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>);

        let Some(watcher) = BrowserWatcher::new(options, callback) else {
            log::warn!("IntersectionObserver unavailable; revealing card immediately");
            state.set(RevealState::Revealed);
            return;
        };
        slot.set_value(Some(RevealController::attach(watcher, target, options)));
    });

    on_cleanup(move || {
        let _ = slot.try_update_value(Option::take);
    });
}
