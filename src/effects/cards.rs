use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{
    Document, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};

use crate::config;

/// Fades cards in once they are sufficiently visible, staggered among the
/// entries delivered together, and resets them when they leave the viewport
/// so scrolling back replays the reveal.
pub fn observe(document: &Document) {
    let callback = Closure::wrap(Box::new(
        move |entries: Array, _observer: IntersectionObserver| {
            for (index, entry) in entries.iter().enumerate() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                let Ok(card) = entry.target().dyn_into::<HtmlElement>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    let delay = index as u32 * config::CARD_STAGGER_MS;
                    Timeout::new(delay, move || {
                        let _ = card.style().set_property("opacity", "1");
                        let _ = card
                            .style()
                            .set_property("transform", "translateY(0) scale(1)");
                    })
                    .forget();
                } else {
                    let _ = card.style().set_property("opacity", "0");
                    let _ = card
                        .style()
                        .set_property("transform", "translateY(30px) scale(0.95)");
                }
            }
        },
    )
        as Box<dyn FnMut(Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from(config::CARD_VISIBLE_RATIO));
    options.set_root_margin(config::CARD_ROOT_MARGIN);

    let observer =
        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
            Ok(observer) => observer,
            Err(err) => {
                log::warn!("intersection observer unavailable: {err:?}");
                return;
            }
        };
    callback.forget();

    if let Ok(cards) = document.query_selector_all(".card") {
        for index in 0..cards.length() {
            let Some(card) = cards
                .item(index)
                .and_then(|node| node.dyn_into::<HtmlElement>().ok())
            else {
                continue;
            };
            let _ = card.style().set_property("opacity", "0");
            let _ = card
                .style()
                .set_property("transform", "translateY(30px) scale(0.95)");
            let _ = card.style().set_property(
                "transition",
                &format!(
                    "all 0.6s cubic-bezier(0.4, 0, 0.2, 1) {}s",
                    f64::from(index) * 0.1
                ),
            );
            observer.observe(&card);
        }
    }
}
