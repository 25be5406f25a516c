use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, Window};

use crate::config;
use crate::nav::throttle::{PerformanceClock, Throttle};

/// Shifts the active page's hero by a fraction of the scroll offset.
/// A page without a hero is a no-op.
pub fn install(window: &Window, document: &Document) {
    let throttle = Throttle::new(config::SCROLL_THROTTLE_MS, PerformanceClock);
    let win = window.clone();
    let document = document.clone();
    let callback = Closure::wrap(Box::new(move || {
        if !throttle.try_fire() {
            return;
        }
        let scrolled = win.page_y_offset().unwrap_or(0.0);
        if let Ok(Some(hero)) = document.query_selector(".page.active .hero") {
            if let Some(hero) = hero.dyn_ref::<HtmlElement>() {
                let shift = scrolled * config::PARALLAX_FACTOR;
                let _ = hero
                    .style()
                    .set_property("transform", &format!("translateY({shift}px)"));
            }
        }
    }) as Box<dyn FnMut()>);
    let _ = window.add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref());
    callback.forget();
}
