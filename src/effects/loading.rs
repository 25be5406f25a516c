use gloo_timers::callback::Timeout;
use web_sys::Document;

use crate::config;

/// Fades the whole page in shortly after mount.
pub fn fade_in(document: &Document) {
    let Some(body) = document.body() else {
        return;
    };
    let _ = body.style().set_property("opacity", "0");
    let _ = body.style().set_property("transition", "opacity 0.5s ease");
    Timeout::new(config::PAGE_FADE_IN_DELAY_MS, move || {
        let _ = body.style().set_property("opacity", "1");
    })
    .forget();
}
