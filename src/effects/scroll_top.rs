use stylist::Style;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

use crate::config;
use crate::nav::throttle::{PerformanceClock, Throttle};

const BUTTON_CSS: &str = r#"
    position: fixed;
    bottom: 30px;
    right: 30px;
    width: 50px;
    height: 50px;
    background: linear-gradient(135deg, #667eea, #764ba2);
    color: white;
    border: none;
    border-radius: 50%;
    font-size: 20px;
    cursor: pointer;
    opacity: 0;
    visibility: hidden;
    transform: scale(0.8);
    transition: all 0.3s ease;
    z-index: 999;
    box-shadow: 0 4px 20px rgba(0, 0, 0, 0.2);

    &.visible {
        opacity: 1;
        visibility: visible;
        transform: scale(1);
    }
"#;

/// Creates the scroll-to-top button once and toggles its visibility past a
/// fixed offset.
pub fn install(window: &Window, document: &Document) {
    let button: HtmlElement = match document.get_element_by_id("scrollToTop") {
        Some(existing) => match existing.dyn_into() {
            Ok(button) => button,
            Err(_) => return,
        },
        None => {
            let Ok(created) = document.create_element("button") else {
                return;
            };
            created.set_id("scrollToTop");
            created.set_text_content(Some("\u{2191}"));
            match Style::new(BUTTON_CSS) {
                Ok(style) => {
                    let _ = created.class_list().add_1(style.get_class_name());
                    std::mem::forget(style); // stylesheet stays mounted for the session
                }
                Err(err) => log::warn!("scroll-to-top style failed to mount: {err}"),
            }
            let Ok(button) = created.dyn_into::<HtmlElement>() else {
                return;
            };
            if let Some(body) = document.body() {
                let _ = body.append_child(&button);
            }

            let win = window.clone();
            let on_click = Closure::wrap(Box::new(move || {
                let options = ScrollToOptions::new();
                options.set_top(0.0);
                options.set_behavior(ScrollBehavior::Smooth);
                win.scroll_to_with_scroll_to_options(&options);
            }) as Box<dyn FnMut()>);
            let _ = button
                .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref());
            on_click.forget();

            button
        }
    };

    let throttle = Throttle::new(config::SCROLL_TOP_THROTTLE_MS, PerformanceClock);
    let win = window.clone();
    let on_scroll = Closure::wrap(Box::new(move || {
        if !throttle.try_fire() {
            return;
        }
        if win.page_y_offset().unwrap_or(0.0) > config::SCROLL_TOP_THRESHOLD_PX {
            let _ = button.class_list().add_1("visible");
        } else {
            let _ = button.class_list().remove_1("visible");
        }
    }) as Box<dyn FnMut()>);
    let _ = window.add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref());
    on_scroll.forget();
}
