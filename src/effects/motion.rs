use stylist::GlobalStyle;
use web_sys::Window;

const REDUCED_MOTION_CSS: &str = r#"
    *, *::before, *::after {
        animation-duration: 0.01ms !important;
        animation-iteration-count: 1 !important;
        transition-duration: 0.01ms !important;
    }
"#;

/// Collapses animation and transition durations for the whole session when
/// the environment asks for reduced motion. The preference is read once at
/// startup.
pub fn install(window: &Window) {
    let prefers_reduced = window
        .match_media("(prefers-reduced-motion: reduce)")
        .ok()
        .flatten()
        .map(|query| query.matches())
        .unwrap_or(false);
    if !prefers_reduced {
        return;
    }

    match GlobalStyle::new(REDUCED_MOTION_CSS) {
        Ok(style) => {
            log::info!("reduced motion requested, animations collapsed");
            std::mem::forget(style); // rule stays mounted for the session
        }
        Err(err) => log::warn!("reduced-motion rule failed to mount: {err}"),
    }
}
