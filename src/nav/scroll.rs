use web_sys::{Element, HtmlElement};

use crate::config;

/// Scroll progress through the document as a percentage, clamped to [0, 100].
///
/// A document no taller than the viewport has nothing to scroll and always
/// reports 0, so there is no division by a zero or negative range.
pub fn progress_percent(scroll_top: f64, document_height: f64, viewport_height: f64) -> f64 {
    let scrollable = document_height - viewport_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    (scroll_top / scrollable * 100.0).clamp(0.0, 100.0)
}

/// True once the offset is past the navbar contrast threshold.
pub fn past_threshold(scroll_top: f64) -> bool {
    scroll_top > config::SCROLL_THRESHOLD_PX
}

/// The elements the scroll-state updater writes to.
#[derive(Clone)]
pub struct ScrollTargets {
    pub navbar: Element,
    pub logo: Element,
    pub links: Vec<Element>,
    pub indicator: HtmlElement,
}

impl ScrollTargets {
    /// Reconciles navbar mode and the progress indicator with the given
    /// offset. Idempotent: the same inputs always produce the same DOM state.
    pub fn apply(&self, scroll_top: f64, document_height: f64, viewport_height: f64) {
        if past_threshold(scroll_top) {
            let _ = self.navbar.class_list().add_1("scrolled");
            for link in &self.links {
                let _ = link.class_list().add_1("force-dark");
            }
            let _ = self.logo.class_list().add_1("force-dark");
        } else {
            let _ = self.navbar.class_list().remove_1("scrolled");
            for link in &self.links {
                let _ = link.class_list().remove_1("force-dark");
            }
            let _ = self.logo.class_list().remove_1("force-dark");
        }

        let percent = progress_percent(scroll_top, document_height, viewport_height);
        let _ = self
            .indicator
            .style()
            .set_property("width", &format!("{percent}%"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn progress_is_zero_at_the_top() {
        assert_eq!(progress_percent(0.0, 2000.0, 800.0), 0.0);
    }

    #[test]
    fn progress_tracks_the_scrollable_range() {
        // 1000px of scrollable height, 100px down -> 10%.
        assert_eq!(progress_percent(100.0, 1800.0, 800.0), 10.0);
        assert_eq!(progress_percent(500.0, 1800.0, 800.0), 50.0);
    }

    #[test]
    fn progress_clamps_to_one_hundred() {
        assert_eq!(progress_percent(5000.0, 1800.0, 800.0), 100.0);
    }

    #[test]
    fn short_documents_always_report_zero() {
        assert_eq!(progress_percent(50.0, 600.0, 800.0), 0.0);
        assert_eq!(progress_percent(50.0, 800.0, 800.0), 0.0);
    }

    #[test]
    fn progress_is_monotonic_in_the_offset() {
        let mut last = 0.0;
        for step in 0..=20 {
            let offset = f64::from(step) * 100.0;
            let percent = progress_percent(offset, 1800.0, 800.0);
            assert!(percent >= last, "dropped from {last} to {percent}");
            last = percent;
        }
    }

    #[test]
    fn threshold_is_exclusive() {
        assert_eq!(past_threshold(80.0), false);
        assert_eq!(past_threshold(80.1), true);
        assert_eq!(past_threshold(0.0), false);
    }
}
