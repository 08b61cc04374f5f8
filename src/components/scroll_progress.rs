//! Reading-progress bar driven by scroll position.

#[cfg(test)]
#[path = "scroll_progress_test.rs"]
mod scroll_progress_test;

pub const PROGRESS_SELECTOR: &str = ".scroll-progress";

/// Percentage of the scrollable distance already scrolled, in `0..=100`.
///
/// A page with nothing to scroll (document no taller than the viewport)
/// reports 0 rather than dividing by zero.
#[must_use]
pub fn scroll_progress(scroll_y: f64, document_height: f64, viewport_height: f64) -> f64 {
    let scrollable = document_height - viewport_height;
    if scrollable <= 0.0 || !scrollable.is_finite() || !scroll_y.is_finite() {
        return 0.0;
    }
    (scroll_y / scrollable * 100.0).clamp(0.0, 100.0)
}

/// CSS width for a progress value.
#[must_use]
pub fn width_css(progress: f64) -> String {
    format!("{progress}%")
}

#[cfg(feature = "hydrate")]
pub use browser::init;

#[cfg(feature = "hydrate")]
mod browser {
    use web_sys::{Event, HtmlElement};

    use super::{PROGRESS_SELECTOR, scroll_progress, width_css};
    use crate::error::FxError;
    use crate::util::dom::{self, Page};
    use crate::util::rate_limit::throttle_with_settle;

    pub fn init(page: &Page) -> Result<(), FxError> {
        let Some(bar) = page.query_html(PROGRESS_SELECTOR)? else {
            log::debug!("no {PROGRESS_SELECTOR}; scroll progress disabled");
            return Ok(());
        };

        let window = page.window.clone();
        let body = page.body.clone();
        let mut update = throttle_with_settle(&page.scheduler, page.config.scroll_progress_throttle_ms, move || {
            dom::warn_on_err("scroll progress", apply(&window, &body, &bar));
        });
        dom::listen(&page.window, "scroll", move |_: Event| update())
    }

    fn apply(window: &web_sys::Window, body: &HtmlElement, bar: &HtmlElement) -> Result<(), FxError> {
        let viewport = window.inner_height()?.as_f64().unwrap_or(0.0);
        let progress = scroll_progress(window.scroll_y()?, f64::from(body.scroll_height()), viewport);
        dom::set_style(bar, "width", &width_css(progress))
    }
}
