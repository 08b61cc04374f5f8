//! In-page anchor links scroll smoothly and clear the fixed header.

#[cfg(test)]
#[path = "smooth_scroll_test.rs"]
mod smooth_scroll_test;

pub const ANCHOR_SELECTOR: &str = r##"a[href^="#"]"##;

/// Element id an in-page `href` points at. A bare `#` points nowhere.
#[must_use]
pub fn anchor_fragment(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Scroll offset that leaves `header_offset` pixels above the target.
#[must_use]
pub fn scroll_target_top(offset_top: f64, header_offset: f64) -> f64 {
    offset_top - header_offset
}

#[cfg(feature = "hydrate")]
pub use browser::init;

#[cfg(feature = "hydrate")]
mod browser {
    use web_sys::{Document, Element, MouseEvent, ScrollBehavior, ScrollToOptions, Window};

    use super::{ANCHOR_SELECTOR, anchor_fragment, scroll_target_top};
    use crate::error::FxError;
    use crate::util::dom::{self, Page};

    pub fn init(page: &Page) -> Result<(), FxError> {
        let anchors = page.query_all(ANCHOR_SELECTOR)?;
        let header_offset = page.config.anchor_header_offset_px;
        for anchor in anchors {
            let window = page.window.clone();
            let document = page.document.clone();
            let link = anchor.clone();
            dom::listen(&anchor, "click", move |event: MouseEvent| {
                event.prevent_default();
                scroll_to_anchor(&window, &document, &link, header_offset);
            })?;
        }
        Ok(())
    }

    fn scroll_to_anchor(window: &Window, document: &Document, link: &Element, header_offset: f64) {
        let Some(href) = link.get_attribute("href") else {
            return;
        };
        let Some(target) = anchor_fragment(&href)
            .and_then(|id| document.get_element_by_id(id))
            .as_ref()
            .and_then(dom::as_html)
        else {
            log::debug!("anchor {href} has no target");
            return;
        };
        let options = ScrollToOptions::new();
        options.set_top(scroll_target_top(f64::from(target.offset_top()), header_offset));
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}
