//! Highlights the nav link of the section currently under the header.

#[cfg(test)]
#[path = "active_section_test.rs"]
mod active_section_test;

pub const SECTION_SELECTOR: &str = "section[id]";
pub const NAV_LINK_SELECTOR: &str = ".nav-link";
pub const ACTIVE_LINK_CLASS: &str = "text-blue-600";

/// Vertical extent of a page section in document coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionSpan {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl SectionSpan {
    /// Half-open: `[top, top + height)`.
    #[must_use]
    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

/// Id of the first section containing `scroll_y + offset`, in document order.
#[must_use]
pub fn active_section(spans: &[SectionSpan], scroll_y: f64, offset: f64) -> Option<&str> {
    let probe = scroll_y + offset;
    spans.iter().find(|span| span.contains(probe)).map(|span| span.id.as_str())
}

/// Whether a nav link with `href` points at the active section.
#[must_use]
pub fn nav_link_matches(href: Option<&str>, active: Option<&str>) -> bool {
    match (href.and_then(|h| h.strip_prefix('#')), active) {
        (Some(fragment), Some(id)) => fragment == id,
        _ => false,
    }
}

#[cfg(feature = "hydrate")]
pub use browser::init;

#[cfg(feature = "hydrate")]
mod browser {
    use std::rc::Rc;

    use web_sys::{Element, Event, Window};

    use super::{ACTIVE_LINK_CLASS, NAV_LINK_SELECTOR, SECTION_SELECTOR, SectionSpan, active_section, nav_link_matches};
    use crate::error::FxError;
    use crate::util::dom::{self, Page};
    use crate::util::rate_limit::throttle_with_settle;

    struct Tracker {
        window: Window,
        sections: Vec<Element>,
        links: Vec<Element>,
        offset: f64,
    }

    impl Tracker {
        fn spans(&self) -> Vec<SectionSpan> {
            self.sections
                .iter()
                .filter_map(dom::as_html)
                .map(|section| SectionSpan {
                    id: section.id(),
                    top: f64::from(section.offset_top()),
                    height: f64::from(section.offset_height()),
                })
                .collect()
        }

        fn update(&self) -> Result<(), FxError> {
            let spans = self.spans();
            let active = active_section(&spans, self.window.scroll_y()?, self.offset);
            for link in &self.links {
                let is_active = nav_link_matches(link.get_attribute("href").as_deref(), active);
                link.class_list().toggle_with_force(ACTIVE_LINK_CLASS, is_active)?;
            }
            Ok(())
        }
    }

    pub fn init(page: &Page) -> Result<(), FxError> {
        let sections = page.query_all(SECTION_SELECTOR)?;
        let links = page.query_all(NAV_LINK_SELECTOR)?;
        if sections.is_empty() || links.is_empty() {
            log::debug!("no sections or nav links; active section tracking disabled");
            return Ok(());
        }

        let tracker = Rc::new(Tracker {
            window: page.window.clone(),
            sections,
            links,
            offset: page.config.active_section_offset_px,
        });
        tracker.update()?;

        let on_scroll = Rc::clone(&tracker);
        let mut update = throttle_with_settle(&page.scheduler, page.config.active_section_throttle_ms, move || {
            dom::warn_on_err("active section", on_scroll.update());
        });
        dom::listen(&page.window, "scroll", move |_: Event| update())
    }
}
