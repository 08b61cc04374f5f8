//! One-shot reveal animations for elements scrolling into view.
//!
//! An element gains `visible` the first time it intersects the viewport and is
//! then unobserved, so it never un-reveals. Skill items additionally fill their
//! progress bar to the width declared on the bar, shortly after the reveal so
//! the fill animates on a visible element.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

pub const REVEAL_SELECTOR: &str = ".fade-in, .skill-item";
pub const VISIBLE_CLASS: &str = "visible";
pub const SKILL_ITEM_CLASS: &str = "skill-item";
pub const SKILL_PROGRESS_SELECTOR: &str = ".skill-progress";
pub const SKILL_WIDTH_ATTR: &str = "data-width";

/// What to do with one intersection entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RevealStep {
    /// Not in view yet; keep observing.
    Wait,
    /// Mark visible, stop observing, and fill the skill bar if one is given.
    Reveal { fill_percent: Option<f64> },
}

/// Decide the reveal for an entry. `skill_width` is the raw `data-width` of
/// the element's progress bar, when it is a skill item that has one.
#[must_use]
pub fn plan_reveal(is_intersecting: bool, skill_width: Option<&str>) -> RevealStep {
    if !is_intersecting {
        return RevealStep::Wait;
    }
    RevealStep::Reveal { fill_percent: skill_width.and_then(parse_fill_percent) }
}

/// Parse a `data-width` value such as `"85"` or `"85%"`, clamped to `0..=100`.
#[must_use]
pub fn parse_fill_percent(raw: &str) -> Option<f64> {
    let trimmed = raw.trim().trim_end_matches('%').trim_end();
    let Ok(value) = trimmed.parse::<f64>() else {
        return None;
    };
    value.is_finite().then(|| value.clamp(0.0, 100.0))
}

#[cfg(feature = "hydrate")]
pub use browser::init;

#[cfg(feature = "hydrate")]
mod browser {
    use js_sys::Array;
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::{JsCast, JsValue};
    use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

    use super::{
        REVEAL_SELECTOR, RevealStep, SKILL_ITEM_CLASS, SKILL_PROGRESS_SELECTOR, SKILL_WIDTH_ATTR, VISIBLE_CLASS,
        plan_reveal,
    };
    use crate::error::FxError;
    use crate::scheduler::{BrowserScheduler, Scheduler};
    use crate::util::dom::{self, Page};

    pub fn init(page: &Page) -> Result<(), FxError> {
        let targets = page.query_all(REVEAL_SELECTOR)?;
        if targets.is_empty() {
            log::debug!("no {REVEAL_SELECTOR}; reveal animations disabled");
            return Ok(());
        }

        let scheduler = page.scheduler;
        let fill_delay_ms = page.config.skill_fill_delay_ms;
        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Some(entry) = entry.dyn_ref::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    dom::warn_on_err(
                        "reveal",
                        handle_entry(entry, &observer, scheduler, fill_delay_ms),
                    );
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(page.config.reveal_threshold));
        options.set_root_margin(&page.config.reveal_root_margin);
        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
        callback.forget();

        for target in &targets {
            observer.observe(target);
        }
        Ok(())
    }

    fn handle_entry(
        entry: &IntersectionObserverEntry,
        observer: &IntersectionObserver,
        scheduler: BrowserScheduler,
        fill_delay_ms: u32,
    ) -> Result<(), FxError> {
        let target = entry.target();
        let bar = skill_bar(&target)?;
        let width = bar.as_ref().and_then(|b| b.get_attribute(SKILL_WIDTH_ATTR));

        let RevealStep::Reveal { fill_percent } = plan_reveal(entry.is_intersecting(), width.as_deref()) else {
            return Ok(());
        };
        target.class_list().add_1(VISIBLE_CLASS)?;
        observer.unobserve(&target);

        if let (Some(bar), Some(percent)) = (bar.as_ref().and_then(dom::as_html), fill_percent) {
            scheduler.defer(
                fill_delay_ms,
                Box::new(move || {
                    dom::warn_on_err("skill fill", dom::set_style(&bar, "width", &format!("{percent}%")));
                }),
            )?;
        }
        Ok(())
    }

    fn skill_bar(target: &Element) -> Result<Option<Element>, FxError> {
        if !target.class_list().contains(SKILL_ITEM_CLASS) {
            return Ok(None);
        }
        Ok(target.query_selector(SKILL_PROGRESS_SELECTOR)?)
    }
}
