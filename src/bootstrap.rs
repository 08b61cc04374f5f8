//! Page startup: wire every effect once the document is ready.
//!
//! SYSTEM CONTEXT
//! ==============
//! Effects are independent of each other. A page that lacks one block of
//! markup, or a browser that rejects one API call, should lose that effect
//! only. [`run_all`] is that failure boundary: each initializer runs on its
//! own, failures are logged under the initializer's name, and the rest still
//! run. The `loaded` body class is added regardless so the page never stays
//! in its pre-hydration look.

#[cfg(test)]
#[path = "bootstrap_test.rs"]
mod bootstrap_test;

use crate::error::FxError;

pub const LOADED_CLASS: &str = "loaded";
pub const YEAR_ID: &str = "current-year";

/// One named initializer.
pub struct Step<P> {
    pub name: &'static str,
    pub run: fn(&P) -> Result<(), FxError>,
}

/// Which initializers failed, in run order.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct BootReport {
    pub failed: Vec<&'static str>,
}

impl BootReport {
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Run every step against `page`; one failing step never stops the others.
pub fn run_all<P>(page: &P, steps: &[Step<P>]) -> BootReport {
    let mut report = BootReport::default();
    for step in steps {
        if let Err(e) = (step.run)(page) {
            log::error!("Initialization error in {}: {e}", step.name);
            report.failed.push(step.name);
        }
    }
    report
}

#[cfg(feature = "hydrate")]
pub use browser::start;

#[cfg(feature = "hydrate")]
mod browser {
    use web_sys::{ErrorEvent, Event, PromiseRejectionEvent};

    use super::{BootReport, LOADED_CLASS, Step, YEAR_ID, run_all};
    use crate::components::{
        active_section, contact_form, cursor, mobile_nav, particles, perf_hints, project_filter, reveal,
        scroll_progress, smooth_scroll, theme, typing,
    };
    use crate::error::{FxError, describe_js};
    use crate::util::dom::{self, Page};

    const STEPS: &[Step<Page>] = &[
        Step { name: "footer year", run: set_footer_year },
        Step { name: "cursor", run: cursor::init },
        Step { name: "scroll progress", run: scroll_progress::init },
        Step { name: "reveal", run: reveal::init },
        Step { name: "theme", run: theme::init },
        Step { name: "mobile menu", run: mobile_nav::init },
        Step { name: "smooth scroll", run: smooth_scroll::init },
        Step { name: "project filter", run: project_filter::init },
        Step { name: "contact form", run: contact_form::init },
        Step { name: "particles", run: particles::init },
        Step { name: "typing", run: typing::init },
        Step { name: "active section", run: active_section::init },
        Step { name: "perf hints", run: perf_hints::init },
        Step { name: "error handlers", run: install_error_handlers },
    ];

    /// Run startup now, or on `DOMContentLoaded` while the document is still loading.
    /// The visibility handler is installed immediately either way.
    pub fn start() -> Result<(), FxError> {
        let page = Page::current()?;
        install_visibility_handler(&page)?;
        if page.document.ready_state() == "loading" {
            let document = page.document.clone();
            dom::listen_once(&document, "DOMContentLoaded", move || boot(&page))
        } else {
            boot(&page);
            Ok(())
        }
    }

    fn boot(page: &Page) {
        let report: BootReport = run_all(page, STEPS);
        dom::warn_on_err("loaded class", page.body.class_list().add_1(LOADED_CLASS).map_err(FxError::from));
        if report.is_clean() {
            log::info!("page effects ready");
        } else {
            log::warn!("page effects ready; disabled after errors: {}", report.failed.join(", "));
        }
    }

    fn set_footer_year(page: &Page) -> Result<(), FxError> {
        if let Some(year) = page.by_id(YEAR_ID) {
            let now = js_sys::Date::new_0();
            year.set_text_content(Some(&now.get_full_year().to_string()));
        }
        Ok(())
    }

    fn install_error_handlers(page: &Page) -> Result<(), FxError> {
        dom::listen(&page.window, "error", |e: ErrorEvent| {
            log::error!("JavaScript error: {} ({}:{}:{})", e.message(), e.filename(), e.lineno(), e.colno());
        })?;
        dom::listen(&page.window, "unhandledrejection", |e: PromiseRejectionEvent| {
            log::error!("Unhandled promise rejection: {}", describe_js(&e.reason()));
        })
    }

    fn install_visibility_handler(page: &Page) -> Result<(), FxError> {
        let document = page.document.clone();
        dom::listen(&page.document, "visibilitychange", move |_: Event| {
            let state = particles::PlayState::for_hidden(document.hidden());
            dom::warn_on_err("particle visibility", particles::apply_play_state(&document, state));
        })
    }
}
