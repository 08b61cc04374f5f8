//! # portfolio-fx
//!
//! Client-side behavior for a static single-page portfolio, compiled to WASM.
//! The HTML and CSS are served as-is; this crate attaches to the markup after
//! load and drives the interactive effects: cursor follower, scroll progress,
//! reveal-on-scroll, theme toggle, mobile menu, anchor scrolling, project
//! filter, contact form, particles, typing effect and active-section nav.
//!
//! Without the `hydrate` feature only the browser-independent cores build,
//! which is what the unit tests run against.

pub mod bootstrap;
pub mod components;
pub mod config;
pub mod error;
pub mod scheduler;
pub mod util;

pub use config::FxConfig;
pub use error::FxError;

/// WASM entry point: set up console logging, then wire the page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    if let Err(e) = console_log::init_with_level(level) {
        web_sys::console::warn_1(&format!("console logger already set: {e}").into());
    }
    if let Err(e) = bootstrap::start() {
        log::error!("Initialization error: {e}");
    }
}
