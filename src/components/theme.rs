//! Light/dark theme toggle with a persisted preference.
//!
//! The preference store is consulted once at startup; without a stored choice
//! the OS color-scheme query decides. Every toggle writes the explicit choice,
//! which then wins over the OS on later loads.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort: if the store throws (private browsing, quota),
//! the toggle still flips the page and the failure is only logged.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::error::FxError;

pub const TOGGLE_ID: &str = "theme-toggle";
pub const ICON_SELECTOR: &str = "i";
pub const DARK_CLASS: &str = "dark";
pub const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

/// The two page themes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    /// Stored representation.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Any stored value other than `"dark"` means light.
    #[must_use]
    pub fn from_stored(value: &str) -> Self {
        if value == "dark" { Self::Dark } else { Self::Light }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// Icon classes: a sun offers the way back to light, a moon the way to dark.
    #[must_use]
    pub fn icon_class(self) -> &'static str {
        match self {
            Self::Dark => "fas fa-sun text-yellow-400 text-lg",
            Self::Light => "fas fa-moon text-gray-600 text-lg",
        }
    }
}

/// Theme on first paint. An empty stored value counts as no choice.
#[must_use]
pub fn resolve_initial(stored: Option<&str>, os_prefers_dark: bool) -> Theme {
    match stored.filter(|value| !value.is_empty()) {
        Some(value) => Theme::from_stored(value),
        None if os_prefers_dark => Theme::Dark,
        None => Theme::Light,
    }
}

/// Small persistent key-value store scoped to the site.
pub trait PreferenceStore {
    fn read(&self, key: &str) -> Result<Option<String>, FxError>;
    fn write(&self, key: &str, value: &str) -> Result<(), FxError>;
}

/// Current theme plus where to persist it.
pub struct ThemeController<S: PreferenceStore> {
    store: S,
    key: String,
    current: Theme,
}

impl<S: PreferenceStore> ThemeController<S> {
    /// Resolve the startup theme. An unreadable store counts as "no choice yet".
    pub fn load(store: S, key: impl Into<String>, os_prefers_dark: bool) -> Self {
        let key = key.into();
        let stored = match store.read(&key) {
            Ok(value) => value,
            Err(e) => {
                log::warn!("theme preference unreadable, using OS scheme: {e}");
                None
            }
        };
        let current = resolve_initial(stored.as_deref(), os_prefers_dark);
        Self { store, key, current }
    }

    #[must_use]
    pub fn current(&self) -> Theme {
        self.current
    }

    /// Flip the theme and persist the explicit choice.
    pub fn toggle(&mut self) -> Theme {
        self.current = self.current.toggled();
        if let Err(e) = self.store.write(&self.key, self.current.as_str()) {
            log::warn!("theme preference not saved: {e}");
        }
        self.current
    }
}

#[cfg(feature = "hydrate")]
pub use browser::{LocalStorage, init};

#[cfg(feature = "hydrate")]
mod browser {
    use std::cell::RefCell;
    use std::rc::Rc;

    use web_sys::{Element, Event, HtmlElement, Storage, Window};

    use super::{DARK_CLASS, DARK_SCHEME_QUERY, ICON_SELECTOR, PreferenceStore, TOGGLE_ID, Theme, ThemeController};
    use crate::error::{FxError, describe_js};
    use crate::util::dom::{self, Page};

    /// `window.localStorage`, or nothing when the browser refuses access.
    pub struct LocalStorage {
        storage: Option<Storage>,
    }

    impl LocalStorage {
        pub fn open(window: &Window) -> Self {
            match window.local_storage() {
                Ok(storage) => Self { storage },
                Err(e) => {
                    log::warn!("localStorage unavailable: {}", describe_js(&e));
                    Self { storage: None }
                }
            }
        }
    }

    impl PreferenceStore for LocalStorage {
        fn read(&self, key: &str) -> Result<Option<String>, FxError> {
            let Some(storage) = &self.storage else {
                return Ok(None);
            };
            storage.get_item(key).map_err(|e| FxError::Storage(describe_js(&e)))
        }

        fn write(&self, key: &str, value: &str) -> Result<(), FxError> {
            let Some(storage) = &self.storage else {
                return Err(FxError::Storage("localStorage unavailable".to_owned()));
            };
            storage.set_item(key, value).map_err(|e| FxError::Storage(describe_js(&e)))
        }
    }

    pub fn init(page: &Page) -> Result<(), FxError> {
        let Some(toggle) = page.by_id(TOGGLE_ID) else {
            log::debug!("no #{TOGGLE_ID}; theme toggle disabled");
            return Ok(());
        };
        let Some(icon) = toggle.query_selector(ICON_SELECTOR)? else {
            log::debug!("#{TOGGLE_ID} has no icon; theme toggle disabled");
            return Ok(());
        };

        let os_prefers_dark = page
            .window
            .match_media(DARK_SCHEME_QUERY)?
            .is_some_and(|query| query.matches());
        let controller = ThemeController::load(
            LocalStorage::open(&page.window),
            page.config.theme_storage_key.clone(),
            os_prefers_dark,
        );
        apply(&page.body, &icon, controller.current())?;

        let controller = Rc::new(RefCell::new(controller));
        let body = page.body.clone();
        dom::listen(&toggle, "click", move |_: Event| {
            let theme = controller.borrow_mut().toggle();
            dom::warn_on_err("theme toggle", apply(&body, &icon, theme));
        })
    }

    fn apply(body: &HtmlElement, icon: &Element, theme: Theme) -> Result<(), FxError> {
        body.class_list().toggle_with_force(DARK_CLASS, theme.is_dark())?;
        icon.set_class_name(theme.icon_class());
        Ok(())
    }
}
