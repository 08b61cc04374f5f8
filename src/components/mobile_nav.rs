//! Off-canvas mobile menu.
//!
//! Two states, no transitions in between. Every entry into a state re-applies
//! all of its effects, so repeated clicks are harmless.

#[cfg(test)]
#[path = "mobile_nav_test.rs"]
mod mobile_nav_test;

pub const MENU_ID: &str = "mobile-menu";
pub const TRIGGER_ID: &str = "mobile-menu-btn";
pub const CLOSE_ID: &str = "close-menu";
pub const LINK_SELECTOR: &str = ".mobile-nav-link";
pub const SHOW_CLASS: &str = "show";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

/// Inputs the menu reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEvent {
    TriggerClick,
    CloseClick,
    Escape,
    LinkClick,
}

impl MenuState {
    /// State to enter for `event`, or `None` when the event is ignored.
    #[must_use]
    pub fn on(self, event: MenuEvent) -> Option<Self> {
        match (self, event) {
            (_, MenuEvent::TriggerClick) => Some(Self::Open),
            (Self::Closed, MenuEvent::Escape) => None,
            (_, MenuEvent::CloseClick | MenuEvent::Escape | MenuEvent::LinkClick) => Some(Self::Closed),
        }
    }

    /// DOM effects of being in this state.
    #[must_use]
    pub fn presentation(self) -> MenuPresentation {
        match self {
            Self::Open => MenuPresentation {
                show: true,
                aria_hidden: "false",
                aria_expanded: "true",
                body_overflow: "hidden",
            },
            Self::Closed => MenuPresentation {
                show: false,
                aria_hidden: "true",
                aria_expanded: "false",
                body_overflow: "",
            },
        }
    }
}

/// Class, ARIA and scroll-lock values for one menu state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuPresentation {
    /// `show` class on the panel.
    pub show: bool,
    /// `aria-hidden` on the panel.
    pub aria_hidden: &'static str,
    /// `aria-expanded` on the trigger.
    pub aria_expanded: &'static str,
    /// Inline `overflow` on `<body>`; empty restores the stylesheet value.
    pub body_overflow: &'static str,
}

/// Menu state holder driven by DOM events.
#[derive(Debug, Default)]
pub struct MobileMenu {
    state: MenuState,
}

impl MobileMenu {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> MenuState {
        self.state
    }

    /// Apply `event`; returns the effects to render, if any.
    pub fn handle(&mut self, event: MenuEvent) -> Option<MenuPresentation> {
        let next = self.state.on(event)?;
        self.state = next;
        Some(next.presentation())
    }
}

#[cfg(feature = "hydrate")]
pub use browser::init;

#[cfg(feature = "hydrate")]
mod browser {
    use std::cell::RefCell;
    use std::rc::Rc;

    use web_sys::{Event, HtmlElement, KeyboardEvent};

    use super::{CLOSE_ID, LINK_SELECTOR, MENU_ID, MenuEvent, MenuPresentation, MobileMenu, SHOW_CLASS, TRIGGER_ID};
    use crate::error::FxError;
    use crate::util::dom::{self, Page};

    #[derive(Clone)]
    struct MenuElements {
        menu: HtmlElement,
        trigger: HtmlElement,
        body: HtmlElement,
    }

    impl MenuElements {
        fn render(&self, view: MenuPresentation) -> Result<(), FxError> {
            self.menu.class_list().toggle_with_force(SHOW_CLASS, view.show)?;
            self.menu.set_attribute("aria-hidden", view.aria_hidden)?;
            self.trigger.set_attribute("aria-expanded", view.aria_expanded)?;
            dom::set_style(&self.body, "overflow", view.body_overflow)
        }
    }

    pub fn init(page: &Page) -> Result<(), FxError> {
        let (Some(trigger), Some(close), Some(menu)) = (page.by_id(TRIGGER_ID), page.by_id(CLOSE_ID), page.by_id(MENU_ID))
        else {
            log::debug!("mobile menu markup incomplete; drawer disabled");
            return Ok(());
        };

        let machine = Rc::new(RefCell::new(MobileMenu::new()));
        let elements = MenuElements { menu, trigger: trigger.clone(), body: page.body.clone() };
        let dispatch = move |event: MenuEvent| {
            if let Some(view) = machine.borrow_mut().handle(event) {
                dom::warn_on_err("mobile menu", elements.render(view));
            }
        };

        let on_trigger = dispatch.clone();
        dom::listen(&trigger, "click", move |_: Event| on_trigger(MenuEvent::TriggerClick))?;
        let on_close = dispatch.clone();
        dom::listen(&close, "click", move |_: Event| on_close(MenuEvent::CloseClick))?;
        let on_key = dispatch.clone();
        dom::listen(&page.document, "keydown", move |e: KeyboardEvent| {
            if e.key() == "Escape" {
                on_key(MenuEvent::Escape);
            }
        })?;
        for link in page.query_all(LINK_SELECTOR)? {
            let on_link = dispatch.clone();
            dom::listen(&link, "click", move |_: Event| on_link(MenuEvent::LinkClick))?;
        }
        Ok(())
    }
}
