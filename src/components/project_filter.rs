//! Category filter for the project grid.
//!
//! Matching cards are put back in the layout transparent and offset, then
//! faded in on the next frame. Non-matching cards fade out in place and leave
//! the layout once the CSS transition has had time to finish.
//!
//! DESIGN
//! ======
//! Every selection bumps a generation counter. Deferred steps (the enter frame
//! and the exit hide) carry the generation they were scheduled under and do
//! nothing if a newer selection has happened since. Without this a card that
//! is hidden, then quickly re-shown, would be hidden again by the old timer.

#[cfg(test)]
#[path = "project_filter_test.rs"]
mod project_filter_test;

use std::cell::Cell;
use std::rc::Rc;

use crate::error::FxError;
use crate::scheduler::Scheduler;

pub const BUTTON_SELECTOR: &str = ".project-filter";
pub const ITEM_SELECTOR: &str = ".project-item";
pub const FILTER_ATTR: &str = "data-filter";
pub const CATEGORY_ATTR: &str = "data-category";
pub const ACTIVE_CLASS: &str = "active";
pub const ALL: &str = "all";

/// Whether a card in `category` is shown under `filter`.
#[must_use]
pub fn matches(filter: &str, category: Option<&str>) -> bool {
    filter == ALL || category == Some(filter)
}

/// `aria-selected` value for a filter button.
#[must_use]
pub fn aria_selected(is_active: bool) -> &'static str {
    if is_active { "true" } else { "false" }
}

/// Inline styles a card passes through while filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardStyle {
    /// Back in the layout, still transparent and offset.
    Enter,
    /// Fully shown.
    Entered,
    /// Fading out, still in the layout.
    Exit,
    /// Out of the layout.
    Hidden,
}

impl CardStyle {
    /// `(property, value)` pairs to set for this step.
    #[must_use]
    pub fn declarations(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Self::Enter => &[("display", "block"), ("opacity", "0"), ("transform", "translateY(20px)")],
            Self::Entered => &[("opacity", "1"), ("transform", "translateY(0)")],
            Self::Exit => &[("opacity", "0"), ("transform", "translateY(20px)")],
            Self::Hidden => &[("display", "none")],
        }
    }
}

/// One project card as the filter sees it.
pub trait ProjectCard: Clone + 'static {
    fn category(&self) -> Option<String>;
    fn apply(&self, style: CardStyle) -> Result<(), FxError>;
}

/// Applies selections to a fixed set of cards.
pub struct FilterController<S: Scheduler, C: ProjectCard> {
    scheduler: S,
    transition_ms: u32,
    cards: Vec<C>,
    generation: Rc<Cell<u64>>,
}

impl<S: Scheduler, C: ProjectCard> FilterController<S, C> {
    pub fn new(scheduler: S, transition_ms: u32, cards: Vec<C>) -> Self {
        Self { scheduler, transition_ms, cards, generation: Rc::new(Cell::new(0)) }
    }

    /// Show the cards matching `filter` and hide the rest.
    pub fn select(&self, filter: &str) -> Result<(), FxError> {
        let generation = self.generation.get().wrapping_add(1);
        self.generation.set(generation);

        for card in &self.cards {
            if matches(filter, card.category().as_deref()) {
                card.apply(CardStyle::Enter)?;
                let step = deferred(card.clone(), Rc::clone(&self.generation), generation, CardStyle::Entered);
                self.scheduler.next_frame(Box::new(move |_ts| step()))?;
            } else {
                card.apply(CardStyle::Exit)?;
                let step = deferred(card.clone(), Rc::clone(&self.generation), generation, CardStyle::Hidden);
                self.scheduler.defer(self.transition_ms, Box::new(step))?;
            }
        }
        Ok(())
    }
}

/// A card step that only runs if no newer selection has happened.
fn deferred<C: ProjectCard>(card: C, current: Rc<Cell<u64>>, generation: u64, style: CardStyle) -> impl FnOnce() {
    move || {
        if current.get() != generation {
            return;
        }
        if let Err(e) = card.apply(style) {
            log::warn!("project filter {style:?}: {e}");
        }
    }
}

#[cfg(feature = "hydrate")]
pub use browser::init;

#[cfg(feature = "hydrate")]
mod browser {
    use std::rc::Rc;

    use web_sys::{Element, Event, HtmlElement};

    use super::{
        ACTIVE_CLASS, BUTTON_SELECTOR, CATEGORY_ATTR, CardStyle, FILTER_ATTR, FilterController, ITEM_SELECTOR,
        ProjectCard, aria_selected,
    };
    use crate::error::FxError;
    use crate::util::dom::{self, Page};

    #[derive(Clone)]
    struct DomCard(HtmlElement);

    impl ProjectCard for DomCard {
        fn category(&self) -> Option<String> {
            self.0.get_attribute(CATEGORY_ATTR)
        }

        fn apply(&self, style: CardStyle) -> Result<(), FxError> {
            for (property, value) in style.declarations() {
                dom::set_style(&self.0, property, value)?;
            }
            Ok(())
        }
    }

    pub fn init(page: &Page) -> Result<(), FxError> {
        let buttons = page.query_all(BUTTON_SELECTOR)?;
        let cards: Vec<DomCard> = page
            .query_all(ITEM_SELECTOR)?
            .iter()
            .filter_map(dom::as_html)
            .map(DomCard)
            .collect();
        if buttons.is_empty() || cards.is_empty() {
            log::debug!("no filter buttons or project items; project filter disabled");
            return Ok(());
        }

        let controller = Rc::new(FilterController::new(page.scheduler, page.config.filter_transition_ms, cards));
        let buttons = Rc::new(buttons);
        for button in buttons.iter() {
            let clicked = button.clone();
            let all_buttons = Rc::clone(&buttons);
            let controller = Rc::clone(&controller);
            dom::listen(button, "click", move |_: Event| {
                dom::warn_on_err("project filter", on_click(&clicked, &all_buttons, &controller));
            })?;
        }
        Ok(())
    }

    fn on_click(
        clicked: &Element,
        buttons: &[Element],
        controller: &FilterController<crate::scheduler::BrowserScheduler, DomCard>,
    ) -> Result<(), FxError> {
        for button in buttons {
            let is_active = button == clicked;
            button.class_list().toggle_with_force(ACTIVE_CLASS, is_active)?;
            button.set_attribute("aria-selected", aria_selected(is_active))?;
        }
        let Some(filter) = clicked.get_attribute(FILTER_ATTR) else {
            log::debug!("filter button without {FILTER_ATTR}");
            return Ok(());
        };
        controller.select(&filter)
    }
}
