//! Custom cursor that eases toward the pointer.
//!
//! The tracking element trails the real pointer: each animation frame closes a
//! fixed fraction of the remaining distance. Hovering interactive or text
//! elements toggles independent classes the stylesheet uses to morph it.

#[cfg(test)]
#[path = "cursor_test.rs"]
mod cursor_test;

pub const CURSOR_SELECTOR: &str = ".custom-cursor";
pub const INTERACTIVE_SELECTOR: &str = "a, button, .card-hover, [role=\"button\"]";
pub const TEXT_SELECTOR: &str = "p, h1, h2, h3, h4, h5, h6, span, strong, em";

/// A point in viewport (client) coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Pointer target plus the eased position actually drawn.
#[derive(Debug, Clone)]
pub struct PointerFollower {
    target: Point,
    current: Point,
    easing: f64,
}

impl PointerFollower {
    /// Both positions start at the origin.
    #[must_use]
    pub fn new(easing: f64) -> Self {
        Self { target: Point::default(), current: Point::default(), easing }
    }

    pub fn set_target(&mut self, target: Point) {
        self.target = target;
    }

    /// Advance one frame and return the position to draw.
    pub fn step(&mut self) -> Point {
        self.current.x += (self.target.x - self.current.x) * self.easing;
        self.current.y += (self.target.y - self.current.y) * self.easing;
        self.current
    }

    #[must_use]
    pub fn current(&self) -> Point {
        self.current
    }
}

/// CSS transform placing the tracking element at `p`.
#[must_use]
pub fn translate_css(p: Point) -> String {
    format!("translate({}px, {}px)", p.x, p.y)
}

/// Which hover flag an element group drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverKind {
    Interactive,
    Text,
}

impl HoverKind {
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Interactive => "hover",
            Self::Text => "text-hover",
        }
    }

    #[must_use]
    pub fn selector(self) -> &'static str {
        match self {
            Self::Interactive => INTERACTIVE_SELECTOR,
            Self::Text => TEXT_SELECTOR,
        }
    }
}

#[cfg(feature = "hydrate")]
pub use browser::init;

#[cfg(feature = "hydrate")]
mod browser {
    use std::cell::RefCell;
    use std::rc::Rc;

    use web_sys::{Element, Event, HtmlElement, MouseEvent};

    use super::{CURSOR_SELECTOR, HoverKind, Point, PointerFollower, translate_css};
    use crate::error::FxError;
    use crate::scheduler::{CancelToken, run_every_frame};
    use crate::util::dom::{self, Page};

    pub fn init(page: &Page) -> Result<(), FxError> {
        let Some(cursor) = page.query_html(CURSOR_SELECTOR)? else {
            log::debug!("no {CURSOR_SELECTOR}; cursor follower disabled");
            return Ok(());
        };

        let follower = Rc::new(RefCell::new(PointerFollower::new(page.config.cursor_easing)));
        {
            let follower = Rc::clone(&follower);
            dom::listen(&page.document, "mousemove", move |e: MouseEvent| {
                let target = Point::new(f64::from(e.client_x()), f64::from(e.client_y()));
                follower.borrow_mut().set_target(target);
            })?;
        }

        // Stops itself if the page script removes the cursor element.
        let token = CancelToken::new();
        let stop = token.clone();
        let drawn = cursor.clone();
        run_every_frame(&page.scheduler, &token, move |_ts| {
            if !drawn.is_connected() {
                stop.cancel();
                return;
            }
            let position = follower.borrow_mut().step();
            dom::warn_on_err("cursor transform", dom::set_style(&drawn, "transform", &translate_css(position)));
        })?;

        for kind in [HoverKind::Interactive, HoverKind::Text] {
            for target in page.query_all(kind.selector())? {
                bind_hover(&target, &cursor, kind)?;
            }
        }
        Ok(())
    }

    fn bind_hover(target: &Element, cursor: &HtmlElement, kind: HoverKind) -> Result<(), FxError> {
        let on_enter = cursor.clone();
        dom::listen(target, "mouseenter", move |_: Event| {
            dom::warn_on_err("cursor hover", on_enter.class_list().add_1(kind.class()).map_err(FxError::from));
        })?;
        let on_leave = cursor.clone();
        dom::listen(target, "mouseleave", move |_: Event| {
            dom::warn_on_err("cursor hover", on_leave.class_list().remove_1(kind.class()).map_err(FxError::from));
        })?;
        Ok(())
    }
}
