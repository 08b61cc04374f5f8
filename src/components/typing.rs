//! Typewriter reveal of the hero name.
//!
//! The target is cleared at startup, then one character (Unicode scalar value)
//! appears per step after an initial delay. Runs once; no looping or deletion.

#[cfg(test)]
#[path = "typing_test.rs"]
mod typing_test;

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::FxError;
use crate::scheduler::Scheduler;

pub const TARGET_ID: &str = "typing-text";

/// Reveal cursor over a fixed string.
#[derive(Debug, Clone)]
pub struct TypingEffect {
    chars: Vec<char>,
    shown: usize,
}

impl TypingEffect {
    /// Starts with nothing revealed.
    #[must_use]
    pub fn new(text: &str) -> Self {
        Self { chars: text.chars().collect(), shown: 0 }
    }

    /// Reveal one more character and return the visible prefix, or `None`
    /// once the whole text is shown.
    pub fn reveal_next(&mut self) -> Option<String> {
        if self.is_complete() {
            return None;
        }
        self.shown += 1;
        Some(self.visible())
    }

    #[must_use]
    pub fn visible(&self) -> String {
        self.chars[..self.shown].iter().collect()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.shown >= self.chars.len()
    }
}

struct Typewriter<F> {
    effect: TypingEffect,
    render: F,
}

impl<F: FnMut(&str)> Typewriter<F> {
    /// Returns whether more characters remain.
    fn tick(&mut self) -> bool {
        if let Some(visible) = self.effect.reveal_next() {
            (self.render)(&visible);
        }
        !self.effect.is_complete()
    }
}

/// Clear the target now, then reveal `text` one character per `step_ms`,
/// starting after `start_delay_ms`.
pub fn play<S, F>(scheduler: &S, text: &str, start_delay_ms: u32, step_ms: u32, mut render: F) -> Result<(), FxError>
where
    S: Scheduler,
    F: FnMut(&str) + 'static,
{
    render("");
    let effect = TypingEffect::new(text);
    if effect.is_complete() {
        return Ok(());
    }
    let writer = Rc::new(RefCell::new(Typewriter { effect, render }));
    schedule_tick(scheduler.clone(), writer, start_delay_ms, step_ms)
}

fn schedule_tick<S, F>(scheduler: S, writer: Rc<RefCell<Typewriter<F>>>, delay_ms: u32, step_ms: u32) -> Result<(), FxError>
where
    S: Scheduler,
    F: FnMut(&str) + 'static,
{
    let next = scheduler.clone();
    scheduler.defer(
        delay_ms,
        Box::new(move || {
            let more = writer.borrow_mut().tick();
            if more && let Err(e) = schedule_tick(next, writer, step_ms, step_ms) {
                log::warn!("typing effect stopped: {e}");
            }
        }),
    )
}

#[cfg(feature = "hydrate")]
pub use browser::init;

#[cfg(feature = "hydrate")]
mod browser {
    use super::{TARGET_ID, play};
    use crate::error::FxError;
    use crate::util::dom::Page;

    pub fn init(page: &Page) -> Result<(), FxError> {
        let Some(target) = page.by_id(TARGET_ID) else {
            log::debug!("no #{TARGET_ID}; typing effect disabled");
            return Ok(());
        };
        let config = &page.config;
        play(
            &page.scheduler,
            &config.typing_text,
            config.typing_start_delay_ms,
            config.typing_step_ms,
            move |visible: &str| target.set_text_content(Some(visible)),
        )
    }
}
