//! Manual clock for deterministic timing tests.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use super::Scheduler;
use crate::error::FxError;

struct PendingTimer {
    id: u64,
    due: f64,
    task: Box<dyn FnOnce()>,
}

#[derive(Default)]
struct VirtualState {
    now: f64,
    next_id: u64,
    timers: Vec<PendingTimer>,
    frames: Vec<Box<dyn FnOnce(f64)>>,
}

impl VirtualState {
    fn push_timer(&mut self, delay_ms: u32, task: Box<dyn FnOnce()>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.timers.push(PendingTimer { id, due: self.now + f64::from(delay_ms), task });
        id
    }

    fn take_timer(&mut self, id: u64) -> Option<PendingTimer> {
        let idx = self.timers.iter().position(|t| t.id == id)?;
        Some(self.timers.remove(idx))
    }

    fn take_due(&mut self, until: f64) -> Option<PendingTimer> {
        let idx = self
            .timers
            .iter()
            .enumerate()
            .filter(|(_, t)| t.due <= until)
            .min_by(|(_, a), (_, b)| a.due.total_cmp(&b.due).then(a.id.cmp(&b.id)))
            .map(|(idx, _)| idx)?;
        Some(self.timers.remove(idx))
    }
}

/// Scheduler whose clock only moves when a test says so.
#[derive(Clone, Default)]
pub struct VirtualScheduler {
    state: Rc<RefCell<VirtualState>>,
}

/// Guard for a virtual timeout; dropping it before it fires cancels it.
pub struct VirtualTimer {
    state: Weak<RefCell<VirtualState>>,
    id: u64,
}

impl Drop for VirtualTimer {
    fn drop(&mut self) {
        let Some(state) = self.state.upgrade() else {
            return;
        };
        // Release the borrow before the cancelled task (and anything it owns) drops.
        let cancelled = state.borrow_mut().take_timer(self.id);
        drop(cancelled);
    }
}

impl VirtualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> f64 {
        self.state.borrow().now
    }

    pub fn pending_timers(&self) -> usize {
        self.state.borrow().timers.len()
    }

    pub fn pending_frames(&self) -> usize {
        self.state.borrow().frames.len()
    }

    /// Move the clock forward, firing due timers in deadline order.
    pub fn advance(&self, ms: f64) {
        let target = self.now() + ms;
        loop {
            let due = self.state.borrow_mut().take_due(target);
            let Some(timer) = due else {
                break;
            };
            self.state.borrow_mut().now = timer.due;
            (timer.task)();
        }
        self.state.borrow_mut().now = target;
    }

    /// Move the clock to an absolute time.
    pub fn advance_to(&self, at: f64) {
        let delta = at - self.now();
        if delta > 0.0 {
            self.advance(delta);
        }
    }

    /// Run the frame callbacks queued so far. Frames requested while running
    /// wait for the next call.
    pub fn run_frame(&self) {
        let (frames, now) = {
            let mut state = self.state.borrow_mut();
            (std::mem::take(&mut state.frames), state.now)
        };
        for frame in frames {
            frame(now);
        }
    }
}

impl Scheduler for VirtualScheduler {
    type Timer = VirtualTimer;

    fn now_ms(&self) -> f64 {
        self.now()
    }

    fn timeout(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> VirtualTimer {
        let id = self.state.borrow_mut().push_timer(delay_ms, task);
        VirtualTimer { state: Rc::downgrade(&self.state), id }
    }

    fn defer(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Result<(), FxError> {
        self.state.borrow_mut().push_timer(delay_ms, task);
        Ok(())
    }

    fn next_frame(&self, task: Box<dyn FnOnce(f64)>) -> Result<(), FxError> {
        self.state.borrow_mut().frames.push(task);
        Ok(())
    }
}
