//! Debounce and throttle wrappers for event handlers.
//!
//! DESIGN
//! ======
//! Both wrappers read time from a [`Scheduler`], so scroll handlers in the
//! browser and the unit tests share one implementation. Distinct wrapped
//! instances never share state.
//!
//! - Throttle admits the first call, then drops calls until `min_interval_ms`
//!   has elapsed since the last admitted one. Dropped calls are not queued.
//! - Debounce re-arms on every call and fires once, `wait_ms` after the last
//!   call, with the last call's arguments.

#[cfg(test)]
#[path = "rate_limit_test.rs"]
mod rate_limit_test;

use std::cell::RefCell;
use std::rc::Rc;

use crate::scheduler::Scheduler;

/// Timestamp gate behind [`throttle`].
#[derive(Clone, Copy, Debug)]
pub struct ThrottleGate {
    min_interval_ms: f64,
    last_admitted_ms: Option<f64>,
}

impl ThrottleGate {
    #[must_use]
    pub fn new(min_interval_ms: u32) -> Self {
        Self { min_interval_ms: f64::from(min_interval_ms), last_admitted_ms: None }
    }

    /// Whether a call at `now_ms` may run. Admitting a call restarts the window.
    pub fn admit(&mut self, now_ms: f64) -> bool {
        match self.last_admitted_ms {
            Some(last) if now_ms - last < self.min_interval_ms => false,
            _ => {
                self.last_admitted_ms = Some(now_ms);
                true
            }
        }
    }
}

/// Wrap `action` so it runs at most once per `min_interval_ms`.
pub fn throttle<S, A, F>(scheduler: &S, min_interval_ms: u32, mut action: F) -> impl FnMut(A) + use<S, A, F>
where
    S: Scheduler,
    A: 'static,
    F: FnMut(A) + 'static,
{
    let scheduler = scheduler.clone();
    let mut gate = ThrottleGate::new(min_interval_ms);
    move |args| {
        if gate.admit(scheduler.now_ms()) {
            action(args);
        }
    }
}

/// Handle returned by [`debounce`]. Clones share the same pending call.
///
/// The wrapped action must not call its own wrapper.
pub struct Debounced<S: Scheduler, A> {
    scheduler: S,
    wait_ms: u32,
    action: Rc<RefCell<dyn FnMut(A)>>,
    pending: Rc<RefCell<Option<S::Timer>>>,
}

impl<S: Scheduler, A> Clone for Debounced<S, A> {
    fn clone(&self) -> Self {
        Self {
            scheduler: self.scheduler.clone(),
            wait_ms: self.wait_ms,
            action: Rc::clone(&self.action),
            pending: Rc::clone(&self.pending),
        }
    }
}

impl<S: Scheduler, A: 'static> Debounced<S, A> {
    /// Cancel the pending call, if any, and schedule a new one with `args`.
    pub fn call(&self, args: A) {
        let action = Rc::clone(&self.action);
        let timer = self.scheduler.timeout(
            self.wait_ms,
            Box::new(move || {
                (&mut *action.borrow_mut())(args);
            }),
        );
        // Dropping the previous guard cancels its callback.
        let previous = self.pending.borrow_mut().replace(timer);
        drop(previous);
    }
}

/// Wrap `action` so it runs once, `wait_ms` after calls stop arriving.
pub fn debounce<S, A, F>(scheduler: &S, wait_ms: u32, action: F) -> Debounced<S, A>
where
    S: Scheduler,
    A: 'static,
    F: FnMut(A) + 'static,
{
    Debounced {
        scheduler: scheduler.clone(),
        wait_ms,
        action: Rc::new(RefCell::new(action)),
        pending: Rc::new(RefCell::new(None)),
    }
}

/// Throttled handler that also runs once after calls settle.
///
/// Throttling alone drops the trailing event of a scroll burst, which can
/// leave scroll-derived state one step behind where the page came to rest.
pub fn throttle_with_settle<S, F>(scheduler: &S, min_interval_ms: u32, action: F) -> impl FnMut() + use<S, F>
where
    S: Scheduler,
    F: FnMut() + 'static,
{
    let action = Rc::new(RefCell::new(action));
    let settle_action = Rc::clone(&action);
    let settle = debounce(scheduler, min_interval_ms, move |()| (&mut *settle_action.borrow_mut())());
    let mut throttled = throttle(scheduler, min_interval_ms, move |()| (&mut *action.borrow_mut())());
    move || {
        throttled(());
        settle.call(());
    }
}
