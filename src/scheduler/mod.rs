//! Timers and animation frames behind one seam.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every "wait" in the effects layer is a fresh scheduled callback: debounce
//! delays, transition delays, the typing cadence, per-frame cursor easing and
//! the simulated submit latency. Routing them through [`Scheduler`] keeps the
//! effect cores testable against a manual clock while the browser build runs
//! on `gloo-timers` and `requestAnimationFrame`.
//!
//! DESIGN
//! ======
//! - `timeout` returns a guard; dropping the guard cancels the callback. This
//!   is what debounce and message supersession rely on.
//! - `defer` is fire-and-forget for delays nobody ever cancels.
//! - Self-rescheduling loops run under a [`CancelToken`] instead of recursing
//!   unconditionally for the lifetime of the page.

#[cfg(test)]
#[path = "scheduler_test.rs"]
mod scheduler_test;

#[cfg(feature = "hydrate")]
mod browser;
#[cfg(test)]
mod virtual_time;

#[cfg(feature = "hydrate")]
pub use browser::BrowserScheduler;
#[cfg(test)]
pub use virtual_time::VirtualScheduler;

use std::cell::{Cell, RefCell};
use std::future::Future;
use std::rc::Rc;

use futures::channel::oneshot;

use crate::error::FxError;

/// Single-threaded timer and frame source.
pub trait Scheduler: Clone + 'static {
    /// Pending timeout handle. Dropping it cancels the callback.
    type Timer: 'static;

    /// Milliseconds on a monotonic-enough clock.
    fn now_ms(&self) -> f64;

    /// Run `task` after `delay_ms` unless the returned guard is dropped first.
    fn timeout(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Self::Timer;

    /// Run `task` after `delay_ms`. Cannot be cancelled.
    fn defer(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Result<(), FxError>;

    /// Run `task` before the next repaint with the frame timestamp.
    fn next_frame(&self, task: Box<dyn FnOnce(f64)>) -> Result<(), FxError>;
}

/// Shared stop flag for repeating tasks.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Rc<Cell<bool>>);

impl CancelToken {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.set(true);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.0.get()
    }
}

/// Call `tick` once per animation frame until `token` is cancelled.
///
/// `tick` may cancel the token itself; no further frame is requested after that.
pub fn run_every_frame<S, F>(scheduler: &S, token: &CancelToken, tick: F) -> Result<(), FxError>
where
    S: Scheduler,
    F: FnMut(f64) + 'static,
{
    let tick: Rc<RefCell<dyn FnMut(f64)>> = Rc::new(RefCell::new(tick));
    schedule_frame(scheduler.clone(), token.clone(), tick)
}

fn schedule_frame<S: Scheduler>(
    scheduler: S,
    token: CancelToken,
    tick: Rc<RefCell<dyn FnMut(f64)>>,
) -> Result<(), FxError> {
    let next = scheduler.clone();
    scheduler.next_frame(Box::new(move |ts| {
        if token.is_cancelled() {
            return;
        }
        (&mut *tick.borrow_mut())(ts);
        if token.is_cancelled() {
            return;
        }
        if let Err(e) = schedule_frame(next, token, tick) {
            log::error!("frame loop stopped: {e}");
        }
    }))
}

/// Resolve after `delay_ms` on `scheduler`'s clock.
///
/// Dropping the future cancels the underlying timer.
pub fn sleep<S: Scheduler>(scheduler: &S, delay_ms: u32) -> impl Future<Output = Result<(), FxError>> + 'static {
    let (tx, rx) = oneshot::channel::<()>();
    let timer = scheduler.timeout(
        delay_ms,
        Box::new(move || {
            if tx.send(()).is_err() {
                log::debug!("sleep finished after its waiter went away");
            }
        }),
    );
    async move {
        let _timer = timer;
        rx.await
            .map_err(|_canceled| FxError::Scheduler("timer dropped before firing".to_owned()))
    }
}
