//! `Scheduler` backed by the browser event loop.

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

use super::Scheduler;
use crate::error::FxError;

/// Timers via `gloo-timers`, frames via `requestAnimationFrame`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    type Timer = Timeout;

    fn now_ms(&self) -> f64 {
        js_sys::Date::now()
    }

    fn timeout(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Timeout {
        Timeout::new(delay_ms, task)
    }

    fn defer(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Result<(), FxError> {
        let window = web_sys::window().ok_or(FxError::Environment("window"))?;
        // `once_into_js` frees the closure after it runs; nothing leaks per call.
        let callback = Closure::once_into_js(move || task());
        let delay = i32::try_from(delay_ms).unwrap_or(i32::MAX);
        window
            .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), delay)
            .map_err(|e| FxError::Scheduler(crate::error::describe_js(&e)))?;
        Ok(())
    }

    fn next_frame(&self, task: Box<dyn FnOnce(f64)>) -> Result<(), FxError> {
        let window = web_sys::window().ok_or(FxError::Environment("window"))?;
        let callback = Closure::once_into_js(move |ts: f64| task(ts));
        window
            .request_animation_frame(callback.unchecked_ref())
            .map_err(|e| FxError::Scheduler(crate::error::describe_js(&e)))?;
        Ok(())
    }
}
