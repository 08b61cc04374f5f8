//! Error type shared by every effect initializer.
//!
//! Missing markup is not an error: initializers no-op in that case. `FxError`
//! covers the failures that remain once the markup is there (a rejected DOM
//! call, an unreadable preference store, a failed submission) and is what the
//! bootstrap failure boundary logs.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Errors raised while wiring or running page effects.
#[derive(Debug, thiserror::Error)]
pub enum FxError {
    /// No `window`/`document` is available (not running in a browser page).
    #[error("browser environment unavailable: {0}")]
    Environment(&'static str),
    /// A DOM or browser API call threw.
    #[error("browser API call failed: {0}")]
    Js(String),
    /// The inline configuration block could not be parsed.
    #[error("invalid effect configuration: {0}")]
    Config(#[from] serde_json::Error),
    /// The preference store rejected a read or write.
    #[error("preference store unavailable: {0}")]
    Storage(String),
    /// A timer or animation frame could not be scheduled.
    #[error("scheduling failed: {0}")]
    Scheduler(String),
    /// The contact submission did not complete.
    #[error("submission failed: {0}")]
    Submit(String),
}

#[cfg(feature = "hydrate")]
impl From<wasm_bindgen::JsValue> for FxError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Js(describe_js(&value))
    }
}

/// Best-effort human readable text for a thrown JS value.
#[cfg(feature = "hydrate")]
pub fn describe_js(value: &wasm_bindgen::JsValue) -> String {
    use wasm_bindgen::JsCast;

    if let Some(text) = value.as_string() {
        return text;
    }
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    format!("{value:?}")
}
