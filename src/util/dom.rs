//! Thin `web-sys` helpers shared by the effect initializers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Effects attach to server-rendered markup and live for the page lifetime,
//! so listeners are leaked on purpose (`Closure::forget`) and never removed.
//! All fallible browser calls surface as [`FxError`] so initializers can use
//! `?` and leave reporting to the bootstrap failure boundary.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{AddEventListenerOptions, Document, Element, EventTarget, HtmlElement, NodeList, Window};

use crate::config::FxConfig;
use crate::error::FxError;
use crate::scheduler::BrowserScheduler;

/// Everything an initializer needs from the page.
pub struct Page {
    pub window: Window,
    pub document: Document,
    pub body: HtmlElement,
    pub config: FxConfig,
    pub scheduler: BrowserScheduler,
}

impl Page {
    /// Capture the current page and its effect configuration.
    pub fn current() -> Result<Self, FxError> {
        let window = web_sys::window().ok_or(FxError::Environment("window"))?;
        let document = window.document().ok_or(FxError::Environment("document"))?;
        let body = document.body().ok_or(FxError::Environment("body"))?;
        let config = FxConfig::load(&document);
        Ok(Self { window, document, body, config, scheduler: BrowserScheduler })
    }

    /// First element matching `selector`.
    pub fn query(&self, selector: &str) -> Result<Option<Element>, FxError> {
        Ok(self.document.query_selector(selector)?)
    }

    /// First `HtmlElement` matching `selector`.
    pub fn query_html(&self, selector: &str) -> Result<Option<HtmlElement>, FxError> {
        Ok(self.query(selector)?.as_ref().and_then(as_html))
    }

    /// All elements matching `selector`, in document order.
    pub fn query_all(&self, selector: &str) -> Result<Vec<Element>, FxError> {
        Ok(elements(&self.document.query_selector_all(selector)?))
    }

    /// `HtmlElement` with the given id.
    pub fn by_id(&self, id: &str) -> Option<HtmlElement> {
        self.document.get_element_by_id(id).as_ref().and_then(as_html)
    }

    /// Viewport height in CSS pixels.
    pub fn inner_height(&self) -> Result<f64, FxError> {
        Ok(self.window.inner_height()?.as_f64().unwrap_or(0.0))
    }

    /// Viewport width in CSS pixels.
    pub fn inner_width(&self) -> Result<f64, FxError> {
        Ok(self.window.inner_width()?.as_f64().unwrap_or(0.0))
    }
}

/// Downcast to `HtmlElement`; `None` for non-HTML nodes such as SVG.
pub fn as_html(el: &Element) -> Option<HtmlElement> {
    el.dyn_ref::<HtmlElement>().cloned()
}

/// Collect the element nodes of a `NodeList`.
pub fn elements(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_ref::<Element>().cloned())
        .collect()
}

/// Attach `handler` for the page lifetime.
///
/// Events that are not of type `E` are skipped.
pub fn listen<E, F>(target: &EventTarget, event: &str, mut handler: F) -> Result<(), FxError>
where
    E: JsCast + 'static,
    F: FnMut(E) + 'static,
{
    let kind = event.to_owned();
    let closure = Closure::<dyn FnMut(web_sys::Event)>::new(move |event: web_sys::Event| {
        match event.dyn_into::<E>() {
            Ok(typed) => handler(typed),
            Err(_untyped) => log::debug!("unexpected event type for {kind} listener"),
        }
    });
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Attach `handler` for a single dispatch of `event`.
pub fn listen_once<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), FxError>
where
    F: FnOnce() + 'static,
{
    let options = AddEventListenerOptions::new();
    options.set_once(true);
    let callback = Closure::once_into_js(move |_event: web_sys::Event| handler());
    target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        callback.unchecked_ref(),
        &options,
    )?;
    Ok(())
}

/// Set one inline style property.
pub fn set_style(el: &HtmlElement, property: &str, value: &str) -> Result<(), FxError> {
    Ok(el.style().set_property(property, value)?)
}

/// Log a failure inside an event handler, where there is no caller to return it to.
pub fn warn_on_err(context: &str, result: Result<(), FxError>) {
    if let Err(e) = result {
        log::warn!("{context}: {e}");
    }
}
