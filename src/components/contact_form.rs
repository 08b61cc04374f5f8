//! Contact form validation and (simulated) submission.
//!
//! SYSTEM CONTEXT
//! ==============
//! The site is static, so "sending" is a [`Submitter`] seam. The shipped
//! [`SimulatedSubmitter`] waits a fixed latency and reports success; a real
//! endpoint only has to implement the same trait.
//!
//! DESIGN
//! ======
//! [`submit_flow`] holds the whole sequence and talks to the page through
//! [`FormView`], so validation, the busy state and the messages are tested
//! without a browser:
//!
//! 1. Validate. The first failing rule becomes an error message; the button
//!    never enters the busy state.
//! 2. Busy: button disabled, label `Sending...`, spinner prepended.
//! 3. Await the submitter, then show the success or failure message and reset
//!    the form on success.
//! 4. Leave the busy state whatever happened in step 3.
//!
//! Messages hide themselves after a delay. A newer message cancels the older
//! one's pending hide, see [`MessageAutoHide`].

#[cfg(test)]
#[path = "contact_form_test.rs"]
mod contact_form_test;

use std::cell::RefCell;
use std::sync::LazyLock;

use futures::future::LocalBoxFuture;
use regex::Regex;

use crate::error::FxError;
use crate::scheduler::{self, Scheduler};

pub const FORM_ID: &str = "contact-form";
pub const SUBMIT_BUTTON_ID: &str = "submit-btn";
pub const SUBMIT_TEXT_ID: &str = "submit-text";
pub const MESSAGE_ID: &str = "form-message";
pub const FIELD_SELECTOR: &str = "input, textarea";

pub const BUSY_LABEL: &str = "Sending...";
pub const SPINNER_HTML: &str = r#"<div class="loading mr-2"></div>"#;
pub const SPINNER_SELECTOR: &str = ".loading";
pub const HIDDEN_CLASS: &str = "hidden";
pub const INVALID_BORDER_COLOR: &str = "#ef4444";

pub const SUCCESS_MESSAGE: &str = "Message sent successfully! I'll get back to you soon.";
pub const FAILURE_MESSAGE: &str = "Sorry, there was an error sending your message. Please try again.";

const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

static EMAIL_REGEX: LazyLock<Result<Regex, regex::Error>> = LazyLock::new(|| Regex::new(EMAIL_PATTERN));

// =============================================================================
// Validation
// =============================================================================

/// Values read from the form at submit time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    /// Privacy-policy checkbox.
    pub agreement: bool,
}

/// Why a form was not sent. `Display` is the text shown to the visitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please fill in all required fields and accept the privacy policy.")]
    MissingFields,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
}

impl ContactForm {
    /// First failing rule, if any.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let blank = [&self.name, &self.email, &self.message].iter().any(|v| v.trim().is_empty());
        if blank || !self.agreement {
            return Err(ValidationError::MissingFields);
        }
        if !is_valid_email(self.email.trim()) {
            return Err(ValidationError::InvalidEmail);
        }
        Ok(())
    }
}

/// `something@something.something` with no whitespace and a single `@` per part.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    match &*EMAIL_REGEX {
        Ok(pattern) => pattern.is_match(email),
        Err(e) => {
            log::error!("email pattern rejected by regex engine: {e}");
            false
        }
    }
}

/// Border color for a field that just lost focus. Empty clears the inline color.
#[must_use]
pub fn blur_border_color(required: bool, value: &str) -> &'static str {
    if required && value.trim().is_empty() { INVALID_BORDER_COLOR } else { "" }
}

/// A form control as seen at blur time.
pub trait FieldState {
    fn is_required(&self) -> bool;
    fn value(&self) -> String;
}

/// Border color for `field` as it is right now; `required` is re-read on every blur.
pub fn blur_feedback<F: FieldState + ?Sized>(field: &F) -> &'static str {
    blur_border_color(field.is_required(), &field.value())
}

// =============================================================================
// Messages
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
}

impl MessageKind {
    /// Full class list for the message box; replacing it also drops `hidden`.
    #[must_use]
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Success => "text-center p-4 rounded-xl border bg-green-50 border-green-200 text-green-700",
            Self::Error => "text-center p-4 rounded-xl border bg-red-50 border-red-200 text-red-700",
        }
    }

    #[must_use]
    pub fn icon_class(self) -> &'static str {
        match self {
            Self::Success => "fas fa-check-circle mr-2",
            Self::Error => "fas fa-exclamation-circle mr-2",
        }
    }
}

/// Delayed hide for the message box. Arming again cancels the previous hide.
pub struct MessageAutoHide<S: Scheduler> {
    scheduler: S,
    hide_ms: u32,
    pending: RefCell<Option<S::Timer>>,
}

impl<S: Scheduler> MessageAutoHide<S> {
    pub fn new(scheduler: S, hide_ms: u32) -> Self {
        Self { scheduler, hide_ms, pending: RefCell::new(None) }
    }

    /// Run `hide` after the delay unless another message is shown first.
    pub fn arm(&self, hide: Box<dyn FnOnce()>) {
        let timer = self.scheduler.timeout(self.hide_ms, hide);
        let superseded = self.pending.borrow_mut().replace(timer);
        drop(superseded);
    }
}

// =============================================================================
// Submission
// =============================================================================

/// Delivers a validated form.
pub trait Submitter {
    fn submit(&self, form: ContactForm) -> LocalBoxFuture<'static, Result<(), FxError>>;
}

/// Stand-in endpoint: waits, then succeeds.
#[derive(Clone)]
pub struct SimulatedSubmitter<S: Scheduler> {
    scheduler: S,
    latency_ms: u32,
}

impl<S: Scheduler> SimulatedSubmitter<S> {
    pub fn new(scheduler: S, latency_ms: u32) -> Self {
        Self { scheduler, latency_ms }
    }
}

impl<S: Scheduler> Submitter for SimulatedSubmitter<S> {
    fn submit(&self, form: ContactForm) -> LocalBoxFuture<'static, Result<(), FxError>> {
        let wait = scheduler::sleep(&self.scheduler, self.latency_ms);
        Box::pin(async move {
            wait.await?;
            log::info!("contact message accepted ({} chars)", form.message.chars().count());
            Ok(())
        })
    }
}

/// The page elements [`submit_flow`] drives.
pub trait FormView {
    fn read(&self) -> Result<ContactForm, FxError>;
    /// Disable the button, show the busy label and spinner. Returns the label to restore.
    fn begin_busy(&self) -> Result<String, FxError>;
    /// Undo [`FormView::begin_busy`].
    fn end_busy(&self, label: &str) -> Result<(), FxError>;
    fn show_message(&self, kind: MessageKind, text: &str) -> Result<(), FxError>;
    fn reset(&self) -> Result<(), FxError>;
}

/// How a submit attempt ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Rejected(ValidationError),
    Sent,
    Failed,
}

/// Validate, submit and report one form submission.
pub async fn submit_flow<V, T>(view: &V, submitter: &T) -> Result<SubmitOutcome, FxError>
where
    V: FormView + ?Sized,
    T: Submitter + ?Sized,
{
    let form = view.read()?;
    if let Err(problem) = form.validate() {
        view.show_message(MessageKind::Error, &problem.to_string())?;
        return Ok(SubmitOutcome::Rejected(problem));
    }

    let label = view.begin_busy()?;
    let (outcome, reported) = match submitter.submit(form).await {
        Ok(()) => {
            let reported = view
                .show_message(MessageKind::Success, SUCCESS_MESSAGE)
                .and_then(|()| view.reset());
            (SubmitOutcome::Sent, reported)
        }
        Err(e) => {
            log::warn!("contact submission failed: {e}");
            (SubmitOutcome::Failed, view.show_message(MessageKind::Error, FAILURE_MESSAGE))
        }
    };
    let restored = view.end_busy(&label);
    reported?;
    restored?;
    Ok(outcome)
}

#[cfg(feature = "hydrate")]
pub use browser::init;

#[cfg(feature = "hydrate")]
mod browser {
    use std::rc::Rc;

    use wasm_bindgen::JsCast;
    use web_sys::{
        Document, Element, Event, HtmlButtonElement, HtmlElement, HtmlFormElement, HtmlInputElement,
        HtmlTextAreaElement,
    };

    use super::{
        BUSY_LABEL, ContactForm, FIELD_SELECTOR, FORM_ID, FormView, HIDDEN_CLASS, MESSAGE_ID, MessageAutoHide,
        FieldState, MessageKind, SPINNER_HTML, SPINNER_SELECTOR, SUBMIT_BUTTON_ID, SUBMIT_TEXT_ID,
        SimulatedSubmitter, blur_feedback, submit_flow,
    };
    use crate::error::FxError;
    use crate::scheduler::BrowserScheduler;
    use crate::util::dom::{self, Page};

    struct DomFormView {
        document: Document,
        form: HtmlFormElement,
        button: HtmlButtonElement,
        label: HtmlElement,
        message: HtmlElement,
        auto_hide: MessageAutoHide<BrowserScheduler>,
    }

    impl DomFormView {
        fn text_field(&self, name: &str) -> Result<String, FxError> {
            let field = self.form.query_selector(&format!("[name=\"{name}\"]"))?;
            Ok(field.as_ref().map(field_value).unwrap_or_default())
        }

        fn checkbox(&self, name: &str) -> Result<bool, FxError> {
            let field = self.form.query_selector(&format!("[name=\"{name}\"]"))?;
            Ok(field
                .as_ref()
                .and_then(|f| f.dyn_ref::<HtmlInputElement>())
                .is_some_and(HtmlInputElement::checked))
        }
    }

    impl FormView for DomFormView {
        fn read(&self) -> Result<ContactForm, FxError> {
            Ok(ContactForm {
                name: self.text_field("name")?,
                email: self.text_field("email")?,
                message: self.text_field("message")?,
                agreement: self.checkbox("agreement")?,
            })
        }

        fn begin_busy(&self) -> Result<String, FxError> {
            let original = self.label.text_content().unwrap_or_default();
            self.button.set_disabled(true);
            self.label.set_text_content(Some(BUSY_LABEL));
            self.button.insert_adjacent_html("afterbegin", SPINNER_HTML)?;
            Ok(original)
        }

        fn end_busy(&self, label: &str) -> Result<(), FxError> {
            if let Some(spinner) = self.button.query_selector(SPINNER_SELECTOR)? {
                spinner.remove();
            }
            self.label.set_text_content(Some(label));
            self.button.set_disabled(false);
            Ok(())
        }

        fn show_message(&self, kind: MessageKind, text: &str) -> Result<(), FxError> {
            let icon = self.document.create_element("i")?;
            icon.set_class_name(kind.icon_class());
            self.message.set_class_name(kind.class_name());
            self.message.set_text_content(None);
            self.message.append_child(&icon)?;
            self.message.append_with_str_1(text)?;

            let message = self.message.clone();
            self.auto_hide.arm(Box::new(move || {
                dom::warn_on_err("form message", message.class_list().add_1(HIDDEN_CLASS).map_err(FxError::from));
            }));
            Ok(())
        }

        fn reset(&self) -> Result<(), FxError> {
            self.form.reset();
            Ok(())
        }
    }

    pub fn init(page: &Page) -> Result<(), FxError> {
        let form = page.document.get_element_by_id(FORM_ID).and_then(|el| el.dyn_ref::<HtmlFormElement>().cloned());
        let button = page
            .document
            .get_element_by_id(SUBMIT_BUTTON_ID)
            .and_then(|el| el.dyn_ref::<HtmlButtonElement>().cloned());
        let (Some(form), Some(button), Some(label), Some(message)) =
            (form, button, page.by_id(SUBMIT_TEXT_ID), page.by_id(MESSAGE_ID))
        else {
            log::debug!("contact form markup incomplete; form handling disabled");
            return Ok(());
        };

        for field in dom::elements(&form.query_selector_all(FIELD_SELECTOR)?) {
            bind_field(&field)?;
        }

        let view = Rc::new(DomFormView {
            document: page.document.clone(),
            form: form.clone(),
            button,
            label,
            message,
            auto_hide: MessageAutoHide::new(page.scheduler, page.config.form_message_hide_ms),
        });
        let submitter = Rc::new(SimulatedSubmitter::new(page.scheduler, page.config.submit_latency_ms));
        dom::listen(&form, "submit", move |event: Event| {
            event.prevent_default();
            let view = Rc::clone(&view);
            let submitter = Rc::clone(&submitter);
            wasm_bindgen_futures::spawn_local(async move {
                match submit_flow(&*view, &*submitter).await {
                    Ok(outcome) => log::debug!("contact form: {outcome:?}"),
                    Err(e) => log::warn!("contact form: {e}"),
                }
            });
        })
    }

    fn bind_field(field: &Element) -> Result<(), FxError> {
        let Some(html) = dom::as_html(field) else {
            return Ok(());
        };
        let on_blur = html.clone();
        let source = DomField(field.clone());
        dom::listen(field, "blur", move |_: Event| {
            let color = blur_feedback(&source);
            dom::warn_on_err("field blur", dom::set_style(&on_blur, "border-color", color));
        })?;
        let on_input = html;
        dom::listen(field, "input", move |_: Event| {
            dom::warn_on_err("field input", dom::set_style(&on_input, "border-color", ""));
        })
    }

    struct DomField(Element);

    impl FieldState for DomField {
        fn is_required(&self) -> bool {
            self.0.has_attribute("required")
        }

        fn value(&self) -> String {
            field_value(&self.0)
        }
    }

    /// Current value of an `<input>` or `<textarea>`; empty for anything else.
    fn field_value(field: &Element) -> String {
        if let Some(input) = field.dyn_ref::<HtmlInputElement>() {
            return input.value();
        }
        if let Some(area) = field.dyn_ref::<HtmlTextAreaElement>() {
            return area.value();
        }
        String::new()
    }
}
