//! Effect tunables.
//!
//! DESIGN
//! ======
//! Every delay, interval and threshold the effects use lives here so a page can
//! retune them without a rebuild. Defaults reproduce the shipped site; a page
//! may override any subset through an inline JSON block:
//!
//! ```html
//! <script type="application/json" id="fx-config">{ "typing_text": "Ada" }</script>
//! ```
//!
//! Unknown keys are ignored and missing keys keep their defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::error::FxError;

/// Id of the optional inline configuration block.
pub const CONFIG_ELEMENT_ID: &str = "fx-config";

const DEFAULT_CURSOR_EASING: f64 = 0.15;
const DEFAULT_SCROLL_PROGRESS_THROTTLE_MS: u32 = 10;
const DEFAULT_REVEAL_THRESHOLD: f64 = 0.1;
const DEFAULT_REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
const DEFAULT_SKILL_FILL_DELAY_MS: u32 = 300;
const DEFAULT_THEME_STORAGE_KEY: &str = "theme";
const DEFAULT_ANCHOR_HEADER_OFFSET_PX: f64 = 100.0;
const DEFAULT_FILTER_TRANSITION_MS: u32 = 300;
const DEFAULT_FORM_MESSAGE_HIDE_MS: u32 = 5000;
const DEFAULT_SUBMIT_LATENCY_MS: u32 = 2000;
const DEFAULT_PARTICLE_BREAKPOINT_PX: f64 = 768.0;
const DEFAULT_PARTICLE_COUNT_NARROW: usize = 25;
const DEFAULT_PARTICLE_COUNT_WIDE: usize = 50;
const DEFAULT_TYPING_TEXT: &str = "Shaikh";
const DEFAULT_TYPING_START_DELAY_MS: u32 = 1500;
const DEFAULT_TYPING_STEP_MS: u32 = 150;
const DEFAULT_ACTIVE_SECTION_OFFSET_PX: f64 = 150.0;
const DEFAULT_ACTIVE_SECTION_THROTTLE_MS: u32 = 100;

const MIN_CURSOR_EASING: f64 = 0.01;

/// Tunables for all page effects.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct FxConfig {
    /// Fraction of the remaining distance the cursor covers each frame.
    pub cursor_easing: f64,
    pub scroll_progress_throttle_ms: u32,
    /// Visible fraction of an element that counts as "in view".
    pub reveal_threshold: f64,
    pub reveal_root_margin: String,
    pub skill_fill_delay_ms: u32,
    pub theme_storage_key: String,
    /// Space reserved for the fixed header when scrolling to an anchor.
    pub anchor_header_offset_px: f64,
    /// Must match the CSS transition on `.project-item`.
    pub filter_transition_ms: u32,
    pub form_message_hide_ms: u32,
    pub submit_latency_ms: u32,
    pub particle_breakpoint_px: f64,
    pub particle_count_narrow: usize,
    pub particle_count_wide: usize,
    pub typing_text: String,
    pub typing_start_delay_ms: u32,
    pub typing_step_ms: u32,
    pub active_section_offset_px: f64,
    pub active_section_throttle_ms: u32,
}

impl Default for FxConfig {
    fn default() -> Self {
        Self {
            cursor_easing: DEFAULT_CURSOR_EASING,
            scroll_progress_throttle_ms: DEFAULT_SCROLL_PROGRESS_THROTTLE_MS,
            reveal_threshold: DEFAULT_REVEAL_THRESHOLD,
            reveal_root_margin: DEFAULT_REVEAL_ROOT_MARGIN.to_owned(),
            skill_fill_delay_ms: DEFAULT_SKILL_FILL_DELAY_MS,
            theme_storage_key: DEFAULT_THEME_STORAGE_KEY.to_owned(),
            anchor_header_offset_px: DEFAULT_ANCHOR_HEADER_OFFSET_PX,
            filter_transition_ms: DEFAULT_FILTER_TRANSITION_MS,
            form_message_hide_ms: DEFAULT_FORM_MESSAGE_HIDE_MS,
            submit_latency_ms: DEFAULT_SUBMIT_LATENCY_MS,
            particle_breakpoint_px: DEFAULT_PARTICLE_BREAKPOINT_PX,
            particle_count_narrow: DEFAULT_PARTICLE_COUNT_NARROW,
            particle_count_wide: DEFAULT_PARTICLE_COUNT_WIDE,
            typing_text: DEFAULT_TYPING_TEXT.to_owned(),
            typing_start_delay_ms: DEFAULT_TYPING_START_DELAY_MS,
            typing_step_ms: DEFAULT_TYPING_STEP_MS,
            active_section_offset_px: DEFAULT_ACTIVE_SECTION_OFFSET_PX,
            active_section_throttle_ms: DEFAULT_ACTIVE_SECTION_THROTTLE_MS,
        }
    }
}

impl FxConfig {
    /// Parse an override block and normalize it.
    pub fn from_json(raw: &str) -> Result<Self, FxError> {
        let parsed: Self = serde_json::from_str(raw)?;
        Ok(parsed.sanitized())
    }

    /// Clamp values that would stall or invert an effect.
    #[must_use]
    pub fn sanitized(mut self) -> Self {
        self.cursor_easing = if self.cursor_easing.is_finite() {
            self.cursor_easing.clamp(MIN_CURSOR_EASING, 1.0)
        } else {
            DEFAULT_CURSOR_EASING
        };
        self.reveal_threshold = if self.reveal_threshold.is_finite() {
            self.reveal_threshold.clamp(0.0, 1.0)
        } else {
            DEFAULT_REVEAL_THRESHOLD
        };
        if self.theme_storage_key.trim().is_empty() {
            self.theme_storage_key = DEFAULT_THEME_STORAGE_KEY.to_owned();
        }
        self.typing_step_ms = self.typing_step_ms.max(1);
        self
    }

    /// Read the page's inline override block, falling back to defaults.
    ///
    /// A malformed block is logged and ignored; the page still gets its effects.
    #[cfg(feature = "hydrate")]
    pub fn load(document: &web_sys::Document) -> Self {
        let Some(raw) = document
            .get_element_by_id(CONFIG_ELEMENT_ID)
            .and_then(|el| el.text_content())
        else {
            return Self::default();
        };
        match Self::from_json(&raw) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("ignoring #{CONFIG_ELEMENT_ID}: {e}");
                Self::default()
            }
        }
    }
}
