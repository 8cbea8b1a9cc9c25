//! Selectors and tuning constants for the page behaviors.
//!
//! `Config::default()` matches the portfolio page markup. A page may embed a
//! partial JSON object to override individual values; anything it leaves out
//! keeps its default.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::error::ConfigError;

pub const DEFAULT_STORAGE_KEY: &str = "logiclens-theme";
pub const DEFAULT_SCROLL_THRESHOLD_PX: f64 = 50.0;
pub const DEFAULT_SCROLL_CORRECTION_PX: f64 = 70.0;
pub const DEFAULT_HEADER_HEIGHT_PX: f64 = 70.0;
pub const DEFAULT_PRESS_SCALE: f64 = 0.9;
pub const DEFAULT_PRESS_DURATION_MS: u32 = 150;
pub const DEFAULT_SECTION_ROOT_MARGIN: &str = "-20% 0px -80% 0px";

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub selectors: Selectors,
    /// `localStorage` key holding `"light"` or `"dark"`.
    pub storage_key: String,
    /// Header gets its scrolled class strictly above this offset.
    pub scroll_threshold_px: f64,
    /// Added back after subtracting the header height from an anchor target.
    pub scroll_correction_px: f64,
    /// Header height used for anchor offsets when the page has no header.
    pub fallback_header_height_px: f64,
    pub reveal: RevealConfig,
    /// Root margin narrowing the active-section band to the viewport's 20%-80% region.
    pub section_root_margin: String,
    /// Theme toggle scale while pressed.
    pub press_scale: f64,
    pub press_duration_ms: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            selectors: Selectors::default(),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            scroll_threshold_px: DEFAULT_SCROLL_THRESHOLD_PX,
            scroll_correction_px: DEFAULT_SCROLL_CORRECTION_PX,
            fallback_header_height_px: DEFAULT_HEADER_HEIGHT_PX,
            reveal: RevealConfig::default(),
            section_root_margin: DEFAULT_SECTION_ROOT_MARGIN.to_string(),
            press_scale: DEFAULT_PRESS_SCALE,
            press_duration_ms: DEFAULT_PRESS_DURATION_MS,
        }
    }
}

impl Config {
    /// Parse overrides from JSON and validate the result.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON or mistyped fields and
    /// [`ConfigError::Invalid`] for out-of-range values.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse overrides from `source`, falling back to defaults with a warning
    /// when they are malformed or out of range.
    #[must_use]
    pub fn from_json_or_default(raw: &str, source: &str) -> Self {
        match Self::from_json(raw) {
            Ok(config) => {
                log::debug!("loaded configuration from {source}");
                config
            }
            Err(err) => {
                log::warn!("ignoring configuration from {source}: {err}");
                Self::default()
            }
        }
    }

    /// Check value ranges that the browser APIs would otherwise reject.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.storage_key.trim().is_empty() {
            return Err(ConfigError::Invalid("storage_key must not be empty".into()));
        }
        if !(0.0..=1.0).contains(&self.reveal.threshold) {
            return Err(ConfigError::Invalid(format!(
                "reveal.threshold must be within 0..=1, got {}",
                self.reveal.threshold
            )));
        }
        if !self.scroll_threshold_px.is_finite() || self.scroll_threshold_px < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "scroll_threshold_px must be a non-negative number, got {}",
                self.scroll_threshold_px
            )));
        }
        if !self.press_scale.is_finite() || self.press_scale <= 0.0 {
            return Err(ConfigError::Invalid(format!("press_scale must be positive, got {}", self.press_scale)));
        }
        Ok(())
    }
}

/// CSS selectors for every element the behaviors bind to.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Selectors {
    pub mobile_toggle: String,
    pub nav_list: String,
    pub nav_link: String,
    /// Element id (not a selector) of the theme toggle button.
    pub theme_toggle_id: String,
    /// Icon inside the theme toggle, relative to the button.
    pub theme_icon: String,
    pub header: String,
    pub anchors: String,
    pub reveal: Vec<String>,
    pub sections: String,
    pub form_fields: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            mobile_toggle: ".mobileToggle".to_string(),
            nav_list: ".navList".to_string(),
            nav_link: ".navLink".to_string(),
            theme_toggle_id: "theme-toggle".to_string(),
            theme_icon: "i".to_string(),
            header: ".header".to_string(),
            anchors: "a[href^=\"#\"]".to_string(),
            reveal: [".projectCard", ".skillCategory", ".statItem", ".aboutText", ".contactItem"]
                .into_iter()
                .map(str::to_string)
                .collect(),
            sections: "section[id]".to_string(),
            form_fields: ".formInput, .formTextarea".to_string(),
        }
    }
}

impl Selectors {
    /// The reveal selectors joined into one selector group.
    #[must_use]
    pub fn reveal_query(&self) -> String {
        self.reveal.join(", ")
    }
}

/// Scroll reveal animation settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    /// Fraction of the element that must be visible.
    pub threshold: f64,
    pub root_margin: String,
    /// Initial downward offset.
    pub offset_px: f64,
    pub duration_ms: u32,
    /// Extra delay per element, multiplied by its document-order index.
    pub stagger_ms: u32,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            root_margin: "0px 0px -50px 0px".to_string(),
            offset_px: 30.0,
            duration_ms: 600,
            stagger_ms: 100,
        }
    }
}
