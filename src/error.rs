//! Error types for page binding, preference storage, and configuration.
//!
//! None of these reach the visitor. Controllers that fail to bind are skipped
//! and the failure is logged; the rest of the page keeps working.

/// Why a controller could not be attached to the page.
#[derive(Debug, thiserror::Error)]
pub enum BindError {
    /// No global `window` (not running in a browser).
    #[error("no browser window")]
    NoWindow,
    /// The window has no document.
    #[error("window has no document")]
    NoDocument,
    /// A required element is absent from the page.
    #[error("missing element: {0}")]
    MissingElement(&'static str),
    /// A browser API call threw.
    #[error("browser call failed: {0}")]
    Js(String),
}

impl BindError {
    /// Whether this is the expected "element not on this page" case.
    #[must_use]
    pub fn is_missing_element(&self) -> bool {
        matches!(self, Self::MissingElement(_))
    }
}

#[cfg(feature = "hydrate")]
impl From<wasm_bindgen::JsValue> for BindError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Js(format!("{value:?}"))
    }
}

/// Failure to persist the theme preference.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum StoreError {
    /// Storage is disabled or blocked (private browsing, sandboxed frame).
    #[error("preference storage unavailable")]
    Unavailable,
    /// The browser rejected the write (quota, security policy).
    #[error("preference write rejected: {0}")]
    Rejected(String),
}

/// Failure to read configuration overrides embedded in the page.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The overrides are not valid JSON for [`crate::config::Config`].
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),
    /// A value parsed but is outside its allowed range.
    #[error("invalid configuration: {0}")]
    Invalid(String),
}
