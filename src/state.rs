//! In-memory UI state mirrored onto the page.
//!
//! DESIGN
//! ======
//! The page's visible state (body classes, nav classes, header class) is the
//! output; this record is the source. Only `theme` is persisted, and only
//! through the preference store.

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use crate::nav::NavState;
use crate::theme::Theme;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UiState {
    pub theme: Theme,
    pub nav: NavState,
    /// Indices of the highlighted nav links. Written by both the click and the
    /// scroll-position triggers.
    pub active_links: Vec<usize>,
    pub header_scrolled: bool,
}
