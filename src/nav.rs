//! Mobile navigation open/closed state.
//!
//! Open state is mirrored in four places: the `active` class on the nav list
//! and on the hamburger, `aria-expanded` on the hamburger, and the body's
//! `overflow` style (locked while open).

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use crate::consts::{ACTIVE_CLASS, ARIA_EXPANDED, OVERFLOW, OVERFLOW_LOCKED};
use crate::effect::{Effect, Target};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavState {
    pub open: bool,
}

impl NavState {
    /// Flip the menu. Returns the effects mirroring the new state.
    pub fn toggle(&mut self) -> Vec<Effect> {
        self.open = !self.open;
        sync_effects(self.open)
    }

    /// Close the menu. Emits the closed state even when already closed.
    pub fn close(&mut self) -> Vec<Effect> {
        self.open = false;
        sync_effects(false)
    }
}

/// Effects that make the page reflect `open`.
#[must_use]
pub fn sync_effects(open: bool) -> Vec<Effect> {
    vec![
        Effect::class(Target::NavList, ACTIVE_CLASS, open),
        Effect::class(Target::MobileToggle, ACTIVE_CLASS, open),
        Effect::attribute(Target::MobileToggle, ARIA_EXPANDED, if open { "true" } else { "false" }),
        Effect::style(Target::Body, OVERFLOW, if open { OVERFLOW_LOCKED } else { "" }),
    ]
}
