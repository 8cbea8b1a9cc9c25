//! Header scroll effect, throttled to one update per animation frame.

#[cfg(test)]
#[path = "header_test.rs"]
mod header_test;

use crate::consts::SCROLLED_CLASS;
use crate::effect::{Effect, Target};

/// Pending-frame guard plus the last applied scrolled state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeaderEffect {
    frame_pending: bool,
    scrolled: bool,
}

impl HeaderEffect {
    /// Record a scroll event. Returns `true` when the caller must request an
    /// animation frame; `false` while one is already pending.
    pub fn on_scroll(&mut self) -> bool {
        if self.frame_pending {
            return false;
        }
        self.frame_pending = true;
        true
    }

    /// Sample the scroll offset inside the frame callback.
    pub fn on_frame(&mut self, scroll_y: f64, threshold: f64) -> Vec<Effect> {
        self.frame_pending = false;
        self.scrolled = scroll_y > threshold;
        vec![Effect::class(Target::Header, SCROLLED_CLASS, self.scrolled)]
    }

    #[cfg(test)]
    pub(crate) fn frame_pending(&self) -> bool {
        self.frame_pending
    }

    #[must_use]
    pub fn scrolled(&self) -> bool {
        self.scrolled
    }
}
