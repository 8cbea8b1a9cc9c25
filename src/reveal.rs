//! One-shot scroll reveal.
//!
//! Each reveal element starts hidden and offset downward with a staggered
//! transition. The first time it intersects the viewport it gets the
//! `revealed` class and is unobserved, so it never hides again. The rule for
//! `revealed` is injected at runtime (see [`revealed_stylesheet`]).

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use crate::config::RevealConfig;
use crate::consts::{OPACITY, REVEALED_CLASS, TRANSFORM, TRANSITION};
use crate::effect::{Effect, Target};

/// Per-element reveal flags, indexed in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RevealTracker {
    revealed: Vec<bool>,
}

impl RevealTracker {
    /// Track `count` elements and return their hidden starting styles.
    pub fn register(&mut self, count: usize, config: &RevealConfig) -> Vec<Effect> {
        self.revealed = vec![false; count];
        (0..count).flat_map(|index| initial_style(index, config)).collect()
    }

    /// Handle an intersection entry for the element at `index`.
    ///
    /// Only the first intersecting entry per element produces effects.
    pub fn on_intersection(&mut self, index: usize, is_intersecting: bool) -> Vec<Effect> {
        if !is_intersecting {
            return Vec::new();
        }
        let Some(revealed) = self.revealed.get_mut(index) else {
            return Vec::new();
        };
        if *revealed {
            return Vec::new();
        }
        *revealed = true;
        vec![Effect::AddClass(Target::Reveal(index), REVEALED_CLASS), Effect::Unobserve(Target::Reveal(index))]
    }

    #[cfg(test)]
    pub(crate) fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.revealed.len()
    }

    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        self.revealed.is_empty()
    }
}

/// Hidden, offset, and transition styles for the element at `index`.
#[must_use]
pub fn initial_style(index: usize, config: &RevealConfig) -> Vec<Effect> {
    let target = Target::Reveal(index);
    vec![
        Effect::style(target, OPACITY, "0"),
        Effect::style(target, TRANSFORM, format!("translateY({}px)", config.offset_px)),
        Effect::style(target, TRANSITION, transition(index, config)),
    ]
}

/// Transition value with a delay proportional to `index`.
#[must_use]
pub fn transition(index: usize, config: &RevealConfig) -> String {
    let delay_ms = u64::from(config.stagger_ms).saturating_mul(index as u64);
    let duration_ms = config.duration_ms;
    format!("opacity {duration_ms}ms ease {delay_ms}ms, transform {duration_ms}ms ease {delay_ms}ms")
}

/// CSS rule that reveals an element, overriding its inline starting styles.
#[must_use]
pub fn revealed_stylesheet() -> String {
    format!(".{REVEALED_CLASS} {{\n    opacity: 1 !important;\n    transform: translateY(0) !important;\n}}\n")
}
