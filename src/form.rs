//! Focus marker on form field containers.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use crate::consts::FOCUSED_CLASS;
use crate::effect::{Effect, Target};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusChange {
    Focus,
    Blur,
}

/// Mark or unmark the parent of the field at `index`.
#[must_use]
pub fn focus_effects(index: usize, change: FocusChange) -> Vec<Effect> {
    vec![Effect::class(Target::FieldParent(index), FOCUSED_CLASS, change == FocusChange::Focus)]
}
