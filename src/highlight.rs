//! Nav link highlighting for the active section and for clicked links.
//!
//! Both triggers write the same `active` class without coordinating, so the
//! most recent writer wins.

#[cfg(test)]
#[path = "highlight_test.rs"]
mod highlight_test;

use crate::consts::ACTIVE_CLASS;
use crate::effect::{Effect, Target};

/// Indices of every nav link pointing at section `id`, in document order.
#[must_use]
pub fn links_for_section(hrefs: &[String], id: &str) -> Vec<usize> {
    hrefs
        .iter()
        .enumerate()
        .filter(|(_, href)| href.strip_prefix('#') == Some(id))
        .map(|(i, _)| i)
        .collect()
}

/// Clear `active` from every nav link, then set it on each of `indices`.
#[must_use]
pub fn activate(link_count: usize, indices: &[usize]) -> Vec<Effect> {
    let mut effects: Vec<Effect> =
        (0..link_count).map(|i| Effect::RemoveClass(Target::NavLink(i), ACTIVE_CLASS)).collect();
    effects.extend(
        indices.iter().filter(|&&i| i < link_count).map(|&i| Effect::AddClass(Target::NavLink(i), ACTIVE_CLASS)),
    );
    effects
}
