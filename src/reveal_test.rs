use super::*;

fn tracker(count: usize) -> RevealTracker {
    let mut tracker = RevealTracker::default();
    tracker.register(count, &RevealConfig::default());
    tracker
}

// =============================================================
// Starting styles
// =============================================================

#[test]
fn register_hides_every_element() {
    let mut tracker = RevealTracker::default();
    let effects = tracker.register(3, &RevealConfig::default());
    assert_eq!(tracker.len(), 3);
    assert_eq!(effects.len(), 9);
    for index in 0..3 {
        assert!(effects.contains(&Effect::style(Target::Reveal(index), OPACITY, "0")));
        assert!(effects.contains(&Effect::style(Target::Reveal(index), TRANSFORM, "translateY(30px)")));
    }
}

#[test]
fn transition_delay_is_staggered_by_index() {
    let config = RevealConfig::default();
    assert_eq!(transition(0, &config), "opacity 600ms ease 0ms, transform 600ms ease 0ms");
    assert_eq!(transition(3, &config), "opacity 600ms ease 300ms, transform 600ms ease 300ms");
}

#[test]
fn register_with_no_elements_is_empty() {
    let mut tracker = RevealTracker::default();
    assert!(tracker.register(0, &RevealConfig::default()).is_empty());
    assert!(tracker.is_empty());
}

// =============================================================
// One-shot intersection
// =============================================================

#[test]
fn first_intersection_reveals_and_unobserves() {
    let mut tracker = tracker(2);
    let effects = tracker.on_intersection(1, true);
    assert_eq!(
        effects,
        vec![Effect::AddClass(Target::Reveal(1), REVEALED_CLASS), Effect::Unobserve(Target::Reveal(1))]
    );
    assert!(tracker.is_revealed(1));
    assert!(!tracker.is_revealed(0));
}

#[test]
fn non_intersecting_entry_does_nothing() {
    let mut tracker = tracker(1);
    assert!(tracker.on_intersection(0, false).is_empty());
    assert!(!tracker.is_revealed(0));
}

#[test]
fn reentry_never_retriggers() {
    let mut tracker = tracker(1);
    tracker.on_intersection(0, true);
    assert!(tracker.on_intersection(0, false).is_empty());
    assert!(tracker.on_intersection(0, true).is_empty());
    assert!(tracker.is_revealed(0));
}

#[test]
fn unknown_index_is_ignored() {
    let mut tracker = tracker(1);
    assert!(tracker.on_intersection(5, true).is_empty());
    assert!(!tracker.is_revealed(5));
}

#[test]
fn stylesheet_forces_visible_state() {
    let css = revealed_stylesheet();
    assert!(css.starts_with(".revealed {"));
    assert!(css.contains("opacity: 1 !important;"));
    assert!(css.contains("transform: translateY(0) !important;"));
}
