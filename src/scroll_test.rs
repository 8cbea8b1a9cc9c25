#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn fragment_link_resolves_to_selector() {
    assert_eq!(anchor_selector("#section2"), Some("#section2"));
}

#[test]
fn bare_hash_is_ignored() {
    assert_eq!(anchor_selector("#"), None);
}

#[test]
fn non_fragment_links_are_ignored() {
    assert_eq!(anchor_selector("/about"), None);
    assert_eq!(anchor_selector("https://example.com/#top"), None);
    assert_eq!(anchor_selector(""), None);
}

#[test]
fn offset_adds_scroll_and_correction_and_subtracts_header() {
    let metrics = ScrollMetrics { element_top: 400.0, scroll_y: 250.0 };
    assert_eq!(target_offset(metrics, 80.0, 70.0), 400.0 + 250.0 - 80.0 + 70.0);
}

#[test]
fn offset_for_target_above_viewport_is_below_current_scroll() {
    let metrics = ScrollMetrics { element_top: -300.0, scroll_y: 1000.0 };
    assert_eq!(target_offset(metrics, 70.0, 70.0), 700.0);
}
