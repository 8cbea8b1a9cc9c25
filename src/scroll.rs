//! In-page anchor resolution and smooth-scroll offset math.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

/// Selector for an in-page anchor's target, or `None` when the link should
/// be left alone (bare `#`, or not a fragment link at all).
#[must_use]
pub fn anchor_selector(href: &str) -> Option<&str> {
    if href.starts_with('#') && href != "#" { Some(href) } else { None }
}

/// Geometry sampled when an anchor's target exists.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollMetrics {
    /// Target's top edge relative to the viewport.
    pub element_top: f64,
    /// Current window scroll offset.
    pub scroll_y: f64,
}

/// Absolute scroll offset for a target: viewport-relative top plus the
/// current offset, less the header, plus the fixed visual correction.
#[must_use]
pub fn target_offset(metrics: ScrollMetrics, header_height: f64, correction: f64) -> f64 {
    metrics.element_top + metrics.scroll_y - header_height + correction
}
