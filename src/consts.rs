//! Fixed strings shared by the core and the browser host.

// ── Classes ─────────────────────────────────────────────────────

/// Open mobile menu, and the highlighted nav link.
pub const ACTIVE_CLASS: &str = "active";

/// Marker on `<body>` while the light theme is shown.
pub const LIGHT_THEME_CLASS: &str = "light-theme";

/// Icon glyph shown in light mode.
pub const SUN_ICON_CLASS: &str = "fa-sun";

/// Icon glyph shown in dark mode.
pub const MOON_ICON_CLASS: &str = "fa-moon";

/// Header styling once the page has scrolled past the threshold.
pub const SCROLLED_CLASS: &str = "scrolled";

/// Applied once per reveal element on first intersection.
pub const REVEALED_CLASS: &str = "revealed";

/// Applied to a form field's parent while the field has focus.
pub const FOCUSED_CLASS: &str = "focused";

// ── Attributes and styles ───────────────────────────────────────

pub const ARIA_EXPANDED: &str = "aria-expanded";

pub const OVERFLOW: &str = "overflow";
pub const OVERFLOW_LOCKED: &str = "hidden";

pub const OPACITY: &str = "opacity";
pub const TRANSFORM: &str = "transform";
pub const TRANSITION: &str = "transition";

/// Toggle button transform restored after the press animation.
pub const PRESS_RESTORE_TRANSFORM: &str = "scale(1)";

// ── Browser ─────────────────────────────────────────────────────

/// Media query for the operating system's dark color scheme.
pub const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

/// Id of an optional `<script type="application/json">` carrying configuration overrides.
pub const CONFIG_ELEMENT_ID: &str = "portfolio-config";

// ── Console banner ──────────────────────────────────────────────

pub const BANNER_TITLE: &str = "%c LogicLens Portfolio ";
pub const BANNER_TITLE_STYLE: &str =
    "background: #0457A7; color: #fff; padding: 8px 16px; border-radius: 4px; font-weight: bold;";
pub const BANNER_READY: &str = "%c All features initialized successfully! ";
pub const BANNER_READY_STYLE: &str = "color: #64FFDA;";
