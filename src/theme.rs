//! Light/dark theme resolution and the effects that display a theme.
//!
//! Precedence on load: a stored preference wins, then the operating system's
//! color scheme. Dark is the fallback whenever neither asks for light.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::consts::{LIGHT_THEME_CLASS, MOON_ICON_CLASS, PRESS_RESTORE_TRANSFORM, SUN_ICON_CLASS, TRANSFORM};
use crate::effect::{Effect, Target};

/// Display mode of the page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    /// The persisted text form.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Interpret a stored preference.
    ///
    /// An empty value counts as no preference. Any non-empty value other than
    /// `"light"` means dark.
    #[must_use]
    pub fn from_stored(raw: &str) -> Option<Self> {
        match raw {
            "" => None,
            "light" => Some(Self::Light),
            _ => Some(Self::Dark),
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub fn is_light(self) -> bool {
        self == Self::Light
    }

    /// Icon class shown for this theme.
    #[must_use]
    pub fn icon_class(self) -> &'static str {
        match self {
            Self::Light => SUN_ICON_CLASS,
            Self::Dark => MOON_ICON_CLASS,
        }
    }
}

/// Decide the theme shown on load.
#[must_use]
pub fn resolve_initial(stored: Option<&str>, prefers_dark: bool) -> Theme {
    match stored.and_then(Theme::from_stored) {
        Some(theme) => theme,
        None if prefers_dark => Theme::Dark,
        None => Theme::Light,
    }
}

/// Body marker and icon glyph for `theme`.
#[must_use]
pub fn display_effects(theme: Theme) -> Vec<Effect> {
    vec![
        Effect::class(Target::Body, LIGHT_THEME_CLASS, theme.is_light()),
        Effect::RemoveClass(Target::ThemeIcon, theme.toggled().icon_class()),
        Effect::AddClass(Target::ThemeIcon, theme.icon_class()),
    ]
}

/// Shrink the toggle button, then restore it after `duration_ms`.
#[must_use]
pub fn press_effects(scale: f64, duration_ms: u32) -> Vec<Effect> {
    vec![
        Effect::style(Target::ThemeToggle, TRANSFORM, format!("scale({scale})")),
        Effect::After {
            delay_ms: duration_ms,
            effect: Box::new(Effect::style(Target::ThemeToggle, TRANSFORM, PRESS_RESTORE_TRANSFORM)),
        },
    ]
}
