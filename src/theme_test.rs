use super::*;

// =============================================================
// Stored values
// =============================================================

#[test]
fn stored_light_and_dark_round_trip_through_text() {
    assert_eq!(Theme::from_stored(Theme::Light.as_str()), Some(Theme::Light));
    assert_eq!(Theme::from_stored(Theme::Dark.as_str()), Some(Theme::Dark));
}

#[test]
fn empty_stored_value_is_no_preference() {
    assert_eq!(Theme::from_stored(""), None);
}

#[test]
fn unknown_stored_value_means_dark() {
    assert_eq!(Theme::from_stored("solarized"), Some(Theme::Dark));
}

// =============================================================
// Initial resolution
// =============================================================

#[test]
fn no_preference_and_system_light_resolves_light() {
    assert_eq!(resolve_initial(None, false), Theme::Light);
}

#[test]
fn no_preference_and_system_dark_resolves_dark() {
    assert_eq!(resolve_initial(None, true), Theme::Dark);
}

#[test]
fn stored_dark_overrides_system_light() {
    assert_eq!(resolve_initial(Some("dark"), false), Theme::Dark);
}

#[test]
fn stored_light_overrides_system_dark() {
    assert_eq!(resolve_initial(Some("light"), true), Theme::Light);
}

#[test]
fn empty_stored_value_falls_back_to_system() {
    assert_eq!(resolve_initial(Some(""), false), Theme::Light);
    assert_eq!(resolve_initial(Some(""), true), Theme::Dark);
}

// =============================================================
// Effects
// =============================================================

#[test]
fn toggled_flips_both_ways() {
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
    assert_eq!(Theme::Dark.toggled(), Theme::Light);
}

#[test]
fn light_display_marks_body_and_shows_sun() {
    let effects = display_effects(Theme::Light);
    assert_eq!(
        effects,
        vec![
            Effect::AddClass(Target::Body, LIGHT_THEME_CLASS),
            Effect::RemoveClass(Target::ThemeIcon, MOON_ICON_CLASS),
            Effect::AddClass(Target::ThemeIcon, SUN_ICON_CLASS),
        ]
    );
}

#[test]
fn dark_display_clears_body_and_shows_moon() {
    let effects = display_effects(Theme::Dark);
    assert_eq!(
        effects,
        vec![
            Effect::RemoveClass(Target::Body, LIGHT_THEME_CLASS),
            Effect::RemoveClass(Target::ThemeIcon, SUN_ICON_CLASS),
            Effect::AddClass(Target::ThemeIcon, MOON_ICON_CLASS),
        ]
    );
}

#[test]
fn press_shrinks_then_restores_after_delay() {
    let effects = press_effects(0.9, 150);
    assert_eq!(effects[0], Effect::style(Target::ThemeToggle, TRANSFORM, "scale(0.9)"));
    match &effects[1] {
        Effect::After { delay_ms, effect } => {
            assert_eq!(*delay_ms, 150);
            assert_eq!(**effect, Effect::style(Target::ThemeToggle, TRANSFORM, "scale(1)"));
        }
        other => panic!("expected delayed restore, got {other:?}"),
    }
}
