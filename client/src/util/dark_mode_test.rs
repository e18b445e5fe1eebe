use super::*;

#[test]
fn stored_values_round_trip() {
    for theme in [Theme::Light, Theme::Dark] {
        assert_eq!(Theme::from_stored(Some(theme.stored_value())), Some(theme));
    }
}

#[test]
fn unknown_or_missing_stored_value_is_ignored() {
    assert_eq!(Theme::from_stored(None), None);
    assert_eq!(Theme::from_stored(Some("dark")), None);
}

#[test]
fn toggled_flips_theme() {
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
    assert_eq!(Theme::Dark.toggled(), Theme::Light);
    assert!(Theme::from_dark(true).is_dark());
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_helpers_are_inert_without_hydrate() {
    assert_eq!(read_preference(), Theme::Light);
    apply(Theme::Dark);
    assert_eq!(toggle(Theme::Light), Theme::Dark);
}
