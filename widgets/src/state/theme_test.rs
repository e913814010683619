use super::*;

#[test]
fn missing_preference_defaults_to_light() {
    assert_eq!(Theme::parse(None), Theme::Light);
    assert_eq!(Theme::default(), Theme::Light);
}

#[test]
fn unknown_values_read_as_light() {
    assert_eq!(Theme::parse(Some("")), Theme::Light);
    assert_eq!(Theme::parse(Some("DARK")), Theme::Light);
    assert_eq!(Theme::parse(Some("true")), Theme::Light);
}

#[test]
fn stored_dark_is_dark() {
    assert_eq!(Theme::parse(Some("dark")), Theme::Dark);
}

#[test]
fn as_str_round_trips_through_parse() {
    for theme in [Theme::Light, Theme::Dark] {
        assert_eq!(Theme::parse(Some(theme.as_str())), theme);
    }
}

#[test]
fn toggling_twice_restores_value_and_icon() {
    let start = Theme::Light;
    let once = start.toggled();
    assert_eq!(once, Theme::Dark);
    assert_eq!(once.icon(), "☀️");
    assert_eq!(once.toggle_title(), "Cambiar a modo claro");

    let twice = once.toggled();
    assert_eq!(twice, start);
    assert_eq!(twice.as_str(), "light");
    assert_eq!(twice.icon(), "🌙");
    assert_eq!(twice.toggle_title(), "Cambiar a modo oscuro");
}
