use ratatui::style::Color;
use writerdesk::menu::default_apps;
use writerdesk::utils::color::{hex_or_default, parse_hex_color, DEFAULT_COLOR};

#[test]
fn test_parse_long_and_short_hex() {
    assert_eq!(parse_hex_color("#ff9500"), Some(Color::Rgb(255, 149, 0)));
    assert_eq!(parse_hex_color("#F97316"), Some(Color::Rgb(249, 115, 22)));
    assert_eq!(parse_hex_color("#fa0"), Some(Color::Rgb(255, 170, 0)));
}

#[test]
fn test_rejects_malformed_colors() {
    assert_eq!(parse_hex_color("ff9500"), None);
    assert_eq!(parse_hex_color("#ff95"), None);
    assert_eq!(parse_hex_color("#gg0000"), None);
    assert_eq!(hex_or_default("orange"), DEFAULT_COLOR);
}

#[test]
fn test_every_app_color_parses() {
    for app in default_apps() {
        assert!(parse_hex_color(&app.color).is_some(), "{} has color {}", app.name, app.color);
    }
}
