use ratatui::style::Color;

/// Fallback used when a color string cannot be parsed
pub const DEFAULT_COLOR: Color = Color::Rgb(255, 165, 0);

/// Convert a `#rrggbb` (or `#rgb`) string to a terminal color
#[must_use]
pub fn parse_hex_color(color: &str) -> Option<Color> {
    let hex = color.trim().strip_prefix('#')?;
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    match hex.len() {
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some(Color::Rgb(r, g, b))
        }
        3 => {
            let mut channels = hex.chars().filter_map(|c| c.to_digit(16)).map(|d| (d * 17) as u8);
            Some(Color::Rgb(channels.next()?, channels.next()?, channels.next()?))
        }
        _ => None,
    }
}

/// Like [`parse_hex_color`] but never fails
#[must_use]
pub fn hex_or_default(color: &str) -> Color {
    parse_hex_color(color).unwrap_or(DEFAULT_COLOR)
}
