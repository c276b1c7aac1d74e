//! Material Design 3 dark theme colors, plus home menu backgrounds

use homenav_core::config::HomeBackground;
use ratatui::style::Color;

pub const BG: Color = Color::Rgb(0x14, 0x13, 0x13);
pub const SURFACE: Color = Color::Rgb(0x20, 0x1f, 0x20);
pub const SURFACE_HIGH: Color = Color::Rgb(0x2b, 0x2a, 0x2a);

pub const ON_SURFACE: Color = Color::Rgb(0xe6, 0xe1, 0xe1);
pub const SUBTEXT: Color = Color::Rgb(0xcb, 0xc5, 0xca);
pub const OUTLINE: Color = Color::Rgb(0x94, 0x8f, 0x94);

pub const PRIMARY: Color = Color::Rgb(0xcb, 0xc4, 0xcb);

pub const SUCCESS: Color = Color::Rgb(0xb5, 0xcc, 0xba);

/// Parse `#RRGGBB` (leading `#` optional).
pub fn parse_hex(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#').unwrap_or(hex);
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel =
        |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
    Some(Color::Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

/// Home menu colors from a background style: (fill, tile accent).
///
/// Terminals can't draw gradients, so the last stop fills the overlay and
/// the first stop marks the highlighted tile.
pub fn home_background(style: HomeBackground) -> (Color, Color) {
    let stops = style.gradient();
    let first = stops.first().and_then(|s| parse_hex(s)).unwrap_or(PRIMARY);
    let last = stops.last().and_then(|s| parse_hex(s)).unwrap_or(BG);
    (last, first)
}
