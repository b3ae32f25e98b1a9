//! Color types and the outline tint component.
//!
//! The [`Tint`] component holds the color the renderer uses for an entity's
//! outline sprite. Colors can be parsed from `#RRGGBB` or `#RRGGBBAA` strings
//! so they can be set from the configuration file.

use bevy_ecs::prelude::Component;

/// 8-bit RGBA color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::new(255, 255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse `#RRGGBB` or `#RRGGBBAA` (the leading `#` is optional).
    pub fn from_hex(text: &str) -> Result<Self, String> {
        let hex = text.trim().trim_start_matches('#');
        if !hex.is_ascii() {
            return Err(format!("Invalid color '{}': non-ASCII characters", text));
        }
        if hex.len() != 6 && hex.len() != 8 {
            return Err(format!("Invalid color '{}': expected 6 or 8 hex digits", text));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .map_err(|e| format!("Invalid color '{}': {}", text, e))
        };
        let a = if hex.len() == 8 { channel(6)? } else { 255 };
        Ok(Color::new(channel(0)?, channel(2)?, channel(4)?, a))
    }
}

/// Color tint component for the outline sprite.
#[derive(Component, Clone, Debug, Copy)]
pub struct Tint {
    pub color: Color,
}

impl Tint {
    pub fn new(color: Color) -> Self {
        Self { color }
    }
}

impl Default for Tint {
    fn default() -> Self {
        Self {
            color: Color::WHITE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_white() {
        let t = Tint::default();
        assert_eq!(t.color, Color::WHITE);
    }

    #[test]
    fn test_from_hex_rgb() {
        let c = Color::from_hex("#3CDC50").unwrap();
        assert_eq!(c, Color::new(0x3C, 0xDC, 0x50, 255));
    }

    #[test]
    fn test_from_hex_rejects_non_ascii() {
        assert!(Color::from_hex("aébcd").is_err());
        assert!(Color::from_hex("#ééé").is_err());
        assert!(Color::from_hex("12345é").is_err());
    }

    #[test]
    fn test_from_hex_rgba_without_hash() {
        let c = Color::from_hex("ff962880").unwrap();
        assert_eq!(c, Color::new(0xFF, 0x96, 0x28, 0x80));
    }

    #[test]
    fn test_from_hex_rejects_bad_input() {
        assert!(Color::from_hex("#12345").is_err());
        assert!(Color::from_hex("#GGGGGG").is_err());
    }
}
