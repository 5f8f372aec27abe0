//! Color representation

use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// Color representation
///
/// In style configs a color is written as a string: `"#RRGGBB"`,
/// `"AARRGGBB"`, `"auto"`, or a case-insensitive name such as `"Blue"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Color {
    /// Automatic/default color
    #[default]
    Auto,

    /// RGB color (no alpha)
    Rgb { r: u8, g: u8, b: u8 },

    /// ARGB color with alpha channel
    Argb { a: u8, r: u8, g: u8, b: u8 },

    /// Indexed color (legacy palette)
    Indexed(u8),
}

/// Named colors accepted in style configs
const NAMED: &[(&str, Color)] = &[
    ("black", Color::BLACK),
    ("white", Color::WHITE),
    ("red", Color::RED),
    ("green", Color::rgb(0, 128, 0)),
    ("bright green", Color::GREEN),
    ("blue", Color::BLUE),
    ("dark blue", Color::rgb(0, 0, 128)),
    ("yellow", Color::YELLOW),
    ("orange", Color::rgb(255, 102, 0)),
    ("pink", Color::MAGENTA),
    ("turquoise", Color::CYAN),
    ("teal", Color::rgb(0, 128, 128)),
    ("violet", Color::rgb(128, 0, 128)),
    ("gray", Color::GRAY),
    ("grey", Color::GRAY),
    ("light gray", Color::LIGHT_GRAY),
    ("dark gray", Color::DARK_GRAY),
];

impl Color {
    /// Create an RGB color
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color::Rgb { r, g, b }
    }

    /// Create an ARGB color
    pub const fn argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Color::Argb { a, r, g, b }
    }

    /// Create from a hex string (e.g., "#FF0000", "FF0000" or "80FF0000")
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();

        match hex.len() {
            6 => Some(Color::rgb(byte(0)?, byte(2)?, byte(4)?)),
            8 => Some(Color::argb(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
            _ => None,
        }
    }

    /// Look up a named color, ignoring case and `-`/`_` separators
    pub fn from_name(name: &str) -> Option<Self> {
        let normalized = name.trim().to_lowercase().replace(['-', '_'], " ");
        NAMED
            .iter()
            .find(|(n, _)| *n == normalized)
            .map(|(_, c)| *c)
    }

    // Common colors
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 255, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    pub const YELLOW: Color = Color::rgb(255, 255, 0);
    pub const CYAN: Color = Color::rgb(0, 255, 255);
    pub const MAGENTA: Color = Color::rgb(255, 0, 255);
    pub const GRAY: Color = Color::rgb(128, 128, 128);
    pub const LIGHT_GRAY: Color = Color::rgb(192, 192, 192);
    pub const DARK_GRAY: Color = Color::rgb(64, 64, 64);
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Auto => write!(f, "auto"),
            Color::Rgb { r, g, b } => write!(f, "#{:02X}{:02X}{:02X}", r, g, b),
            Color::Argb { a, r, g, b } => write!(f, "#{:02X}{:02X}{:02X}{:02X}", a, r, g, b),
            Color::Indexed(i) => write!(f, "indexed({})", i),
        }
    }
}

impl FromStr for Color {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("auto") {
            return Ok(Color::Auto);
        }
        if let Some(index) = trimmed
            .strip_prefix("indexed(")
            .and_then(|rest| rest.strip_suffix(')'))
        {
            return index
                .parse()
                .map(Color::Indexed)
                .map_err(|_| format!("invalid color index in '{}'", s));
        }
        Color::from_name(trimmed)
            .or_else(|| Color::from_hex(trimmed))
            .ok_or_else(|| format!("unrecognized color '{}'", s))
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex() {
        assert_eq!(Color::from_hex("#FF0000"), Some(Color::RED));
        assert_eq!(Color::from_hex("00ff00"), Some(Color::GREEN));
        assert_eq!(
            Color::from_hex("#80FFFFFF"),
            Some(Color::argb(128, 255, 255, 255))
        );
        assert_eq!(Color::from_hex("#FFF"), None);
        assert_eq!(Color::from_hex("zzzzzz"), None);
    }

    #[test]
    fn test_names_ignore_case() {
        assert_eq!("Blue".parse::<Color>(), Ok(Color::BLUE));
        assert_eq!("red".parse::<Color>(), Ok(Color::RED));
        assert_eq!("Dark-Blue".parse::<Color>(), Ok(Color::rgb(0, 0, 128)));
        assert!("chartreuse-ish".parse::<Color>().is_err());
    }

    #[test]
    fn test_string_round_trip() {
        for color in [Color::Auto, Color::RED, Color::argb(1, 2, 3, 4), Color::Indexed(12)] {
            assert_eq!(color.to_string().parse::<Color>(), Ok(color));
        }
    }
}
