// SPDX-License-Identifier: MIT
//
// pw-color — color values for pinwheel palettes.
//
// Palettes are authored as CSS-style strings: hex triplets like `#5DAA00`
// or a handful of named colors like `black`. This crate parses both forms
// into a single 8-bit sRGB `Color` and formats it back as lowercase hex,
// which is what every renderer downstream consumes.
//
// There is no color math here. The logo only ever fills rectangles with
// palette colors verbatim, so the value type stays small and `Copy`.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};
use thiserror::Error;

// ─── Errors ──────────────────────────────────────────────────────────────────

/// A color string that could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// Looked like hex (leading `#`) but wasn't 3/4/6/8 hex digits.
    #[error("invalid hex color `{0}`")]
    InvalidHex(String),

    /// Neither hex nor a known color name.
    #[error("unknown color `{0}`")]
    Unknown(String),
}

// ─── Color ───────────────────────────────────────────────────────────────────

/// An 8-bit sRGB color with alpha.
///
/// # Examples
///
/// ```
/// use pw_color::Color;
///
/// let green = Color::hex("#5DAA00").unwrap();
/// assert_eq!(green.to_hex(), "#5daa00");
///
/// let black: Color = "black".parse().unwrap();
/// assert_eq!(black, Color::BLACK);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// 255 = fully opaque.
    pub a: u8,
}

impl Color {
    // ─── Constructors ────────────────────────────────────────────────────

    /// Create an opaque color from 8-bit sRGB channels.
    #[inline]
    #[must_use]
    pub const fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Create a color from 8-bit sRGB channels with alpha.
    #[inline]
    #[must_use]
    pub const fn rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create a color from a hex string.
    ///
    /// Supports: `#RGB`, `#RGBA`, `#RRGGBB`, `#RRGGBBAA` (with or without `#`).
    /// Returns `None` if the string is not a valid hex color.
    #[must_use]
    pub fn hex(s: &str) -> Option<Self> {
        parse_hex(s)
    }

    /// Look up a named color (case-insensitive).
    ///
    /// Only the CSS basic keywords are known; that covers every name the
    /// builtin palettes use.
    #[must_use]
    pub fn named(name: &str) -> Option<Self> {
        NAMED
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|&(_, c)| c)
    }

    /// Parse a color from either hex or a color name.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidHex`] for a malformed `#...` string and
    /// [`ColorError::Unknown`] for anything else that isn't recognized.
    pub fn parse(s: &str) -> Result<Self, ColorError> {
        let s = s.trim();
        if s.starts_with('#') {
            return parse_hex(s).ok_or_else(|| ColorError::InvalidHex(s.to_string()));
        }
        Self::named(s)
            .or_else(|| parse_hex(s))
            .ok_or_else(|| ColorError::Unknown(s.to_string()))
    }

    /// Pure black.
    pub const BLACK: Self = Self::rgb8(0, 0, 0);

    /// Pure white.
    pub const WHITE: Self = Self::rgb8(255, 255, 255);

    // ─── Accessors ───────────────────────────────────────────────────────

    /// Whether this color is fully opaque.
    #[inline]
    #[must_use]
    pub const fn is_opaque(self) -> bool {
        self.a == 255
    }

    /// The color as an `(r, g, b)` tuple, alpha dropped.
    #[inline]
    #[must_use]
    pub const fn to_rgb8(self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    /// Convert to hex string (`#rrggbb`, or `#rrggbbaa` if not opaque).
    #[must_use]
    pub fn to_hex(self) -> String {
        let Self { r, g, b, a } = self;
        if self.is_opaque() {
            format!("#{r:02x}{g:02x}{b:02x}")
        } else {
            format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Default for Color {
    /// Default is fully opaque black.
    fn default() -> Self {
        Self::BLACK
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

// ─── Named Colors ────────────────────────────────────────────────────────────

const NAMED: &[(&str, Color)] = &[
    ("black", Color::rgb8(0, 0, 0)),
    ("silver", Color::rgb8(192, 192, 192)),
    ("gray", Color::rgb8(128, 128, 128)),
    ("grey", Color::rgb8(128, 128, 128)),
    ("white", Color::rgb8(255, 255, 255)),
    ("maroon", Color::rgb8(128, 0, 0)),
    ("red", Color::rgb8(255, 0, 0)),
    ("purple", Color::rgb8(128, 0, 128)),
    ("fuchsia", Color::rgb8(255, 0, 255)),
    ("green", Color::rgb8(0, 128, 0)),
    ("lime", Color::rgb8(0, 255, 0)),
    ("olive", Color::rgb8(128, 128, 0)),
    ("yellow", Color::rgb8(255, 255, 0)),
    ("navy", Color::rgb8(0, 0, 128)),
    ("blue", Color::rgb8(0, 0, 255)),
    ("teal", Color::rgb8(0, 128, 128)),
    ("aqua", Color::rgb8(0, 255, 255)),
    ("orange", Color::rgb8(255, 165, 0)),
    ("coral", Color::rgb8(255, 127, 80)),
    ("transparent", Color::rgba8(0, 0, 0, 0)),
];

// ─── Hex Parsing ─────────────────────────────────────────────────────────────

/// Parse a hex color string into a Color.
fn parse_hex(s: &str) -> Option<Color> {
    let s = s.strip_prefix('#').unwrap_or(s);
    let bytes = s.as_bytes();

    match bytes.len() {
        // #RGB
        3 => {
            let r = parse_hex_digit(bytes[0])?;
            let g = parse_hex_digit(bytes[1])?;
            let b = parse_hex_digit(bytes[2])?;
            Some(Color::rgb8(r << 4 | r, g << 4 | g, b << 4 | b))
        }
        // #RGBA
        4 => {
            let r = parse_hex_digit(bytes[0])?;
            let g = parse_hex_digit(bytes[1])?;
            let b = parse_hex_digit(bytes[2])?;
            let a = parse_hex_digit(bytes[3])?;
            Some(Color::rgba8(r << 4 | r, g << 4 | g, b << 4 | b, a << 4 | a))
        }
        // #RRGGBB
        6 => {
            let r = parse_hex_byte(&bytes[0..2])?;
            let g = parse_hex_byte(&bytes[2..4])?;
            let b = parse_hex_byte(&bytes[4..6])?;
            Some(Color::rgb8(r, g, b))
        }
        // #RRGGBBAA
        8 => {
            let r = parse_hex_byte(&bytes[0..2])?;
            let g = parse_hex_byte(&bytes[2..4])?;
            let b = parse_hex_byte(&bytes[4..6])?;
            let a = parse_hex_byte(&bytes[6..8])?;
            Some(Color::rgba8(r, g, b, a))
        }
        _ => None,
    }
}

#[inline]
const fn parse_hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

#[inline]
fn parse_hex_byte(bytes: &[u8]) -> Option<u8> {
    let hi = parse_hex_digit(bytes[0])?;
    let lo = parse_hex_digit(bytes[1])?;
    Some(hi << 4 | lo)
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    // ── Hex Parsing ──────────────────────────────────────────────────────

    #[test]
    fn hex_parsing_rrggbb() {
        let color = Color::hex("#E7471E").unwrap();
        assert_eq!(color.to_rgb8(), (0xE7, 0x47, 0x1E));
        assert!(color.is_opaque());
    }

    #[test]
    fn hex_parsing_short() {
        let color = Color::hex("#f80").unwrap();
        assert_eq!(color.to_rgb8(), (255, 136, 0));
    }

    #[test]
    fn hex_parsing_with_alpha() {
        let color = Color::hex("#ff000080").unwrap();
        assert_eq!(color.a, 0x80);
        assert!(!color.is_opaque());
    }

    #[test]
    fn hex_parsing_no_hash() {
        let color = Color::hex("00ff00").unwrap();
        assert_eq!(color.to_rgb8(), (0, 255, 0));
    }

    #[test]
    fn hex_parsing_invalid() {
        assert!(Color::hex("xyz").is_none());
        assert!(Color::hex("#12345").is_none());
        assert!(Color::hex("").is_none());
    }

    #[test]
    fn hex_roundtrip_lowercases() {
        let color = Color::hex("#5a2fc2").unwrap();
        assert_eq!(color.to_hex(), "#5a2fc2");
        assert_eq!(Color::hex("#052D49").unwrap().to_hex(), "#052d49");
    }

    #[test]
    fn hex_keeps_alpha_when_translucent() {
        assert_eq!(Color::rgba8(1, 2, 3, 4).to_hex(), "#01020304");
    }

    // ── Names ────────────────────────────────────────────────────────────

    #[test]
    fn named_black() {
        assert_eq!(Color::named("black"), Some(Color::BLACK));
        assert_eq!(Color::named("BLACK"), Some(Color::BLACK));
    }

    #[test]
    fn named_unknown() {
        assert_eq!(Color::named("chartreuse-ish"), None);
    }

    // ── parse / FromStr ──────────────────────────────────────────────────

    #[test]
    fn parse_accepts_hex_and_names() {
        assert_eq!("white".parse::<Color>(), Ok(Color::WHITE));
        assert_eq!(" #fff ".parse::<Color>(), Ok(Color::WHITE));
        assert_eq!("ffffff".parse::<Color>(), Ok(Color::WHITE));
    }

    #[test]
    fn parse_errors_are_specific() {
        assert_eq!(
            Color::parse("#zzz"),
            Err(ColorError::InvalidHex("#zzz".into()))
        );
        assert_eq!(
            Color::parse("mauve"),
            Err(ColorError::Unknown("mauve".into()))
        );
    }

    #[test]
    fn display_is_hex() {
        assert_eq!(Color::rgb8(200, 100, 50).to_string(), "#c86432");
    }

    #[test]
    fn default_is_black() {
        assert_eq!(Color::default(), Color::BLACK);
    }
}
