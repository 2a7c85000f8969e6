use std::fmt;

use serde::{Deserialize, Serialize};

/// Straight-alpha sRGB color with components in `[0, 1]`.
///
/// Serialized as a CSS-style hex string: `#rrggbb` when opaque, `#rrggbbaa`
/// otherwise. Deserialization accepts `#rgb`, `#rrggbb` and `#rrggbbaa`.
#[derive(Debug, Copy, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::opaque(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::opaque(0.0, 0.0, 0.0);

    #[inline]
    pub const fn opaque(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Creates a color from sRGB bytes (`0`–`255`).
    #[inline]
    pub fn from_srgb_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: a as f32 / 255.0,
        }
    }

    /// Creates an opaque color from a `0xRRGGBB` literal.
    #[inline]
    pub fn from_hex_u32(rgb: u32) -> Self {
        Self::from_srgb_u8((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8, 255)
    }

    /// Parses `#rgb`, `#rrggbb` or `#rrggbbaa`. The leading `#` is optional.
    pub fn parse_hex(s: &str) -> Result<Self, ColorParseError> {
        let digits = s.trim().strip_prefix('#').unwrap_or(s.trim());
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorParseError::new(s));
        }

        let byte = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16);
        let nibble = |i: usize| u8::from_str_radix(&digits[i..i + 1], 16).map(|v| v * 17);

        let rgba = match digits.len() {
            3 => (nibble(0), nibble(1), nibble(2), Ok(255)),
            6 => (byte(0), byte(2), byte(4), Ok(255)),
            8 => (byte(0), byte(2), byte(4), byte(6)),
            _ => return Err(ColorParseError::new(s)),
        };

        match rgba {
            (Ok(r), Ok(g), Ok(b), Ok(a)) => Ok(Self::from_srgb_u8(r, g, b, a)),
            _ => Err(ColorParseError::new(s)),
        }
    }

    /// Returns the same color with alpha replaced.
    #[inline]
    pub fn with_alpha(self, a: f32) -> Self {
        Self { a: a.clamp(0.0, 1.0), ..self }
    }

    #[inline]
    pub fn to_srgb_u8(self) -> [u8; 4] {
        let q = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        [q(self.r), q(self.g), q(self.b), q(self.a)]
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b, a] = self.to_srgb_u8();
        if a == 255 {
            write!(f, "#{r:02x}{g:02x}{b:02x}")
        } else {
            write!(f, "#{r:02x}{g:02x}{b:02x}{a:02x}")
        }
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

impl TryFrom<String> for Color {
    type Error = ColorParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Color::parse_hex(&s)
    }
}

/// A color string that is not a valid hex color.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorParseError(pub String);

impl ColorParseError {
    fn new(input: &str) -> Self {
        Self(input.to_string())
    }
}

impl fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid hex color {:?} (expected #rgb, #rrggbb or #rrggbbaa)", self.0)
    }
}

impl std::error::Error for ColorParseError {}
