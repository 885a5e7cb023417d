//! Color values and channel arithmetic
//!
//! Colors are 8-bit sRGB triples. Every derivation helper uses plain
//! per-channel arithmetic (no gamma correction, no color-space conversion)
//! so that derived theme values are reproducible across platforms.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error produced when a hex color string cannot be parsed
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ColorParseError {
    /// The string had a digit count other than 3 or 6
    #[error("expected 3 or 6 hex digits, got {0}")]
    InvalidLength(usize),
    /// The string contained a character outside `[0-9a-fA-F]`
    #[error("invalid hex digit {0:?}")]
    InvalidDigit(char),
}

/// An sRGB color with 8-bit channels
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build from a packed `0xRRGGBB` value
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as u8,
            g: ((hex >> 8) & 0xFF) as u8,
            b: (hex & 0xFF) as u8,
        }
    }

    /// Parse a `#rgb` or `#rrggbb` string. The leading `#` is optional and
    /// three-digit shorthand expands by doubling each nibble.
    ///
    /// Unlike lenient CSS parsers this rejects malformed input outright:
    /// wrong digit counts (including 4-digit strings) and non-hex characters
    /// are errors, never garbage channels.
    pub fn from_hex_str(s: &str) -> Result<Self, ColorParseError> {
        let digits = s.strip_prefix('#').unwrap_or(s);

        fn nibble(c: char) -> Result<u8, ColorParseError> {
            c.to_digit(16)
                .map(|d| d as u8)
                .ok_or(ColorParseError::InvalidDigit(c))
        }

        let chars: Vec<char> = digits.chars().collect();
        match chars.len() {
            3 => {
                let r = nibble(chars[0])?;
                let g = nibble(chars[1])?;
                let b = nibble(chars[2])?;
                Ok(Self::rgb(r << 4 | r, g << 4 | g, b << 4 | b))
            }
            6 => {
                let r = nibble(chars[0])? << 4 | nibble(chars[1])?;
                let g = nibble(chars[2])? << 4 | nibble(chars[3])?;
                let b = nibble(chars[4])? << 4 | nibble(chars[5])?;
                Ok(Self::rgb(r, g, b))
            }
            n => Err(ColorParseError::InvalidLength(n)),
        }
    }

    /// Interpolate each channel toward 255 by fraction `f`:
    /// `channel + (255 - channel) * f`, rounded to the nearest integer.
    pub fn tint(self, f: f32) -> Self {
        let lerp = |c: u8| (c as f32 + (255.0 - c as f32) * f).round() as u8;
        Self::rgb(lerp(self.r), lerp(self.g), lerp(self.b))
    }

    /// Scale each channel by `f`, rounded to the nearest integer
    pub fn darken(self, f: f32) -> Self {
        let scale = |c: u8| (c as f32 * f).round() as u8;
        Self::rgb(scale(self.r), scale(self.g), scale(self.b))
    }

    /// Equivalent to `tint(1 - f)`
    pub fn lighten(self, f: f32) -> Self {
        self.tint(1.0 - f)
    }

    /// Format as a CSS `rgba()` string with the given 0-1 opacity
    pub fn rgba(self, alpha: f32) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, alpha)
    }

    /// Normalized lowercase `#rrggbb` form
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex_str(s)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hex_str(&s).map_err(de::Error::custom)
    }
}
