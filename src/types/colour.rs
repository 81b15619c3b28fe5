//! Colour type and parsing.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{AvatarError, Result};

/// An RGBA colour value (unpremultiplied).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Colour {
    /// Create a new colour from RGBA components.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create a new opaque colour from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Fully transparent colour.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    /// Black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// White.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Parse a hex colour string.
    ///
    /// Supports formats:
    /// - `#RGB` (3 digits, expanded to 6)
    /// - `#RGBA` (4 digits, expanded to 8)
    /// - `#RRGGBB` (6 digits)
    /// - `#RRGGBBAA` (8 digits)
    pub fn from_hex(s: &str) -> Result<Self> {
        let s = s.trim();
        let hex = s.strip_prefix('#').unwrap_or(s);

        if !hex.is_ascii() {
            return Err(invalid_hex(s));
        }

        let nibble = |i: usize| parse_hex_digit(&hex[i..i + 1]).map(|d| d << 4 | d);
        let byte = |i: usize| parse_hex_byte(&hex[i..i + 2]);

        match hex.len() {
            3 => Ok(Self::rgb(nibble(0)?, nibble(1)?, nibble(2)?)),
            4 => Ok(Self::new(nibble(0)?, nibble(1)?, nibble(2)?, nibble(3)?)),
            6 => Ok(Self::rgb(byte(0)?, byte(2)?, byte(4)?)),
            8 => Ok(Self::new(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
            _ => Err(invalid_hex(s)),
        }
    }

    /// Shift R, G and B by `delta`, clamping each channel, and set `alpha`.
    ///
    /// All procedural variation in the render styles goes through here so
    /// no derived colour can carry an out-of-range channel.
    pub fn shifted(self, delta: i32, alpha: u8) -> Self {
        Self {
            r: clamp_channel(i32::from(self.r) + delta),
            g: clamp_channel(i32::from(self.g) + delta),
            b: clamp_channel(i32::from(self.b) + delta),
            a: alpha,
        }
    }

    /// Convert to RGBA tuple.
    pub fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Check if the colour is fully opaque.
    pub fn is_opaque(self) -> bool {
        self.a == 255
    }
}

/// Clamp an integer channel value into `0..=255`.
pub fn clamp_channel(value: i32) -> u8 {
    value.clamp(0, 255) as u8
}

impl FromStr for Colour {
    type Err = AvatarError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            write!(f, "#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }
}

impl Serialize for Colour {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Colour {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

impl From<Colour> for image::Rgba<u8> {
    fn from(colour: Colour) -> Self {
        image::Rgba(colour.to_rgba())
    }
}

fn invalid_hex(s: &str) -> AvatarError {
    AvatarError::Parse {
        message: format!("Invalid hex colour: {}", s),
        help: Some("Use #RGB, #RGBA, #RRGGBB, or #RRGGBBAA format".to_string()),
    }
}

/// Parse a single hex digit.
fn parse_hex_digit(s: &str) -> Result<u8> {
    u8::from_str_radix(s, 16).map_err(|_| AvatarError::Parse {
        message: format!("Invalid hex digit: {}", s),
        help: None,
    })
}

/// Parse a two-character hex byte.
fn parse_hex_byte(s: &str) -> Result<u8> {
    u8::from_str_radix(s, 16).map_err(|_| AvatarError::Parse {
        message: format!("Invalid hex byte: {}", s),
        help: None,
    })
}
