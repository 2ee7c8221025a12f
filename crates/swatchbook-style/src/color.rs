//! Color and fill types.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// An sRGB color with 8-bit channels and straight (non-premultiplied) alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Opaque white.
    pub const WHITE: Self = Self::from_rgb8(255, 255, 255);
    /// Opaque black.
    pub const BLACK: Self = Self::from_rgb8(0, 0, 0);

    /// Create an opaque color from 8-bit channels.
    #[inline]
    pub const fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Create a color from 8-bit channels including alpha.
    #[inline]
    pub const fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color from a packed `0xRRGGBB` value.
    #[inline]
    pub const fn from_u32(rgb: u32) -> Self {
        Self::from_rgb8((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
    }

    /// Parse a hex color string.
    ///
    /// Accepts `#RGB`, `#RGBA`, `#RRGGBB` and `#RRGGBBAA` in either case, the
    /// forms a CSS color value takes. The leading `#` is required and no
    /// surrounding whitespace is allowed.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#')?;
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }

        let nibble = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|n| n * 17);
        let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();

        match hex.len() {
            3 => Some(Self::from_rgb8(nibble(0)?, nibble(1)?, nibble(2)?)),
            4 => Some(Self::from_rgba8(nibble(0)?, nibble(1)?, nibble(2)?, nibble(3)?)),
            6 => Some(Self::from_rgb8(byte(0)?, byte(2)?, byte(4)?)),
            8 => Some(Self::from_rgba8(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
            _ => None,
        }
    }

    /// Parse a hex color string, reporting the offending text on failure.
    pub fn parse(value: &str) -> Result<Self> {
        Self::from_hex(value).ok_or_else(|| Error::invalid_color(value))
    }

    /// Format as uppercase `#RRGGBB`, or `#RRGGBBAA` when not fully opaque.
    pub fn to_hex(self) -> String {
        if self.a == 255 {
            format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            format!("#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// How an area is painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fill {
    /// A single color.
    Solid(Color),
    /// A two-stop linear gradient running left to right.
    LinearGradient { from: Color, to: Color },
}

impl Fill {
    /// A horizontal gradient from `from` to `to`.
    pub const fn horizontal(from: Color, to: Color) -> Self {
        Self::LinearGradient { from, to }
    }
}

impl From<Color> for Fill {
    fn from(color: Color) -> Self {
        Self::Solid(color)
    }
}

impl fmt::Display for Fill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Solid(color) => write!(f, "{color}"),
            Self::LinearGradient { from, to } => write!(f, "linear-gradient(to right, {from}, {to})"),
        }
    }
}

static_assertions::assert_impl_all!(Color: Send, Sync, Copy);
