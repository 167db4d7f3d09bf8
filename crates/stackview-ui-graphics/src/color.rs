//! Color representation and hex parsing

use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color(pub f32, pub f32, pub f32, pub f32);

impl Color {
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self(r, g, b, 1.0)
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self(r, g, b, a)
    }

    pub const fn from_rgba_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        )
    }

    pub const fn from_rgb_u8(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgba_u8(r, g, b, 255)
    }

    pub fn r(&self) -> f32 {
        self.0
    }

    pub fn g(&self) -> f32 {
        self.1
    }

    pub fn b(&self) -> f32 {
        self.2
    }

    pub fn a(&self) -> f32 {
        self.3
    }

    pub fn with_alpha(&self, alpha: f32) -> Self {
        Self(self.0, self.1, self.2, alpha)
    }

    /// Parses `#rgb`, `#rgba`, `#rrggbb` or `#rrggbbaa` (the `#` is optional).
    pub fn from_hex(input: &str) -> Result<Self, ColorParseError> {
        let trimmed = input.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorParseError::InvalidDigit(input.to_string()));
        }

        let channel = |range: std::ops::Range<usize>| -> Result<u8, ColorParseError> {
            let part = &digits[range];
            let value = u8::from_str_radix(part, 16)
                .map_err(|_| ColorParseError::InvalidDigit(input.to_string()))?;
            // Short forms repeat the nibble: "c" -> "cc".
            Ok(if part.len() == 1 { value * 17 } else { value })
        };

        match digits.len() {
            3 => Ok(Self::from_rgb_u8(channel(0..1)?, channel(1..2)?, channel(2..3)?)),
            4 => Ok(Self::from_rgba_u8(
                channel(0..1)?,
                channel(1..2)?,
                channel(2..3)?,
                channel(3..4)?,
            )),
            6 => Ok(Self::from_rgb_u8(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
            8 => Ok(Self::from_rgba_u8(
                channel(0..2)?,
                channel(2..4)?,
                channel(4..6)?,
                channel(6..8)?,
            )),
            len => Err(ColorParseError::InvalidLength(len)),
        }
    }

    pub const WHITE: Color = Color(1.0, 1.0, 1.0, 1.0);
    /// `#ccc`
    pub const LIGHT_GRAY: Color = Color::from_rgb_u8(0xcc, 0xcc, 0xcc);
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    InvalidLength(usize),
    InvalidDigit(String),
}

impl fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorParseError::InvalidLength(len) => {
                write!(f, "expected 3, 4, 6 or 8 hex digits, found {len}")
            }
            ColorParseError::InvalidDigit(input) => write!(f, "invalid hex color {input:?}"),
        }
    }
}

impl std::error::Error for ColorParseError {}
