//! RGBA color type with CSS-style string parsing and formatting.

use std::fmt;
use thiserror::Error;

/// Error raised when a color string cannot be parsed.
///
/// The drawing pipeline itself never validates colors (unknown strings would
/// just produce garbage pixels), so parsing is the single place where a
/// malformed color surfaces as a typed error.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorFormatError {
    #[error("invalid color string {0:?}: expected rgb(r,g,b), rgba(r,g,b,a), or #rrggbb")]
    InvalidColorFormat(String),
}

/// An RGBA color with 8-bit channels and a floating-point alpha.
///
/// Alpha is in the range 0.0 (fully transparent) to 1.0 (fully opaque).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Color {
    /// Creates an opaque color from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Creates a color with an explicit alpha component.
    pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Returns the same color with the alpha channel replaced.
    ///
    /// This is the color-with-alpha derivation used by brushes: the base
    /// color keeps its RGB components and only the alpha is rewritten.
    pub fn with_alpha(self, alpha: f64) -> Self {
        Self { a: alpha, ..self }
    }

    /// Returns the same color with full opacity.
    pub fn opaque(self) -> Self {
        Self { a: 1.0, ..self }
    }

    /// Parses `rgb(r,g,b)`, `rgba(r,g,b,a)`, or `#rrggbb` strings.
    pub fn parse(s: &str) -> Result<Self, ColorFormatError> {
        let trimmed = s.trim();
        let invalid = || ColorFormatError::InvalidColorFormat(s.to_string());

        if let Some(hex) = trimmed.strip_prefix('#') {
            if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
                return Err(invalid());
            }
            let r = u8::from_str_radix(&hex[0..2], 16).map_err(|_| invalid())?;
            let g = u8::from_str_radix(&hex[2..4], 16).map_err(|_| invalid())?;
            let b = u8::from_str_radix(&hex[4..6], 16).map_err(|_| invalid())?;
            return Ok(Self::rgb(r, g, b));
        }

        let (body, has_alpha) = if let Some(rest) = trimmed.strip_prefix("rgba(") {
            (rest.strip_suffix(')').ok_or_else(invalid)?, true)
        } else if let Some(rest) = trimmed.strip_prefix("rgb(") {
            (rest.strip_suffix(')').ok_or_else(invalid)?, false)
        } else {
            return Err(invalid());
        };

        let parts: Vec<&str> = body.split(',').map(str::trim).collect();
        let expected = if has_alpha { 4 } else { 3 };
        if parts.len() != expected {
            return Err(invalid());
        }

        let r: u8 = parts[0].parse().map_err(|_| invalid())?;
        let g: u8 = parts[1].parse().map_err(|_| invalid())?;
        let b: u8 = parts[2].parse().map_err(|_| invalid())?;
        let a: f64 = if has_alpha {
            let a: f64 = parts[3].parse().map_err(|_| invalid())?;
            if !(0.0..=1.0).contains(&a) {
                return Err(invalid());
            }
            a
        } else {
            1.0
        };

        Ok(Self { r, g, b, a })
    }
}

impl fmt::Display for Color {
    /// Formats as `rgb(r,g,b)` when opaque, `rgba(r,g,b,a)` otherwise.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if (self.a - 1.0).abs() < f64::EPSILON {
            write!(f, "rgb({},{},{})", self.r, self.g, self.b)
        } else {
            write!(f, "rgba({},{},{},{})", self.r, self.g, self.b, self.a)
        }
    }
}

/// Opaque black, the initial pen color.
pub const BLACK: Color = Color::rgb(0, 0, 0);

/// Opaque white.
pub const WHITE: Color = Color::rgb(255, 255, 255);
