//! Colour type, parsing, and the lighten/darken channel transforms.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{RingsideError, Result};

/// Default amount subtracted from each channel by [`Colour::darken`].
pub const DARKEN_DEFAULT: u8 = 40;

/// Default amount added to each channel by [`Colour::lighten`].
pub const LIGHTEN_DEFAULT: u8 = 30;

/// An RGBA colour value.
///
/// Serialized as a hex string (`#RRGGBB`, or `#RRGGBBAA` when translucent).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
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

        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid_hex(s));
        }

        match hex.len() {
            3 | 4 => {
                let mut nibbles = [0xF_u8; 4];
                for (slot, c) in nibbles.iter_mut().zip(hex.chars()) {
                    *slot = parse_hex_digit(c)?;
                }
                let [r, g, b, a] = nibbles.map(|n| n << 4 | n);
                Ok(Self::new(r, g, b, a))
            }
            6 | 8 => {
                let r = parse_hex_byte(&hex[0..2])?;
                let g = parse_hex_byte(&hex[2..4])?;
                let b = parse_hex_byte(&hex[4..6])?;
                let a = if hex.len() == 8 {
                    parse_hex_byte(&hex[6..8])?
                } else {
                    255
                };
                Ok(Self::new(r, g, b, a))
            }
            _ => Err(invalid_hex(s)),
        }
    }

    /// Parse the strict `#RRGGBB` form stored with a wrestler's appearance.
    ///
    /// The result is always opaque. Short and alpha forms are refused.
    pub fn from_hex6(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let hex = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(RingsideError::Parse {
                message: format!("Invalid appearance colour: '{}'", trimmed),
                help: Some("Appearance colours are six hex digits, e.g. #ff2d55".to_string()),
            });
        }
        Self::from_hex(hex)
    }

    /// Subtract `amount` from each of R, G and B, clamping at 0. Alpha is kept.
    pub const fn darken(self, amount: u8) -> Self {
        Self::new(
            self.r.saturating_sub(amount),
            self.g.saturating_sub(amount),
            self.b.saturating_sub(amount),
            self.a,
        )
    }

    /// Add `amount` to each of R, G and B, clamping at 255. Alpha is kept.
    pub const fn lighten(self, amount: u8) -> Self {
        Self::new(
            self.r.saturating_add(amount),
            self.g.saturating_add(amount),
            self.b.saturating_add(amount),
            self.a,
        )
    }

    /// CSS `rgb(r,g,b)` form, as handed to a browser canvas fill style.
    pub fn to_css(self) -> String {
        format!("rgb({},{},{})", self.r, self.g, self.b)
    }

    /// Convert to RGBA array.
    pub fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Check if the colour is fully transparent.
    pub fn is_transparent(self) -> bool {
        self.a == 0
    }

    /// Check if the colour is fully opaque.
    pub fn is_opaque(self) -> bool {
        self.a == 255
    }
}

impl FromStr for Colour {
    type Err = RingsideError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

impl TryFrom<String> for Colour {
    type Error = RingsideError;

    fn try_from(s: String) -> Result<Self> {
        Self::from_hex(&s)
    }
}

impl From<Colour> for String {
    fn from(colour: Colour) -> Self {
        colour.to_string()
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            write!(f, "#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

fn invalid_hex(s: &str) -> RingsideError {
    RingsideError::Parse {
        message: format!("Invalid hex colour: '{}'", s),
        help: Some("Use #RGB, #RGBA, #RRGGBB, or #RRGGBBAA format".to_string()),
    }
}

/// Parse a single hex digit.
fn parse_hex_digit(c: char) -> Result<u8> {
    c.to_digit(16)
        .map(|d| d as u8)
        .ok_or_else(|| RingsideError::Parse {
            message: format!("Invalid hex digit: {}", c),
            help: None,
        })
}

/// Parse a two-character hex byte.
fn parse_hex_byte(s: &str) -> Result<u8> {
    u8::from_str_radix(s, 16).map_err(|_| RingsideError::Parse {
        message: format!("Invalid hex byte: {}", s),
        help: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_6digit() {
        let c = Colour::from_hex("#FF0000").unwrap();
        assert_eq!(c, Colour::rgb(255, 0, 0));

        let c = Colour::from_hex("#ff2d55").unwrap();
        assert_eq!(c, Colour::rgb(0xff, 0x2d, 0x55));
    }

    #[test]
    fn test_from_hex_short_forms() {
        assert_eq!(Colour::from_hex("#fff").unwrap(), Colour::WHITE);
        assert_eq!(Colour::from_hex("#333").unwrap(), Colour::rgb(0x33, 0x33, 0x33));
        assert_eq!(Colour::from_hex("#F008").unwrap(), Colour::new(255, 0, 0, 0x88));
    }

    #[test]
    fn test_from_hex_8digit() {
        let c = Colour::from_hex("#FF000080").unwrap();
        assert_eq!(c, Colour::new(255, 0, 0, 128));
    }

    #[test]
    fn test_from_hex_no_hash() {
        assert_eq!(Colour::from_hex("f5c5a3").unwrap(), Colour::rgb(0xf5, 0xc5, 0xa3));
    }

    #[test]
    fn test_from_hex_invalid() {
        assert!(Colour::from_hex("#GGG").is_err());
        assert!(Colour::from_hex("#12345").is_err());
        assert!(Colour::from_hex("#zz2d55").is_err());
        assert!(Colour::from_hex("#ff2d5é").is_err());
        assert!(Colour::from_hex("").is_err());
    }

    #[test]
    fn test_from_hex6_is_strict() {
        assert_eq!(Colour::from_hex6("#ff2d55").unwrap(), Colour::rgb(0xff, 0x2d, 0x55));
        assert_eq!(Colour::from_hex6("4A2C12").unwrap(), Colour::rgb(0x4a, 0x2c, 0x12));
        assert!(Colour::from_hex6("#ff2d5500").is_err());
        assert!(Colour::from_hex6("#fff").is_err());
        assert!(Colour::from_hex6("#f00f").is_err());
        assert!(Colour::from_hex6("#ff2d5g").is_err());
    }

    #[test]
    fn test_darken_clamps_at_zero() {
        let c = Colour::rgb(0x20, 0x50, 0xff).darken(DARKEN_DEFAULT);
        assert_eq!(c, Colour::rgb(0, 0x28, 0xd7));
        assert_eq!(Colour::BLACK.darken(255), Colour::BLACK);
    }

    #[test]
    fn test_lighten_clamps_at_255() {
        let c = Colour::rgb(0xf5, 0xc5, 0xa3).lighten(LIGHTEN_DEFAULT);
        assert_eq!(c, Colour::rgb(255, 0xe3, 0xc1));
        assert_eq!(Colour::WHITE.lighten(255), Colour::WHITE);
    }

    #[test]
    fn test_transforms_keep_alpha() {
        let c = Colour::new(100, 100, 100, 7);
        assert_eq!(c.darken(10).a, 7);
        assert_eq!(c.lighten(10).a, 7);
    }

    #[test]
    fn test_transform_bounds_exhaustive() {
        for v in [0u8, 1, 39, 40, 41, 128, 214, 225, 226, 254, 255] {
            for amt in [0u8, 1, 30, 40, 60, 255] {
                let c = Colour::rgb(v, v, v);
                let d = c.darken(amt);
                let l = c.lighten(amt);
                assert_eq!(d.r as i32, (v as i32 - amt as i32).max(0));
                assert_eq!(l.r as i32, (v as i32 + amt as i32).min(255));
            }
        }
    }

    #[test]
    fn test_to_css() {
        assert_eq!(Colour::rgb(255, 45, 85).darken(60).to_css(), "rgb(195,0,25)");
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Colour::rgb(255, 0, 0)), "#ff0000");
        assert_eq!(format!("{}", Colour::new(255, 0, 0, 128)), "#ff000080");
    }

    #[test]
    fn test_serde_as_hex_string() {
        let c: Colour = serde_json::from_str("\"#ff2d55\"").unwrap();
        assert_eq!(c, Colour::rgb(0xff, 0x2d, 0x55));
        assert_eq!(serde_json::to_string(&c).unwrap(), "\"#ff2d55\"");

        let err = serde_json::from_str::<Colour>("\"#nothex\"").unwrap_err();
        assert!(err.to_string().contains("Invalid hex colour"));
    }
}
