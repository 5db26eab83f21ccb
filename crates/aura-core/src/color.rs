// SPDX-License-Identifier: MIT
//
// aura color model: opaque 8-bit sRGB with hex I/O.
//
// Decoration themes are authored as `#RRGGBB` strings and emitted as CSS
// hex literals, so the whole pipeline stays in 8-bit sRGB. Blending is a
// plain per-channel linear interpolation: the result has to be reproducible
// bit-for-bit from the two inputs and the weight, which rules out any
// round-trip through a perceptual space.
#![allow(clippy::many_single_char_names)]

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

// ─── HexColor ────────────────────────────────────────────────────────────────

/// An opaque sRGB color that is always representable as `#RRGGBB`.
///
/// Construction goes through [`HexColor::parse`] (or `FromStr` / serde), so
/// a `HexColor` value is valid by construction.
///
/// # Examples
///
/// ```
/// use aura_core::HexColor;
///
/// let blue = HexColor::parse("#4A90E2").unwrap();
/// assert_eq!(blue.to_hex(), "#4a90e2");
///
/// // Keep 25% of blue, take 75% of black.
/// let dim = blue.blend(HexColor::BLACK, 0.25);
/// assert_eq!(dim.to_hex(), "#132439");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl HexColor {
    /// Pure black.
    pub const BLACK: Self = Self::rgb8(0, 0, 0);

    /// Pure white.
    pub const WHITE: Self = Self::rgb8(255, 255, 255);

    /// Create a color from 8-bit channels.
    #[inline]
    #[must_use]
    pub const fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#RRGGBB` string (hex digits in either case).
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidHex`] for anything else: missing
    /// `#`, shorthand `#RGB`, alpha channels, or non-hex digits.
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        parse_hex(s).ok_or_else(|| ValidationError::InvalidHex {
            value: s.to_string(),
        })
    }

    /// Render as lowercase `#rrggbb`.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// sRGB channels in 0.0–1.0.
    #[must_use]
    pub fn to_srgb(self) -> (f32, f32, f32) {
        (
            f32::from(self.r) / 255.0,
            f32::from(self.g) / 255.0,
            f32::from(self.b) / 255.0,
        )
    }

    /// Interpolate per RGB channel, keeping fraction `w` of `self`.
    ///
    /// `w` = 1.0 returns `self`, `w` = 0.0 returns `other`. Each channel is
    /// `self * w + other * (1 - w)`, rounded to the nearest integer.
    #[must_use]
    pub fn blend(self, other: Self, w: f64) -> Self {
        let w = w.clamp(0.0, 1.0);
        Self {
            r: lerp_channel(self.r, other.r, w),
            g: lerp_channel(self.g, other.g, w),
            b: lerp_channel(self.b, other.b, w),
        }
    }
}

impl fmt::Debug for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HexColor({})", self.to_hex())
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl FromStr for HexColor {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for HexColor {
    type Error = ValidationError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<HexColor> for String {
    fn from(color: HexColor) -> Self {
        color.to_hex()
    }
}

// ─── Channel math ────────────────────────────────────────────────────────────

#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn lerp_channel(a: u8, b: u8, w: f64) -> u8 {
    let v = f64::from(a).mul_add(w, f64::from(b) * (1.0 - w));
    // Safe: clamp guarantees 0.0 <= v <= 255.0 before truncation.
    v.round().clamp(0.0, 255.0) as u8
}

/// Convert a single sRGB component to linear sRGB (remove gamma).
#[inline]
#[must_use]
pub fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.040_45 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

// ─── Hex Parsing ─────────────────────────────────────────────────────────────

fn parse_hex(s: &str) -> Option<HexColor> {
    let digits = s.strip_prefix('#')?.as_bytes();
    if digits.len() != 6 {
        return None;
    }
    let r = parse_hex_byte(&digits[0..2])?;
    let g = parse_hex_byte(&digits[2..4])?;
    let b = parse_hex_byte(&digits[4..6])?;
    Some(HexColor::rgb8(r, g, b))
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
    Some((hi << 4) | lo)
}

// ─── Tests ───────────────────────────────────────────────────────────────────
