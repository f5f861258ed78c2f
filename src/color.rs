//! Hex and packed-integer color parsing.
//!
//! Colors are stored as four normalized `f32` channels. Parsing never
//! coerces: a string that is not exactly 6 or 8 hex digits (after trimming
//! whitespace and one leading `#`) is rejected.
//!
//! # Example
//!
//! ```
//! use tintframe::{parse_hex, parse_packed, to_hex_string, ColorSpace};
//!
//! let color = parse_hex(" #1a2b3c ", ColorSpace::Srgb).unwrap();
//! assert_eq!(to_hex_string(&color), "#1A2B3C");
//!
//! let red = parse_packed(0xFF0000, 1.0);
//! assert_eq!(red.red(), 1.0);
//! ```

use std::fmt;
use std::str::FromStr;

use image::Rgba;
use palette::{Hsl, IntoColor, Srgb, Srgba};
use serde::{Deserialize, Serialize};

use crate::error::{ColorError, HexFormatReason};

// ============================================================================
// ColorSpace
// ============================================================================

/// Color space hint attached to parsed colors.
///
/// The parser does not interpret this tag. It is returned on the [`Color`]
/// so the rendering layer can pick the matching color-managed constructor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[serde(rename_all = "kebab-case")]
pub enum ColorSpace {
    /// Standard RGB, what most design tools export.
    #[default]
    Srgb,
    /// Wide-gamut Display P3.
    DisplayP3,
}

// ============================================================================
// Color
// ============================================================================

/// An RGBA color with channels normalized to `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "jsonschema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct Color {
    red: f32,
    green: f32,
    blue: f32,
    alpha: f32,
    #[serde(default)]
    color_space: ColorSpace,
}

impl Color {
    /// Creates an sRGB color. Channels are clamped to `[0, 1]`.
    pub fn new(red: f32, green: f32, blue: f32, alpha: f32) -> Self {
        Self {
            red: clamp_unit(red),
            green: clamp_unit(green),
            blue: clamp_unit(blue),
            alpha: clamp_unit(alpha),
            color_space: ColorSpace::Srgb,
        }
    }

    /// Creates an opaque sRGB color.
    pub fn rgb(red: f32, green: f32, blue: f32) -> Self {
        Self::new(red, green, blue, 1.0)
    }

    /// Returns a copy tagged with the given color space.
    pub fn in_color_space(mut self, color_space: ColorSpace) -> Self {
        self.color_space = color_space;
        self
    }

    pub fn red(&self) -> f32 {
        self.red
    }

    pub fn green(&self) -> f32 {
        self.green
    }

    pub fn blue(&self) -> f32 {
        self.blue
    }

    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    /// The color space hint supplied at parse time.
    pub fn color_space(&self) -> ColorSpace {
        self.color_space
    }

    /// Returns a copy with a different alpha.
    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.alpha = clamp_unit(alpha);
        self
    }

    /// Returns a copy with HSL lightness reduced by `amount`.
    pub fn darkened(self, amount: f32) -> Self {
        self.shift_lightness(-amount)
    }

    /// Returns a copy with HSL lightness increased by `amount`.
    pub fn lightened(self, amount: f32) -> Self {
        self.shift_lightness(amount)
    }

    fn shift_lightness(self, delta: f32) -> Self {
        let rgb = Srgb::new(self.red, self.green, self.blue);
        let mut hsl: Hsl = rgb.into_color();
        hsl.lightness = (hsl.lightness + delta).clamp(0.0, 1.0);
        let shifted: Srgb = hsl.into_color();

        Self {
            red: clamp_unit(shifted.red),
            green: clamp_unit(shifted.green),
            blue: clamp_unit(shifted.blue),
            ..self
        }
    }

    /// Converts to 8-bit RGBA.
    pub fn to_rgba8(&self) -> Rgba<u8> {
        Rgba([
            channel_to_byte(self.red),
            channel_to_byte(self.green),
            channel_to_byte(self.blue),
            channel_to_byte(self.alpha),
        ])
    }

    /// Converts to a `palette` sRGBA value. The color space tag is dropped.
    pub fn to_srgba(&self) -> Srgba {
        Srgba::new(self.red, self.green, self.blue, self.alpha)
    }
}

impl From<Rgba<u8>> for Color {
    fn from(pixel: Rgba<u8>) -> Self {
        let [r, g, b, a] = pixel.0;
        Self::new(
            byte_to_channel(r),
            byte_to_channel(g),
            byte_to_channel(b),
            byte_to_channel(a),
        )
    }
}

impl From<Srgba> for Color {
    fn from(color: Srgba) -> Self {
        Self::new(color.red, color.green, color.blue, color.alpha)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&to_hex_string(self))
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_hex(s, ColorSpace::Srgb)
    }
}

// ============================================================================
// Parsing
// ============================================================================

/// Parses `RRGGBB` or `RRGGBBAA` hex text into a [`Color`].
///
/// Surrounding whitespace and a single leading `#` are ignored, and digits
/// are case-insensitive. `color_space` is stored on the result untouched.
///
/// # Errors
///
/// Returns [`ColorError::InvalidFormat`] if the remaining text is not exactly
/// 6 or 8 characters long, or contains a non-hex character.
pub fn parse_hex(input: &str, color_space: ColorSpace) -> Result<Color, ColorError> {
    let trimmed = input.trim();
    let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);

    let invalid = |reason| ColorError::InvalidFormat {
        input: input.to_string(),
        reason,
    };

    let len = digits.chars().count();
    if len != 6 && len != 8 {
        return Err(invalid(HexFormatReason::WrongLength(len)));
    }

    if let Some(bad) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
        return Err(invalid(HexFormatReason::NonHexDigit(bad)));
    }

    // RR GG BB [AA], every byte already known to be ASCII hex.
    let bytes: Vec<u8> = digits
        .as_bytes()
        .chunks(2)
        .map(|pair| (hex_nibble(pair[0]) << 4) | hex_nibble(pair[1]))
        .collect();
    let alpha = bytes.get(3).copied().unwrap_or(0xFF);

    let color = Color::new(
        byte_to_channel(bytes[0]),
        byte_to_channel(bytes[1]),
        byte_to_channel(bytes[2]),
        byte_to_channel(alpha),
    );

    Ok(color.in_color_space(color_space))
}

/// Builds a color from the low 24 bits of `rgb` (red most significant).
///
/// Higher bits are masked off, so every integer is accepted. `alpha` is
/// clamped to `[0, 1]`.
pub fn parse_packed(rgb: i64, alpha: f32) -> Color {
    let masked = (rgb & 0x00FF_FFFF) as u32;
    Color::new(
        byte_to_channel((masked >> 16) as u8),
        byte_to_channel((masked >> 8) as u8),
        byte_to_channel(masked as u8),
        alpha,
    )
}

/// Formats red, green and blue as `#RRGGBB` (uppercase).
///
/// Alpha is dropped; use [`to_hex_string_with_alpha`] to keep it.
pub fn to_hex_string(color: &Color) -> String {
    let [r, g, b, _] = color.to_rgba8().0;
    format!("#{r:02X}{g:02X}{b:02X}")
}

/// Formats the color as `#RRGGBBAA` (uppercase).
pub fn to_hex_string_with_alpha(color: &Color) -> String {
    let [r, g, b, a] = color.to_rgba8().0;
    format!("#{r:02X}{g:02X}{b:02X}{a:02X}")
}

fn hex_nibble(digit: u8) -> u8 {
    match digit {
        b'0'..=b'9' => digit - b'0',
        b'a'..=b'f' => digit - b'a' + 10,
        _ => digit - b'A' + 10,
    }
}

fn byte_to_channel(byte: u8) -> f32 {
    byte as f32 / 255.0
}

fn channel_to_byte(channel: f32) -> u8 {
    (channel * 255.0).round().clamp(0.0, 255.0) as u8
}

fn clamp_unit(value: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

// ============================================================================
// Tests
// ============================================================================
