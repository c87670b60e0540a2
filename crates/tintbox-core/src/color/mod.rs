//! Immutable RGBA color value.
//!
//! Channels are stored as integers in `0..=255` and alpha as a float in
//! `0.0..=1.0`. Every constructor clamps its inputs, and every modifier returns
//! a new [`Color`] instead of mutating the receiver.

mod contrast;
mod css;
mod hex;
mod hsl;
mod modifiers;
mod rgb;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ColorError;

/// An sRGB color with straight (non-premultiplied) alpha.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    red: u8,
    green: u8,
    blue: u8,
    alpha: f64,
}

impl Color {
    /// Create an opaque color. Channels outside `0..=255` are saturated.
    pub fn from_rgb(red: i32, green: i32, blue: i32) -> Self {
        Self::from_rgba(red, green, blue, 1.0)
    }

    /// Create a color with alpha. Alpha outside `0.0..=1.0` is saturated.
    pub fn from_rgba(red: i32, green: i32, blue: i32, alpha: f64) -> Self {
        Self {
            red: clamp_channel(red),
            green: clamp_channel(green),
            blue: clamp_channel(blue),
            alpha: clamp_alpha(alpha),
        }
    }

    /// Opaque `#000000`.
    pub fn black() -> Self {
        Self::from_rgb(0, 0, 0)
    }

    /// Opaque `#ffffff`.
    pub fn white() -> Self {
        Self::from_rgb(255, 255, 255)
    }

    /// Red channel, `0..=255`.
    pub fn red(&self) -> u8 {
        self.red
    }

    /// Green channel, `0..=255`.
    pub fn green(&self) -> u8 {
        self.green
    }

    /// Blue channel, `0..=255`.
    pub fn blue(&self) -> u8 {
        self.blue
    }

    /// Opacity in `[0, 1]`.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Largest of the three RGB channels.
    pub(crate) fn max_channel(&self) -> u8 {
        self.red.max(self.green).max(self.blue)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::black()
    }
}

/// Renders the interchange form, `#rrggbbaa`.
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex_string(true, false, true))
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl TryFrom<String> for Color {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

fn clamp_channel(value: i32) -> u8 {
    value.clamp(0, 255) as u8
}

fn clamp_alpha(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, 1.0)
}

/// Format an alpha value with up to six decimals and no trailing zeros
/// (`1.0` -> `"1"`, `0.5` -> `"0.5"`).
pub(crate) fn format_alpha(alpha: f64) -> String {
    let fixed = format!("{:.6}", alpha);
    fixed
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channels_are_clamped() {
        let color = Color::from_rgb(-10, 300, 128);
        assert_eq!(color.to_rgb(), (0, 255, 128));
    }

    #[test]
    fn test_alpha_is_clamped() {
        assert!((Color::from_rgba(0, 0, 0, 1.5).alpha() - 1.0).abs() < f64::EPSILON);
        assert!(Color::from_rgba(0, 0, 0, -0.5).alpha().abs() < f64::EPSILON);
        assert!(Color::from_rgba(0, 0, 0, f64::NAN).alpha().abs() < f64::EPSILON);
    }

    #[test]
    fn test_rgb_round_trip() {
        for r in (0..=255).step_by(17) {
            for g in (0..=255).step_by(51) {
                for b in [0, 1, 127, 128, 254, 255] {
                    assert_eq!(Color::from_rgb(r, g, b).to_rgb(), (r as u8, g as u8, b as u8));
                }
            }
        }
    }

    #[test]
    fn test_presets() {
        assert_eq!(Color::black().to_hex(), "#000000");
        assert_eq!(Color::white().to_hex(), "#ffffff");
        assert_eq!(Color::default(), Color::black());
    }

    #[test]
    fn test_display_and_from_str() {
        let color: Color = "#3b82f6".parse().unwrap();
        assert_eq!(color.to_string(), "#3b82f6ff");
        assert!("#12".parse::<Color>().is_err());
    }

    #[test]
    fn test_serde_uses_hex_string() {
        let color = Color::from_rgba(255, 0, 0, 0.5);
        let json = serde_json::to_string(&color).unwrap();
        assert_eq!(json, "\"#ff00007f\"");

        let parsed: Color = serde_json::from_str("\"#00ff00\"").unwrap();
        assert_eq!(parsed, Color::from_rgb(0, 255, 0));

        assert!(serde_json::from_str::<Color>("\"nope\"").is_err());
    }

    #[test]
    fn test_format_alpha() {
        assert_eq!(format_alpha(1.0), "1");
        assert_eq!(format_alpha(0.0), "0");
        assert_eq!(format_alpha(0.5), "0.5");
        assert_eq!(format_alpha(0.25), "0.25");
    }
}
