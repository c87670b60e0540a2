//! Luminance and foreground-contrast heuristics.

use super::Color;

impl Color {
    /// Weighted channel sum `0.2126 R + 0.7152 G + 0.0722 B`, in `0.0..=255.0`.
    ///
    /// Uses BT.709 weights on raw sRGB channels with no gamma decoding or
    /// normalization, so it is not WCAG relative luminance.
    pub fn luminance(&self) -> f64 {
        0.2126 * f64::from(self.red) + 0.7152 * f64::from(self.green) + 0.0722 * f64::from(self.blue)
    }

    /// Perceived darkness in `0.0..=1.0`; `1.0` is black.
    pub fn human_luminance(&self) -> f64 {
        1.0 - perceived_brightness(self) / 255.0
    }

    /// Whether text drawn on this color should be light.
    pub fn needs_light_foreground(&self) -> bool {
        self.human_luminance() >= 0.5
    }
}

/// `0.299 R + 0.587 G + 0.114 B`, in `0.0..=255.0`.
pub(crate) fn perceived_brightness(color: &Color) -> f64 {
    0.299 * f64::from(color.red) + 0.587 * f64::from(color.green) + 0.114 * f64::from(color.blue)
}
