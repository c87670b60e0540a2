//! Derived colors: inversion, brightness, complements, saturation, mixing
//! and grayscale.

use super::Color;
use super::contrast::perceived_brightness;

impl Color {
    /// Invert each RGB channel; alpha is kept.
    pub fn invert(&self) -> Self {
        Self::from_rgba(
            255 - i32::from(self.red),
            255 - i32::from(self.green),
            255 - i32::from(self.blue),
            self.alpha,
        )
    }

    /// Push toward white (`amount > 0`) or pull toward black (`amount < 0`).
    ///
    /// `amount` is clamped to `[-1, 1]`; NaN counts as 0. The shift is scaled
    /// by the headroom of the brightest channel and added to every channel.
    pub fn adjust_brightness(&self, amount: f64) -> Self {
        if amount.is_nan() {
            return *self;
        }
        let amount = amount.clamp(-1.0, 1.0);
        let max = f64::from(self.max_channel());
        let adjustment = if amount > 0.0 {
            (255.0 - max) * amount
        } else {
            max * amount
        };

        let shift = |channel: u8| (f64::from(channel) + adjustment) as i32;
        Self::from_rgba(
            shift(self.red),
            shift(self.green),
            shift(self.blue),
            self.alpha,
        )
    }

    pub fn lighten(&self, amount: f64) -> Self {
        self.adjust_brightness(amount.abs())
    }

    pub fn darken(&self, amount: f64) -> Self {
        self.adjust_brightness(-amount.abs())
    }

    /// Opposite hue on the color wheel, same saturation, lightness and alpha.
    pub fn complementary(&self) -> Self {
        self.add_hue(180.0)
    }

    /// Alias for [`Color::complementary`].
    pub fn complement(&self) -> Self {
        self.complementary()
    }

    /// Alias for [`Color::add_hue`].
    pub fn rotate(&self, degrees: f64) -> Self {
        self.add_hue(degrees)
    }

    /// Raise saturation by `amount` (fraction, `0.1` = 10 percentage points).
    pub fn saturate(&self, amount: f64) -> Self {
        self.add_saturation(amount * 100.0)
    }

    /// Lower saturation by `amount` (fraction, `0.1` = 10 percentage points).
    pub fn desaturate(&self, amount: f64) -> Self {
        self.add_saturation(-amount * 100.0)
    }

    /// Linear per-channel interpolation toward `other`, alpha included.
    /// `weight` 0 keeps `self`, 1 yields `other`. NaN counts as 0.
    pub fn mix(&self, other: &Color, weight: f64) -> Self {
        if weight.is_nan() {
            return *self;
        }
        let weight = weight.clamp(0.0, 1.0);
        let lerp = |a: u8, b: u8| {
            (f64::from(a) * (1.0 - weight) + f64::from(b) * weight).round() as i32
        };

        Self::from_rgba(
            lerp(self.red, other.red),
            lerp(self.green, other.green),
            lerp(self.blue, other.blue),
            self.alpha * (1.0 - weight) + other.alpha * weight,
        )
    }

    /// Gray of the same perceived brightness; alpha is kept.
    pub fn grayscale(&self) -> Self {
        let gray = perceived_brightness(self).round() as i32;
        Self::from_rgba(gray, gray, gray, self.alpha)
    }
}
