//! RGB(A) exporters and per-channel modifiers.

use super::{Color, format_alpha};

impl Color {
    /// `(red, green, blue)` channels.
    pub fn to_rgb(&self) -> (u8, u8, u8) {
        (self.red, self.green, self.blue)
    }

    /// `(red, green, blue, alpha)`.
    pub fn to_rgba(&self) -> (u8, u8, u8, f64) {
        (self.red, self.green, self.blue, self.alpha)
    }

    /// `rgb(r, g, b)`
    pub fn to_rgb_string(&self) -> String {
        format!("rgb({})", self.to_rgb_value_string())
    }

    /// Bare channel list `r, g, b`, as used for CSS custom properties.
    pub fn to_rgb_value_string(&self) -> String {
        format!("{}, {}, {}", self.red, self.green, self.blue)
    }

    /// `rgba(r, g, b, a)` with trailing zeros trimmed from alpha.
    pub fn to_rgba_string(&self) -> String {
        format!(
            "rgba({}, {}, {}, {})",
            self.red,
            self.green,
            self.blue,
            format_alpha(self.alpha)
        )
    }

    /// Replace the red channel, clamped to `0..=255`.
    pub fn with_red(&self, red: i32) -> Self {
        Self::from_rgba(red, self.green.into(), self.blue.into(), self.alpha)
    }

    /// Shift the red channel by `amount`, clamped.
    pub fn add_red(&self, amount: i32) -> Self {
        self.with_red(i32::from(self.red).saturating_add(amount))
    }

    /// Replace the green channel, clamped to `0..=255`.
    pub fn with_green(&self, green: i32) -> Self {
        Self::from_rgba(self.red.into(), green, self.blue.into(), self.alpha)
    }

    /// Shift the green channel by `amount`, clamped.
    pub fn add_green(&self, amount: i32) -> Self {
        self.with_green(i32::from(self.green).saturating_add(amount))
    }

    /// Replace the blue channel, clamped to `0..=255`.
    pub fn with_blue(&self, blue: i32) -> Self {
        Self::from_rgba(self.red.into(), self.green.into(), blue, self.alpha)
    }

    /// Shift the blue channel by `amount`, clamped.
    pub fn add_blue(&self, amount: i32) -> Self {
        self.with_blue(i32::from(self.blue).saturating_add(amount))
    }

    /// Replace the alpha, clamped to `[0, 1]`.
    pub fn with_alpha(&self, alpha: f64) -> Self {
        Self::from_rgba(self.red.into(), self.green.into(), self.blue.into(), alpha)
    }

    /// Shift the alpha by `amount`, clamped to `[0, 1]`.
    pub fn add_alpha(&self, amount: f64) -> Self {
        self.with_alpha(self.alpha + amount)
    }

    /// Alias for [`Color::with_alpha`].
    pub fn with_opacity(&self, opacity: f64) -> Self {
        self.with_alpha(opacity)
    }

    /// Alias for [`Color::add_alpha`].
    pub fn add_opacity(&self, amount: f64) -> Self {
        self.add_alpha(amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_strings() {
        let cases = [
            ((255, 0, 0), "rgb(255, 0, 0)"),
            ((0, 255, 0), "rgb(0, 255, 0)"),
            ((128, 128, 128), "rgb(128, 128, 128)"),
            ((0, 0, 0), "rgb(0, 0, 0)"),
        ];
        for ((r, g, b), expected) in cases {
            assert_eq!(Color::from_rgb(r, g, b).to_rgb_string(), expected);
        }
        assert_eq!(Color::from_rgb(1, 2, 3).to_rgb_value_string(), "1, 2, 3");
    }

    #[test]
    fn test_rgba_strings() {
        let cases = [
            ((255, 0, 0, 1.0), "rgba(255, 0, 0, 1)"),
            ((0, 255, 0, 0.5), "rgba(0, 255, 0, 0.5)"),
            ((0, 0, 255, 0.25), "rgba(0, 0, 255, 0.25)"),
            ((128, 128, 128, 0.75), "rgba(128, 128, 128, 0.75)"),
            ((0, 0, 0, 0.0), "rgba(0, 0, 0, 0)"),
        ];
        for ((r, g, b, a), expected) in cases {
            assert_eq!(Color::from_rgba(r, g, b, a).to_rgba_string(), expected);
        }
    }

    #[test]
    fn test_channel_modifiers() {
        let color = Color::from_rgba(10, 20, 30, 0.5);
        assert_eq!(color.with_red(200).to_rgba(), (200, 20, 30, 0.5));
        assert_eq!(color.add_green(-50).to_rgb(), (10, 0, 30));
        assert_eq!(color.add_blue(1000).to_rgb(), (10, 20, 255));
        assert_eq!(color.add_red(i32::MAX).to_rgb(), (255, 20, 30));
        // receiver is untouched
        assert_eq!(color.to_rgb(), (10, 20, 30));
    }

    #[test]
    fn test_alpha_modifiers() {
        let color = Color::from_rgba(0, 0, 0, 0.5);
        assert!((color.with_alpha(0.2).alpha() - 0.2).abs() < f64::EPSILON);
        assert!((color.add_alpha(0.8).alpha() - 1.0).abs() < f64::EPSILON);
        assert!(color.add_opacity(-0.9).alpha().abs() < f64::EPSILON);
        assert!((color.with_opacity(0.75).alpha() - 0.75).abs() < f64::EPSILON);
    }
}
