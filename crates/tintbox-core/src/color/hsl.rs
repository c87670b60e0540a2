//! HSL conversion, exporters and hue/saturation/lightness modifiers.
//!
//! Hue is in degrees, saturation and lightness are percentages. Exported HSL
//! components are rounded to whole numbers.

use super::{Color, format_alpha};

impl Color {
    /// Create an opaque color from HSL.
    ///
    /// The hue is not wrapped before conversion: anything below 0 or at/above
    /// 300 lands in the last (magenta-red) sector.
    pub fn from_hsl(hue: f64, saturation: f64, lightness: f64) -> Self {
        Self::from_hsla(hue, saturation, lightness, 1.0)
    }

    /// Like [`Color::from_hsl`] with an explicit alpha (clamped to `[0, 1]`).
    pub fn from_hsla(hue: f64, saturation: f64, lightness: f64, alpha: f64) -> Self {
        let (r, g, b) = hsl_to_rgb(hue, saturation, lightness);
        Self::from_rgba(r, g, b, alpha)
    }

    /// `(hue, saturation, lightness)`, each rounded.
    pub fn to_hsl(&self) -> (i32, i32, i32) {
        rgb_to_hsl(self.red, self.green, self.blue)
    }

    /// `(hue, saturation%, lightness%, alpha)`.
    pub fn to_hsla(&self) -> (i32, i32, i32, f64) {
        let (h, s, l) = self.to_hsl();
        (h, s, l, self.alpha)
    }

    /// `hsl(h, s%, l%)`
    pub fn to_hsl_string(&self) -> String {
        let (h, s, l) = self.to_hsl();
        format!("hsl({}, {}%, {}%)", h, s, l)
    }

    /// `hsla(h, s%, l%, a)`
    pub fn to_hsla_string(&self) -> String {
        let (h, s, l) = self.to_hsl();
        format!("hsla({}, {}%, {}%, {})", h, s, l, format_alpha(self.alpha))
    }

    /// Replace the hue. The result is wrapped into `[0, 360)`.
    pub fn with_hue(&self, hue: f64) -> Self {
        let (_, s, l) = self.to_hsl();
        self.rebuild_hsl(hue, f64::from(s), f64::from(l))
    }

    /// Shift the hue by `degrees`, wrapping around the color wheel.
    pub fn add_hue(&self, degrees: f64) -> Self {
        let (h, _, _) = self.to_hsl();
        self.with_hue(f64::from(h) + degrees)
    }

    /// Replace the saturation (percent, clamped to `[0, 100]`).
    pub fn with_saturation(&self, saturation: f64) -> Self {
        let (h, _, l) = self.to_hsl();
        self.rebuild_hsl(f64::from(h), saturation, f64::from(l))
    }

    /// Shift the saturation by `amount` percentage points, clamped to `[0, 100]`.
    pub fn add_saturation(&self, amount: f64) -> Self {
        let (_, s, _) = self.to_hsl();
        self.with_saturation(f64::from(s) + amount)
    }

    /// Replace the lightness (percent, clamped to `[0, 100]`).
    pub fn with_lightness(&self, lightness: f64) -> Self {
        let (h, s, _) = self.to_hsl();
        self.rebuild_hsl(f64::from(h), f64::from(s), lightness)
    }

    /// Shift the lightness by `amount` percentage points, clamped to `[0, 100]`.
    pub fn add_lightness(&self, amount: f64) -> Self {
        let (_, _, l) = self.to_hsl();
        self.with_lightness(f64::from(l) + amount)
    }

    fn rebuild_hsl(&self, hue: f64, saturation: f64, lightness: f64) -> Self {
        Self::from_hsla(
            hue.rem_euclid(360.0),
            saturation.clamp(0.0, 100.0),
            lightness.clamp(0.0, 100.0),
            self.alpha,
        )
    }
}

/// RGB channels to rounded `(hue°, saturation%, lightness%)`.
pub(crate) fn rgb_to_hsl(red: u8, green: u8, blue: u8) -> (i32, i32, i32) {
    let r = f64::from(red) / 255.0;
    let g = f64::from(green) / 255.0;
    let b = f64::from(blue) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;
    let d = max - min;

    let (h, s) = if d == 0.0 {
        // achromatic
        (0.0, 0.0)
    } else {
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };
        let h = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };
        (h / 6.0, s)
    };

    (
        (h * 360.0).round() as i32,
        (s * 100.0).round() as i32,
        (l * 100.0).round() as i32,
    )
}

/// HSL (degrees, percent, percent) to rounded RGB channels. The channels are
/// not clamped here; [`Color::from_rgba`] saturates them.
pub(crate) fn hsl_to_rgb(hue: f64, saturation: f64, lightness: f64) -> (i32, i32, i32) {
    let s = saturation / 100.0;
    let l = lightness / 100.0;

    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - ((hue / 60.0) % 2.0 - 1.0).abs());
    let m = l - c / 2.0;

    let (r, g, b) = if (0.0..60.0).contains(&hue) {
        (c, x, 0.0)
    } else if (60.0..120.0).contains(&hue) {
        (x, c, 0.0)
    } else if (120.0..180.0).contains(&hue) {
        (0.0, c, x)
    } else if (180.0..240.0).contains(&hue) {
        (0.0, x, c)
    } else if (240.0..300.0).contains(&hue) {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };

    (
        ((r + m) * 255.0).round() as i32,
        ((g + m) * 255.0).round() as i32,
        ((b + m) * 255.0).round() as i32,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hsl_strings() {
        assert_eq!(Color::from_rgb(255, 0, 0).to_hsl_string(), "hsl(0, 100%, 50%)");
        assert_eq!(Color::from_rgb(0, 0, 255).to_hsl_string(), "hsl(240, 100%, 50%)");
        assert_eq!(Color::from_rgb(128, 128, 128).to_hsl_string(), "hsl(0, 0%, 50%)");
        assert_eq!(Color::from_rgb(0, 255, 0).to_hsl_string(), "hsl(120, 100%, 50%)");
    }

    #[test]
    fn test_hsla_string() {
        let color = Color::from_rgba(255, 0, 0, 0.25);
        assert_eq!(color.to_hsla_string(), "hsla(0, 100%, 50%, 0.25)");
        assert_eq!(color.to_hsla(), (0, 100, 50, 0.25));
    }

    #[test]
    fn test_from_hsl_small_values() {
        let cases = [
            ((0.0, 0.0, 1.0), "#030303"),
            ((0.0, 1.0, 0.5), "#010101"),
            ((1.0, 0.5, 0.0), "#000000"),
            ((0.5, 0.0, 0.0), "#000000"),
            ((0.0, 0.0, 0.0), "#000000"),
        ];
        for ((h, s, l), expected) in cases {
            assert_eq!(Color::from_hsl(h, s, l).to_hex(), expected);
        }
    }

    #[test]
    fn test_from_hsl_sectors() {
        assert_eq!(Color::from_hsl(0.0, 100.0, 50.0).to_hex(), "#ff0000");
        assert_eq!(Color::from_hsl(60.0, 100.0, 50.0).to_hex(), "#ffff00");
        assert_eq!(Color::from_hsl(180.0, 100.0, 50.0).to_hex(), "#00ffff");
        assert_eq!(Color::from_hsl(240.0, 100.0, 50.0).to_hex(), "#0000ff");
        assert_eq!(Color::from_hsl(300.0, 100.0, 50.0).to_hex(), "#ff00ff");
    }

    #[test]
    fn test_out_of_range_hue_uses_last_sector() {
        // 420 is not wrapped to 60: it is treated as the >= 300 sector.
        assert_eq!(Color::from_hsl(420.0, 100.0, 50.0).to_hex(), "#ff00ff");
        // -60 also lands there, with its negative blue component saturated.
        assert_eq!(Color::from_hsl(-60.0, 100.0, 50.0).to_hex(), "#ff0000");
    }

    #[test]
    fn test_achromatic() {
        assert_eq!(rgb_to_hsl(0, 0, 0), (0, 0, 0));
        assert_eq!(rgb_to_hsl(255, 255, 255), (0, 0, 100));
    }

    #[test]
    fn test_hue_modifier() {
        let red = Color::from_hex("#ff0000").unwrap();
        assert_eq!(red.with_hue(120.0).to_hex(), "#00ff00");
        assert_eq!(red.with_hue(480.0).to_hex(), "#00ff00");
        assert_eq!(red.add_hue(240.0).to_hex(), "#0000ff");
        assert_eq!(red.add_hue(-120.0).to_hex(), "#0000ff");
    }

    #[test]
    fn test_saturation_and_lightness_modifiers() {
        let red = Color::from_rgb(255, 0, 0);
        assert_eq!(red.with_saturation(0.0).to_hex(), "#808080");
        assert_eq!(red.with_lightness(100.0).to_hex(), "#ffffff");
        assert_eq!(red.add_lightness(-50.0).to_hex(), "#000000");
        assert_eq!(red.add_saturation(50.0), red);
        assert_eq!(red.with_lightness(-20.0).to_hex(), "#000000");
    }

    #[test]
    fn test_hsl_modifiers_keep_alpha() {
        let color = Color::from_rgba(255, 0, 0, 0.4);
        assert!((color.with_hue(200.0).alpha() - 0.4).abs() < f64::EPSILON);
        assert!((color.add_lightness(10.0).alpha() - 0.4).abs() < f64::EPSILON);
    }
}
