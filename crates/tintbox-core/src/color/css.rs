//! CSS function strings that defer alpha to a theme variable.

use super::{Color, format_alpha};

impl Color {
    /// `rgba(r, g, b, var(--NAME, default))`, letting a stylesheet override
    /// the alpha at render time.
    pub fn to_dynamic_rgba_string(&self, alpha_variable: &str, default_alpha: f64) -> String {
        format!(
            "rgba({}, var(--{}, {}))",
            self.to_rgb_value_string(),
            alpha_variable,
            format_alpha(default_alpha)
        )
    }
}
