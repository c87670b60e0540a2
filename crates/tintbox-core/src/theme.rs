//! Host theme integration.
//!
//! A host application (UI framework, design system) that keeps its own named
//! color configuration exposes it through [`ThemeProvider`]. The library only
//! reads from it.

use std::collections::HashMap;

use crate::error::{ColorError, ColorResult};
use crate::shades::{RawShades, ShadeRamp};

/// Source of named palettes, e.g. `"primary"` or `"danger"`.
pub trait ThemeProvider: Send + Sync {
    /// Raw shades for `name`, or `None` if the theme has no such color.
    fn palette(&self, name: &str) -> Option<RawShades>;
}

/// In-memory theme for embedding and testing.
#[derive(Debug, Clone, Default)]
pub struct StaticTheme {
    palettes: HashMap<String, RawShades>,
}

impl StaticTheme {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style registration of a named palette.
    pub fn with_palette(mut self, name: impl Into<String>, shades: RawShades) -> Self {
        self.palettes.insert(name.into(), shades);
        self
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.palettes.keys().map(String::as_str)
    }
}

impl ThemeProvider for StaticTheme {
    fn palette(&self, name: &str) -> Option<RawShades> {
        self.palettes.get(name).cloned()
    }
}

impl ShadeRamp {
    /// Build a ramp from the host theme's color `name`.
    ///
    /// `provider` is `None` when the host integration is not loaded, which is
    /// reported as [`ColorError::IntegrationUnavailable`] rather than
    /// [`ColorError::NotFound`].
    pub fn from_theme(provider: Option<&dyn ThemeProvider>, name: &str) -> ColorResult<Self> {
        let Some(provider) = provider else {
            log::debug!("Theme color {} requested without a theme integration", name);
            return Err(ColorError::IntegrationUnavailable(
                "no theme provider is installed".to_string(),
            ));
        };

        let shades = provider.palette(name).ok_or_else(|| {
            log::debug!("Theme has no color named {}", name);
            ColorError::NotFound(name.to_string())
        })?;

        Self::from_rgb_values(shades)
    }
}
