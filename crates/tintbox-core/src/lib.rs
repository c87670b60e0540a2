//! Tintbox Core Library
//!
//! Immutable color values with RGB, HSL and hex conversions, derived-color
//! operations, and Tailwind-style 11-step shade ramps.

pub mod cast;
pub mod color;
pub mod error;
pub mod shades;
pub mod theme;

pub use cast::CastValue;
pub use color::Color;
pub use error::{ColorError, ColorResult};
pub use shades::{RawShades, RgbValue, SHADE_LABELS, Shade, ShadeRamp};
pub use theme::{StaticTheme, ThemeProvider};
