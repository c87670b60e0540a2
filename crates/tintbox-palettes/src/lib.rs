//! Named color palettes for tintbox.
//!
//! - **Tailwind**: the full Tailwind CSS v3 palette, 22 hues with 11 shades each

pub mod tailwind;

pub use tailwind::{TAILWIND_COLORS, TailwindColor, TailwindPalette};
pub use tintbox_core::SHADE_LABELS;
