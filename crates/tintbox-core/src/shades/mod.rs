//! Shade ramps: eleven colors keyed 50 through 950, lightest to darkest.
//!
//! A ramp is built from a seed color, from raw RGB values (design-system
//! palettes), or from an explicit key -> color map. Once built it is
//! read-only.

mod raw;
mod shade;

pub use raw::{RawShades, RgbValue};
pub use shade::Shade;

use std::array;
use std::collections::BTreeMap;
use std::iter::Zip;
use std::ops::Index;
use std::slice;

use serde::de::Error as _;
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::color::Color;
use crate::error::{ColorError, ColorResult};

/// Shade labels in ramp order.
pub const SHADE_LABELS: [&str; 11] = [
    "50", "100", "200", "300", "400", "500", "600", "700", "800", "900", "950",
];

/// Iterator over `(shade, color)` pairs in ascending shade order.
pub type Iter<'a> = Zip<array::IntoIter<Shade, 11>, slice::Iter<'a, Color>>;

/// An immutable 11-step color ramp.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShadeRamp {
    shades: [Color; 11],
}

impl ShadeRamp {
    /// Wrap eleven colors given in ascending shade order (50 first, 950 last).
    pub const fn new(shades: [Color; 11]) -> Self {
        Self { shades }
    }

    /// Derive a ramp from a single color, which becomes the 500 shade.
    ///
    /// Lighter shades blend the seed toward white, darker shades scale it
    /// toward black, each by the shade's [`Shade::intensity`]. The seed's
    /// alpha is kept on every shade.
    pub fn from_seed(seed: Color) -> Self {
        log::trace!("Deriving shade ramp from seed {}", seed);

        let shades = Shade::ALL.map(|shade| {
            let intensity = shade.intensity();
            let derive = |channel: u8| {
                let channel = f64::from(channel);
                let value = if shade.is_tint() {
                    (255.0 - channel) * intensity + channel
                } else {
                    channel * intensity
                };
                value as i32
            };

            Color::from_rgba(
                derive(seed.red()),
                derive(seed.green()),
                derive(seed.blue()),
                seed.alpha(),
            )
        });

        Self { shades }
    }

    /// Build a ramp from a key -> color map.
    ///
    /// The keys must be exactly the eleven shade labels. A foreign key is
    /// reported first, then a repeated key, then the first missing one.
    pub fn colors<K, I>(colors: I) -> ColorResult<Self>
    where
        K: AsRef<str>,
        I: IntoIterator<Item = (K, Color)>,
    {
        let mut slots: [Option<Color>; 11] = [None; 11];
        let mut duplicate = None;

        for (key, color) in colors {
            let key = key.as_ref();
            let Ok(shade) = key.parse::<Shade>() else {
                log::debug!("Rejected shade map with foreign key {}", key);
                return Err(ColorError::Validation(format!("Invalid shade {}", key)));
            };
            if slots[shade.index()].replace(color).is_some() && duplicate.is_none() {
                duplicate = Some(shade);
            }
        }

        if let Some(shade) = duplicate {
            log::debug!("Rejected shade map with repeated key {}", shade);
            return Err(ColorError::Validation(format!("Duplicate shade {}", shade)));
        }

        let mut shades = [Color::default(); 11];
        for shade in Shade::ALL {
            shades[shade.index()] = slots[shade.index()].ok_or_else(|| {
                log::debug!("Rejected shade map missing key {}", shade);
                ColorError::Validation(format!("Missing shade {}", shade))
            })?;
        }

        Ok(Self { shades })
    }

    /// Build a ramp from raw RGB values keyed by shade label.
    pub fn from_rgb_values<K, V, I>(values: I) -> ColorResult<Self>
    where
        K: AsRef<str>,
        V: Into<RgbValue>,
        I: IntoIterator<Item = (K, V)>,
    {
        let colors = values
            .into_iter()
            .map(|(key, value)| -> ColorResult<(K, Color)> {
                let value: RgbValue = value.into();
                Ok((key, value.to_color()?))
            })
            .collect::<ColorResult<Vec<_>>>()?;

        Self::colors(colors)
    }

    /// Parse a palette object such as `{"50": [248, 250, 252], "100": "241, 245, 249", ...}`.
    pub fn from_palette_json(json: &str) -> ColorResult<Self> {
        let raw: RawShades = serde_json::from_str(json)
            .map_err(|e| ColorError::InvalidFormat(format!("Invalid palette JSON: {}", e)))?;
        Self::from_rgb_values(raw)
    }

    pub fn shade(&self, shade: Shade) -> &Color {
        &self.shades[shade.index()]
    }

    /// The 500 shade.
    pub fn primary(&self) -> &Color {
        self.shade(Shade::S500)
    }

    /// Look up by numeric level.
    pub fn get(&self, level: u16) -> Option<&Color> {
        Shade::from_level(level).map(|shade| self.shade(shade))
    }

    /// Look up by label (`"500"`).
    pub fn get_str(&self, key: &str) -> Option<&Color> {
        key.parse::<Shade>().ok().map(|shade| self.shade(shade))
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get_str(key).is_some()
    }

    /// Always 11.
    pub fn len(&self) -> usize {
        self.shades.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn iter(&self) -> Iter<'_> {
        Shade::ALL.into_iter().zip(self.shades.iter())
    }

    pub fn as_array(&self) -> &[Color; 11] {
        &self.shades
    }

    /// Ramps are immutable; this always fails.
    pub fn try_set(&self, _key: &str, _color: Color) -> ColorResult<()> {
        Err(ColorError::ImmutableCollection)
    }

    /// Ramps are immutable; this always fails.
    pub fn try_remove(&self, _key: &str) -> ColorResult<Color> {
        Err(ColorError::ImmutableCollection)
    }

    pub fn to_map(&self) -> BTreeMap<Shade, Color> {
        self.iter().map(|(shade, color)| (shade, *color)).collect()
    }

    /// Hex string per shade, e.g. `{50: "#fef2f2", ...}`.
    pub fn to_hex_map(&self, hash: bool, alpha: bool) -> BTreeMap<Shade, String> {
        self.iter()
            .map(|(shade, color)| (shade, color.to_hex_string(alpha, false, hash)))
            .collect()
    }

    /// `"r, g, b"` per shade, for injecting CSS custom properties.
    pub fn to_rgb_value_map(&self) -> BTreeMap<Shade, String> {
        self.iter()
            .map(|(shade, color)| (shade, color.to_rgb_value_string()))
            .collect()
    }
}

impl Index<Shade> for ShadeRamp {
    type Output = Color;

    fn index(&self, shade: Shade) -> &Color {
        self.shade(shade)
    }
}

/// Positional access: 0 is the 50 shade, 10 the 950 shade.
impl Index<usize> for ShadeRamp {
    type Output = Color;

    fn index(&self, index: usize) -> &Color {
        &self.shades[index]
    }
}

impl<'a> IntoIterator for &'a ShadeRamp {
    type Item = (Shade, &'a Color);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Serialize for ShadeRamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (shade, color) in self {
            map.serialize_entry(&shade, color)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ShadeRamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let colors = BTreeMap::<String, Color>::deserialize(deserializer)?;
        Self::colors(colors).map_err(D::Error::custom)
    }
}
