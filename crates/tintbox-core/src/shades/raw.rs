//! Raw RGB triples as found in design-system palettes (Tailwind config,
//! theme tables): either `[r, g, b]` or `"r, g, b"`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::{ColorError, ColorResult};

/// One raw shade value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RgbValue {
    /// `[r, g, b]`
    Channels(Vec<i64>),
    /// `"r, g, b"`; spaces are ignored.
    Text(String),
}

/// Shade key -> raw value, as supplied by palette tables and themes.
pub type RawShades = BTreeMap<String, RgbValue>;

impl RgbValue {
    /// Parse into a `(r, g, b)` triple. Channel range is not checked here.
    pub fn to_triple(&self) -> ColorResult<(i32, i32, i32)> {
        let channels = match self {
            RgbValue::Channels(values) => values
                .iter()
                .map(|&v| v.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32)
                .collect::<Vec<_>>(),
            RgbValue::Text(text) => text
                .replace(' ', "")
                .split(',')
                .map(|part| {
                    part.parse::<i32>().map_err(|_| {
                        ColorError::InvalidFormat(format!("Invalid RGB component {:?} in {:?}", part, text))
                    })
                })
                .collect::<ColorResult<Vec<_>>>()?,
        };

        match channels[..] {
            [r, g, b] => Ok((r, g, b)),
            _ => Err(ColorError::InvalidFormat(format!(
                "Expected 3 RGB components, got {}",
                channels.len()
            ))),
        }
    }

    pub fn to_color(&self) -> ColorResult<Color> {
        let (r, g, b) = self.to_triple()?;
        Ok(Color::from_rgb(r, g, b))
    }
}

impl From<(u8, u8, u8)> for RgbValue {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        RgbValue::Channels(vec![r.into(), g.into(), b.into()])
    }
}

impl From<[i64; 3]> for RgbValue {
    fn from(channels: [i64; 3]) -> Self {
        RgbValue::Channels(channels.to_vec())
    }
}

impl From<&str> for RgbValue {
    fn from(text: &str) -> Self {
        RgbValue::Text(text.to_string())
    }
}

impl From<String> for RgbValue {
    fn from(text: String) -> Self {
        RgbValue::Text(text)
    }
}
