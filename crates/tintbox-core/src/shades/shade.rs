//! The eleven shade levels of a ramp (50 through 950).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::SHADE_LABELS;
use crate::error::ColorError;

/// A shade level key. Ordering follows the numeric level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Shade {
    S50,
    S100,
    S200,
    S300,
    S400,
    S500,
    S600,
    S700,
    S800,
    S900,
    S950,
}

impl Shade {
    /// All levels in ascending order.
    pub const ALL: [Shade; 11] = [
        Shade::S50,
        Shade::S100,
        Shade::S200,
        Shade::S300,
        Shade::S400,
        Shade::S500,
        Shade::S600,
        Shade::S700,
        Shade::S800,
        Shade::S900,
        Shade::S950,
    ];

    /// Numeric level (50, 100, ..., 950).
    pub const fn level(self) -> u16 {
        match self {
            Shade::S50 => 50,
            Shade::S100 => 100,
            Shade::S200 => 200,
            Shade::S300 => 300,
            Shade::S400 => 400,
            Shade::S500 => 500,
            Shade::S600 => 600,
            Shade::S700 => 700,
            Shade::S800 => 800,
            Shade::S900 => 900,
            Shade::S950 => 950,
        }
    }

    /// Position within a ramp (0 for 50, 10 for 950).
    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn from_level(level: u16) -> Option<Self> {
        Self::ALL.into_iter().find(|shade| shade.level() == level)
    }

    /// Blend factor used when deriving this shade from a seed color: the
    /// share of white mixed in below 500, the share of the seed kept from
    /// 500 up.
    pub const fn intensity(self) -> f64 {
        match self {
            Shade::S50 => 0.95,
            Shade::S100 => 0.9,
            Shade::S200 => 0.75,
            Shade::S300 => 0.6,
            Shade::S400 => 0.3,
            Shade::S500 => 1.0,
            Shade::S600 => 0.9,
            Shade::S700 => 0.75,
            Shade::S800 => 0.6,
            Shade::S900 => 0.49,
            Shade::S950 => 0.3,
        }
    }

    /// Whether this shade is lighter than the 500 level.
    pub const fn is_tint(self) -> bool {
        self.level() < 500
    }
}

impl fmt::Display for Shade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.level())
    }
}

impl FromStr for Shade {
    type Err = ColorError;

    /// Only the exact labels (`"50"`, `"100"`, ..., `"950"`) are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .zip(SHADE_LABELS)
            .find_map(|(shade, label)| (label == s).then_some(shade))
            .ok_or_else(|| ColorError::Validation(format!("Invalid shade {}", s)))
    }
}

impl TryFrom<u16> for Shade {
    type Error = ColorError;

    fn try_from(level: u16) -> Result<Self, Self::Error> {
        Self::from_level(level)
            .ok_or_else(|| ColorError::Validation(format!("Invalid shade {}", level)))
    }
}

impl Serialize for Shade {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Shade {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
