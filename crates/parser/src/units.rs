use crate::error::ParserError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Length units found in deed calls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthUnit {
    Feet,
    Yards,
    Chains,
    /// Poles and rods are the same 16.5 ft measure
    Poles,
    Links,
    Meters,
    Vara,
}

impl LengthUnit {
    /// Conversion factor into feet
    #[must_use]
    pub const fn feet_per_unit(self) -> f64 {
        match self {
            Self::Feet => 1.0,
            Self::Yards => 3.0,
            Self::Chains => 66.0,
            Self::Poles => 16.5,
            Self::Links => 0.66,
            Self::Meters => 3.28084,
            Self::Vara => 2.777778,
        }
    }

    /// Resolve a unit token as written in a deed (`ft`, `chains`, `rod`, `lk`, ...)
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        let unit = match token.trim().trim_end_matches('.').to_ascii_lowercase().as_str() {
            "feet" | "foot" | "ft" => Self::Feet,
            "yards" | "yard" | "yd" => Self::Yards,
            "chains" | "chain" | "ch" => Self::Chains,
            "poles" | "pole" | "rods" | "rod" | "p" => Self::Poles,
            "links" | "link" | "lk" => Self::Links,
            "meters" | "meter" | "metres" | "metre" | "m" => Self::Meters,
            "vara" | "varas" => Self::Vara,
            _ => return None,
        };
        Some(unit)
    }
}

impl FromStr for LengthUnit {
    type Err = ParserError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_token(s).ok_or_else(|| ParserError::UnknownUnit(s.to_string()))
    }
}

/// A measured length in its original unit
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Distance {
    pub value: f64,
    pub unit: LengthUnit,
}

impl Distance {
    #[must_use]
    pub const fn new(value: f64, unit: LengthUnit) -> Self {
        Self { value, unit }
    }

    #[must_use]
    pub fn to_feet(self) -> f64 {
        self.value * self.unit.feet_per_unit()
    }
}
