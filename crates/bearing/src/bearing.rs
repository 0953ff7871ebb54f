use crate::azimuth::normalize_azimuth;
use crate::error::{BearingError, Result};
use crate::quadrant::{EastWest, NorthSouth, Quadrant};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Word form: `North 45 degrees 30 minutes 15 seconds East`, minutes/seconds optional
static WORD_FORM: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(north|south|n|s)\s*(\d+(?:\.\d+)?)\s*degrees?\b\s*(?:(\d+(?:\.\d+)?)\s*minutes?\b)?\s*(?:(\d+(?:\.\d+)?)\s*seconds?\b)?.*?\b(east|west|e|w)\b",
    )
    .expect("word-form bearing regex")
});

/// Symbol form: `N45°30'15"E`, `South 28° 50' West`, `N 45.5° E`
static SYMBOL_FORM: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?i)\b(north|south|n|s)\s*(\d+(?:\.\d+)?)\s*°\s*(?:(\d+(?:\.\d+)?)\s*'?)?\s*(?:(\d+(?:\.\d+)?)\s*"?)?.*?\b(east|west|e|w)\b"#,
    )
    .expect("symbol-form bearing regex")
});

/// Colon form: `N45:30:15E`
static COLON_FORM: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(north|south|n|s)\s*(\d+):(\d+(?:\.\d+)?)(?::(\d+(?:\.\d+)?))?\s*(east|west|e|w)\b",
    )
    .expect("colon-form bearing regex")
});

/// A quadrant bearing such as `N45°30'E`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuadrantBearing {
    pub north_south: NorthSouth,
    pub degrees: f64,
    pub minutes: f64,
    pub seconds: f64,
    pub east_west: EastWest,
}

impl QuadrantBearing {
    #[must_use]
    pub const fn new(
        north_south: NorthSouth,
        degrees: f64,
        minutes: f64,
        seconds: f64,
        east_west: EastWest,
    ) -> Self {
        Self {
            north_south,
            degrees,
            minutes,
            seconds,
            east_west,
        }
    }

    /// Parse the first bearing found in `text`
    pub fn parse(text: &str) -> Result<Self> {
        let text = text.trim();
        if text.is_empty() {
            return Err(BearingError::Empty);
        }

        for pattern in [&*WORD_FORM, &*SYMBOL_FORM, &*COLON_FORM] {
            if let Some(caps) = pattern.captures(text) {
                return Self::from_captures(&caps);
            }
        }

        Err(BearingError::unrecognized(text))
    }

    fn from_captures(caps: &Captures<'_>) -> Result<Self> {
        let north_south = caps
            .get(1)
            .and_then(|m| NorthSouth::from_token(m.as_str()))
            .ok_or_else(|| BearingError::unrecognized(&caps[0]))?;
        let east_west = caps
            .get(5)
            .and_then(|m| EastWest::from_token(m.as_str()))
            .ok_or_else(|| BearingError::unrecognized(&caps[0]))?;

        Ok(Self {
            north_south,
            degrees: component(caps, 2, "degrees")?.unwrap_or(0.0),
            minutes: component(caps, 3, "minutes")?.unwrap_or(0.0),
            seconds: component(caps, 4, "seconds")?.unwrap_or(0.0),
            east_west,
        })
    }

    /// Build the bearing whose azimuth equals `azimuth`, rounded to whole minutes
    #[must_use]
    pub fn from_azimuth(azimuth: f64) -> Self {
        let (quadrant, angle) = Quadrant::from_azimuth(normalize_azimuth(azimuth));
        let total_minutes = (angle * 60.0).round().max(0.0);
        let degrees = (total_minutes / 60.0).floor();
        let minutes = total_minutes - degrees * 60.0;

        Self {
            north_south: quadrant.north_south(),
            degrees,
            minutes,
            seconds: 0.0,
            east_west: quadrant.east_west(),
        }
    }

    #[must_use]
    pub const fn quadrant(&self) -> Quadrant {
        Quadrant::new(self.north_south, self.east_west)
    }

    /// Quadrant angle in decimal degrees
    #[must_use]
    pub fn angle(&self) -> f64 {
        self.degrees + self.minutes / 60.0 + self.seconds / 3600.0
    }

    /// Azimuth in `[0, 360)`
    #[must_use]
    pub fn azimuth(&self) -> f64 {
        normalize_azimuth(self.quadrant().raw_azimuth(self.angle()))
    }
}

fn component(caps: &Captures<'_>, index: usize, name: &'static str) -> Result<Option<f64>> {
    let Some(m) = caps.get(index) else {
        return Ok(None);
    };
    m.as_str()
        .parse::<f64>()
        .map(Some)
        .map_err(|_| BearingError::InvalidComponent {
            component: name,
            value: m.as_str().to_string(),
        })
}

fn write_number(f: &mut fmt::Formatter<'_>, value: f64, pad: usize) -> fmt::Result {
    if value.fract() == 0.0 {
        write!(f, "{:0pad$}", value as u64)
    } else {
        write!(f, "{value}")
    }
}

impl fmt::Display for QuadrantBearing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.north_south.letter())?;
        write_number(f, self.degrees, 1)?;
        f.write_str("°")?;
        write_number(f, self.minutes, 2)?;
        f.write_str("'")?;
        if self.seconds != 0.0 {
            write_number(f, self.seconds, 2)?;
            f.write_str("\"")?;
        }
        write!(f, "{}", self.east_west.letter())
    }
}

impl FromStr for QuadrantBearing {
    type Err = BearingError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn parses_word_form_with_seconds() {
        let bearing = QuadrantBearing::parse("North 45 degrees 30 minutes 15 seconds East").unwrap();
        assert_eq!(bearing.north_south, NorthSouth::North);
        assert_eq!(bearing.east_west, EastWest::East);
        assert!(approx(bearing.degrees, 45.0));
        assert!(approx(bearing.minutes, 30.0));
        assert!(approx(bearing.seconds, 15.0));
    }

    #[test]
    fn parses_symbol_forms() {
        let compact = QuadrantBearing::parse("N45°30'15\"E").unwrap();
        assert!(approx(compact.angle(), 45.0 + 30.0 / 60.0 + 15.0 / 3600.0));

        let spaced = QuadrantBearing::parse("South 28° 50' 45\" West").unwrap();
        assert_eq!(spaced.quadrant(), Quadrant::SouthWest);
        assert!(approx(spaced.minutes, 50.0));

        let degrees_only = QuadrantBearing::parse("North 0° East").unwrap();
        assert!(approx(degrees_only.angle(), 0.0));
        assert_eq!(degrees_only.quadrant(), Quadrant::NorthEast);

        let decimal = QuadrantBearing::parse("N45.5°E").unwrap();
        assert!(approx(decimal.angle(), 45.5));
    }

    #[test]
    fn parses_colon_form() {
        let bearing = QuadrantBearing::parse("S12:30:00W").unwrap();
        assert_eq!(bearing.quadrant(), Quadrant::SouthWest);
        assert!(approx(bearing.angle(), 12.5));
    }

    #[test]
    fn rejects_text_without_bearing() {
        assert_eq!(QuadrantBearing::parse(""), Err(BearingError::Empty));
        assert!(matches!(
            QuadrantBearing::parse("to an iron pin"),
            Err(BearingError::Unrecognized(_))
        ));
    }

    #[test]
    fn display_uses_compact_symbol_form() {
        let bearing = QuadrantBearing::new(NorthSouth::South, 12.0, 5.0, 0.0, EastWest::West);
        assert_eq!(bearing.to_string(), "S12°05'W");

        let with_seconds = QuadrantBearing::new(NorthSouth::North, 3.0, 0.0, 30.0, EastWest::East);
        assert_eq!(with_seconds.to_string(), "N3°00'30\"E");
    }

    #[test]
    fn from_azimuth_inverts_quadrant_mapping() {
        let bearing = QuadrantBearing::from_azimuth(135.5);
        assert_eq!(bearing.quadrant(), Quadrant::NorthWest);
        assert!(approx(bearing.azimuth(), 135.5));
        assert_eq!(bearing.to_string(), "N45°30'W");
    }
}
