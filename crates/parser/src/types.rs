use crate::error::ParserError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One survey call extracted from a clause
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Call {
    /// Clause text the call was parsed from
    pub raw_text: String,

    /// Parser confidence in `[0, 1]`
    pub confidence: f64,

    /// Variant-specific data
    #[serde(flatten)]
    pub kind: CallKind,
}

/// Typed payload of a call, tagged by `callType`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "callType", rename_all = "snake_case")]
pub enum CallKind {
    #[serde(rename_all = "camelCase")]
    BearingDistance {
        bearing: String,
        distance_feet: f64,
        end_monument: Option<String>,
        #[serde(default)]
        passing_monuments: Vec<String>,
    },

    #[serde(rename_all = "camelCase")]
    Curve {
        radius: Option<f64>,
        delta: Option<String>,
        chord_bearing: Option<String>,
        chord_distance_feet: Option<f64>,
        /// Informational only, never scored
        #[serde(default, skip_serializing_if = "Option::is_none")]
        arc_length_feet: Option<f64>,
    },

    #[serde(rename_all = "camelCase")]
    Monument {
        monument_type: String,
        action: MonumentAction,
    },

    Adjoiner { description: String },
}

/// What the deed says was done with a monument
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MonumentAction {
    Set,
    Found,
    #[default]
    Unspecified,
}

/// Discriminant of [`CallKind`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CallType {
    Curve,
    BearingDistance,
    Monument,
    Adjoiner,
}

impl CallType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Curve => "curve",
            Self::BearingDistance => "bearing_distance",
            Self::Monument => "monument",
            Self::Adjoiner => "adjoiner",
        }
    }
}

impl fmt::Display for CallType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CallType {
    type Err = ParserError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "curve" => Ok(Self::Curve),
            "bearing_distance" => Ok(Self::BearingDistance),
            "monument" => Ok(Self::Monument),
            "adjoiner" => Ok(Self::Adjoiner),
            other => Err(ParserError::UnknownCallType(other.to_string())),
        }
    }
}

impl CallKind {
    #[must_use]
    pub const fn call_type(&self) -> CallType {
        match self {
            Self::BearingDistance { .. } => CallType::BearingDistance,
            Self::Curve { .. } => CallType::Curve,
            Self::Monument { .. } => CallType::Monument,
            Self::Adjoiner { .. } => CallType::Adjoiner,
        }
    }
}

impl Call {
    #[must_use]
    pub fn new(raw_text: impl Into<String>, confidence: f64, kind: CallKind) -> Self {
        Self {
            raw_text: raw_text.into(),
            confidence,
            kind,
        }
    }

    #[must_use]
    pub const fn call_type(&self) -> CallType {
        self.kind.call_type()
    }

    /// Bearing of a line call (chord bearing for curves)
    #[must_use]
    pub fn bearing(&self) -> Option<&str> {
        match &self.kind {
            CallKind::BearingDistance { bearing, .. } => Some(bearing),
            CallKind::Curve { chord_bearing, .. } => chord_bearing.as_deref(),
            _ => None,
        }
    }

    /// Azimuth of [`Call::bearing`], when it converts
    #[must_use]
    pub fn azimuth(&self) -> Option<f64> {
        self.bearing().and_then(deed_bearing::to_azimuth)
    }

    #[must_use]
    pub fn distance_feet(&self) -> Option<f64> {
        match &self.kind {
            CallKind::BearingDistance { distance_feet, .. } => Some(*distance_feet),
            CallKind::Curve {
                chord_distance_feet,
                ..
            } => *chord_distance_feet,
            _ => None,
        }
    }

    /// Monument the call ends on
    #[must_use]
    pub fn monument(&self) -> Option<&str> {
        match &self.kind {
            CallKind::BearingDistance { end_monument, .. } => end_monument.as_deref(),
            CallKind::Monument { monument_type, .. } => Some(monument_type),
            _ => None,
        }
    }
}

/// Counts per call type plus mean confidence
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CallSummary {
    pub total_calls: usize,
    pub bearing_distance_calls: usize,
    pub curve_calls: usize,
    pub monument_calls: usize,
    pub adjoiner_calls: usize,
    pub average_confidence: f64,
}

impl CallSummary {
    #[must_use]
    pub fn from_calls(calls: &[Call]) -> Self {
        let mut summary = Self {
            total_calls: calls.len(),
            ..Default::default()
        };

        for call in calls {
            match call.call_type() {
                CallType::BearingDistance => summary.bearing_distance_calls += 1,
                CallType::Curve => summary.curve_calls += 1,
                CallType::Monument => summary.monument_calls += 1,
                CallType::Adjoiner => summary.adjoiner_calls += 1,
            }
        }

        if !calls.is_empty() {
            summary.average_confidence =
                calls.iter().map(|c| c.confidence).sum::<f64>() / calls.len() as f64;
        }

        summary
    }
}
