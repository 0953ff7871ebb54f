use crate::export::Exports;
use deed_parser::CallType;
use serde::{Deserialize, Serialize};

/// Label of the first point of every traverse
pub const POB_LABEL: &str = "POB";

/// One traverse vertex in local plan feet, POB at the origin
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Point {
    pub index: usize,
    pub x: f64,
    pub y: f64,
    pub label: String,
    pub monument: Option<String>,
    #[serde(default)]
    pub description: String,

    /// Bearing text of the call that placed this point
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bearing: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub azimuth: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance_feet: Option<f64>,
}

impl Point {
    /// Point of Beginning at (0, 0)
    #[must_use]
    pub fn pob() -> Self {
        Self {
            index: 0,
            x: 0.0,
            y: 0.0,
            label: POB_LABEL.to_string(),
            monument: None,
            description: "Point of Beginning".to_string(),
            bearing: None,
            azimuth: None,
            distance_feet: None,
        }
    }

    /// Bare point, as read back from a coordinate list
    #[must_use]
    pub fn at(index: usize, x: f64, y: f64) -> Self {
        Self {
            index,
            x,
            y,
            label: if index == 0 {
                POB_LABEL.to_string()
            } else {
                format!("P{index}")
            },
            monument: None,
            description: String::new(),
            bearing: None,
            azimuth: None,
            distance_feet: None,
        }
    }

    #[must_use]
    pub fn with_monument(mut self, monument: impl Into<String>) -> Self {
        self.monument = Some(monument.into());
        self
    }
}

/// Closure diagnostics of a traverse with at least three points
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ClosureResult {
    pub closure_distance_feet: f64,
    /// Direction from the last point back to the POB, e.g. `N45°30'W`
    pub closure_bearing: String,
    /// `1:N`, or `Perfect` for an exact closure
    pub precision_ratio: String,
    pub area_sq_ft: f64,
    pub area_acres: f64,
    pub perimeter_feet: f64,
    pub is_closed: bool,
    pub closure_error_ppm: f64,
    pub dx_to_close: f64,
    pub dy_to_close: f64,
}

/// Outcome of closure analysis; too few points is a result, not an error
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ClosureStatus {
    Analyzed(ClosureResult),
    Insufficient { error: String, points: usize },
}

impl ClosureStatus {
    #[must_use]
    pub const fn result(&self) -> Option<&ClosureResult> {
        match self {
            Self::Analyzed(result) => Some(result),
            Self::Insufficient { .. } => None,
        }
    }

    #[must_use]
    pub const fn is_closed(&self) -> bool {
        matches!(self, Self::Analyzed(ClosureResult { is_closed: true, .. }))
    }
}

/// Why a call did not place a point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// Bearing text did not convert to an azimuth
    NoAzimuth,
    NonPositiveDistance,
    /// Curves, monuments and adjoiners carry no straight course
    NotALine,
}

/// A call kept for reporting but left off the traverse
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SkippedCall {
    /// Position in the input call list
    pub call_index: usize,
    pub call_type: CallType,
    pub reason: SkipReason,
    pub raw_text: String,
}

/// Everything one plot run produces
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlotResult {
    pub coordinates: Vec<Point>,
    #[serde(default)]
    pub skipped: Vec<SkippedCall>,
    pub closure: ClosureStatus,
    pub exports: Exports,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_insufficient_status_serializes_tagged() {
        let status = ClosureStatus::Insufficient {
            error: "Insufficient points for closure analysis".into(),
            points: 2,
        };
        assert_eq!(
            serde_json::to_value(&status).unwrap(),
            json!({
                "status": "insufficient",
                "error": "Insufficient points for closure analysis",
                "points": 2,
            })
        );
        assert!(status.result().is_none());
        assert!(!status.is_closed());
    }

    #[test]
    fn test_point_labels() {
        assert_eq!(Point::pob().label, "POB");
        assert_eq!(Point::at(3, 1.0, 2.0).label, "P3");
        assert_eq!(Point::at(0, 0.0, 0.0).label, "POB");
    }
}
