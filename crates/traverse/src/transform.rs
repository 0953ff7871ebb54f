//! Coordinate system transformation boundary.
//!
//! No projection is performed: points come back unchanged, tagged with the
//! requested systems so callers can see that nothing was reprojected.

use crate::types::Point;
use serde::{Deserialize, Serialize};

pub const DEFAULT_SOURCE_SYSTEM: &str = "local";
pub const DEFAULT_TARGET_SYSTEM: &str = "state_plane";
pub const PASS_THROUGH_METHOD: &str = "pass_through";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransformedPoint {
    #[serde(flatten)]
    pub point: Point,
    pub original_x: f64,
    pub original_y: f64,
    pub coordinate_system: String,
    pub transformation_note: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transformation {
    pub coordinates: Vec<TransformedPoint>,
    pub from_system: String,
    pub to_system: String,
    pub method: String,
}

#[must_use]
pub fn transform_coordinates(points: &[Point], from_system: &str, to_system: &str) -> Transformation {
    let note = format!("Passed through unchanged; no projection from {from_system} to {to_system}");

    let coordinates = points
        .iter()
        .map(|point| TransformedPoint {
            original_x: point.x,
            original_y: point.y,
            point: point.clone(),
            coordinate_system: to_system.to_string(),
            transformation_note: note.clone(),
        })
        .collect();

    Transformation {
        coordinates,
        from_system: from_system.to_string(),
        to_system: to_system.to_string(),
        method: PASS_THROUGH_METHOD.to_string(),
    }
}
