//! Closure, perimeter and area of a traverse.

use crate::error::{Result, TraverseError};
use crate::types::{ClosureResult, ClosureStatus, Point};
use deed_bearing::{vector_azimuth, QuadrantBearing};

/// A traverse closes when its misclosure is under this many feet
pub const CLOSURE_TOLERANCE_FEET: f64 = 0.1;

pub const SQ_FT_PER_ACRE: f64 = 43_560.0;

/// Closure analysis needs at least this many points
pub const MIN_CLOSURE_POINTS: usize = 3;

/// Shoelace area over `points` as a closed polygon; positive when counterclockwise
#[must_use]
pub fn signed_area(points: &[Point]) -> f64 {
    if points.len() < MIN_CLOSURE_POINTS {
        return 0.0;
    }

    let twice: f64 = points
        .iter()
        .zip(points.iter().cycle().skip(1))
        .map(|(a, b)| a.x * b.y - b.x * a.y)
        .sum();

    twice / 2.0
}

#[must_use]
pub fn polygon_area(points: &[Point]) -> f64 {
    signed_area(points).abs()
}

/// Sum of the call distances that placed points
#[must_use]
pub fn perimeter(points: &[Point]) -> f64 {
    points.iter().filter_map(|p| p.distance_feet).sum()
}

/// `1:N` with N truncated, or `Perfect` for a zero misclosure
#[must_use]
pub fn precision_ratio(perimeter: f64, closure_distance: f64) -> String {
    if closure_distance > 0.0 {
        format!("1:{}", (perimeter / closure_distance) as u64)
    } else {
        "Perfect".to_string()
    }
}

/// Closure diagnostics from the last point back to the POB
pub fn analyze_closure(points: &[Point]) -> Result<ClosureResult> {
    let (Some(pob), Some(last)) = (points.first(), points.last()) else {
        return Err(TraverseError::InsufficientPoints(points.len()));
    };
    if points.len() < MIN_CLOSURE_POINTS {
        return Err(TraverseError::InsufficientPoints(points.len()));
    }

    let dx = pob.x - last.x;
    let dy = pob.y - last.y;
    let closure_distance = dx.hypot(dy);
    let perimeter = perimeter(points);
    let area_sq_ft = polygon_area(points);

    let closure_error_ppm = if perimeter > 0.0 {
        closure_distance / perimeter * 1_000_000.0
    } else {
        0.0
    };

    Ok(ClosureResult {
        closure_distance_feet: closure_distance,
        closure_bearing: QuadrantBearing::from_azimuth(vector_azimuth(dx, dy)).to_string(),
        precision_ratio: precision_ratio(perimeter, closure_distance),
        area_sq_ft,
        area_acres: area_sq_ft / SQ_FT_PER_ACRE,
        perimeter_feet: perimeter,
        is_closed: closure_distance < CLOSURE_TOLERANCE_FEET,
        closure_error_ppm,
        dx_to_close: dx,
        dy_to_close: dy,
    })
}

/// [`analyze_closure`] with insufficiency folded into the result
#[must_use]
pub fn closure_status(points: &[Point]) -> ClosureStatus {
    match analyze_closure(points) {
        Ok(result) => ClosureStatus::Analyzed(result),
        Err(err) => ClosureStatus::Insufficient {
            error: err.to_string(),
            points: points.len(),
        },
    }
}
