use crate::closure::closure_status;
use crate::export::Exports;
use crate::types::{PlotResult, Point, SkipReason, SkippedCall};
use deed_parser::{Call, CallKind};

/// Coordinates are stored to the thousandth of a foot
fn round3(value: f64) -> f64 {
    let rounded = (value * 1000.0).round() / 1000.0;
    // drop the sign of -0.0
    rounded + 0.0
}

/// Points placed by a call list, plus the calls that placed none
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Traverse {
    pub points: Vec<Point>,
    pub skipped: Vec<SkippedCall>,
}

/// Walk `calls` from the POB at (0, 0).
///
/// Each bearing/distance call with a convertible bearing and a positive
/// distance moves the cursor by `d·sin(az)`, `d·cos(az)` and places a point.
/// Monument calls name the monument at the most recent point when it has
/// none yet. Everything else is reported in [`Traverse::skipped`].
#[must_use]
pub fn compute_traverse(calls: &[Call]) -> Traverse {
    let mut points = vec![Point::pob()];
    let mut skipped = Vec::new();
    let (mut x, mut y) = (0.0_f64, 0.0_f64);

    for (call_index, call) in calls.iter().enumerate() {
        let skip = |reason| SkippedCall {
            call_index,
            call_type: call.call_type(),
            reason,
            raw_text: call.raw_text.clone(),
        };

        match &call.kind {
            CallKind::BearingDistance {
                bearing,
                distance_feet,
                end_monument,
                ..
            } => {
                let Some(azimuth) = call.azimuth() else {
                    skipped.push(skip(SkipReason::NoAzimuth));
                    continue;
                };
                if !distance_feet.is_finite() || *distance_feet <= 0.0 {
                    skipped.push(skip(SkipReason::NonPositiveDistance));
                    continue;
                }

                let radians = azimuth.to_radians();
                x += distance_feet * radians.sin();
                y += distance_feet * radians.cos();

                let index = points.len();
                points.push(Point {
                    index,
                    x: round3(x),
                    y: round3(y),
                    label: format!("P{index}"),
                    monument: end_monument.clone(),
                    description: call.raw_text.clone(),
                    bearing: Some(bearing.clone()),
                    azimuth: Some(azimuth),
                    distance_feet: Some(*distance_feet),
                });
            }
            CallKind::Monument { monument_type, .. } => {
                match points.last_mut() {
                    Some(point) if point.monument.is_none() => {
                        point.monument = Some(monument_type.clone());
                    }
                    _ => skipped.push(skip(SkipReason::NotALine)),
                }
            }
            CallKind::Curve { .. } | CallKind::Adjoiner { .. } => {
                skipped.push(skip(SkipReason::NotALine));
            }
        }
    }

    log::debug!(
        "traverse placed {} points from {} calls ({} skipped)",
        points.len(),
        calls.len(),
        skipped.len()
    );

    Traverse { points, skipped }
}

/// Coordinates, closure and all exports for an ordered call list
#[must_use]
pub fn plot(calls: &[Call]) -> PlotResult {
    let Traverse { points, skipped } = compute_traverse(calls);
    let closure = closure_status(&points);
    let exports = Exports::generate(&points);

    if let Some(result) = closure.result() {
        log::debug!(
            "closure {:.3} ft {} ({}), area {:.3} ac",
            result.closure_distance_feet,
            result.closure_bearing,
            result.precision_ratio,
            result.area_acres
        );
    }

    PlotResult {
        coordinates: points,
        skipped,
        closure,
        exports,
    }
}
