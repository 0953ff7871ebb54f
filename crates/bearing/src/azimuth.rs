use crate::bearing::QuadrantBearing;

/// Convert a quadrant bearing string into an azimuth in `[0, 360)`.
///
/// Returns `None` for anything that is not a recognizable bearing; this never panics.
#[must_use]
pub fn to_azimuth(bearing: &str) -> Option<f64> {
    let azimuth = QuadrantBearing::parse(bearing).ok()?.azimuth();
    azimuth.is_finite().then_some(azimuth)
}

/// Fold any finite angle into `[0, 360)`
#[must_use]
pub fn normalize_azimuth(angle: f64) -> f64 {
    let folded = angle.rem_euclid(360.0);
    // rem_euclid rounds tiny negatives up to exactly 360.0
    if folded >= 360.0 {
        folded - 360.0
    } else {
        folded
    }
}

/// Azimuth of the displacement `(dx, dy)` under the traverse convention
/// `dx = d·sin(az)`, `dy = d·cos(az)`
#[must_use]
pub fn vector_azimuth(dx: f64, dy: f64) -> f64 {
    normalize_azimuth(dx.atan2(dy).to_degrees())
}
