use crate::types::Point;
use deed_bearing::vector_azimuth;
use std::fmt::Write;

/// ArcGIS traverse file: one `COURSE <azimuth> <distance>` per consecutive point pair
#[must_use]
pub fn esri_traverse(points: &[Point]) -> String {
    let mut out = String::from("TRAVERSE\nUNITS FEET\nBEGIN\n");
    for pair in points.windows(2) {
        let dx = pair[1].x - pair[0].x;
        let dy = pair[1].y - pair[0].y;
        let _ = writeln!(
            out,
            "COURSE {:.6} {:.3}",
            vector_azimuth(dx, dy),
            dx.hypot(dy)
        );
    }
    out.push_str("END\n");
    out
}
