use super::coord;
use crate::types::Point;

/// AutoCAD script drawing a closed polyline through every point
#[must_use]
pub fn autocad_script(points: &[Point]) -> String {
    let mut out = String::from("PLINE\n");
    for point in points {
        out.push_str(&coord(point.x));
        out.push(',');
        out.push_str(&coord(point.y));
        out.push('\n');
    }
    out.push_str("C\n");
    out
}
