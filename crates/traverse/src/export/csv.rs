use super::coord;
use crate::types::Point;

pub const CSV_HEADER: &str = "Point,X,Y,Description,Monument";

/// Header plus exactly one line per point
#[must_use]
pub fn coordinates_csv(points: &[Point]) -> String {
    let mut out = format!("{CSV_HEADER}\n");
    for point in points {
        let row = [
            field(&point.label),
            coord(point.x),
            coord(point.y),
            field(&point.description),
            field(point.monument.as_deref().unwrap_or_default()),
        ];
        out.push_str(&row.join(","));
        out.push('\n');
    }
    out
}

/// Flatten line breaks, then quote when the value holds a comma or quote
fn field(value: &str) -> String {
    let flat = value.replace(['\r', '\n'], " ");
    if flat.contains([',', '"']) {
        format!("\"{}\"", flat.replace('"', "\"\""))
    } else {
        flat
    }
}
