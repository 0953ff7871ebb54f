use super::coord;
use crate::types::Point;

const HEADER: &str = "0\nSECTION\n2\nENTITIES\n0\nPOLYLINE\n8\nBOUNDARY\n66\n1\n10\n0.0\n20\n0.0\n30\n0.0\n";

const FOOTER: &str = "0\nSEQEND\n0\nENDSEC\n0\nEOF\n";

/// ASCII DXF with one POLYLINE on layer `BOUNDARY` and a VERTEX per point
#[must_use]
pub fn dxf(points: &[Point]) -> String {
    let mut out = String::from(HEADER);
    for point in points {
        out.push_str("0\nVERTEX\n8\nBOUNDARY\n10\n");
        out.push_str(&coord(point.x));
        out.push_str("\n20\n");
        out.push_str(&coord(point.y));
        out.push_str("\n30\n0.0\n");
    }
    out.push_str(FOOTER);
    out
}
