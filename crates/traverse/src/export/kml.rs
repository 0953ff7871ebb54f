use super::coord;
use crate::types::Point;

const HEADER: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<kml xmlns="http://www.opengis.net/kml/2.2">
  <Document>
    <name>Deed Plot</name>
    <Placemark>
      <name>Property Boundary</name>
      <LineString>
        <coordinates>
"#;

const FOOTER: &str = "        </coordinates>
      </LineString>
    </Placemark>
  </Document>
</kml>
";

/// KML line string; tuples are local plan feet, not longitude/latitude
#[must_use]
pub fn kml(points: &[Point]) -> String {
    let mut out = String::from(HEADER);
    for point in points {
        out.push_str(&coord(point.x));
        out.push(',');
        out.push_str(&coord(point.y));
        out.push_str(",0\n");
    }
    out.push_str(FOOTER);
    out
}
