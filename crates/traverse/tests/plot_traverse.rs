use deed_parser::{Call, CallKind, CallParser};
use deed_traverse::{
    analyze_closure, export_by_key, plot, signed_area, validate_plot, ClosureStatus, ExportFormat,
    Point, SQ_FT_PER_ACRE,
};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

const SQUARE_DEED: &str = "Beginning at an iron pin, thence North 0° East 100.00 feet, \
    thence South 90° East 100.00 feet, thence South 0° West 100.00 feet, \
    thence North 90° West 100.00 feet to the point of beginning, containing 0.229 acres";

const OPEN_DEED: &str = "Beginning at a stake; thence North 0° East 300.00 feet; \
    thence South 90° East 200.00 feet; thence South 0° West 300.00 feet; \
    thence North 90° West 190.00 feet";

#[test]
fn square_deed_closes() {
    let calls = CallParser::default().parse(SQUARE_DEED);
    let result = plot(&calls);

    let coords: Vec<(&str, f64, f64)> = result
        .coordinates
        .iter()
        .map(|p| (p.label.as_str(), p.x, p.y))
        .collect();
    assert_eq!(
        coords,
        vec![
            ("POB", 0.0, 0.0),
            ("P1", 100.0, 0.0),
            ("P2", 100.0, 100.0),
            ("P3", 0.0, 100.0),
            ("P4", 0.0, 0.0),
        ]
    );
    assert_eq!(result.coordinates[0].monument.as_deref(), Some("iron pin"));
    assert!(result.skipped.is_empty());

    let closure = result.closure.result().expect("closure analyzed");
    assert!(closure.closure_distance_feet < 0.1);
    assert!(closure.is_closed);
    assert_eq!(closure.precision_ratio, "Perfect");
    assert_eq!(closure.perimeter_feet, 400.0);
    assert_eq!(closure.area_sq_ft, 10_000.0);
    assert!((closure.area_acres - 10_000.0 / SQ_FT_PER_ACRE).abs() < 1e-9);
    assert!((closure.area_acres - 0.2296).abs() < 1e-4);

    let validation = validate_plot(&result);
    assert!(validation.is_valid);
    assert!(validation.warnings.is_empty());
}

#[test]
fn square_deed_exports() {
    let result = plot(&CallParser::default().parse(SQUARE_DEED));

    assert_eq!(
        result.exports.autocad_script,
        "PLINE\n0.0,0.0\n100.0,0.0\n100.0,100.0\n0.0,100.0\n0.0,0.0\nC\n"
    );
    assert_eq!(
        result.exports.esri_traverse,
        "TRAVERSE\nUNITS FEET\nBEGIN\n\
COURSE 90.000000 100.000\n\
COURSE 0.000000 100.000\n\
COURSE 270.000000 100.000\n\
COURSE 180.000000 100.000\n\
END\n"
    );

    let csv: Vec<&str> = result.exports.csv.lines().collect();
    assert_eq!(csv[0], "Point,X,Y,Description,Monument");
    assert_eq!(csv[1], "POB,0.0,0.0,Point of Beginning,iron pin");
    assert!(csv[2].starts_with("P1,100.0,0.0,North 0° East 100.00 feet,"));

    for format in ExportFormat::ALL {
        assert_eq!(
            export_by_key(&result.coordinates, format.key()).unwrap(),
            result.exports.get(format)
        );
    }
}

#[test]
fn open_deed_reports_misclosure() {
    let result = plot(&CallParser::default().parse(OPEN_DEED));
    let closure = result.closure.result().expect("closure analyzed");

    assert!(!closure.is_closed);
    assert!((closure.closure_distance_feet - 10.0).abs() < 1e-9);
    assert_eq!(closure.dx_to_close, 0.0);
    assert_eq!(closure.dy_to_close, -10.0);
    assert_eq!(closure.perimeter_feet, 990.0);
    assert_eq!(closure.precision_ratio, "1:99");
    assert!((closure.closure_error_ppm - 10.0 / 990.0 * 1e6).abs() < 1e-6);

    let validation = validate_plot(&result);
    assert!(validation.is_valid);
    assert_eq!(validation.warnings.len(), 2);
}

#[test]
fn partial_deed_is_insufficient_not_an_error() {
    let result = plot(&CallParser::default().parse("thence North 10° East 50 feet"));

    assert_eq!(result.coordinates.len(), 2);
    assert!(matches!(
        result.closure,
        ClosureStatus::Insufficient { points: 2, .. }
    ));
    assert!(!validate_plot(&result).is_valid);

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["closure"]["status"], "insufficient");
    assert_eq!(json["coordinates"][1]["distanceFeet"], 50.0);
}

fn quadrant_call(ns: &str, degrees: u32, minutes: u32, ew: &str, feet: f64) -> Call {
    let bearing = format!("{ns}{degrees}°{minutes:02}'{ew}");
    Call::new(
        format!("{bearing} {feet} feet"),
        0.9,
        CallKind::BearingDistance {
            bearing,
            distance_feet: feet,
            end_monument: None,
            passing_monuments: Vec::new(),
        },
    )
}

fn arb_call() -> impl Strategy<Value = Call> {
    (
        prop::sample::select(vec!["N", "S"]),
        0u32..90,
        0u32..60,
        prop::sample::select(vec!["E", "W"]),
        0.5f64..2000.0,
    )
        .prop_map(|(ns, d, m, ew, feet)| quadrant_call(ns, d, m, ew, feet))
}

/// Convex polygon: vertices on a circle at increasing angles
fn arb_convex_polygon() -> impl Strategy<Value = Vec<Point>> {
    (prop::collection::vec(0.0f64..1.0, 3..12), 1.0f64..1000.0).prop_map(|(mut fractions, r)| {
        fractions.sort_by(f64::total_cmp);
        fractions.dedup_by(|a, b| (*a - *b).abs() < 1e-3);
        fractions
            .iter()
            .enumerate()
            .map(|(i, f)| {
                let theta = f * std::f64::consts::TAU;
                Point::at(i, r * theta.cos(), r * theta.sin())
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn proptest_area_invariant_under_reversal_and_rotation(
        points in arb_convex_polygon(),
        shift in 0usize..12,
    ) {
        let area = signed_area(&points);
        let scale: f64 = points.iter().map(|p| p.x * p.x + p.y * p.y).sum();
        let tolerance = 1e-9 * (1.0 + scale);

        let mut reversed = points.clone();
        reversed.reverse();
        prop_assert!((signed_area(&reversed) + area).abs() <= tolerance);

        let mut rotated = points.clone();
        if !rotated.is_empty() {
            let len = rotated.len();
            rotated.rotate_left(shift % len);
        }
        prop_assert!((signed_area(&rotated) - area).abs() <= tolerance);
    }

    #[test]
    fn proptest_csv_and_dxf_track_point_count(calls in prop::collection::vec(arb_call(), 0..20)) {
        let result = plot(&calls);
        let n = result.coordinates.len();

        prop_assert_eq!(n, calls.len() + 1);
        prop_assert_eq!(result.exports.csv.lines().count(), n + 1);
        prop_assert_eq!(result.exports.dxf.matches("\nVERTEX\n").count(), n);
        prop_assert_eq!(result.exports.autocad_script.lines().count(), n + 2);
    }

    #[test]
    fn proptest_closure_ppm_matches_distance(calls in prop::collection::vec(arb_call(), 3..10)) {
        let result = plot(&calls);
        let closure = analyze_closure(&result.coordinates).unwrap();

        prop_assert!(closure.closure_distance_feet >= 0.0);
        prop_assert!(closure.area_sq_ft >= 0.0);
        let expected = closure.closure_distance_feet / closure.perimeter_feet * 1e6;
        prop_assert!((closure.closure_error_ppm - expected).abs() <= 1e-6 * expected.max(1.0));
    }
}
