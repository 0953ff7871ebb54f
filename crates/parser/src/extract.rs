//! Field extractors shared by the call classifiers.
//!
//! Every extractor scans a single clause and returns the first match of an
//! ordered pattern list; nothing here fails, a miss is just `None`.

use crate::units::{Distance, LengthUnit};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Number with optional thousands separators and decimals (`1,234.56`)
const NUM: &str = r"(\d+(?:,\d{3})*(?:\.\d+)?)";

/// Bearing forms, most specific first
static BEARING_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        // North 45 degrees 30 minutes 15 seconds East
        r"(?i)\b(north|south|n|s)\s+(\d+)\s+degrees?\s+(\d+)\s+minutes?\s+(\d+(?:\.\d+)?)\s+seconds?\s+(east|west|e|w)\b",
        // North 45 degrees 30 minutes East, North 45 degrees East
        r"(?i)\b(north|south|n|s)\s+(\d+)\s+degrees?\s+(?:(\d+)\s+minutes?\s+)?(east|west|e|w)\b",
        // South 28° 50' 45" West, North 0° East
        r#"(?i)\b(north|south|n|s)\s+(\d+(?:\.\d+)?)\s*°\s*(?:(\d+)\s*'\s*)?(?:(\d+(?:\.\d+)?)\s*"\s*)?(east|west|e|w)\b"#,
        // N45°30'15"E
        r#"(?i)\b(north|south|n|s)\s*(\d+)\s*°\s*(\d+)\s*'\s*(\d+(?:\.\d+)?)\s*"\s*(east|west|e|w)\b"#,
        // N45°30'E
        r"(?i)\b(north|south|n|s)\s*(\d+)\s*°\s*(\d+)\s*'\s*(east|west|e|w)\b",
        // N45.5°E
        r"(?i)\b(north|south|n|s)\s*(\d+(?:\.\d+)?)\s*°\s*(east|west|e|w)\b",
        // N45:30:15E
        r"(?i)\b(north|south|n|s)\s*(\d+):(\d+):(\d+(?:\.\d+)?)\s*(east|west|e|w)\b",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("bearing pattern"))
    .collect()
});

static COMBINED_DISTANCE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        format!(r"(?i){NUM}\s*(chains?|ch)\s+(?:and\s+)?{NUM}\s*(links?|lk)\b"),
        format!(r"(?i){NUM}\s*(poles?|rods?|p)\s+(?:and\s+)?{NUM}\s*(links?|lk)\b"),
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("combined distance pattern"))
    .collect()
});

static SINGLE_DISTANCE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    let units = [
        r"feet|foot|ft",
        r"yards?|yd",
        r"chains?|ch",
        r"poles?|rods?|p",
        r"links?|lk",
        r"meters?|metres?|m",
        r"varas?",
    ];

    let mut patterns = vec![format!(
        r"(?i)\ba\s+distance\s+of\s+{NUM}\s*({})\b",
        units.join("|")
    )];
    patterns.extend(units.iter().map(|unit| format!(r"(?i){NUM}\s*({unit})\b")));

    patterns
        .iter()
        .map(|pattern| Regex::new(pattern).expect("distance pattern"))
        .collect()
});

static MONUMENT_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)\b(?:iron\s+pin|iron\s+rod|iron\s+pipe|concrete\s+monument|stone|post|stake|pk\s+nail|nail)\b",
        r#"(?i)(?:\b\d+/\d+"?\s*)?\brebar\b"#,
        r"(?i)\b(?:monument|marker|corner|point)\b",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("monument pattern"))
    .collect()
});

static PASSING_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:passing|by|along)\s+([^,;]+?)(?:,|\s+to\b|\s+thence\b)")
        .expect("passing monument pattern")
});

static TO_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\bto\b").expect("to pattern"));

static RADIUS_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"(?i)\bradius\s*(?:=|:|\bof\b)?\s*{NUM}")).expect("radius pattern")
});

static DELTA_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\bdelta\s*(?:=|:|\bof\b)?\s*([^,;]+)").expect("delta pattern")
});

static ARC_LENGTH_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"(?i)\barc\s+length\s*(?:=|:|\bof\b)?\s*{NUM}"))
        .expect("arc length pattern")
});

static CHORD_KEYWORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\bchord\b").expect("chord keyword pattern"));

fn parse_number(text: &str) -> Option<f64> {
    text.replace(',', "").parse::<f64>().ok()
}

fn distance_from(caps: &Captures<'_>, value: usize, unit: usize) -> Option<Distance> {
    let value = parse_number(caps.get(value)?.as_str())?;
    let unit = LengthUnit::from_token(caps.get(unit)?.as_str())?;
    Some(Distance::new(value, unit))
}

/// First bearing in `text`, returned verbatim as written
#[must_use]
pub fn extract_bearing(text: &str) -> Option<String> {
    BEARING_PATTERNS.iter().find_map(|pattern| {
        let bearing = pattern.find(text)?.as_str().trim();
        bearing
            .chars()
            .next()
            .filter(|c| matches!(c.to_ascii_uppercase(), 'N' | 'S'))
            .map(|_| bearing.to_string())
    })
}

/// First distance in `text`, normalized to feet.
///
/// Combined forms such as `5 chains 25 links` are summed before single-unit forms are tried.
#[must_use]
pub fn parse_distance(text: &str) -> Option<f64> {
    for pattern in COMBINED_DISTANCE_PATTERNS.iter() {
        if let Some(caps) = pattern.captures(text) {
            let major = distance_from(&caps, 1, 2);
            let minor = distance_from(&caps, 3, 4);
            if let (Some(major), Some(minor)) = (major, minor) {
                return Some(major.to_feet() + minor.to_feet());
            }
        }
    }

    SINGLE_DISTANCE_PATTERNS.iter().find_map(|pattern| {
        let caps = pattern.captures(text)?;
        distance_from(&caps, 1, 2).map(Distance::to_feet)
    })
}

/// First monument noun phrase in `text`
#[must_use]
pub fn extract_monument(text: &str) -> Option<String> {
    MONUMENT_PATTERNS
        .iter()
        .find_map(|pattern| pattern.find(text))
        .map(|m| m.as_str().trim().to_string())
}

/// Monument the line ends at.
///
/// Passing monuments are blanked first; the search then starts after the last `to`.
pub(crate) fn extract_end_monument(text: &str) -> Option<String> {
    let mut stripped = text.to_string();
    let passing: Vec<_> = PASSING_PATTERN
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.range())
        .collect();
    for range in passing.into_iter().rev() {
        stripped.replace_range(range, " ");
    }

    let tail = TO_WORD
        .find_iter(&stripped)
        .last()
        .map_or(stripped.as_str(), |m| &stripped[m.end()..]);

    extract_monument(tail).or_else(|| extract_monument(&stripped))
}

/// Monuments the line passes (`passing`, `by`, `along`), in text order
#[must_use]
pub fn extract_passing_monuments(text: &str) -> Vec<String> {
    PASSING_PATTERN
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|m| !m.is_empty())
        .collect()
}

pub(crate) fn extract_radius(text: &str) -> Option<f64> {
    RADIUS_PATTERN
        .captures(text)
        .and_then(|caps| parse_number(caps.get(1)?.as_str()))
}

pub(crate) fn extract_delta(text: &str) -> Option<String> {
    DELTA_PATTERN
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_string())
        .filter(|delta| !delta.is_empty())
}

pub(crate) fn extract_arc_length(text: &str) -> Option<f64> {
    ARC_LENGTH_PATTERN
        .captures(text)
        .and_then(|caps| parse_number(caps.get(1)?.as_str()))
}

/// Text the chord bearing and distance are read from.
///
/// After the `chord` keyword when present; otherwise the whole clause with
/// radius and arc-length figures blanked so they are not read as a chord.
/// A curve giving only `radius of 200 feet` therefore scores 0.8, not 0.9.
pub(crate) fn chord_segment(text: &str) -> String {
    if let Some(m) = CHORD_KEYWORD.find(text) {
        return text[m.end()..].to_string();
    }

    let without_radius = RADIUS_PATTERN.replace_all(text, " ");
    ARC_LENGTH_PATTERN
        .replace_all(&without_radius, " ")
        .into_owned()
}
