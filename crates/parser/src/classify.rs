use crate::extract::{
    chord_segment, extract_arc_length, extract_bearing, extract_delta, extract_end_monument,
    extract_monument, extract_passing_monuments, extract_radius, parse_distance,
};
use crate::types::{Call, CallKind, CallType, MonumentAction};
use once_cell::sync::Lazy;
use regex::Regex;

const CURVE_BASE_CONFIDENCE: f64 = 0.6;
const BEARING_DISTANCE_CONFIDENCE: f64 = 0.9;
const MONUMENT_CONFIDENCE: f64 = 0.8;
const ADJOINER_CONFIDENCE: f64 = 0.7;

static CURVE_KEYWORDS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:curve|arc|radius|chord|delta)\b").expect("curve keyword regex")
});

static SET_WORDS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(?:set|setting|placed)\b").expect("set regex"));

static FOUND_WORDS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\b(?:found|existing|located)\b").expect("found regex"));

static ADJOINER_PHRASES: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\bwith\s+lands?\s+of\b|\balong\s+lands?\s+of\b|\bbounded\s+by\b|\badjoining\b|\babutting\b",
    )
    .expect("adjoiner regex")
});

type Classifier = fn(&str) -> Option<Call>;

/// Evaluated in order; the first classifier that returns a call wins
const CLASSIFIERS: [(CallType, Classifier); 4] = [
    (CallType::Curve, classify_curve),
    (CallType::BearingDistance, classify_bearing_distance),
    (CallType::Monument, classify_monument),
    (CallType::Adjoiner, classify_adjoiner),
];

/// Classify one clause into at most one call
#[must_use]
pub fn classify_clause(clause: &str) -> Option<Call> {
    let clause = clause.trim();
    if clause.is_empty() {
        return None;
    }

    CLASSIFIERS.iter().find_map(|(call_type, classify)| {
        let call = classify(clause)?;
        log::trace!("clause classified as {call_type}: {clause:?}");
        Some(call)
    })
}

fn classify_curve(clause: &str) -> Option<Call> {
    if !CURVE_KEYWORDS.is_match(clause) {
        return None;
    }

    let mut confidence = CURVE_BASE_CONFIDENCE;

    let radius = extract_radius(clause);
    if radius.is_some() {
        confidence += 0.2;
    }

    let delta = extract_delta(clause);
    if delta.is_some() {
        confidence += 0.2;
    }

    let chord = chord_segment(clause);
    let chord_bearing = extract_bearing(&chord);
    if chord_bearing.is_some() {
        confidence += 0.1;
    }

    let chord_distance_feet = parse_distance(&chord);
    if chord_distance_feet.is_some() {
        confidence += 0.1;
    }

    // keyword alone is not a curve
    if radius.is_none() && delta.is_none() && chord_bearing.is_none() && chord_distance_feet.is_none()
    {
        return None;
    }

    Some(Call::new(
        clause,
        confidence.min(1.0),
        CallKind::Curve {
            radius,
            delta,
            chord_bearing,
            chord_distance_feet,
            arc_length_feet: extract_arc_length(clause),
        },
    ))
}

fn classify_bearing_distance(clause: &str) -> Option<Call> {
    let bearing = extract_bearing(clause)?;
    let distance_feet = parse_distance(clause)?;

    Some(Call::new(
        clause,
        BEARING_DISTANCE_CONFIDENCE,
        CallKind::BearingDistance {
            bearing,
            distance_feet,
            end_monument: extract_end_monument(clause),
            passing_monuments: extract_passing_monuments(clause),
        },
    ))
}

fn classify_monument(clause: &str) -> Option<Call> {
    let monument_type = extract_monument(clause)?;

    let action = if SET_WORDS.is_match(clause) {
        MonumentAction::Set
    } else if FOUND_WORDS.is_match(clause) {
        MonumentAction::Found
    } else {
        MonumentAction::Unspecified
    };

    Some(Call::new(
        clause,
        MONUMENT_CONFIDENCE,
        CallKind::Monument {
            monument_type,
            action,
        },
    ))
}

fn classify_adjoiner(clause: &str) -> Option<Call> {
    ADJOINER_PHRASES.is_match(clause).then(|| {
        Call::new(
            clause,
            ADJOINER_CONFIDENCE,
            CallKind::Adjoiner {
                description: clause.to_string(),
            },
        )
    })
}
