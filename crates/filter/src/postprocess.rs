use crate::indicators::Completeness;
use crate::section::{SectionType, TextSection};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;
use std::ops::Range;

/// `.` or `;` ending a sentence; a decimal point is never followed by whitespace
static SENTENCE_END: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.;](?:\s+|$)").expect("sentence end regex"));

static DEGREE_SPACING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d)\s*°\s*").expect("degree spacing regex"));

static MINUTE_SPACING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d)\s*'\s*").expect("minute spacing regex"));

static SECOND_SPACING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"(\d)\s*"\s*"#).expect("second spacing regex"));

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("whitespace regex"));

static THENCE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\bthence\b").expect("thence regex"));

static BEGINNING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\bbeginning\b").expect("beginning regex"));

/// Drop repeated sentences (case-insensitive), keeping first occurrences in order
#[must_use]
pub fn dedupe_sentences(text: &str) -> String {
    let mut seen = HashSet::new();

    SENTENCE_END
        .split(text)
        .map(str::trim)
        .filter(|sentence| !sentence.is_empty())
        .filter(|sentence| seen.insert(sentence.to_lowercase()))
        .collect::<Vec<_>>()
        .join(". ")
}

/// Normalize spacing after angle marks and collapse whitespace; capitalize THENCE and BEGINNING
#[must_use]
pub fn clean_formatting(text: &str) -> String {
    let text = DEGREE_SPACING.replace_all(text, "${1}° ");
    let text = MINUTE_SPACING.replace_all(&text, "${1}' ");
    let text = SECOND_SPACING.replace_all(&text, "${1}\" ");
    let text = WHITESPACE.replace_all(&text, " ");
    let text = THENCE.replace_all(&text, "THENCE");
    let text = BEGINNING.replace_all(&text, "BEGINNING");
    text.trim().to_string()
}

/// Append the best unused boundary section when an essential element is missing.
///
/// A section counts as used when its span is in `used_spans`, or when its words
/// already appear in `text` (collaborator output carries no spans). Returns
/// whether a section was appended.
pub fn ensure_completeness(
    text: &mut String,
    sections: &[TextSection],
    used_spans: &[Range<usize>],
) -> bool {
    if Completeness::of(text).is_complete() {
        return false;
    }

    let carried = word_key(text);
    let candidate = sections
        .iter()
        .filter(|s| s.section_type == SectionType::Boundary)
        .filter(|s| !used_spans.contains(&s.span))
        .filter(|s| !carried.contains(&word_key(&s.text)))
        .max_by(|a, b| a.confidence.total_cmp(&b.confidence));

    let Some(section) = candidate else {
        return false;
    };

    if !text.is_empty() {
        text.push_str("\n\n");
    }
    text.push_str(&section.text);
    true
}

/// Lowercased alphanumeric words, space-delimited on both ends; unaffected by punctuation and spacing cleanup
fn word_key(text: &str) -> String {
    let words = text
        .split(|c: char| !c.is_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(str::to_lowercase)
        .collect::<Vec<_>>();
    format!(" {} ", words.join(" "))
}
