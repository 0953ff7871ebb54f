use crate::config::FilterConfig;
use crate::indicators::{
    boundary_hits, count_calls, distinct_survey_patterns, exclusion_hits, has_trigger_phrase,
    is_legal, is_recording, is_restriction,
};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::ops::Range;
use unicode_segmentation::UnicodeSegmentation;

static PARAGRAPH_BREAK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n\s*\n").expect("paragraph break regex"));

/// What a paragraph of deed text is about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionType {
    Boundary,
    PotentialBoundary,
    Legal,
    Recording,
    Restrictions,
    General,
}

impl SectionType {
    #[must_use]
    pub const fn is_boundary_like(self) -> bool {
        matches!(self, Self::Boundary | Self::PotentialBoundary)
    }
}

/// One classified paragraph
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TextSection {
    pub text: String,
    pub section_type: SectionType,
    pub confidence: f64,
    /// Raw relevance score before any trigger-phrase promotion
    pub score: f64,
    /// Byte range of `text` in the analyzed input
    pub span: Range<usize>,
    pub contains_calls: bool,
    pub call_count: usize,
}

/// Relevance score of one paragraph in `[0, 1]`
#[must_use]
pub fn relevance_score(text: &str, config: &FilterConfig) -> f64 {
    let words = text.unicode_words().count();
    if words == 0 {
        return 0.0;
    }

    let raw = boundary_hits(text, config)
        + config.pattern_bonus * distinct_survey_patterns(text) as f64
        - exclusion_hits(text, config);

    (raw / words as f64 * config.score_scale).clamp(0.0, 1.0)
}

fn classify(text: &str, score: f64, config: &FilterConfig) -> SectionType {
    if has_trigger_phrase(text) || score > config.boundary_threshold {
        SectionType::Boundary
    } else if score >= config.potential_threshold {
        SectionType::PotentialBoundary
    } else if is_recording(text) {
        SectionType::Recording
    } else if is_legal(text) {
        SectionType::Legal
    } else if is_restriction(text) {
        SectionType::Restrictions
    } else {
        SectionType::General
    }
}

/// Split `text` on blank lines and classify every non-empty paragraph
#[must_use]
pub fn analyze_sections(text: &str, config: &FilterConfig) -> Vec<TextSection> {
    let mut bounds = Vec::new();
    let mut start = 0;
    for separator in PARAGRAPH_BREAK.find_iter(text) {
        bounds.push(start..separator.start());
        start = separator.end();
    }
    bounds.push(start..text.len());

    let sections: Vec<TextSection> = bounds
        .into_iter()
        .filter_map(|range| {
            let raw = &text[range.clone()];
            let paragraph = raw.trim();
            if paragraph.is_empty() {
                return None;
            }

            let offset = range.start + (raw.len() - raw.trim_start().len());
            let score = relevance_score(paragraph, config);
            let section_type = classify(paragraph, score, config);
            let confidence = if section_type == SectionType::Boundary {
                // trigger phrases promote regardless of score
                score.max(config.boundary_threshold)
            } else {
                score
            };
            let call_count = count_calls(paragraph);

            Some(TextSection {
                text: paragraph.to_string(),
                section_type,
                confidence,
                score,
                span: offset..offset + paragraph.len(),
                contains_calls: call_count > 0,
                call_count,
            })
        })
        .collect();

    log::debug!(
        "analyzed {} sections ({} boundary)",
        sections.len(),
        sections
            .iter()
            .filter(|s| s.section_type == SectionType::Boundary)
            .count()
    );
    sections
}
