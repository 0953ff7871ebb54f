use crate::config::FilterConfig;
use crate::section::TextSection;
use crate::types::{FilterMethod, FilterOutput, FoundKind, SectionFound};

const MIN_CONFIDENCE: f64 = 0.3;
const MAX_CONFIDENCE: f64 = 0.9;

/// Keep boundary-like paragraphs above the relevance threshold.
///
/// When none qualify, any paragraph with a recognizable survey call is kept
/// instead. An empty result has confidence 0.
#[must_use]
pub fn rule_based_filter(sections: &[TextSection], config: &FilterConfig) -> FilterOutput {
    let mut kept: Vec<&str> = Vec::new();
    let mut sections_found = Vec::new();
    let mut used_spans = Vec::new();

    for section in sections {
        if section.section_type.is_boundary_like() && section.confidence > config.relevance_threshold
        {
            kept.push(&section.text);
            used_spans.push(section.span.clone());
            sections_found.push(SectionFound::for_section(section));
        }
    }

    if kept.is_empty() {
        for section in sections.iter().filter(|s| s.contains_calls) {
            kept.push(&section.text);
            used_spans.push(section.span.clone());
            sections_found.push(SectionFound::from_section(section, FoundKind::Fallback));
        }
    }

    let text = kept.join("\n\n");
    let confidence = if text.is_empty() {
        0.0
    } else {
        let boundary_confidence: f64 = sections
            .iter()
            .filter(|s| s.section_type.is_boundary_like())
            .map(|s| s.confidence)
            .sum();
        (boundary_confidence / sections.len().max(1) as f64).clamp(MIN_CONFIDENCE, MAX_CONFIDENCE)
    };

    log::debug!(
        "rule-based filter kept {} of {} sections (confidence {confidence:.2})",
        kept.len(),
        sections.len()
    );

    FilterOutput {
        text,
        confidence,
        sections_found,
        method: FilterMethod::RuleBased,
        used_spans,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::section::SectionType;

    fn section(text: &str, section_type: SectionType, confidence: f64, calls: usize) -> TextSection {
        TextSection {
            text: text.to_string(),
            section_type,
            confidence,
            score: confidence,
            span: 0..text.len(),
            contains_calls: calls > 0,
            call_count: calls,
        }
    }

    #[test]
    fn test_keeps_boundary_like_sections() {
        let sections = vec![
            section("legal", SectionType::Legal, 0.0, 0),
            section("boundary", SectionType::Boundary, 0.9, 3),
            section("maybe", SectionType::PotentialBoundary, 0.5, 0),
            section("weak maybe", SectionType::PotentialBoundary, 0.3, 0),
        ];

        let output = rule_based_filter(&sections, &FilterConfig::default());
        assert_eq!(output.text, "boundary\n\nmaybe");
        assert_eq!(output.sections_found.len(), 2);
        assert_eq!(output.sections_found[0].kind, FoundKind::Boundary);
        assert_eq!(output.sections_found[1].kind, FoundKind::PotentialBoundary);
        assert_eq!(output.used_spans, vec![0..8, 0..5]);
        // (0.9 + 0.5 + 0.3) / 4
        assert!((output.confidence - 0.425).abs() < 1e-9);
    }

    #[test]
    fn test_falls_back_to_call_bearing_sections() {
        let sections = vec![
            section("general", SectionType::General, 0.1, 0),
            section("calls buried in legal", SectionType::Legal, 0.0, 2),
        ];

        let output = rule_based_filter(&sections, &FilterConfig::default());
        assert_eq!(output.text, "calls buried in legal");
        assert_eq!(output.sections_found[0].kind, FoundKind::Fallback);
        assert_eq!(output.confidence, MIN_CONFIDENCE);
    }

    #[test]
    fn test_nothing_found() {
        let sections = vec![section("general", SectionType::General, 0.1, 0)];
        let output = rule_based_filter(&sections, &FilterConfig::default());
        assert!(output.text.is_empty());
        assert_eq!(output.confidence, 0.0);
        assert!(rule_based_filter(&[], &FilterConfig::default()).text.is_empty());
    }
}
