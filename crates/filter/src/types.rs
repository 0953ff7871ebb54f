use crate::error::FilterError;
use crate::section::{SectionType, TextSection};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;
use std::str::FromStr;

const PREVIEW_CHARS: usize = 100;

/// How the caller wants the text filtered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterMode {
    /// Deterministic keyword and pattern scoring only
    RuleBased,
    /// AI extraction first, rule-based fallback
    Ai,
    /// Rule-based first, AI refinement when the rule-based result is strong
    #[default]
    Hybrid,
}

impl FilterMode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::RuleBased => "rule_based",
            Self::Ai => "ai",
            Self::Hybrid => "hybrid",
        }
    }
}

impl fmt::Display for FilterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterMode {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "rule_based" | "rules" => Ok(Self::RuleBased),
            "ai" => Ok(Self::Ai),
            "hybrid" => Ok(Self::Hybrid),
            other => Err(FilterError::UnknownMode(other.to_string())),
        }
    }
}

/// Strategy that produced the filtered text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterMethod {
    RuleBased,
    Ai,
    Hybrid,
    /// Hybrid run whose AI refinement failed
    HybridRuleOnly,
    /// Unfiltered input, nothing boundary-like was found
    Passthrough,
}

/// Why a section (or AI answer) made it into the output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FoundKind {
    Boundary,
    PotentialBoundary,
    /// Included only because it contains survey calls
    Fallback,
    AiExtraction,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SectionFound {
    #[serde(rename = "type")]
    pub kind: FoundKind,
    pub confidence: f64,
    pub call_count: usize,
    pub preview: String,
}

impl SectionFound {
    pub(crate) fn from_section(section: &TextSection, kind: FoundKind) -> Self {
        Self {
            kind,
            confidence: section.confidence,
            call_count: section.call_count,
            preview: preview(&section.text),
        }
    }

    pub(crate) fn for_section(section: &TextSection) -> Self {
        let kind = match section.section_type {
            SectionType::Boundary => FoundKind::Boundary,
            SectionType::PotentialBoundary => FoundKind::PotentialBoundary,
            _ => FoundKind::Fallback,
        };
        Self::from_section(section, kind)
    }
}

/// First 100 characters, with an ellipsis when cut
pub(crate) fn preview(text: &str) -> String {
    if text.chars().count() > PREVIEW_CHARS {
        let head: String = text.chars().take(PREVIEW_CHARS).collect();
        format!("{head}...")
    } else {
        text.to_string()
    }
}

/// Output of a single strategy, before post-processing
#[derive(Debug, Clone, PartialEq)]
pub struct FilterOutput {
    pub text: String,
    pub confidence: f64,
    pub sections_found: Vec<SectionFound>,
    pub method: FilterMethod,
    /// Spans of analyzed sections whose text is carried into `text`
    pub used_spans: Vec<Range<usize>>,
}

/// Final filter report
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FilterResult {
    pub filtered_text: String,
    pub confidence: f64,
    pub sections_found: Vec<SectionFound>,
    /// Input length in characters
    pub original_length: usize,
    /// Output length in characters
    pub filtered_length: usize,
    pub reduction_percentage: f64,
    pub method_used: FilterMethod,
    pub sections_analyzed: usize,
    pub boundary_sections_found: usize,
    #[serde(default)]
    pub notes: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_parsing() {
        assert_eq!("rule-based".parse::<FilterMode>().unwrap(), FilterMode::RuleBased);
        assert_eq!("HYBRID".parse::<FilterMode>().unwrap(), FilterMode::Hybrid);
        assert_eq!(FilterMode::Ai.to_string(), "ai");
        assert!(matches!(
            "mistral".parse::<FilterMode>(),
            Err(FilterError::UnknownMode(_))
        ));
        assert_eq!(FilterMode::default(), FilterMode::Hybrid);
    }

    #[test]
    fn test_preview_truncates_on_chars() {
        let long = "°".repeat(150);
        let cut = preview(&long);
        assert_eq!(cut.chars().count(), 103);
        assert!(cut.ends_with("..."));
        assert_eq!(preview("short"), "short");
    }

    #[test]
    fn test_method_serializes_snake_case() {
        let json = serde_json::to_string(&FilterMethod::HybridRuleOnly).unwrap();
        assert_eq!(json, "\"hybrid_rule_only\"");
    }
}
