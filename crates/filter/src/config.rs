use serde::{Deserialize, Serialize};

/// Tunable constants of the relevance filter.
///
/// The keyword weights and thresholds are empirical; they are configuration
/// so they can be re-fit against a labeled corpus.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FilterConfig {
    /// Weight of a strong indicator hit
    pub strong_weight: f64,

    /// Weight of a medium indicator hit
    pub medium_weight: f64,

    /// Weight of a weak indicator hit
    pub weak_weight: f64,

    /// Bonus per distinct surveying pattern matched
    pub pattern_bonus: f64,

    /// Multiplier applied after dividing by the paragraph word count
    pub score_scale: f64,

    /// Score above which a paragraph is boundary text
    pub boundary_threshold: f64,

    /// Score from which a paragraph is potential boundary text
    pub potential_threshold: f64,

    /// Minimum section confidence for rule-based inclusion
    pub relevance_threshold: f64,

    /// Rule-based confidence a hybrid run needs before asking the AI to refine
    pub refine_min_confidence: f64,

    /// Rule-based output length (chars) a hybrid run needs before refining
    pub refine_min_length: usize,

    /// Confidence assigned to accepted AI output
    pub ai_confidence: f64,

    /// Cap on the averaged hybrid confidence
    pub combined_confidence_cap: f64,

    /// Characters of input embedded in the AI prompt
    pub ai_max_chars: usize,

    /// Seconds to wait for the AI collaborator
    pub ai_timeout_secs: u64,

    /// AI output shorter than this (chars) is rejected
    pub min_ai_output_chars: usize,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            strong_weight: 3.0,
            medium_weight: 2.0,
            weak_weight: 1.0,
            pattern_bonus: 3.0,
            score_scale: 10.0,
            boundary_threshold: 0.7,
            potential_threshold: 0.3,
            relevance_threshold: 0.3,
            refine_min_confidence: 0.6,
            refine_min_length: 100,
            ai_confidence: 0.95,
            combined_confidence_cap: 0.98,
            ai_max_chars: 4000,
            ai_timeout_secs: 180,
            min_ai_output_chars: 50,
        }
    }
}

impl FilterConfig {
    /// Keep more paragraphs: lower thresholds for noisy OCR text
    pub fn lenient() -> Self {
        Self {
            boundary_threshold: 0.5,
            potential_threshold: 0.2,
            relevance_threshold: 0.2,
            ..Default::default()
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        for (name, weight) in [
            ("strong_weight", self.strong_weight),
            ("medium_weight", self.medium_weight),
            ("weak_weight", self.weak_weight),
            ("pattern_bonus", self.pattern_bonus),
            ("score_scale", self.score_scale),
        ] {
            if !weight.is_finite() || weight < 0.0 {
                return Err(format!("{name} ({weight}) must be a non-negative number"));
            }
        }

        for (name, value) in [
            ("boundary_threshold", self.boundary_threshold),
            ("potential_threshold", self.potential_threshold),
            ("relevance_threshold", self.relevance_threshold),
            ("refine_min_confidence", self.refine_min_confidence),
            ("ai_confidence", self.ai_confidence),
            ("combined_confidence_cap", self.combined_confidence_cap),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(format!("{name} ({value}) must be within [0, 1]"));
            }
        }

        if self.potential_threshold > self.boundary_threshold {
            return Err(format!(
                "potential_threshold ({}) cannot exceed boundary_threshold ({})",
                self.potential_threshold, self.boundary_threshold
            ));
        }

        if self.ai_max_chars == 0 {
            return Err("ai_max_chars must be > 0".to_string());
        }

        if self.ai_timeout_secs == 0 {
            return Err("ai_timeout_secs must be > 0".to_string());
        }

        Ok(())
    }
}
