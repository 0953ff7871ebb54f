use crate::ai::{extract_with, BoundaryExtractor};
use crate::config::FilterConfig;
use crate::error::{FilterError, Result};
use crate::indicators::count_calls;
use crate::postprocess::{clean_formatting, dedupe_sentences, ensure_completeness};
use crate::rule_based::rule_based_filter;
use crate::section::{analyze_sections, SectionType, TextSection};
use crate::types::{
    preview, FilterMethod, FilterMode, FilterOutput, FilterResult, FoundKind, SectionFound,
};
use std::sync::Arc;

const PASSTHROUGH_CONFIDENCE: f64 = 0.1;

/// One step of the fallback chain; every step has the same fallible signature
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Hand the rule-based output to the AI collaborator for refinement
    AiRefine,
    /// Hand the raw text to the AI collaborator
    Ai,
    RuleBased,
    /// Unfiltered input at minimal confidence; never fails
    Passthrough,
}

impl Strategy {
    /// Ordered chain for `mode`; `refine` is whether the rule-based result earned AI refinement
    #[must_use]
    pub fn chain(mode: FilterMode, refine: bool) -> &'static [Self] {
        match mode {
            FilterMode::RuleBased => &[Self::RuleBased, Self::Passthrough],
            FilterMode::Ai => &[Self::Ai, Self::RuleBased, Self::Passthrough],
            FilterMode::Hybrid if refine => &[Self::AiRefine, Self::RuleBased, Self::Passthrough],
            FilterMode::Hybrid => &[Self::Ai, Self::RuleBased, Self::Passthrough],
        }
    }

    fn failure_note(self, err: &FilterError) -> String {
        match self {
            Self::AiRefine => format!("AI enhancement failed: {err}"),
            Self::Ai => format!("AI extraction failed: {err}"),
            Self::RuleBased | Self::Passthrough => format!("rule-based filtering skipped: {err}"),
        }
    }
}

/// Relevance filter with an optional injected AI collaborator
#[derive(Clone, Default)]
pub struct DeedFilter {
    config: FilterConfig,
    extractor: Option<Arc<dyn BoundaryExtractor>>,
}

impl std::fmt::Debug for DeedFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeedFilter")
            .field("config", &self.config)
            .field("extractor", &self.extractor.is_some())
            .finish()
    }
}

/// Shared state of one filter run
struct Run<'a> {
    text: &'a str,
    sections: Vec<TextSection>,
    rule: FilterOutput,
}

impl Run<'_> {
    /// The whole input, unfiltered; every section is carried along
    fn passthrough(&self) -> FilterOutput {
        FilterOutput {
            text: self.text.trim().to_string(),
            confidence: PASSTHROUGH_CONFIDENCE,
            sections_found: Vec::new(),
            method: FilterMethod::Passthrough,
            used_spans: self.sections.iter().map(|s| s.span.clone()).collect(),
        }
    }
}

impl DeedFilter {
    pub fn new(config: FilterConfig) -> Result<Self> {
        config.validate().map_err(FilterError::invalid_config)?;
        Ok(Self {
            config,
            extractor: None,
        })
    }

    #[must_use]
    pub fn with_extractor(mut self, extractor: Arc<dyn BoundaryExtractor>) -> Self {
        self.extractor = Some(extractor);
        self
    }

    #[must_use]
    pub const fn config(&self) -> &FilterConfig {
        &self.config
    }

    /// Whether an AI collaborator is injected and reports itself available
    #[must_use]
    pub fn ai_available(&self) -> bool {
        self.extractor.as_ref().is_some_and(|e| e.is_available())
    }

    /// Classify every paragraph of `text`
    #[must_use]
    pub fn analyze(&self, text: &str) -> Vec<TextSection> {
        analyze_sections(text, &self.config)
    }

    /// Deterministic filtering; never touches the AI collaborator
    #[must_use]
    pub fn filter_rule_based(&self, text: &str) -> FilterResult {
        let run = self.prepare(text);
        let mut notes = Vec::new();
        let mut output = None;

        for &strategy in Strategy::chain(FilterMode::RuleBased, false) {
            match self.run_local(strategy, &run) {
                Ok(out) => {
                    output = Some(out);
                    break;
                }
                Err(err) => notes.push(self.note_failure(strategy, &err)),
            }
        }

        self.finish(&run, output, notes)
    }

    /// Filter `text` in `mode`, walking the strategy chain until one succeeds
    pub async fn filter(&self, text: &str, mode: FilterMode) -> FilterResult {
        let run = self.prepare(text);
        let refine = mode == FilterMode::Hybrid
            && run.rule.confidence > self.config.refine_min_confidence
            && run.rule.text.chars().count() > self.config.refine_min_length;

        let mut notes = Vec::new();
        let mut output = None;

        for &strategy in Strategy::chain(mode, refine) {
            match self.run_strategy(strategy, &run).await {
                Ok(out) => {
                    output = Some(out);
                    break;
                }
                Err(err) => notes.push(self.note_failure(strategy, &err)),
            }
        }

        if refine {
            if let Some(out) = output.as_mut() {
                if out.method == FilterMethod::RuleBased {
                    out.method = FilterMethod::HybridRuleOnly;
                }
            }
        }

        self.finish(&run, output, notes)
    }

    fn prepare<'a>(&self, text: &'a str) -> Run<'a> {
        let sections = self.analyze(text);
        let rule = rule_based_filter(&sections, &self.config);
        Run {
            text,
            sections,
            rule,
        }
    }

    fn note_failure(&self, strategy: Strategy, err: &FilterError) -> String {
        log::warn!("filter strategy {strategy:?} failed, falling back: {err}");
        strategy.failure_note(err)
    }

    async fn run_strategy(&self, strategy: Strategy, run: &Run<'_>) -> Result<FilterOutput> {
        match strategy {
            Strategy::AiRefine => {
                let text = self.extract(&run.rule.text).await?;
                let confidence = ((run.rule.confidence + self.config.ai_confidence) / 2.0)
                    .min(self.config.combined_confidence_cap);

                let mut sections_found = run.rule.sections_found.clone();
                sections_found.push(self.ai_section(&text));

                Ok(FilterOutput {
                    text,
                    confidence,
                    sections_found,
                    method: FilterMethod::Hybrid,
                    used_spans: run.rule.used_spans.clone(),
                })
            }
            Strategy::Ai => {
                let text = self.extract(run.text).await?;
                Ok(FilterOutput {
                    sections_found: vec![self.ai_section(&text)],
                    text,
                    confidence: self.config.ai_confidence,
                    method: FilterMethod::Ai,
                    used_spans: Vec::new(),
                })
            }
            Strategy::RuleBased | Strategy::Passthrough => self.run_local(strategy, run),
        }
    }

    /// Strategies that need no collaborator
    fn run_local(&self, strategy: Strategy, run: &Run<'_>) -> Result<FilterOutput> {
        match strategy {
            Strategy::RuleBased if run.rule.text.is_empty() => Err(FilterError::NoBoundaryContent),
            Strategy::RuleBased => Ok(run.rule.clone()),
            Strategy::Passthrough => Ok(run.passthrough()),
            Strategy::AiRefine | Strategy::Ai => Err(FilterError::Unavailable),
        }
    }

    async fn extract(&self, text: &str) -> Result<String> {
        let extractor = self.extractor.as_deref().ok_or(FilterError::Unavailable)?;
        extract_with(extractor, text, &self.config).await
    }

    fn ai_section(&self, text: &str) -> SectionFound {
        SectionFound {
            kind: FoundKind::AiExtraction,
            confidence: self.config.ai_confidence,
            call_count: count_calls(text),
            preview: preview(text),
        }
    }

    /// Post-process the chosen output and attach length statistics
    fn finish(
        &self,
        run: &Run<'_>,
        output: Option<FilterOutput>,
        mut notes: Vec<String>,
    ) -> FilterResult {
        let output = output.unwrap_or_else(|| run.passthrough());

        let mut filtered_text = clean_formatting(&dedupe_sentences(&output.text));
        if ensure_completeness(&mut filtered_text, &run.sections, &output.used_spans) {
            notes.push("appended boundary section to complete the description".to_string());
        }

        let original_length = run.text.chars().count();
        let filtered_length = filtered_text.chars().count();
        let reduction_percentage = if original_length > 0 {
            (original_length as f64 - filtered_length as f64) / original_length as f64 * 100.0
        } else {
            0.0
        };

        log::info!(
            "filtered {original_length} -> {filtered_length} chars via {:?} (confidence {:.2})",
            output.method,
            output.confidence
        );

        FilterResult {
            filtered_text,
            confidence: output.confidence,
            sections_found: output.sections_found,
            original_length,
            filtered_length,
            reduction_percentage,
            method_used: output.method,
            sections_analyzed: run.sections.len(),
            boundary_sections_found: run
                .sections
                .iter()
                .filter(|s| s.section_type == SectionType::Boundary)
                .count(),
            notes,
        }
    }
}
