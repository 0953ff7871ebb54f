use async_trait::async_trait;
use deed_filter::{
    dedupe_sentences, relevance_score, BoundaryExtractor, DeedFilter, FilterConfig, FilterMethod,
    FilterMode, FoundKind, SectionType,
};
use proptest::prelude::*;
use std::sync::{Arc, Mutex};
use std::time::Duration;

const FULL_DEED: &str = "THIS DEED, made this 1st day of June, 2020, by and between JOHN DOE, grantor, and \
JANE ROE, grantee. WITNESSETH, that for and in consideration of the sum of Ten Dollars ($10.00), the grantor \
does hereby grant and convey unto the grantee, her heirs and assigns, the following described real estate:

BEGINNING at an iron pin found at the northeast corner of Lot 5; thence South 12 degrees 30 minutes West \
150.00 feet to an iron pin; thence North 77 degrees 30 minutes West 100.00 feet to a concrete monument; \
thence North 12 degrees 30 minutes East 150.00 feet to a stake; thence South 77 degrees 30 minutes East \
100.00 feet to the point of beginning, containing 0.344 acres, more or less.

Being the same property conveyed to the grantor by deed recorded in Deed Book 1234, Page 567, in the Office \
of the Clerk of the Circuit Court.

Subject to easements, restrictions and covenants of record, and to real estate taxes for the current year.";

const BOUNDARY_ONLY: &str = "BEGINNING at an iron pin found at the northeast corner of Lot 5; thence South \
12 degrees 30 minutes West 150.00 feet to an iron pin; thence North 77 degrees 30 minutes West 100.00 feet \
to a concrete monument; thence North 12 degrees 30 minutes East 150.00 feet to the point of beginning.";

const AI_ANSWER: &str = "BEGINNING at an iron pin; THENCE South 12 degrees 30 minutes West 150.00 feet; \
THENCE North 77 degrees 30 minutes West 100.00 feet to the point of beginning";

const COMMENCING_PARAGRAPH: &str = "COMMENCING at an iron pin; thence N 45° 30' E 100.00 feet to a stake; \
thence S 44° 30' E 50.00 feet to a stake; thence S 45° 30' W 100.00 feet to a stake; \
thence N 44° 30' W 50.00 feet.";

const PARTIAL_AI_ANSWER: &str = "THENCE South 12 degrees 30 minutes West 150.00 feet; \
THENCE North 77 degrees 30 minutes West 100.00 feet";

const FULL_DEED_BOUNDARY: &str = "BEGINNING at an iron pin found at the northeast corner of Lot 5";

const REPAIR_NOTE: &str = "appended boundary section to complete the description";

fn commencing_deed() -> String {
    format!(
        "THIS DEED, made by JOHN DOE, grantor, unto JANE ROE, grantee, her heirs and assigns, for the \
sum of Ten Dollars ($10.00), conveys the following described real estate:\n\n{COMMENCING_PARAGRAPH}"
    )
}

/// Collaborator double answering with a fixed reply and recording prompts
struct Scripted {
    reply: std::result::Result<&'static str, &'static str>,
    prompts: Mutex<Vec<String>>,
}

impl Scripted {
    fn answering(reply: &'static str) -> Arc<Self> {
        Arc::new(Self {
            reply: Ok(reply),
            prompts: Mutex::new(Vec::new()),
        })
    }

    fn failing(message: &'static str) -> Arc<Self> {
        Arc::new(Self {
            reply: Err(message),
            prompts: Mutex::new(Vec::new()),
        })
    }

    fn calls(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }
}

#[async_trait]
impl BoundaryExtractor for Scripted {
    async fn extract_boundary_text(&self, prompt: &str, max_chars: usize) -> anyhow::Result<String> {
        assert_eq!(max_chars, 4000);
        self.prompts.lock().unwrap().push(prompt.to_string());
        match self.reply {
            Ok(text) => Ok(text.to_string()),
            Err(message) => Err(anyhow::anyhow!(message)),
        }
    }
}

struct Hanging;

#[async_trait]
impl BoundaryExtractor for Hanging {
    async fn extract_boundary_text(&self, _prompt: &str, _max_chars: usize) -> anyhow::Result<String> {
        tokio::time::sleep(Duration::from_secs(24 * 3600)).await;
        Ok(AI_ANSWER.to_string())
    }
}

#[test]
fn rule_based_isolates_boundary_paragraph() {
    let filter = DeedFilter::default();
    let sections = filter.analyze(FULL_DEED);
    let types: Vec<SectionType> = sections.iter().map(|s| s.section_type).collect();
    assert_eq!(
        types,
        vec![
            SectionType::Legal,
            SectionType::Boundary,
            SectionType::Recording,
            SectionType::Restrictions,
        ]
    );

    let result = filter.filter_rule_based(FULL_DEED);

    assert_eq!(result.method_used, FilterMethod::RuleBased);
    assert!(result.filtered_text.starts_with("BEGINNING at an iron pin"));
    assert!(result.filtered_text.contains("THENCE South 12 degrees 30 minutes West 150.00 feet"));
    assert!(!result.filtered_text.contains("grantor"));
    assert!(!result.filtered_text.contains("Book"));
    assert_eq!(result.sections_analyzed, 4);
    assert_eq!(result.boundary_sections_found, 1);
    assert_eq!(result.sections_found.len(), 1);
    assert_eq!(result.sections_found[0].kind, FoundKind::Boundary);
    assert_eq!(result.original_length, FULL_DEED.chars().count());
    assert_eq!(result.filtered_length, result.filtered_text.chars().count());
    assert!(result.reduction_percentage > 40.0);
    // one boundary paragraph among four
    assert_eq!(result.confidence, 0.3);
}

#[test]
fn refiltering_boundary_output_is_stable() {
    let filter = DeedFilter::default();
    let first = filter.filter_rule_based(FULL_DEED);
    let second = filter.filter_rule_based(&first.filtered_text);

    assert_eq!(second.filtered_text, first.filtered_text);
    assert_eq!(second.reduction_percentage, 0.0);
}

#[tokio::test]
async fn hybrid_refines_strong_rule_output() {
    let ai = Scripted::answering(AI_ANSWER);
    let filter = DeedFilter::default().with_extractor(ai.clone());

    let rule = filter.filter_rule_based(BOUNDARY_ONLY);
    assert!(rule.confidence > 0.6);

    let result = filter.filter(BOUNDARY_ONLY, FilterMode::Hybrid).await;

    assert_eq!(result.method_used, FilterMethod::Hybrid);
    assert_eq!(ai.calls(), 1);
    assert!((result.confidence - ((rule.confidence + 0.95) / 2.0).min(0.98)).abs() < 1e-12);
    assert!(result.filtered_text.starts_with("BEGINNING at an iron pin. THENCE South 12"));
    assert_eq!(
        result.sections_found.last().map(|s| s.kind),
        Some(FoundKind::AiExtraction)
    );
    assert!(result.notes.is_empty());

    let prompt = ai.prompts.lock().unwrap()[0].clone();
    assert!(prompt.contains("concrete monument"));
}

#[tokio::test]
async fn hybrid_keeps_rule_result_when_ai_fails() {
    let filter = DeedFilter::default().with_extractor(Scripted::failing("quota exceeded"));
    let rule = filter.filter_rule_based(BOUNDARY_ONLY);

    let result = filter.filter(BOUNDARY_ONLY, FilterMode::Hybrid).await;

    assert_eq!(result.method_used, FilterMethod::HybridRuleOnly);
    assert_eq!(result.filtered_text, rule.filtered_text);
    assert_eq!(result.confidence, rule.confidence);
    assert_eq!(result.notes.len(), 1);
    assert!(result.notes[0].starts_with("AI enhancement failed"));
    assert!(result.notes[0].contains("quota exceeded"));
}

#[tokio::test]
async fn low_quality_ai_output_is_rejected() {
    let filter = DeedFilter::default().with_extractor(Scripted::answering("I cannot help with that."));

    let result = filter.filter(BOUNDARY_ONLY, FilterMode::Hybrid).await;

    assert_eq!(result.method_used, FilterMethod::HybridRuleOnly);
    assert!(result.notes[0].contains("AI output rejected"));
}

#[tokio::test(start_paused = true)]
async fn hanging_collaborator_times_out() {
    let filter = DeedFilter::default().with_extractor(Arc::new(Hanging));

    let result = filter.filter(BOUNDARY_ONLY, FilterMode::Hybrid).await;

    assert_eq!(result.method_used, FilterMethod::HybridRuleOnly);
    assert!(result.notes[0].contains("timed out after 180s"));
}

#[tokio::test]
async fn hybrid_asks_ai_when_rule_based_is_weak() {
    let ai = Scripted::answering(AI_ANSWER);
    let filter = DeedFilter::default().with_extractor(ai.clone());

    let result = filter.filter(FULL_DEED, FilterMode::Hybrid).await;

    assert_eq!(result.method_used, FilterMethod::Ai);
    assert_eq!(result.confidence, 0.95);
    // raw text, legal paragraph included, went to the collaborator
    assert!(ai.prompts.lock().unwrap()[0].contains("WITNESSETH"));
}

#[tokio::test]
async fn ai_mode_without_collaborator_falls_back() {
    let filter = DeedFilter::default();

    let result = filter.filter(FULL_DEED, FilterMode::Ai).await;

    assert_eq!(result.method_used, FilterMethod::RuleBased);
    assert_eq!(result.notes, vec!["AI extraction failed: AI collaborator unavailable"]);
    assert!(result.filtered_text.starts_with("BEGINNING"));
}

#[tokio::test]
async fn rule_based_mode_never_calls_collaborator() {
    let ai = Scripted::answering(AI_ANSWER);
    let filter = DeedFilter::default().with_extractor(ai.clone());

    let result = filter.filter(FULL_DEED, FilterMode::RuleBased).await;

    assert_eq!(result.method_used, FilterMethod::RuleBased);
    assert_eq!(ai.calls(), 0);
}

#[test]
fn lenient_config_changes_thresholds() {
    let filter = DeedFilter::new(FilterConfig::lenient()).unwrap();
    assert_eq!(filter.config().relevance_threshold, 0.2);
    assert!(!filter.ai_available());
}

#[test]
fn kept_commencing_paragraph_is_not_repeated() {
    let result = DeedFilter::default().filter_rule_based(&commencing_deed());

    assert_eq!(result.method_used, FilterMethod::RuleBased);
    assert_eq!(result.boundary_sections_found, 1);
    assert_eq!(result.filtered_text.matches("COMMENCING at an iron pin").count(), 1);
    assert_eq!(result.filtered_text.matches("THENCE").count(), 4);
    assert!(!result.filtered_text.contains("grantor"));
    assert!(result.notes.is_empty());
}

#[tokio::test]
async fn incomplete_ai_answer_gets_missing_paragraph_once() {
    let filter = DeedFilter::default().with_extractor(Scripted::answering(PARTIAL_AI_ANSWER));

    let result = filter.filter(FULL_DEED, FilterMode::Ai).await;

    assert_eq!(result.method_used, FilterMethod::Ai);
    assert_eq!(result.notes, vec![REPAIR_NOTE]);
    assert!(result.filtered_text.starts_with("THENCE South 12 degrees 30 minutes West 150.00 feet"));
    assert_eq!(result.filtered_text.matches(FULL_DEED_BOUNDARY).count(), 1);
    assert!(result
        .filtered_text
        .ends_with("100.00 feet to the point of beginning, containing 0.344 acres, more or less."));
}

#[tokio::test]
async fn ai_answer_echoing_the_paragraph_is_left_alone() {
    let filter = DeedFilter::default().with_extractor(Scripted::answering(COMMENCING_PARAGRAPH));

    let result = filter.filter(&commencing_deed(), FilterMode::Ai).await;

    assert_eq!(result.method_used, FilterMethod::Ai);
    assert!(result.notes.is_empty());
    assert_eq!(result.filtered_text.matches("COMMENCING at an iron pin").count(), 1);
}

proptest! {
    #[test]
    fn proptest_relevance_score_in_unit_range(text in "\\PC{0,300}") {
        let score = relevance_score(&text, &FilterConfig::default());
        prop_assert!((0.0..=1.0).contains(&score));
    }

    #[test]
    fn proptest_dedupe_is_idempotent(text in "[a-cA-C .;]{0,40}") {
        let once = dedupe_sentences(&text);
        prop_assert_eq!(dedupe_sentences(&once), once);
    }
}
