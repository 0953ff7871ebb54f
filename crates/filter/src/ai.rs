//! Seam to the external AI collaborator.

use crate::config::FilterConfig;
use crate::error::{FilterError, Result};
use async_trait::async_trait;
use std::time::Duration;

/// Something that can pull the boundary description out of a prompt, usually a hosted model.
///
/// Implementations may fail or hang; the filter bounds every call with a
/// timeout and falls back to rule-based output.
#[async_trait]
pub trait BoundaryExtractor: Send + Sync {
    /// Capability check; an unavailable extractor is skipped without being called
    fn is_available(&self) -> bool {
        true
    }

    async fn extract_boundary_text(&self, prompt: &str, max_chars: usize) -> anyhow::Result<String>;
}

/// Extraction prompt embedding at most `max_chars` characters of `text`
#[must_use]
pub fn build_prompt(text: &str, max_chars: usize) -> String {
    let excerpt: String = text.chars().take(max_chars).collect();

    format!(
        "You are a land surveyor reading a deed. Extract ONLY the metes and bounds boundary description.\n\
\n\
INCLUDE:\n\
- Every bearing and distance call, exactly as written (e.g. \"North 45° 30' 15\" East 125.75 feet\")\n\
- Curve data: radius, delta, chord bearing, chord distance, arc length\n\
- Monuments at corners (iron pins, concrete monuments, stones, stakes)\n\
- The starting point (\"Beginning at ...\") and the closing call (\"to the point of beginning\")\n\
- Progression words such as THENCE\n\
\n\
EXCLUDE:\n\
- Grantor, grantee, conveyance and warranty language\n\
- Recording references (book, page, clerk, instrument numbers)\n\
- Consideration, taxes, easements, restrictions and covenants\n\
- Witness and notary clauses\n\
\n\
Keep the calls in their original order. Return only the boundary description.\n\
\n\
Deed text:\n\
{excerpt}\n"
    )
}

/// Reject AI output that cannot be a boundary description
pub fn validate_output(output: &str, config: &FilterConfig) -> Result<String> {
    let output = output.trim();

    if output.chars().count() < config.min_ai_output_chars {
        return Err(FilterError::low_quality(format!(
            "output shorter than {} characters",
            config.min_ai_output_chars
        )));
    }

    let lower = output.to_lowercase();
    if !["beginning", "thence", "feet"]
        .iter()
        .any(|word| lower.contains(word))
    {
        return Err(FilterError::low_quality(
            "output mentions none of beginning, thence, feet",
        ));
    }

    Ok(output.to_string())
}

/// Ask the collaborator for the boundary text of `text`, bounded by the configured timeout
pub async fn extract_with(
    extractor: &dyn BoundaryExtractor,
    text: &str,
    config: &FilterConfig,
) -> Result<String> {
    if !extractor.is_available() {
        return Err(FilterError::Unavailable);
    }

    let prompt = build_prompt(text, config.ai_max_chars);
    let call = extractor.extract_boundary_text(&prompt, config.ai_max_chars);

    let output = tokio::time::timeout(Duration::from_secs(config.ai_timeout_secs), call)
        .await
        .map_err(|_| FilterError::Timeout(config.ai_timeout_secs))?
        .map_err(FilterError::collaborator)?;

    validate_output(&output, config)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(&'static str);

    #[async_trait]
    impl BoundaryExtractor for Fixed {
        async fn extract_boundary_text(&self, _prompt: &str, _max: usize) -> anyhow::Result<String> {
            Ok(self.0.to_string())
        }
    }

    struct Hanging;

    #[async_trait]
    impl BoundaryExtractor for Hanging {
        async fn extract_boundary_text(&self, _prompt: &str, _max: usize) -> anyhow::Result<String> {
            tokio::time::sleep(Duration::from_secs(3600)).await;
            Ok(String::new())
        }
    }

    struct Offline;

    #[async_trait]
    impl BoundaryExtractor for Offline {
        fn is_available(&self) -> bool {
            false
        }

        async fn extract_boundary_text(&self, _prompt: &str, _max: usize) -> anyhow::Result<String> {
            anyhow::bail!("must not be called")
        }
    }

    const GOOD: &str = "BEGINNING at an iron pin; THENCE N 45° 30' E 100.00 feet to a stake";

    #[test]
    fn test_prompt_truncates_input() {
        let text = "x".repeat(5000);
        let prompt = build_prompt(&text, 4000);
        assert!(prompt.contains(&"x".repeat(4000)));
        assert!(!prompt.contains(&"x".repeat(4001)));
        assert!(prompt.contains("metes and bounds"));
    }

    #[test]
    fn test_validate_output() {
        let config = FilterConfig::default();
        assert!(validate_output(GOOD, &config).is_ok());
        assert!(matches!(
            validate_output("too short", &config),
            Err(FilterError::LowQualityOutput(_))
        ));
        assert!(matches!(
            validate_output(&"lorem ipsum dolor sit amet ".repeat(4), &config),
            Err(FilterError::LowQualityOutput(_))
        ));
    }

    #[tokio::test]
    async fn test_extract_accepts_good_output() {
        let text = extract_with(&Fixed(GOOD), "deed", &FilterConfig::default())
            .await
            .unwrap();
        assert_eq!(text, GOOD);
    }

    #[tokio::test(start_paused = true)]
    async fn test_extract_times_out() {
        let err = extract_with(&Hanging, "deed", &FilterConfig::default())
            .await
            .unwrap_err();
        assert!(matches!(err, FilterError::Timeout(180)));
    }

    #[tokio::test]
    async fn test_unavailable_extractor_not_called() {
        let err = extract_with(&Offline, "deed", &FilterConfig::default())
            .await
            .unwrap_err();
        assert!(matches!(err, FilterError::Unavailable));
    }
}
