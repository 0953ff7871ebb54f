use crate::classify::classify_clause;
use crate::config::{ParserConfig, ACCEPTANCE_THRESHOLD};
use crate::error::{ParserError, Result};
use crate::splitter::split_clauses;
use crate::types::{Call, CallSummary};
use serde::{Deserialize, Serialize};

/// Calls plus their summary, as handed to downstream consumers
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ParseOutput {
    pub calls: Vec<Call>,
    pub summary: CallSummary,
}

/// Stateless call parser; safe to share across threads
#[derive(Debug, Clone, Default)]
pub struct CallParser {
    config: ParserConfig,
}

impl CallParser {
    pub fn new(config: ParserConfig) -> Result<Self> {
        config.validate().map_err(ParserError::invalid_config)?;
        Ok(Self { config })
    }

    #[must_use]
    pub const fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parse boundary text into ordered calls, dropping anything below the confidence gate
    #[must_use]
    pub fn parse(&self, text: &str) -> Vec<Call> {
        let min_confidence = self.config.min_confidence.max(ACCEPTANCE_THRESHOLD);
        let clauses = split_clauses(text);

        let calls: Vec<Call> = clauses
            .iter()
            .filter_map(|clause| classify_clause(clause))
            .filter(|call| call.confidence >= min_confidence)
            .collect();

        log::debug!(
            "parsed {} calls from {} clauses",
            calls.len(),
            clauses.len()
        );
        calls
    }

    #[must_use]
    pub fn parse_with_summary(&self, text: &str) -> ParseOutput {
        let calls = self.parse(text);
        let summary = CallSummary::from_calls(&calls);
        ParseOutput { calls, summary }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CallType;

    #[test]
    fn test_rejects_weak_gate() {
        let err = CallParser::new(ParserConfig {
            min_confidence: 0.2,
        })
        .unwrap_err();
        assert!(matches!(err, ParserError::InvalidConfig(_)));
    }

    #[test]
    fn test_strict_config_drops_adjoiners() {
        let text = "Beginning at a stake; thence along lands of Smith; thence S10°W 20 feet";

        let default_calls = CallParser::default().parse(text);
        assert_eq!(default_calls.len(), 3);

        let strict_calls = CallParser::new(ParserConfig::strict()).unwrap().parse(text);
        let types: Vec<CallType> = strict_calls.iter().map(Call::call_type).collect();
        assert_eq!(types, vec![CallType::Monument, CallType::BearingDistance]);
    }

    #[test]
    fn test_summary() {
        let output = CallParser::default()
            .parse_with_summary("thence N10°E 50 feet; thence S80°E 20 feet; to an iron pin set");
        assert_eq!(output.summary.total_calls, 3);
        assert_eq!(output.summary.bearing_distance_calls, 2);
        assert_eq!(output.summary.monument_calls, 1);
    }
}
