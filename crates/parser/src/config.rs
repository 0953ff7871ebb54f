use serde::{Deserialize, Serialize};

/// Calls scoring below this never leave the parser
pub const ACCEPTANCE_THRESHOLD: f64 = 0.5;

/// Configuration for call parsing
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ParserConfig {
    /// Minimum confidence a call needs to be returned (never below 0.5)
    pub min_confidence: f64,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            min_confidence: ACCEPTANCE_THRESHOLD,
        }
    }
}

impl ParserConfig {
    /// Only keep calls with complete evidence (bearing+distance, monuments)
    pub fn strict() -> Self {
        Self {
            min_confidence: 0.8,
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if !self.min_confidence.is_finite() || self.min_confidence > 1.0 {
            return Err(format!(
                "min_confidence ({}) must be a number no greater than 1.0",
                self.min_confidence
            ));
        }

        if self.min_confidence < ACCEPTANCE_THRESHOLD {
            return Err(format!(
                "min_confidence ({}) cannot be below the acceptance threshold ({ACCEPTANCE_THRESHOLD})",
                self.min_confidence
            ));
        }

        Ok(())
    }
}
