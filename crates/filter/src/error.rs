use thiserror::Error;

/// Result type for filter operations
pub type Result<T> = std::result::Result<T, FilterError>;

/// Errors raised inside the filter strategy chain.
///
/// None of these reach callers of [`crate::DeedFilter::filter`]; each one only
/// moves the chain on to its next strategy.
#[derive(Error, Debug)]
pub enum FilterError {
    /// The AI collaborator returned an error
    #[error("AI collaborator failed: {0}")]
    Collaborator(String),

    /// The AI collaborator did not answer in time
    #[error("AI collaborator timed out after {0}s")]
    Timeout(u64),

    /// No collaborator injected, or it reports itself unavailable
    #[error("AI collaborator unavailable")]
    Unavailable,

    /// Collaborator answered with something that is not a boundary description
    #[error("AI output rejected: {0}")]
    LowQualityOutput(String),

    /// Rule-based analysis found no boundary-like paragraph
    #[error("no boundary content found")]
    NoBoundaryContent,

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Unknown filter mode name
    #[error("Unknown filter mode: {0} (expected rule_based, ai or hybrid)")]
    UnknownMode(String),
}

impl FilterError {
    /// Create a collaborator error
    pub fn collaborator(err: impl std::fmt::Display) -> Self {
        Self::Collaborator(err.to_string())
    }

    /// Create a low quality output error
    pub fn low_quality(reason: impl Into<String>) -> Self {
        Self::LowQualityOutput(reason.into())
    }

    /// Create an invalid config error
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }
}
