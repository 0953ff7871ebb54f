use thiserror::Error;

/// Result type for parser operations
pub type Result<T> = std::result::Result<T, ParserError>;

/// Errors that can occur while configuring or running the call parser
#[derive(Error, Debug)]
pub enum ParserError {
    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Unknown length unit token
    #[error("Unknown length unit: {0}")]
    UnknownUnit(String),

    /// Unknown call type name
    #[error("Unknown call type: {0}")]
    UnknownCallType(String),
}

impl ParserError {
    /// Create an invalid config error
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }
}
