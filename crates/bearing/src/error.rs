use thiserror::Error;

/// Result type for bearing operations
pub type Result<T> = std::result::Result<T, BearingError>;

/// Errors produced while reading a quadrant bearing
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BearingError {
    /// Nothing to parse
    #[error("Empty bearing")]
    Empty,

    /// Text did not match any supported bearing form
    #[error("Unrecognized bearing: {0}")]
    Unrecognized(String),

    /// A numeric component could not be read
    #[error("Invalid {component} in bearing: {value}")]
    InvalidComponent {
        component: &'static str,
        value: String,
    },
}

impl BearingError {
    /// Create an unrecognized-bearing error
    pub fn unrecognized(text: impl Into<String>) -> Self {
        Self::Unrecognized(text.into())
    }
}
