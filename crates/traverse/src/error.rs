use thiserror::Error;

pub type Result<T> = std::result::Result<T, TraverseError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TraverseError {
    #[error("Insufficient points for closure analysis: {0} (need at least 3)")]
    InsufficientPoints(usize),

    #[error("Export format {0} not supported")]
    UnsupportedFormat(String),
}
