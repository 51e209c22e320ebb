//! Error types for source parsing

use thiserror::Error;

/// Result type alias for source parsing
pub type Result<T> = std::result::Result<T, SourceError>;

/// Errors that can occur while reading a valuation source
#[derive(Error, Debug)]
pub enum SourceError {
    /// The payload is not valid JSON
    #[error("Malformed JSON payload: {0}")]
    Json(#[from] serde_json::Error),
}
