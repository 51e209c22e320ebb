//! Error types for the trade engine

use crate::models::Side;
use thiserror::Error;

/// Result type alias for trade engine operations
pub type Result<T> = std::result::Result<T, TradeError>;

/// Errors that can occur in the trade engine
///
/// Valuation itself never fails; these cover session editing, configuration
/// and share token encoding.
#[derive(Error, Debug)]
pub enum TradeError {
    #[error("No asset at index {index} for {side} ({len} assets)")]
    AssetIndex { side: Side, index: usize, len: usize },

    #[error("Unknown player key: {0}")]
    UnknownPlayer(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl TradeError {
    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
