//! Error types for the stocktake-core library.
//!
//! The extractors themselves are total functions over their inputs and
//! never fail: an unmatched pattern simply leaves a field unset. Errors
//! here cover the surrounding machinery (configuration files, JSON).

use thiserror::Error;

/// Main error type for the stocktake library.
#[derive(Error, Debug)]
pub enum StocktakeError {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type for the stocktake library.
pub type Result<T> = std::result::Result<T, StocktakeError>;
