//! Custom error types for agri-ai.
//!
//! Classification and rendering are total and never fail. Errors only come
//! from the upstream model path and the outer surfaces (config, console, server).

use std::time::Duration;
use thiserror::Error;

/// Main error type for agri-ai operations.
#[derive(Debug, Error)]
pub enum AgriError {
    /// Network/HTTP request error
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Upstream model API returned a non-success status
    #[error("API error: {code} - {message}")]
    Api {
        /// HTTP status code from the API
        code: u16,
        /// Error body or message from the API
        message: String,
    },

    /// Upstream response could not be interpreted
    #[error("Parse error: {0}")]
    Parse(String),

    /// Upstream call exceeded its deadline
    #[error("Timed out after {0:?}")]
    Timeout(Duration),

    /// File or console I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Config error: {0}")]
    Config(String),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type alias using `AgriError`
pub type Result<T> = std::result::Result<T, AgriError>;
