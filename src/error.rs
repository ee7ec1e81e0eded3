//! Error types for the pagelens crate

use thiserror::Error;

/// Result type for pagelens operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for pagelens operations
#[derive(Debug, Error)]
pub enum Error {
    /// HTTP client error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Fetching the target page failed
    #[error("Fetch error: {0}")]
    Fetch(String),

    /// The summarization backend failed
    #[error("Summarize error: {0}")]
    Summarize(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
