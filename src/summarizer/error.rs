//! Error types for the summarizer module

use crate::error::Error as CrateError;
use thiserror::Error;

/// Error type for summarization calls
#[derive(Debug, Error)]
pub enum SummarizeError {
    /// HTTP client error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend returned a non-success status
    #[error("API error: {status_code} - {message}")]
    Api {
        /// HTTP status code
        status_code: u16,
        /// Response body
        message: String,
    },

    /// The backend answered with a body we could not read
    #[error("Unexpected response format: {0}")]
    UnexpectedResponse(String),

    /// No credential was configured
    #[error("Missing API key for the summarization backend")]
    MissingApiKey,
}

impl From<SummarizeError> for CrateError {
    fn from(err: SummarizeError) -> Self {
        match err {
            SummarizeError::Http(e) => CrateError::Http(e),
            SummarizeError::MissingApiKey => CrateError::Config(err.to_string()),
            _ => CrateError::Summarize(err.to_string()),
        }
    }
}
