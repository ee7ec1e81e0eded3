//! Error types for the fetcher module

use crate::error::Error as CrateError;
use thiserror::Error;

/// Error type for page fetches
#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport-level failure
    #[error("{0}")]
    Http(#[from] reqwest::Error),

    /// The page answered with a non-success status
    #[error("{status_code} {reason}")]
    Status {
        /// HTTP status code
        status_code: u16,
        /// Canonical reason phrase, possibly empty
        reason: String,
    },
}

impl From<FetchError> for CrateError {
    fn from(err: FetchError) -> Self {
        match err {
            FetchError::Http(e) => CrateError::Http(e),
            _ => CrateError::Fetch(err.to_string()),
        }
    }
}
