//! Error types for the pipeline module

use crate::fetcher::FetchError;
use crate::pipeline::PipelineState;
use thiserror::Error;

/// Reasons a pipeline run can abort
#[derive(Debug, Error)]
pub enum PipelineError {
    /// No URL was supplied
    #[error("URL is required")]
    MissingUrl,

    /// The URL is not a parseable absolute URL
    #[error("Invalid URL format")]
    InvalidUrl(#[source] url::ParseError),

    /// The target page could not be retrieved
    #[error("Failed to fetch URL: {0}")]
    Fetch(#[from] FetchError),

    /// Any failure the caller cannot act on
    #[error("Internal error: {0}")]
    Internal(String),
}

impl PipelineError {
    /// Whether the failure is attributable to the caller's input or the
    /// target site, as opposed to this service
    pub fn is_client_error(&self) -> bool {
        !matches!(self, PipelineError::Internal(_))
    }

    /// State the pipeline was in when it failed, if it is a known stage
    pub fn failed_in(&self) -> Option<PipelineState> {
        match self {
            PipelineError::MissingUrl | PipelineError::InvalidUrl(_) => {
                Some(PipelineState::Validating)
            }
            PipelineError::Fetch(_) => Some(PipelineState::Fetching),
            PipelineError::Internal(_) => None,
        }
    }
}
