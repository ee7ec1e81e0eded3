//! # Service Configuration
//!
//! Operator-facing settings, read from command-line flags with environment
//! variable fallbacks. The summarization API key is required; there is no
//! built-in credential.

use clap::Args;

use crate::error::{Error, Result};
use crate::fetcher::{DESKTOP_USER_AGENT, FetcherConfig};
use crate::pipeline::PipelineConfig;
use crate::summarizer::{DEFAULT_ENDPOINT, DEFAULT_MODEL, SummarizerConfig};

/// Settings shared by every command that runs the pipeline
#[derive(Args, Clone)]
pub struct AppConfig {
    /// API key for the summarization backend
    #[arg(long, env = "MISTRAL_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Chat completions endpoint used for summaries
    #[arg(long, env = "PAGELENS_SUMMARY_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    pub summary_endpoint: String,

    /// Model used for summaries
    #[arg(long, env = "PAGELENS_SUMMARY_MODEL", default_value = DEFAULT_MODEL)]
    pub summary_model: String,

    /// Timeout for the summarization call in seconds
    #[arg(long, default_value = "30")]
    pub summary_timeout_secs: u64,

    /// Timeout for the page fetch in seconds
    #[arg(long, default_value = "15")]
    pub fetch_timeout_secs: u64,

    /// User agent sent when fetching pages
    #[arg(long, default_value = DESKTOP_USER_AGENT)]
    pub user_agent: String,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("summary_endpoint", &self.summary_endpoint)
            .field("summary_model", &self.summary_model)
            .field("summary_timeout_secs", &self.summary_timeout_secs)
            .field("fetch_timeout_secs", &self.fetch_timeout_secs)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

impl AppConfig {
    /// Resolve the pipeline configuration, failing when no API key is set
    pub fn pipeline_config(&self) -> Result<PipelineConfig> {
        let api_key = self
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .ok_or_else(|| {
                Error::Config("MISTRAL_API_KEY or --api-key must be set".to_string())
            })?;

        let summarizer = SummarizerConfig::builder(api_key)
            .endpoint(self.summary_endpoint.clone())
            .model(self.summary_model.clone())
            .timeout_secs(self.summary_timeout_secs)
            .build();

        let fetcher = FetcherConfig::builder()
            .user_agent(self.user_agent.clone())
            .timeout_secs(self.fetch_timeout_secs)
            .build();

        Ok(PipelineConfig::new(summarizer).with_fetcher(fetcher))
    }
}
