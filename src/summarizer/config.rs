//! # Summarizer Configuration
//!
//! Settings for the chat-completion backend used to summarize pages. The API
//! key has no default and must be supplied when the builder is created.

use std::time::Duration;

/// Chat completion endpoint used when none is configured
pub const DEFAULT_ENDPOINT: &str = "https://api.mistral.ai/v1/chat/completions";

/// Model used when none is configured
pub const DEFAULT_MODEL: &str = "mistral-small-latest";

/// Configuration for the summarization client
#[derive(Clone)]
pub struct SummarizerConfig {
    /// Full URL of the chat completions endpoint
    pub endpoint: String,

    /// Model identifier sent with each request
    pub model: String,

    /// Bearer token for the backend
    pub api_key: String,

    /// Token budget for the generated summary
    pub max_tokens: u32,

    /// Content is cut to this many characters before submission
    pub max_content_chars: usize,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl std::fmt::Debug for SummarizerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SummarizerConfig")
            .field("endpoint", &self.endpoint)
            .field("model", &self.model)
            .field("api_key", &"<redacted>")
            .field("max_tokens", &self.max_tokens)
            .field("max_content_chars", &self.max_content_chars)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

/// Builder for SummarizerConfig
#[derive(Debug)]
pub struct SummarizerConfigBuilder {
    config: SummarizerConfig,
}

impl SummarizerConfigBuilder {
    /// Create a builder for the given credential
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            config: SummarizerConfig {
                endpoint: DEFAULT_ENDPOINT.to_string(),
                model: DEFAULT_MODEL.to_string(),
                api_key: api_key.into(),
                max_tokens: 100,
                max_content_chars: 3000,
                timeout_secs: 30,
            },
        }
    }

    /// Set the chat completions endpoint
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.config.endpoint = endpoint.into();
        self
    }

    /// Set the model
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.config.model = model.into();
        self
    }

    /// Set the token budget
    pub fn max_tokens(mut self, max_tokens: u32) -> Self {
        self.config.max_tokens = max_tokens;
        self
    }

    /// Set the content cap in characters
    pub fn max_content_chars(mut self, max_content_chars: usize) -> Self {
        self.config.max_content_chars = max_content_chars;
        self
    }

    /// Set the request timeout in seconds
    pub fn timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.config.timeout_secs = timeout_secs;
        self
    }

    /// Build the configuration
    pub fn build(self) -> SummarizerConfig {
        self.config
    }
}

impl SummarizerConfig {
    /// Create a new builder
    pub fn builder(api_key: impl Into<String>) -> SummarizerConfigBuilder {
        SummarizerConfigBuilder::new(api_key)
    }

    /// Get the timeout as a Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
