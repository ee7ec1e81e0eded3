//! Page summarization through a chat-completion backend
//!
//! Summarization is best-effort. [`Summarizer::summarize`] never fails: any
//! transport error, non-success status or unreadable body is logged and
//! replaced by [`SUMMARY_FAILED_MESSAGE`].

mod config;
mod error;

pub use config::{DEFAULT_ENDPOINT, DEFAULT_MODEL, SummarizerConfig, SummarizerConfigBuilder};
pub use error::SummarizeError;

use async_trait::async_trait;
use reqwest::Client as ReqwestClient;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Text returned in place of a summary when the backend call fails
pub const SUMMARY_FAILED_MESSAGE: &str = "Summary generation failed. Please try again later.";

/// Produces a short summary for a page
#[async_trait]
pub trait Summarizer: Send + Sync {
    /// Summarize `content` titled `title`. Never fails.
    async fn summarize(&self, title: &str, content: &str) -> String;
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    #[serde(default)]
    message: Option<ChatChoiceMessage>,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

impl ChatResponse {
    /// Content of the first choice, or empty when absent
    fn first_content(self) -> String {
        self.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message)
            .and_then(|message| message.content)
            .unwrap_or_default()
    }
}

/// Build the instruction sent to the backend
pub fn build_prompt(title: &str, content: &str, max_content_chars: usize) -> String {
    let content: String = content.chars().take(max_content_chars).collect();
    format!(
        "You are an expert summarization AI focused on absolute brevity. Produce a concise bullet-list summary with at most 5 punchy, standalone points. Prioritize root causes, key consequences, systemic failures, vital statistics, and essential arguments. No fluff or background. Keep the entire summary under 60 words.\n\
         Title: {}\n\n\
         Content: {}",
        title, content
    )
}

/// [`Summarizer`] backed by an OpenAI-compatible chat completions endpoint
#[derive(Debug, Clone)]
pub struct ChatCompletionSummarizer {
    client: ReqwestClient,
    config: SummarizerConfig,
}

impl ChatCompletionSummarizer {
    /// Create a summarizer. Fails when the API key is empty.
    pub fn new(config: SummarizerConfig) -> Result<Self, SummarizeError> {
        if config.api_key.trim().is_empty() {
            return Err(SummarizeError::MissingApiKey);
        }
        let client = ReqwestClient::builder().timeout(config.timeout()).build()?;
        Ok(Self { client, config })
    }

    /// The active configuration
    pub fn config(&self) -> &SummarizerConfig {
        &self.config
    }

    /// Call the backend and return its trimmed answer
    #[instrument(skip(self, content), fields(model = %self.config.model), level = "debug")]
    pub async fn try_summarize(&self, title: &str, content: &str) -> Result<String, SummarizeError> {
        let request = ChatRequest {
            model: &self.config.model,
            messages: vec![ChatMessage {
                role: "user",
                content: build_prompt(title, content, self.config.max_content_chars),
            }],
            max_tokens: self.config.max_tokens,
        };

        debug!("Sending summarization request to {}", self.config.endpoint);
        let response = self
            .client
            .post(&self.config.endpoint)
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(SummarizeError::Api {
                status_code: status.as_u16(),
                message: body,
            });
        }

        let parsed: ChatResponse = serde_json::from_str(&body)
            .map_err(|e| SummarizeError::UnexpectedResponse(e.to_string()))?;
        let summary = parsed.first_content().trim().to_string();
        debug!("Received summary of length {}", summary.len());
        Ok(summary)
    }
}

#[async_trait]
impl Summarizer for ChatCompletionSummarizer {
    async fn summarize(&self, title: &str, content: &str) -> String {
        match self.try_summarize(title, content).await {
            Ok(summary) => summary,
            Err(e) => {
                warn!("Summarization failed: {}", e);
                SUMMARY_FAILED_MESSAGE.to_string()
            }
        }
    }
}
