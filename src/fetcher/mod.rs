//! Page fetching
//!
//! One best-effort GET per request, no retries. Any non-2xx answer is an error.

mod config;
mod error;

pub use config::{DESKTOP_USER_AGENT, FetcherConfig, FetcherConfigBuilder};
pub use error::FetchError;

use async_trait::async_trait;
use reqwest::Client as ReqwestClient;
use tracing::{debug, instrument};
use url::Url;

/// Retrieves the raw HTML of a page
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch(&self, url: &Url) -> Result<String, FetchError>;
}

/// [`PageFetcher`] issuing plain HTTP GET requests
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: ReqwestClient,
}

impl HttpFetcher {
    /// Create a fetcher from configuration
    pub fn new(config: &FetcherConfig) -> Result<Self, FetchError> {
        let client = ReqwestClient::builder()
            .user_agent(config.user_agent.clone())
            .timeout(config.timeout())
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    #[instrument(skip(self), fields(url = %url))]
    async fn fetch(&self, url: &Url) -> Result<String, FetchError> {
        let response = self.client.get(url.clone()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status_code: status.as_u16(),
                reason: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }

        let html = response.text().await?;
        debug!("Fetched {} bytes", html.len());
        Ok(html)
    }
}
