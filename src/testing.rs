//! In-memory collaborators for pipeline and server tests

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use url::Url;

use crate::fetcher::{FetchError, PageFetcher};
use crate::summarizer::Summarizer;

pub(crate) const SHAWSHANK_HTML: &str = r#"<html><head>
    <title>The Shawshank Redemption</title>
    <meta name="description" content="Two imprisoned men bond over a number of years.">
    <meta property="og:image" content="/poster.jpg">
    </head><body><h1>Recipe for hope</h1><p>cooking ingredients kitchen bake</p></body></html>"#;

/// Serves a fixed body for known URLs and 404 for the rest
#[derive(Default)]
pub(crate) struct FakeFetcher {
    pages: HashMap<String, u16>,
    body: String,
    pub(crate) calls: AtomicUsize,
}

impl FakeFetcher {
    pub(crate) fn serving(url: &str, status: u16, body: &str) -> Self {
        Self {
            pages: HashMap::from([(url.to_string(), status)]),
            body: body.to_string(),
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl PageFetcher for FakeFetcher {
    async fn fetch(&self, url: &Url) -> Result<String, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.pages.get(url.as_str()).copied().unwrap_or(404) {
            200 => Ok(self.body.clone()),
            404 => Err(FetchError::Status {
                status_code: 404,
                reason: "Not Found".to_string(),
            }),
            code => Err(FetchError::Status {
                status_code: code,
                reason: String::new(),
            }),
        }
    }
}

/// Panics on every fetch
pub(crate) struct PanickingFetcher;

#[async_trait]
impl PageFetcher for PanickingFetcher {
    async fn fetch(&self, _url: &Url) -> Result<String, FetchError> {
        panic!("fetcher exploded")
    }
}

/// Returns a fixed reply and records what it was asked to summarize
pub(crate) struct FakeSummarizer {
    reply: String,
    pub(crate) seen: Mutex<Vec<(String, String)>>,
}

impl FakeSummarizer {
    pub(crate) fn replying(reply: &str) -> Self {
        Self {
            reply: reply.to_string(),
            seen: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl Summarizer for FakeSummarizer {
    async fn summarize(&self, title: &str, content: &str) -> String {
        self.seen
            .lock()
            .unwrap()
            .push((title.to_string(), content.to_string()));
        self.reply.clone()
    }
}
