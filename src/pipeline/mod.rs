//! # Extraction pipeline
//!
//! Runs one request end to end:
//!
//! ```text
//! Validating -> Fetching -> Extracting -> Classifying -> Summarizing -> Done
//!      \            \
//!       +------------+--> Failed
//! ```
//!
//! Only validation and fetching can fail. Extraction and classification are
//! infallible, and summarization degrades to a placeholder string.
//!
//! The fetcher and summarizer are injected as trait objects so the pipeline
//! can run against in-memory fakes.

mod error;

pub use error::PipelineError;

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Serialize, Serializer};
use tracing::{debug, info, instrument, warn};
use url::Url;

use crate::classifier::{Classification, Classifier};
use crate::error::Result;
use crate::extractor::{ExtractedMetadata, extract_metadata};
use crate::fetcher::{FetcherConfig, HttpFetcher, PageFetcher};
use crate::summarizer::{ChatCompletionSummarizer, Summarizer, SummarizerConfig};
use crate::taxonomy::Taxonomy;

/// Stages of a pipeline run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineState {
    Validating,
    Fetching,
    Extracting,
    Classifying,
    Summarizing,
    Done,
    Failed,
}

impl fmt::Display for PipelineState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PipelineState::Validating => "validating",
            PipelineState::Fetching => "fetching",
            PipelineState::Extracting => "extracting",
            PipelineState::Classifying => "classifying",
            PipelineState::Summarizing => "summarizing",
            PipelineState::Done => "done",
            PipelineState::Failed => "failed",
        };
        f.write_str(name)
    }
}

/// The record returned for a successfully processed page
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineResult {
    #[serde(flatten)]
    pub metadata: ExtractedMetadata,

    #[serde(flatten)]
    pub classification: Classification,

    /// Normalized form of the requested URL
    pub url: String,

    #[serde(serialize_with = "serialize_iso8601")]
    pub extracted_at: DateTime<Utc>,

    pub summary: String,
}

fn serialize_iso8601<S: Serializer>(
    timestamp: &DateTime<Utc>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_str(&timestamp.to_rfc3339_opts(SecondsFormat::Millis, true))
}

/// Configuration for a pipeline built from its default collaborators
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub fetcher: FetcherConfig,
    pub summarizer: SummarizerConfig,
}

impl PipelineConfig {
    /// Default fetch settings with the given summarizer settings
    pub fn new(summarizer: SummarizerConfig) -> Self {
        Self {
            fetcher: FetcherConfig::default(),
            summarizer,
        }
    }

    /// Replace the fetch settings
    pub fn with_fetcher(mut self, fetcher: FetcherConfig) -> Self {
        self.fetcher = fetcher;
        self
    }
}

/// Fetch, extract, classify and summarize a single page
#[derive(Clone)]
pub struct Pipeline {
    fetcher: Arc<dyn PageFetcher>,
    classifier: Classifier,
    summarizer: Arc<dyn Summarizer>,
}

impl Pipeline {
    /// Assemble a pipeline from its collaborators
    pub fn new(
        fetcher: Arc<dyn PageFetcher>,
        classifier: Classifier,
        summarizer: Arc<dyn Summarizer>,
    ) -> Self {
        Self {
            fetcher,
            classifier,
            summarizer,
        }
    }

    /// Build a pipeline over HTTP collaborators and the given taxonomy
    pub fn from_config(config: &PipelineConfig, taxonomy: Arc<Taxonomy>) -> Result<Self> {
        let fetcher = HttpFetcher::new(&config.fetcher)?;
        let summarizer = ChatCompletionSummarizer::new(config.summarizer.clone())?;
        Ok(Self::new(
            Arc::new(fetcher),
            Classifier::new(taxonomy),
            Arc::new(summarizer),
        ))
    }

    /// The classifier in use
    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    /// Process `url` end to end.
    ///
    /// `None` and the empty string are reported as a missing URL.
    #[instrument(skip(self))]
    pub async fn run(&self, url: Option<&str>) -> std::result::Result<PipelineResult, PipelineError> {
        match self.execute(url).await {
            Ok(result) => {
                enter(PipelineState::Done);
                info!(
                    "Processed {} as {}/{}",
                    result.url, result.classification.category, result.classification.subcategory
                );
                Ok(result)
            }
            Err(e) => {
                enter(PipelineState::Failed);
                match e.failed_in() {
                    Some(stage) => info!("Pipeline failed while {}: {}", stage, e),
                    None => warn!("Pipeline failed: {}", e),
                }
                Err(e)
            }
        }
    }

    async fn execute(&self, url: Option<&str>) -> std::result::Result<PipelineResult, PipelineError> {
        enter(PipelineState::Validating);
        let raw_url = url.filter(|u| !u.is_empty()).ok_or(PipelineError::MissingUrl)?;
        let page_url = Url::parse(raw_url).map_err(PipelineError::InvalidUrl)?;

        enter(PipelineState::Fetching);
        let html = self.fetcher.fetch(&page_url).await?;

        enter(PipelineState::Extracting);
        // HTML parsing is CPU-bound, keep it off the async workers
        let base_url = page_url.clone();
        let metadata = tokio::task::spawn_blocking(move || extract_metadata(&html, &base_url))
            .await
            .map_err(|e| PipelineError::Internal(format!("extraction task failed: {}", e)))?;

        enter(PipelineState::Classifying);
        let classification = self.classifier.classify(
            &metadata.title,
            &metadata.description,
            raw_url,
            &metadata.keywords,
        );

        enter(PipelineState::Summarizing);
        let summary = self
            .summarizer
            .summarize(&metadata.title, &metadata.body_excerpt)
            .await;

        Ok(PipelineResult {
            metadata,
            classification,
            url: page_url.to_string(),
            extracted_at: Utc::now(),
            summary,
        })
    }
}

fn enter(state: PipelineState) {
    debug!("Pipeline {}", state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::summarizer::SUMMARY_FAILED_MESSAGE;
    use crate::testing::{FakeFetcher, FakeSummarizer, SHAWSHANK_HTML as SHAWSHANK};
    use std::sync::atomic::Ordering;

    fn pipeline(fetcher: Arc<FakeFetcher>, summarizer: Arc<FakeSummarizer>) -> Pipeline {
        Pipeline::new(fetcher, Classifier::default(), summarizer)
    }

    #[tokio::test]
    async fn test_imdb_page_classified_by_domain() {
        let url = "https://www.imdb.com/title/tt0111161/";
        let fetcher = Arc::new(FakeFetcher::serving(url, 200, SHAWSHANK));
        let summarizer = Arc::new(FakeSummarizer::replying("- Hope endures"));
        let result = pipeline(fetcher, summarizer.clone())
            .run(Some(url))
            .await
            .unwrap();

        assert_eq!(result.metadata.title, "The Shawshank Redemption");
        assert_eq!(
            result.metadata.image.as_deref(),
            Some("https://www.imdb.com/poster.jpg")
        );
        assert_eq!(result.classification, Classification::new("Entertainment", "Movies"));
        assert_eq!(result.url, url);
        assert_eq!(result.summary, "- Hope endures");

        let seen = summarizer.seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].0, "The Shawshank Redemption");
        assert_eq!(seen[0].1, result.metadata.body_excerpt);
    }

    #[tokio::test]
    async fn test_summary_failure_still_succeeds() {
        let url = "https://example.org/";
        let fetcher = Arc::new(FakeFetcher::serving(url, 200, SHAWSHANK));
        let summarizer = Arc::new(FakeSummarizer::replying(SUMMARY_FAILED_MESSAGE));
        let result = pipeline(fetcher, summarizer).run(Some(url)).await.unwrap();

        assert_eq!(result.summary, SUMMARY_FAILED_MESSAGE);
        assert_eq!(result.metadata.title, "The Shawshank Redemption");
        assert_eq!(result.classification, Classification::new("Food and Dining", "Recipes"));
    }

    #[tokio::test]
    async fn test_invalid_url_never_fetches() {
        let fetcher = Arc::new(FakeFetcher::default());
        let summarizer = Arc::new(FakeSummarizer::replying(""));
        let err = pipeline(fetcher.clone(), summarizer)
            .run(Some("not a url"))
            .await
            .unwrap_err();

        assert!(matches!(err, PipelineError::InvalidUrl(_)));
        assert!(err.is_client_error());
        assert_eq!(err.failed_in(), Some(PipelineState::Validating));
        assert_eq!(err.to_string(), "Invalid URL format");
        assert_eq!(fetcher.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_missing_url() {
        let fetcher = Arc::new(FakeFetcher::default());
        let summarizer = Arc::new(FakeSummarizer::replying(""));
        let pipeline = pipeline(fetcher.clone(), summarizer);

        for input in [None, Some("")] {
            let err = pipeline.run(input).await.unwrap_err();
            assert!(matches!(err, PipelineError::MissingUrl));
            assert_eq!(err.to_string(), "URL is required");
        }
        assert_eq!(fetcher.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_upstream_status_is_client_error() {
        let url = "https://example.org/gone";
        let fetcher = Arc::new(FakeFetcher::serving(url, 404, ""));
        let summarizer = Arc::new(FakeSummarizer::replying(""));
        let err = pipeline(fetcher, summarizer.clone())
            .run(Some(url))
            .await
            .unwrap_err();

        assert!(err.is_client_error());
        assert_eq!(err.failed_in(), Some(PipelineState::Fetching));
        assert_eq!(err.to_string(), "Failed to fetch URL: 404 Not Found");
        assert!(summarizer.seen.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_url_is_normalized() {
        let fetcher = Arc::new(FakeFetcher::serving("https://example.org/", 200, "<p>x</p>"));
        let summarizer = Arc::new(FakeSummarizer::replying(""));
        let result = pipeline(fetcher, summarizer)
            .run(Some("https://EXAMPLE.org"))
            .await
            .unwrap();
        assert_eq!(result.url, "https://example.org/");
        assert_eq!(result.metadata.title, "No title found");
        assert_eq!(result.classification, Classification::fallback());
    }

    #[tokio::test]
    async fn test_result_wire_format() {
        let url = "https://www.imdb.com/title/tt0111161/";
        let fetcher = Arc::new(FakeFetcher::serving(url, 200, SHAWSHANK));
        let summarizer = Arc::new(FakeSummarizer::replying("ok"));
        let result = pipeline(fetcher, summarizer).run(Some(url)).await.unwrap();

        let json = serde_json::to_value(&result).unwrap();
        for field in [
            "title", "description", "image", "keywords", "category", "subcategory", "url",
            "extractedAt", "bodyContent", "summary",
        ] {
            assert!(json.get(field).is_some(), "missing {field}");
        }
        let extracted_at = json["extractedAt"].as_str().unwrap();
        assert!(extracted_at.ends_with('Z'));
        assert!(DateTime::parse_from_rfc3339(extracted_at).is_ok());
    }

    #[tokio::test]
    async fn test_large_page_is_extracted() {
        let url = "https://example.org/long";
        let html = format!(
            "<html><head><title>Long read</title></head><body>{}</body></html>",
            "<p>lorem ipsum dolor</p>".repeat(50_000)
        );
        let fetcher = Arc::new(FakeFetcher::serving(url, 200, &html));
        let summarizer = Arc::new(FakeSummarizer::replying("ok"));
        let result = pipeline(fetcher, summarizer).run(Some(url)).await.unwrap();

        assert_eq!(result.metadata.title, "Long read");
        assert_eq!(result.metadata.body_excerpt.chars().count(), 1000);
        assert!(result.metadata.body_excerpt.starts_with("lorem ipsum dolorlorem"));
    }

    #[test]
    fn test_from_config_rejects_blank_key() {
        let config = PipelineConfig::new(SummarizerConfig::builder("   ").build());
        let result = Pipeline::from_config(&config, Arc::new(Taxonomy::builtin()));
        assert!(matches!(result, Err(crate::error::Error::Config(_))));
    }

    #[test]
    fn test_from_config_builds_http_pipeline() {
        let config = PipelineConfig::new(SummarizerConfig::builder("key").build());
        let pipeline = Pipeline::from_config(&config, Arc::new(Taxonomy::builtin())).unwrap();
        assert_eq!(pipeline.classifier().taxonomy().len(), 40);
    }

    #[test]
    fn test_internal_error_is_not_client_error() {
        let err = PipelineError::Internal("boom".to_string());
        assert!(!err.is_client_error());
        assert_eq!(err.failed_in(), None);
    }
}
