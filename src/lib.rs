//! # pagelens - page metadata, classification and summaries
//!
//! Fetches a web page, extracts descriptive metadata from its HTML, assigns it a
//! category/subcategory from a fixed taxonomy, and asks a chat-completion backend
//! for a short bullet summary.
//!
//! ## Features
//!
//! - Lenient HTML metadata extraction (title, description, image, keywords, body text)
//! - Deterministic two-pass classification (domain rules, then keyword scoring)
//! - Best-effort summarization that never fails a request
//! - An axum HTTP API and a CLI over the same pipeline
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use pagelens::pipeline::{Pipeline, PipelineConfig};
//! use pagelens::summarizer::SummarizerConfig;
//! use pagelens::taxonomy::Taxonomy;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = PipelineConfig::new(SummarizerConfig::builder("your-api-key").build());
//!     let pipeline = Pipeline::from_config(&config, Arc::new(Taxonomy::builtin()))?;
//!
//!     let result = pipeline.run(Some("https://www.imdb.com/title/tt0111161/")).await?;
//!     println!("{} -> {}/{}", result.metadata.title, result.classification.category,
//!         result.classification.subcategory);
//!     Ok(())
//! }
//! ```

mod error;

pub mod classifier;
pub mod config;
pub mod domain;
pub mod extractor;
pub mod fetcher;
pub mod pipeline;
pub mod server;
pub mod summarizer;
pub mod taxonomy;

#[cfg(test)]
mod testing;

pub use error::Error;

/// Re-export of types module for public use
pub mod prelude {
    pub use crate::classifier::{Classification, Classifier};
    pub use crate::error::Error;
    pub use crate::error::Result;
    pub use crate::extractor::ExtractedMetadata;
    pub use crate::pipeline::{Pipeline, PipelineError, PipelineResult};
    pub use crate::taxonomy::{CategoryRule, Taxonomy};
}
