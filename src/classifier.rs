//! # Rule-based page classification
//!
//! Assigns a (category, subcategory) pair to a page using the [`Taxonomy`].
//! Classification runs two passes over the table in declaration order:
//!
//! 1. **Domain pass**: the first rule with a domain substring contained in the
//!    page's hostname wins outright. No keyword scoring happens.
//! 2. **Keyword pass**: every rule is scored by the number of its keywords
//!    found in a lower-cased blob of title, description, URL and keywords.
//!    The highest score wins; on a tie the earlier rule is kept.
//!
//! When no rule scores, [`Classification::fallback`] is returned. The result is a
//! pure function of the inputs and the injected table.

use std::sync::Arc;

use serde::Serialize;
use tracing::trace;

use crate::domain::resolve_domain;
use crate::taxonomy::{CategoryRule, Taxonomy};

/// A (category, subcategory) label
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub category: String,
    pub subcategory: String,
}

impl Classification {
    pub fn new(category: impl Into<String>, subcategory: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            subcategory: subcategory.into(),
        }
    }

    /// The pair returned when no rule matches.
    ///
    /// Not present in the built-in table.
    pub fn fallback() -> Self {
        Self::new(DEFAULT_CATEGORY, DEFAULT_SUBCATEGORY)
    }
}

impl From<&CategoryRule> for Classification {
    fn from(rule: &CategoryRule) -> Self {
        Self::new(rule.category.clone(), rule.subcategory.clone())
    }
}

/// Category used when no rule matches
pub const DEFAULT_CATEGORY: &str = "Edge Use Cases";

/// Subcategory used when no rule matches
pub const DEFAULT_SUBCATEGORY: &str = "Niche Communities";

/// Classifies pages against an immutable taxonomy
#[derive(Debug, Clone)]
pub struct Classifier {
    taxonomy: Arc<Taxonomy>,
}

impl Classifier {
    /// Create a classifier over `taxonomy`
    pub fn new(taxonomy: Arc<Taxonomy>) -> Self {
        Self { taxonomy }
    }

    /// The table this classifier evaluates
    pub fn taxonomy(&self) -> &Taxonomy {
        &self.taxonomy
    }

    /// Classify a page from its extracted signals.
    ///
    /// `url` is the raw URL string as supplied by the caller.
    pub fn classify(
        &self,
        title: &str,
        description: &str,
        url: &str,
        keywords: &[String],
    ) -> Classification {
        let domain = resolve_domain(url);
        if let Some(rule) = self.match_domain(&domain) {
            trace!("Domain {} matched {}/{}", domain, rule.category, rule.subcategory);
            return rule.into();
        }

        let blob = search_blob(title, description, url, keywords);
        match self.best_keyword_match(&blob) {
            Some((rule, score)) => {
                trace!(
                    "Keyword pass chose {}/{} with score {}",
                    rule.category, rule.subcategory, score
                );
                rule.into()
            }
            None => Classification::fallback(),
        }
    }

    fn match_domain(&self, domain: &str) -> Option<&CategoryRule> {
        self.taxonomy
            .rules()
            .iter()
            .find(|rule| rule.matches_domain(domain))
    }

    /// Highest-scoring rule, earliest first on ties; `None` if nothing scores
    fn best_keyword_match(&self, blob: &str) -> Option<(&CategoryRule, usize)> {
        let mut best: Option<(&CategoryRule, usize)> = None;
        for rule in self.taxonomy.rules() {
            let score = rule.keyword_score(blob);
            if score > best.map_or(0, |(_, s)| s) {
                best = Some((rule, score));
            }
        }
        best
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(Arc::new(Taxonomy::builtin()))
    }
}

/// Lower-cased, space-joined title, description, url and keywords
fn search_blob(title: &str, description: &str, url: &str, keywords: &[String]) -> String {
    format!("{} {} {} {}", title, description, url, keywords.join(" ")).to_lowercase()
}
