//! # Taxonomy Table
//!
//! The fixed, ordered list of category rules the classifier evaluates. Order
//! is significant: the domain pass returns the first matching rule and the
//! keyword pass breaks ties in favour of the earlier rule.
//!
//! A [`Taxonomy`] is immutable once built and is meant to be shared behind an
//! `Arc` by every concurrently running pipeline.

mod rules;

use serde::Serialize;

/// A single classification rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryRule {
    /// Top-level category
    pub category: String,

    /// Subcategory within the category
    pub subcategory: String,

    /// Lower-case substrings scored against the search blob
    pub keywords: Vec<String>,

    /// Substrings matched against the resolved hostname
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub domains: Vec<String>,
}

impl CategoryRule {
    /// Create a rule with no domain list
    pub fn new(
        category: impl Into<String>,
        subcategory: impl Into<String>,
        keywords: &[&str],
    ) -> Self {
        Self {
            category: category.into(),
            subcategory: subcategory.into(),
            keywords: keywords.iter().map(|k| k.to_lowercase()).collect(),
            domains: Vec::new(),
        }
    }

    /// Attach domain substrings to the rule
    pub fn with_domains(mut self, domains: &[&str]) -> Self {
        self.domains = domains.iter().map(|d| d.to_lowercase()).collect();
        self
    }

    /// Whether any of this rule's domain substrings occurs in `domain`
    pub fn matches_domain(&self, domain: &str) -> bool {
        self.domains.iter().any(|d| domain.contains(d.as_str()))
    }

    /// Number of distinct keywords occurring in the lower-cased `blob`
    pub fn keyword_score(&self, blob: &str) -> usize {
        self.keywords
            .iter()
            .filter(|k| blob.contains(k.as_str()))
            .count()
    }
}

/// An immutable, ordered set of [`CategoryRule`]s
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct Taxonomy {
    rules: Vec<CategoryRule>,
}

impl Taxonomy {
    /// Build a taxonomy from rules in evaluation order.
    ///
    /// Rules with an empty category or subcategory are dropped.
    pub fn new(rules: Vec<CategoryRule>) -> Self {
        let rules = rules
            .into_iter()
            .filter(|r| !r.category.is_empty() && !r.subcategory.is_empty())
            .collect();
        Self { rules }
    }

    /// The table shipped with pagelens
    pub fn builtin() -> Self {
        Self::new(rules::builtin_rules())
    }

    /// Rules in declaration order
    pub fn rules(&self) -> &[CategoryRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for Taxonomy {
    fn default() -> Self {
        Self::builtin()
    }
}
