//! Metadata extraction from raw HTML
//!
//! Turns one HTML document into an [`ExtractedMetadata`] record. Extraction
//! never fails: every missing element resolves to a documented fallback.
//!
//! HTML access goes through the [`HtmlDocument`] trait so the extraction rules
//! can run against any parsed representation, including test fixtures.

mod document;

pub use document::{HtmlDocument, ScraperDocument};

use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;
use tracing::debug;
use url::Url;

/// Title used when the page offers none
pub const TITLE_PLACEHOLDER: &str = "No title found";

/// Maximum number of keywords kept
pub const MAX_KEYWORDS: usize = 10;

/// Maximum number of headings contributing keywords
pub const MAX_HEADINGS: usize = 5;

/// Minimum keyword length in characters
pub const MIN_KEYWORD_LEN: usize = 3;

/// Maximum keyword length in characters
pub const MAX_KEYWORD_LEN: usize = 49;

/// Maximum body excerpt length in characters
pub const BODY_EXCERPT_LEN: usize = 1000;

const TITLE_META: &[&str] = &[
    r#"meta[property="og:title"]"#,
    r#"meta[name="twitter:title"]"#,
];

const DESCRIPTION_META: &[&str] = &[
    r#"meta[name="description"]"#,
    r#"meta[property="og:description"]"#,
    r#"meta[name="twitter:description"]"#,
];

const IMAGE_SOURCES: &[(&str, &str)] = &[
    (r#"meta[property="og:image"]"#, "content"),
    (r#"meta[name="twitter:image"]"#, "content"),
    (r#"link[rel="icon"]"#, "href"),
];

static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Metadata extracted from a single page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedMetadata {
    /// Page title, never empty
    pub title: String,

    /// Page description, possibly empty
    pub description: String,

    /// Absolute URL of the representative image
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    /// Meta keywords followed by heading texts
    pub keywords: Vec<String>,

    /// Whitespace-collapsed body text
    #[serde(rename = "bodyContent")]
    pub body_excerpt: String,
}

/// Parse `html` and extract its metadata.
///
/// `page_url` is used to resolve relative image paths.
pub fn extract_metadata(html: &str, page_url: &Url) -> ExtractedMetadata {
    let document = ScraperDocument::parse(html);
    extract_from_document(&document, page_url)
}

/// Extract metadata from an already parsed document
pub fn extract_from_document<D: HtmlDocument + ?Sized>(
    document: &D,
    page_url: &Url,
) -> ExtractedMetadata {
    let metadata = ExtractedMetadata {
        title: extract_title(document),
        description: first_content(document, DESCRIPTION_META).unwrap_or_default(),
        image: extract_image(document)
            .and_then(|image| resolve_image_url(&image, page_url)),
        keywords: extract_keywords(document),
        body_excerpt: excerpt(&document.body_text(), BODY_EXCERPT_LEN),
    };

    debug!(
        "Extracted metadata from {}: title={:?}, {} keywords",
        page_url,
        metadata.title,
        metadata.keywords.len()
    );
    metadata
}

fn extract_title<D: HtmlDocument + ?Sized>(document: &D) -> String {
    let title = document.select_text("title").concat();
    let title = title.trim();
    if !title.is_empty() {
        return title.to_string();
    }
    first_content(document, TITLE_META).unwrap_or_else(|| TITLE_PLACEHOLDER.to_string())
}

fn extract_image<D: HtmlDocument + ?Sized>(document: &D) -> Option<String> {
    IMAGE_SOURCES
        .iter()
        .filter_map(|(selector, attr)| document.select_attr(selector, attr))
        .find(|value| !value.is_empty())
}

fn extract_keywords<D: HtmlDocument + ?Sized>(document: &D) -> Vec<String> {
    let meta = document
        .select_attr(r#"meta[name="keywords"]"#, "content")
        .unwrap_or_default();

    let meta_keywords = meta
        .split(',')
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(str::to_string);

    let headings = document
        .select_text("h1, h2, h3")
        .into_iter()
        .take(MAX_HEADINGS);

    meta_keywords
        .chain(headings)
        .filter(|k| (MIN_KEYWORD_LEN..=MAX_KEYWORD_LEN).contains(&k.chars().count()))
        .take(MAX_KEYWORDS)
        .collect()
}

/// First non-empty `content` attribute among `selectors`
fn first_content<D: HtmlDocument + ?Sized>(document: &D, selectors: &[&str]) -> Option<String> {
    selectors
        .iter()
        .filter_map(|selector| document.select_attr(selector, "content"))
        .find(|value| !value.is_empty())
}

/// Resolve an image reference against the origin of `page_url`.
///
/// Values that already start with `http` pass through unchanged.
pub fn resolve_image_url(image: &str, page_url: &Url) -> Option<String> {
    if image.is_empty() {
        return None;
    }
    if image.starts_with("http") {
        return Some(image.to_string());
    }

    let origin = page_url.origin().ascii_serialization();
    let base = Url::parse(&origin).unwrap_or_else(|_| page_url.clone());
    match base.join(image) {
        Ok(resolved) => Some(resolved.to_string()),
        Err(e) => {
            debug!("Dropping unresolvable image '{}': {}", image, e);
            None
        }
    }
}

/// Collapse whitespace runs, trim, and cap at `max_chars` characters
pub fn excerpt(text: &str, max_chars: usize) -> String {
    WHITESPACE
        .replace_all(text, " ")
        .trim()
        .chars()
        .take(max_chars)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn page() -> Url {
        Url::parse("https://example.com/articles/one").unwrap()
    }

    /// Fixture document answering from fixed tables
    #[derive(Default)]
    struct FixtureDocument {
        texts: HashMap<&'static str, Vec<String>>,
        attrs: HashMap<(&'static str, &'static str), String>,
        body: String,
    }

    impl HtmlDocument for FixtureDocument {
        fn select_text(&self, selector: &str) -> Vec<String> {
            self.texts.get(selector).cloned().unwrap_or_default()
        }

        fn select_attr(&self, selector: &str, attr: &str) -> Option<String> {
            self.attrs
                .iter()
                .find(|((s, a), _)| *s == selector && *a == attr)
                .map(|(_, v)| v.clone())
        }

        fn body_text(&self) -> String {
            self.body.clone()
        }
    }

    #[test]
    fn test_full_document() {
        let html = r#"
            <html>
              <head>
                <title>  The Shawshank Redemption  </title>
                <meta name="description" content="A classic film">
                <meta property="og:image" content="/poster.jpg">
                <meta name="keywords" content="drama, prison ,, hope">
              </head>
              <body>
                <h1>Shawshank</h1>
                <p>Two   imprisoned
                   men bond.</p>
              </body>
            </html>"#;

        let metadata = extract_metadata(html, &page());
        assert_eq!(metadata.title, "The Shawshank Redemption");
        assert_eq!(metadata.description, "A classic film");
        assert_eq!(metadata.image.as_deref(), Some("https://example.com/poster.jpg"));
        assert_eq!(metadata.keywords, vec!["drama", "prison", "hope", "Shawshank"]);
        assert_eq!(metadata.body_excerpt, "Shawshank Two imprisoned men bond.");
    }

    #[test]
    fn test_empty_document_fallbacks() {
        let metadata = extract_metadata("", &page());
        assert_eq!(metadata.title, TITLE_PLACEHOLDER);
        assert_eq!(metadata.description, "");
        assert_eq!(metadata.image, None);
        assert!(metadata.keywords.is_empty());
        assert_eq!(metadata.body_excerpt, "");
    }

    #[test]
    fn test_title_fallback_order() {
        let html = r#"<head><title>   </title>
            <meta name="twitter:title" content="Twitter">
            <meta property="og:title" content="OpenGraph"></head>"#;
        assert_eq!(extract_metadata(html, &page()).title, "OpenGraph");

        let html = r#"<head><meta name="twitter:title" content="Twitter"></head>"#;
        assert_eq!(extract_metadata(html, &page()).title, "Twitter");
    }

    #[test]
    fn test_description_fallback_order() {
        let html = r#"<head><meta name="description" content="">
            <meta name="twitter:description" content="tw">
            <meta property="og:description" content="og"></head>"#;
        assert_eq!(extract_metadata(html, &page()).description, "og");
    }

    #[test]
    fn test_image_falls_back_to_icon() {
        let html = r#"<head><link rel="icon" href="/favicon.png"></head>"#;
        assert_eq!(
            extract_metadata(html, &page()).image.as_deref(),
            Some("https://example.com/favicon.png")
        );
    }

    #[test]
    fn test_resolve_image_url() {
        let origin = Url::parse("https://example.com").unwrap();
        assert_eq!(
            resolve_image_url("/favicon.png", &origin).as_deref(),
            Some("https://example.com/favicon.png")
        );
        assert_eq!(
            resolve_image_url("https://cdn.example.com/x.png", &origin).as_deref(),
            Some("https://cdn.example.com/x.png")
        );
        assert_eq!(resolve_image_url("", &origin), None);
    }

    #[test]
    fn test_resolve_image_url_uses_origin_not_path() {
        let page = Url::parse("http://example.com:8080/a/b/page.html").unwrap();
        assert_eq!(
            resolve_image_url("img/x.png", &page).as_deref(),
            Some("http://example.com:8080/img/x.png")
        );
        assert_eq!(
            resolve_image_url("//cdn.example.com/x.png", &page).as_deref(),
            Some("http://cdn.example.com/x.png")
        );
    }

    #[test]
    fn test_keywords_length_bounds_and_cap() {
        let long = "x".repeat(50);
        let edge = "y".repeat(49);
        let tail: Vec<String> = (1..=10).map(|i| format!("kw{i}")).collect();
        let meta = format!("ab, abc, {long}, {edge}, {}", tail.join(", "));
        let mut doc = FixtureDocument::default();
        doc.attrs.insert((r#"meta[name="keywords"]"#, "content"), meta);

        let keywords = extract_from_document(&doc, &page()).keywords;
        assert_eq!(keywords.len(), MAX_KEYWORDS);
        assert_eq!(keywords[0], "abc");
        assert_eq!(keywords[1], edge);
        assert!(!keywords.contains(&long));
        assert!(keywords.iter().all(|k| (3..=49).contains(&k.chars().count())));
    }

    #[test]
    fn test_only_first_five_headings_count() {
        let mut doc = FixtureDocument::default();
        doc.texts.insert(
            "h1, h2, h3",
            (1..=7).map(|i| format!("Heading {i}")).collect(),
        );
        let keywords = extract_from_document(&doc, &page()).keywords;
        assert_eq!(keywords.len(), 5);
        assert_eq!(keywords.last().unwrap(), "Heading 5");
    }

    #[test]
    fn test_short_headings_still_consume_slots() {
        let mut doc = FixtureDocument::default();
        doc.texts.insert(
            "h1, h2, h3",
            vec!["a", "b", "c", "d", "e", "Sixth heading"]
                .into_iter()
                .map(String::from)
                .collect(),
        );
        assert!(extract_from_document(&doc, &page()).keywords.is_empty());
    }

    #[test]
    fn test_excerpt_is_capped() {
        let mut doc = FixtureDocument::default();
        doc.body = format!("  {}\n\t end", "word ".repeat(400));
        let body = extract_from_document(&doc, &page()).body_excerpt;
        assert_eq!(body.chars().count(), BODY_EXCERPT_LEN);
        assert!(body.starts_with("word word"));
    }

    #[test]
    fn test_excerpt_counts_characters() {
        assert_eq!(excerpt(" é\u{a0}\u{a0}ü ", 2), "é ");
        assert_eq!(excerpt("a\n\n b", 10), "a b");
    }

    #[test]
    fn test_serialized_field_names() {
        let metadata = extract_metadata("<title>T</title>", &page());
        let json = serde_json::to_value(&metadata).unwrap();
        assert_eq!(json["title"], "T");
        assert!(json.get("bodyContent").is_some());
        assert!(json.get("image").is_none());
    }
}
