//! Queryable access to parsed HTML

use scraper::{Html, Selector};
use tracing::warn;

/// Elements whose text never reaches the rendered page
const HIDDEN_ELEMENTS: &[&str] = &["script", "style", "noscript", "template"];

/// Read access to a parsed HTML document.
///
/// Implementations must be lenient: malformed markup and selectors that
/// match nothing yield empty results, never errors.
pub trait HtmlDocument {
    /// Text content of every element matching `selector`, in document order
    fn select_text(&self, selector: &str) -> Vec<String>;

    /// Value of `attr` on the first element matching `selector`
    fn select_attr(&self, selector: &str, attr: &str) -> Option<String>;

    /// Visible text of the document body, unnormalized
    fn body_text(&self) -> String;
}

/// [`HtmlDocument`] backed by the `scraper` HTML5 parser
pub struct ScraperDocument {
    html: Html,
}

impl ScraperDocument {
    /// Parse a full document. Never fails; the parser recovers from any input.
    pub fn parse(markup: &str) -> Self {
        Self {
            html: Html::parse_document(markup),
        }
    }

    fn selector(selector: &str) -> Option<Selector> {
        match Selector::parse(selector) {
            Ok(selector) => Some(selector),
            Err(e) => {
                warn!("Failed to parse selector '{}': {}", selector, e);
                None
            }
        }
    }
}

impl HtmlDocument for ScraperDocument {
    fn select_text(&self, selector: &str) -> Vec<String> {
        let Some(selector) = Self::selector(selector) else {
            return Vec::new();
        };
        self.html
            .select(&selector)
            .map(|element| element.text().collect::<String>())
            .collect()
    }

    fn select_attr(&self, selector: &str, attr: &str) -> Option<String> {
        let selector = Self::selector(selector)?;
        self.html
            .select(&selector)
            .next()
            .and_then(|element| element.value().attr(attr))
            .map(|s| s.to_string())
    }

    fn body_text(&self) -> String {
        let Some(selector) = Self::selector("body") else {
            return String::new();
        };
        let mut text = String::new();
        for body in self.html.select(&selector) {
            for node in body.descendants() {
                let Some(fragment) = node.value().as_text() else {
                    continue;
                };
                let hidden = node.ancestors().any(|ancestor| {
                    ancestor
                        .value()
                        .as_element()
                        .is_some_and(|e| HIDDEN_ELEMENTS.contains(&e.name()))
                });
                if !hidden {
                    text.push_str(fragment);
                }
            }
        }
        text
    }
}
