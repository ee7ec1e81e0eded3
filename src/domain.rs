//! Hostname resolution for classification

use url::Url;

/// Return the lower-cased hostname of `url`, or an empty string when `url`
/// is not a parseable absolute URL.
pub fn resolve_domain(url: &str) -> String {
    Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(str::to_lowercase))
        .unwrap_or_default()
}
