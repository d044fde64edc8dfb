//! Package name extraction from listing markup.
//!
//! The listing page tags each package entry with a `name`-classed element.
//! Extraction deliberately stays a thin pattern match over the markup;
//! scraping robustness is out of scope.

use once_cell::sync::Lazy;
use regex::Regex;

// Matches an opening tag whose class attribute contains the `name` token,
// capturing the element's text content up to the next tag boundary.
static NAME_ELEMENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"<[A-Za-z][A-Za-z0-9]*\s[^>]*class="(?:[^"]*\s)?name(?:\s[^"]*)?"[^>]*>([^<]*)<"#)
        .unwrap()
});

/// Extract package names from one listing page, in document order.
///
/// Whitespace around each name is trimmed; empty matches are dropped.
pub fn extract_names(html: &str) -> Vec<String> {
    NAME_ELEMENT
        .captures_iter(html)
        .map(|captures| captures[1].trim().to_string())
        .filter(|name| !name.is_empty())
        .collect()
}
