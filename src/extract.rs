//! URL extraction from plain document text

use regex::Regex;
use std::sync::LazyLock;

/// Scheme followed by a run of non-whitespace.
static URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https?://\S+").expect("URL pattern is valid"));

/// Extract every URL candidate from text content, in reading order.
///
/// Unlike a link checker this keeps duplicates and trailing punctuation:
/// classification is last-match-wins, so every occurrence counts.
pub fn extract_urls(content: &str) -> Vec<String> {
    URL_RE
        .find_iter(content)
        .map(|m| m.as_str().to_string())
        .collect()
}
