//! Profile link normalization and classification

use crate::schema::ProfileSet;
use regex::Regex;
use std::sync::LazyLock;

static LINKEDIN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https?://(www\.)?linkedin\.com/in/[A-Za-z0-9_-]+$")
        .expect("LinkedIn pattern is valid")
});

static GITHUB_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https?://(www\.)?github\.com/[A-Za-z0-9_-]+$").expect("GitHub pattern is valid")
});

/// Which profile a normalized link points at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    LinkedIn,
    GitHub,
}

impl Provider {
    /// Match a normalized link against the username-only profile shapes.
    /// LinkedIn is tested first.
    pub fn detect(normalized: &str) -> Option<Self> {
        if LINKEDIN_RE.is_match(normalized) {
            Some(Provider::LinkedIn)
        } else if GITHUB_RE.is_match(normalized) {
            Some(Provider::GitHub)
        } else {
            None
        }
    }
}

impl std::fmt::Display for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Provider::LinkedIn => write!(f, "linkedin"),
            Provider::GitHub => write!(f, "github"),
        }
    }
}

/// Strip surrounding whitespace, the query string and trailing slashes.
///
/// Whitespace left exposed by the cut is dropped too, so the function is
/// idempotent.
pub fn normalize(raw: &str) -> String {
    let trimmed = raw.trim();
    let before_query = match trimmed.split_once('?') {
        Some((head, _)) => head,
        None => trimmed,
    };
    before_query
        .trim_end_matches(|c: char| c == '/' || c.is_whitespace())
        .to_string()
}

/// Classify raw links in discovery order. Later matches replace earlier ones.
pub fn classify<I, S>(links: I) -> ProfileSet
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut profiles = ProfileSet::default();

    for link in links {
        let link = normalize(link.as_ref());
        let Some(provider) = Provider::detect(&link) else {
            continue;
        };
        tracing::trace!(%provider, %link, "profile match");
        match provider {
            Provider::LinkedIn => profiles.linkedin = Some(link),
            Provider::GitHub => profiles.github = Some(link),
        }
    }

    profiles
}
