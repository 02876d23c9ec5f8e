//! Text fragment filtering and cleanup.

use std::sync::LazyLock;

use regex::Regex;

/// Runs of whitespace, including the newlines of indented source HTML.
#[allow(clippy::expect_used)]
static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Whether a fragment is real content rather than decoration.
///
/// After trimming, the fragment must be at least two characters long and
/// start with an alphanumeric character.
///
/// ```
/// use asthma_report::text::is_valid_text;
///
/// assert!(is_valid_text("Hi!"));
/// assert!(!is_valid_text("A"));
/// assert!(!is_valid_text("-hi"));
/// ```
#[must_use]
pub fn is_valid_text(text: &str) -> bool {
    let text = text.trim();
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.is_alphanumeric() && chars.next().is_some(),
        None => false,
    }
}

/// Trim and collapse internal whitespace to single spaces.
#[must_use]
pub fn normalize(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text.trim(), " ").into_owned()
}

/// Trimmed, lower-cased form used to match labels against headings.
#[must_use]
pub fn match_key(text: &str) -> String {
    text.trim().to_lowercase()
}
