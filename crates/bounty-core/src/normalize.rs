//! Token normalization for fuzzy name matching.

/// Reduce `value` to lowercase ASCII letters and digits.
///
/// Everything else, including whitespace, punctuation, and non-ASCII
/// letters, is dropped. The projection is idempotent.
///
/// ```
/// use bounty_core::normalize_token;
///
/// assert_eq!(normalize_token("Widget Project"), "widgetproject");
/// assert_eq!(normalize_token("foo-bar_2.0"), "foobar20");
/// ```
#[must_use]
pub fn normalize_token(value: &str) -> String {
    value
        .chars()
        .flat_map(char::to_lowercase)
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        .collect()
}
