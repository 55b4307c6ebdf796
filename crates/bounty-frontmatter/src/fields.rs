//! Top-level `key: value` line helpers.

/// Whether `line` opens the top-level field `key`.
///
/// Only unindented lines count, and the key must be followed directly by
/// `:`. Both `bounties:` and `bounties: []` open the `bounties` field.
#[must_use]
pub fn is_key_line(line: &str, key: &str) -> bool {
    line.strip_prefix(key)
        .is_some_and(|rest| rest.starts_with(':'))
}

/// Raw value of a top-level field line, or `None` when `line` is not `key`.
pub(crate) fn key_value<'a>(line: &'a str, key: &str) -> Option<&'a str> {
    let line = line.trim_end_matches(['\r', '\n']);
    let rest = line.strip_prefix(key)?.strip_prefix(':')?;
    Some(rest.trim())
}

/// Strip one pair of matching single or double quotes.
#[must_use]
pub fn strip_matching_quotes(raw: &str) -> &str {
    for quote in ['"', '\''] {
        if raw.len() >= 2
            && let Some(inner) = raw.strip_prefix(quote).and_then(|r| r.strip_suffix(quote))
        {
            return inner;
        }
    }
    raw
}
