//! Surgical edits of the front matter header.

use std::ops::Range;

use bounty_core::{ParsedBounty, parse_repo_key};

use crate::document::FrontMatter;
use crate::error::FrontMatterError;
use crate::fields::is_key_line;
use crate::render::render_bounties;

/// Span of the top-level `key` block within `lines`.
///
/// The span starts at the key line and extends over every following line
/// that is blank or indented with a space or tab. It stops at the next
/// top-level line or the end of the header.
#[must_use]
pub fn block_span<S: AsRef<str>>(lines: &[S], key: &str) -> Option<Range<usize>> {
    let start = lines
        .iter()
        .position(|line| is_key_line(line.as_ref(), key))?;

    let mut end = start + 1;
    while let Some(candidate) = lines.get(end).map(AsRef::<str>::as_ref) {
        let continues = candidate.trim().is_empty() || candidate.starts_with([' ', '\t']);
        if !continues {
            break;
        }
        end += 1;
    }

    Some(start..end)
}

/// Replace the first top-level `key:` line with `key: value`, or append it.
pub fn set_field(lines: &mut Vec<String>, key: &str, value: &str, newline: &str) {
    let replacement = format!("{key}: {value}{newline}");
    match lines.iter_mut().find(|line| is_key_line(line, key)) {
        Some(line) => *line = replacement,
        None => lines.push(replacement),
    }
}

/// Rewrite the `bounties:` block of a project file.
///
/// With `project_url_override` the `project_url:` line is rewritten too, and
/// bounties are compared against the override's repo key when deciding
/// whether to spell out `repo`. Everything outside those two spans is
/// returned byte-for-byte.
///
/// # Errors
///
/// Fails when the file has no front matter, no `project_url` field, or a
/// `project_url` (after the override) without a parseable repo key.
pub fn update_bounties(
    text: &str,
    bounties: &[ParsedBounty],
    project_url_override: Option<&str>,
) -> Result<String, FrontMatterError> {
    let document = FrontMatter::split(text)?;
    let newline = document.newline();

    let project_url = document
        .field("project_url")
        .filter(|url| !url.is_empty())
        .ok_or(FrontMatterError::MissingField {
            field: "project_url",
        })?;

    let project_url_override = project_url_override
        .map(str::trim)
        .filter(|url| !url.is_empty());
    let effective_url = project_url_override.unwrap_or(&project_url);
    let main_repo_key =
        parse_repo_key(effective_url).ok_or_else(|| FrontMatterError::UnparseableProjectUrl {
            url: effective_url.to_string(),
        })?;

    let mut lines: Vec<String> = document
        .lines()
        .iter()
        .map(|line| (*line).to_string())
        .collect();

    if let Some(url) = project_url_override {
        set_field(&mut lines, "project_url", url, newline);
    }

    let block = render_bounties(bounties, &main_repo_key, newline);
    match block_span(&lines, "bounties") {
        Some(span) => {
            lines.splice(span, block);
        }
        None => lines.extend(block),
    }

    Ok(document.reassemble(&lines))
}
