//! Splitting a project file into delimiter lines, header lines, and body.

use crate::error::FrontMatterError;
use crate::fields::{key_value, strip_matching_quotes};

const DELIMITER: &str = "---";

/// A project file split around its front matter.
///
/// All slices borrow from the original text, each line keeping its line
/// terminator, so `opening + lines + closing + body` reproduces the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontMatter<'a> {
    opening: &'a str,
    lines: Vec<&'a str>,
    closing: &'a str,
    body: &'a str,
}

impl<'a> FrontMatter<'a> {
    /// Locate the header: the first line must be `---` (surrounding
    /// whitespace allowed) and the next such line closes it.
    pub fn split(text: &'a str) -> Result<Self, FrontMatterError> {
        let mut lines = text.split_inclusive('\n');

        let opening = lines
            .next()
            .filter(|line| line.trim() == DELIMITER)
            .ok_or(FrontMatterError::MissingOpeningDelimiter)?;

        let mut header = Vec::new();
        let mut consumed = opening.len();
        for line in lines {
            consumed += line.len();
            if line.trim() == DELIMITER {
                return Ok(Self {
                    opening,
                    lines: header,
                    closing: line,
                    body: &text[consumed..],
                });
            }
            header.push(line);
        }

        Err(FrontMatterError::MissingClosingDelimiter)
    }

    /// Header lines between the delimiters.
    #[must_use]
    pub fn lines(&self) -> &[&'a str] {
        &self.lines
    }

    #[must_use]
    pub const fn body(&self) -> &'a str {
        self.body
    }

    /// Line terminator used by the opening delimiter; new lines follow it.
    #[must_use]
    pub fn newline(&self) -> &'static str {
        if self.opening.ends_with("\r\n") {
            "\r\n"
        } else {
            "\n"
        }
    }

    /// Value of the first top-level `key:` line, unquoted and trimmed.
    #[must_use]
    pub fn field(&self, key: &str) -> Option<String> {
        self.lines
            .iter()
            .find_map(|line| key_value(line, key))
            .map(|raw| strip_matching_quotes(raw).trim().to_string())
    }

    /// Rebuild the file with replacement header lines.
    #[must_use]
    pub fn reassemble<S: AsRef<str>>(&self, header: &[S]) -> String {
        let header_len: usize = header.iter().map(|line| line.as_ref().len()).sum();
        let mut out = String::with_capacity(
            self.opening.len() + header_len + self.closing.len() + self.body.len(),
        );
        out.push_str(self.opening);
        for line in header {
            out.push_str(line.as_ref());
        }
        out.push_str(self.closing);
        out.push_str(self.body);
        out
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const PROJECT: &str = "---\ntitle: \"Widget\"\nproject_url: https://github.com/acme/widget\nid: 'widget-01'\n---\n# Widget\n\nBody text.\n";

    #[test]
    fn splits_header_and_body() {
        let document = FrontMatter::split(PROJECT).expect("front matter should split");
        assert_eq!(document.lines().len(), 3);
        assert_eq!(document.body(), "# Widget\n\nBody text.\n");
        assert_eq!(document.newline(), "\n");
    }

    #[test]
    fn reads_unquoted_fields() {
        let document = FrontMatter::split(PROJECT).expect("front matter should split");
        assert_eq!(document.field("title").as_deref(), Some("Widget"));
        assert_eq!(document.field("id").as_deref(), Some("widget-01"));
        assert_eq!(
            document.field("project_url").as_deref(),
            Some("https://github.com/acme/widget")
        );
        assert_eq!(document.field("bounties"), None);
    }

    #[test]
    fn reassemble_with_same_lines_is_identity() {
        let text = "--- \r\ntitle: x\r\n---\r\nbody";
        let document = FrontMatter::split(text).expect("front matter should split");
        assert_eq!(document.newline(), "\r\n");
        assert_eq!(document.reassemble(document.lines()), text);
    }

    #[test]
    fn closing_delimiter_without_newline_is_accepted() {
        let document = FrontMatter::split("---\ntitle: x\n---").expect("should split");
        assert_eq!(document.body(), "");
        assert_eq!(document.lines(), &["title: x\n"]);
    }

    #[test]
    fn rejects_missing_delimiters() {
        assert_eq!(
            FrontMatter::split("title: x\n---\n"),
            Err(FrontMatterError::MissingOpeningDelimiter)
        );
        assert_eq!(
            FrontMatter::split(""),
            Err(FrontMatterError::MissingOpeningDelimiter)
        );
        assert_eq!(
            FrontMatter::split("---\ntitle: x\n"),
            Err(FrontMatterError::MissingClosingDelimiter)
        );
    }
}
