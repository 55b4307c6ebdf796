//! CSV rows as seen by the reconciler.

use bounty_core::{ParsedBounty, parse_row_bounties};

pub const PROJECT_NAME_COLUMN: &str = "Participating Project";
pub const PROJECT_REPO_URL_COLUMN: &str = "Project Repo URL";

/// One export row, reduced to the facts reconciliation needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BountyRow {
    /// Trimmed display name from `Participating Project`.
    pub project_name: String,
    /// Trimmed `Project Repo URL`; blank counts as absent.
    pub project_repo_url: Option<String>,
    /// Every parseable bounty slot, in slot order.
    pub bounties: Vec<ParsedBounty>,
}

impl BountyRow {
    /// Build a row from a header-name lookup.
    ///
    /// Columns the export lacks are treated as empty.
    pub fn from_columns<'a, F>(column: F) -> Self
    where
        F: Fn(&str) -> Option<&'a str>,
    {
        let project_name = column(PROJECT_NAME_COLUMN)
            .unwrap_or_default()
            .trim()
            .to_string();
        let project_repo_url = column(PROJECT_REPO_URL_COLUMN)
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .map(str::to_string);

        Self {
            project_name,
            project_repo_url,
            bounties: parse_row_bounties(&column),
        }
    }
}
