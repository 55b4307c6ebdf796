//! Run options and the mismatch policy.

use bounty_catalog::MatchOptions;
use serde::{Deserialize, Serialize};

use crate::agreement::RowClaim;

/// Switches that shape one reconciliation run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconcileOptions {
    /// Compute and report changes without writing files.
    #[serde(default)]
    pub dry_run: bool,

    /// Rewrite `project_url` to the row's repository on mismatch.
    #[serde(default)]
    pub sync_project_url: bool,

    /// Fail the row (and the run) on any mismatch that was not synced.
    #[serde(default)]
    pub strict_project_url_match: bool,

    /// Match rows by name when their repo key is unknown to the catalog.
    #[serde(default)]
    pub name_fallback_on_repo_miss: bool,
}

impl ReconcileOptions {
    /// Matcher options for this run.
    ///
    /// Syncing implies the name fallback: a row can only carry a repository
    /// that disagrees with its project if it was matched by name.
    #[must_use]
    pub const fn match_options(self) -> MatchOptions {
        MatchOptions {
            name_fallback_on_repo_miss: self.name_fallback_on_repo_miss || self.sync_project_url,
        }
    }
}

/// What to do with a row whose claim disagrees with its project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Rewrite `project_url` and write bounties under the new identity.
    Sync { project_url: String },
    /// Report the mismatch, write bounties under the existing identity.
    Warn,
    /// Report the mismatch and skip the write.
    Fail,
}

/// Apply the mismatch policy to a disagreeing claim.
///
/// Syncing needs a full repository identity; an organization-only claim
/// falls through to warn or fail.
#[must_use]
pub fn resolve_mismatch(claim: &RowClaim, options: ReconcileOptions) -> Resolution {
    if options.sync_project_url
        && let RowClaim::Repo(identity) = claim
    {
        return Resolution::Sync {
            project_url: identity.canonical_url(),
        };
    }

    if options.strict_project_url_match {
        Resolution::Fail
    } else {
        Resolution::Warn
    }
}
