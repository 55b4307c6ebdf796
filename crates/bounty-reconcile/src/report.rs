//! Aggregated outcome of a run.

use std::fmt;
use std::path::PathBuf;

use bounty_catalog::{DuplicateRepoKey, MatchOutcome};
use serde::Serialize;

/// Why a row could not be mapped onto a project file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum UnmatchedReason {
    /// The row's repo URL names a repository no project claims.
    UnknownRepo { repo_key: String },
    /// Several projects fit the row name equally well.
    Ambiguous {
        candidates: Vec<PathBuf>,
    },
    /// No project fits the row name.
    NoMatch,
}

impl UnmatchedReason {
    /// Reason for a non-matching outcome; `None` for a match.
    #[must_use]
    pub fn from_outcome(outcome: &MatchOutcome<'_>) -> Option<Self> {
        match outcome {
            MatchOutcome::Matched(_) => None,
            MatchOutcome::RepoKeyMiss { repo_key } => Some(Self::UnknownRepo {
                repo_key: repo_key.clone(),
            }),
            MatchOutcome::Ambiguous { candidates } => Some(Self::Ambiguous {
                candidates: candidates.clone(),
            }),
            MatchOutcome::NoCandidate => Some(Self::NoMatch),
        }
    }
}

impl fmt::Display for UnmatchedReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownRepo { repo_key } => write!(f, "no project file for repo {repo_key}"),
            Self::Ambiguous { candidates } => {
                f.write_str("ambiguous between ")?;
                for (index, path) in candidates.iter().enumerate() {
                    if index > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", path.display())?;
                }
                Ok(())
            }
            Self::NoMatch => f.write_str("no matching project name"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnmatchedRow {
    pub project_name: String,
    pub reason: UnmatchedReason,
}

/// A row whose repo URL disagrees with the project's `project_url`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectUrlMismatch {
    pub project_name: String,
    pub csv_repo_url: String,
    pub path: PathBuf,
    pub project_url: String,
}

impl fmt::Display for ProjectUrlMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: CSV Project Repo URL '{}' vs {} project_url '{}'",
            self.project_name,
            self.csv_repo_url,
            self.path.display(),
            self.project_url
        )
    }
}

/// A `project_url` rewritten from the CSV.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectUrlSync {
    pub project_name: String,
    pub path: PathBuf,
    pub project_url: String,
}

impl fmt::Display for ProjectUrlSync {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} project_url -> {}",
            self.project_name,
            self.path.display(),
            self.project_url
        )
    }
}

/// Everything a run found, in row order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunReport {
    pub dry_run: bool,
    pub strict: bool,
    /// Files whose content changed (or would change in a dry run).
    pub updated_files: Vec<PathBuf>,
    pub unmatched_rows: Vec<UnmatchedRow>,
    pub mismatches: Vec<ProjectUrlMismatch>,
    pub synced: Vec<ProjectUrlSync>,
    pub duplicate_repo_keys: Vec<DuplicateRepoKey>,
    /// Rows without a project name or without any parseable bounty.
    pub skipped_rows: usize,
    /// Mismatched rows refused under strict mode.
    pub strict_failures: usize,
}

impl RunReport {
    #[must_use]
    pub const fn strict_failed(&self) -> bool {
        self.strict_failures > 0
    }

    pub(crate) fn record_update(&mut self, path: PathBuf) {
        if !self.updated_files.contains(&path) {
            self.updated_files.push(path);
        }
    }
}
