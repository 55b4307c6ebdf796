//! Reconciliation error types.

use std::path::PathBuf;

use bounty_frontmatter::FrontMatterError;
use thiserror::Error;

/// Failures that abort the whole run.
#[derive(Debug, Error)]
pub enum ReconcileError {
    #[error("failed to {action} {}: {source}", path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot edit {}: {source}", path.display())]
    FrontMatter {
        path: PathBuf,
        #[source]
        source: FrontMatterError,
    },
}
