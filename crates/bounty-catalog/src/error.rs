//! Catalog error types.

use std::path::PathBuf;

use bounty_frontmatter::FrontMatterError;
use thiserror::Error;

/// Fatal catalog loading failures.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Projects dir not found: {}", path.display())]
    MissingDirectory { path: PathBuf },

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Why a project file was left out of the catalog. Never fatal.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ExclusionReason {
    #[error("{0}")]
    FrontMatter(#[from] FrontMatterError),

    #[error("not valid UTF-8")]
    InvalidUtf8,

    #[error("missing title")]
    MissingTitle,

    #[error("missing project_url")]
    MissingProjectUrl,

    #[error("no repo key in project_url '{0}'")]
    UnparseableProjectUrl(String),
}
