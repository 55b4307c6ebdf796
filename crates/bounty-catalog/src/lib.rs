//! # bounty-catalog
//!
//! The catalog is an immutable snapshot of every well-formed project file in
//! a projects directory, plus a case-insensitive repo-key index. The matcher
//! maps one CSV row onto at most one catalog entry and never breaks ties.

mod catalog;
mod error;
mod loader;
mod matcher;
mod project;

pub use catalog::{Catalog, DuplicateRepoKey, ExcludedFile};
pub use error::{CatalogError, ExclusionReason};
pub use loader::load_catalog;
pub use matcher::{MatchOptions, MatchOutcome, choose_project, choose_project_with};
pub use project::ProjectFile;
