//! The immutable project catalog.

use std::collections::HashMap;
use std::path::PathBuf;

use serde::Serialize;

use crate::error::ExclusionReason;
use crate::project::ProjectFile;

/// A repo key claimed by more than one project file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DuplicateRepoKey {
    /// Lowercased repo key.
    pub repo_key: String,
    /// Claiming files in path order. The last one owns the key.
    pub paths: Vec<PathBuf>,
}

/// A project file left out of the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExcludedFile {
    pub path: PathBuf,
    pub reason: ExclusionReason,
}

/// Snapshot of the projects directory for one run.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    projects: Vec<ProjectFile>,
    by_repo_key: HashMap<String, usize>,
    duplicates: Vec<DuplicateRepoKey>,
    excluded: Vec<ExcludedFile>,
}

impl Catalog {
    /// Build a catalog from loaded projects.
    ///
    /// Projects are ordered by path, so the result does not depend on the
    /// order they are handed in.
    #[must_use]
    pub fn new(mut projects: Vec<ProjectFile>, excluded: Vec<ExcludedFile>) -> Self {
        projects.sort_by(|a, b| a.path.cmp(&b.path));

        let mut by_repo_key = HashMap::with_capacity(projects.len());
        let mut claims: HashMap<String, Vec<PathBuf>> = HashMap::new();
        for (index, project) in projects.iter().enumerate() {
            let key = project.repo_key.to_lowercase();
            claims
                .entry(key.clone())
                .or_default()
                .push(project.path.clone());
            by_repo_key.insert(key, index);
        }

        let mut duplicates: Vec<DuplicateRepoKey> = claims
            .into_iter()
            .filter(|(_, paths)| paths.len() > 1)
            .map(|(repo_key, paths)| DuplicateRepoKey { repo_key, paths })
            .collect();
        duplicates.sort_by(|a, b| a.repo_key.cmp(&b.repo_key));

        for duplicate in &duplicates {
            tracing::warn!(
                repo_key = %duplicate.repo_key,
                files = duplicate.paths.len(),
                "repo key claimed by multiple project files; last file in path order wins"
            );
        }

        Self {
            projects,
            by_repo_key,
            duplicates,
            excluded,
        }
    }

    /// Catalog entries in path order.
    #[must_use]
    pub fn projects(&self) -> &[ProjectFile] {
        &self.projects
    }

    /// Look a project up by repo key, ignoring case.
    #[must_use]
    pub fn by_repo_key(&self, repo_key: &str) -> Option<&ProjectFile> {
        self.by_repo_key
            .get(&repo_key.to_lowercase())
            .and_then(|index| self.projects.get(*index))
    }

    #[must_use]
    pub fn duplicate_repo_keys(&self) -> &[DuplicateRepoKey] {
        &self.duplicates
    }

    /// Files skipped while scanning, with the reason.
    #[must_use]
    pub fn excluded(&self) -> &[ExcludedFile] {
        &self.excluded
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.projects.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn project(path: &str, url: &str) -> ProjectFile {
        ProjectFile::new(path, "Title", url, None).expect("project should build")
    }

    #[test]
    fn repo_key_lookup_ignores_case() {
        let catalog = Catalog::new(
            vec![project("a.md", "https://github.com/Acme/Widget")],
            Vec::new(),
        );
        assert_eq!(
            catalog.by_repo_key("acme/widget").map(|p| p.path.clone()),
            Some(PathBuf::from("a.md"))
        );
        assert_eq!(
            catalog.by_repo_key("ACME/WIDGET").map(|p| p.path.clone()),
            Some(PathBuf::from("a.md"))
        );
        assert!(catalog.by_repo_key("acme/other").is_none());
    }

    #[test]
    fn duplicates_are_reported_and_last_path_wins() {
        let catalog = Catalog::new(
            vec![
                project("b.md", "https://github.com/acme/widget"),
                project("a.md", "https://github.com/ACME/widget/issues/1"),
                project("c.md", "https://github.com/acme/gadget"),
            ],
            Vec::new(),
        );

        assert_eq!(
            catalog.duplicate_repo_keys(),
            &[DuplicateRepoKey {
                repo_key: "acme/widget".to_string(),
                paths: vec![PathBuf::from("a.md"), PathBuf::from("b.md")],
            }]
        );
        assert_eq!(
            catalog.by_repo_key("acme/widget").map(|p| p.path.clone()),
            Some(PathBuf::from("b.md"))
        );
        assert_eq!(catalog.len(), 3);
    }
}
