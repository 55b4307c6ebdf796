//! Mapping a CSV row onto a catalog entry.

use std::path::PathBuf;

use bounty_core::{normalize_token, parse_repo_key};

use crate::catalog::Catalog;
use crate::project::ProjectFile;

/// Result of matching one row against the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchOutcome<'a> {
    Matched(&'a ProjectFile),
    /// The row's repo URL named a repository no project claims.
    RepoKeyMiss { repo_key: String },
    /// More than one project fits equally well.
    Ambiguous {
        candidates: Vec<PathBuf>,
    },
    NoCandidate,
}

impl<'a> MatchOutcome<'a> {
    #[must_use]
    pub const fn project(&self) -> Option<&'a ProjectFile> {
        match self {
            Self::Matched(project) => Some(*project),
            _ => None,
        }
    }
}

/// Knobs for [`choose_project_with`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchOptions {
    /// Try name matching when the row's repo key is not in the catalog.
    pub name_fallback_on_repo_miss: bool,
}

/// Choose the single project a row refers to.
///
/// A parseable repo key in `row_repo_url` is authoritative: a hit is
/// returned straight away and a miss ends the search. Only rows without a
/// repo key fall back to name matching, where an exact key match beats a
/// substring match (a project key contained in the row name) and any tie
/// means no match.
#[must_use]
pub fn choose_project<'a>(
    catalog: &'a Catalog,
    row_name: &str,
    row_repo_url: Option<&str>,
) -> MatchOutcome<'a> {
    choose_project_with(catalog, row_name, row_repo_url, MatchOptions::default())
}

/// [`choose_project`] with explicit options.
///
/// With `name_fallback_on_repo_miss`, a repo-key miss goes on to name
/// matching; if that finds nothing the outcome is still `RepoKeyMiss`.
#[must_use]
pub fn choose_project_with<'a>(
    catalog: &'a Catalog,
    row_name: &str,
    row_repo_url: Option<&str>,
    options: MatchOptions,
) -> MatchOutcome<'a> {
    let Some(repo_key) = row_repo_url.and_then(parse_repo_key) else {
        return match_by_name(catalog, row_name);
    };

    if let Some(project) = catalog.by_repo_key(&repo_key) {
        return MatchOutcome::Matched(project);
    }
    if !options.name_fallback_on_repo_miss {
        return MatchOutcome::RepoKeyMiss { repo_key };
    }

    match match_by_name(catalog, row_name) {
        MatchOutcome::NoCandidate => MatchOutcome::RepoKeyMiss { repo_key },
        outcome => outcome,
    }
}

fn match_by_name<'a>(catalog: &'a Catalog, row_name: &str) -> MatchOutcome<'a> {
    let row_key = normalize_token(row_name);
    if row_key.is_empty() {
        return MatchOutcome::NoCandidate;
    }

    let mut exact = Vec::new();
    let mut substring = Vec::new();
    for project in catalog.projects() {
        if project.keys().any(|key| key == row_key) {
            exact.push(project);
        } else if project.keys().any(|key| row_key.contains(key)) {
            substring.push(project);
        }
    }

    let candidates = if exact.is_empty() { substring } else { exact };
    match candidates.as_slice() {
        [] => MatchOutcome::NoCandidate,
        [project] => MatchOutcome::Matched(*project),
        _ => MatchOutcome::Ambiguous {
            candidates: candidates
                .iter()
                .map(|project| project.path.clone())
                .collect(),
        },
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn project(path: &str, title: &str, url: &str, id: Option<&str>) -> ProjectFile {
        ProjectFile::new(path, title, url, id.map(str::to_string)).expect("project should build")
    }

    fn catalog() -> Catalog {
        Catalog::new(
            vec![
                project("widget.md", "Widget Project", "https://github.com/acme/widget", None),
                project("gizmo.md", "Gizmo", "https://gitlab.com/tools/gizmo", Some("gz")),
            ],
            Vec::new(),
        )
    }

    fn matched_path(outcome: &MatchOutcome<'_>) -> Option<PathBuf> {
        outcome.project().map(|project| project.path.clone())
    }

    #[test]
    fn repo_key_hit_bypasses_names() {
        let catalog = catalog();
        let outcome = choose_project(
            &catalog,
            "Gizmo",
            Some("https://github.com/ACME/widget/issues/3"),
        );
        assert_eq!(matched_path(&outcome), Some(PathBuf::from("widget.md")));
    }

    #[test]
    fn repo_key_miss_does_not_fall_back_to_names() {
        let catalog = catalog();
        let outcome = choose_project(
            &catalog,
            "Gizmo",
            Some("https://github.com/acme/unknown"),
        );
        assert_eq!(
            outcome,
            MatchOutcome::RepoKeyMiss {
                repo_key: "acme/unknown".to_string()
            }
        );
    }

    #[test]
    fn repo_key_miss_can_fall_back_to_names() {
        let catalog = catalog();
        let options = MatchOptions {
            name_fallback_on_repo_miss: true,
        };

        let outcome = choose_project_with(
            &catalog,
            "Gizmo",
            Some("https://github.com/acme/unknown"),
            options,
        );
        assert_eq!(matched_path(&outcome), Some(PathBuf::from("gizmo.md")));

        let outcome = choose_project_with(
            &catalog,
            "Nothing Alike",
            Some("https://github.com/acme/unknown"),
            options,
        );
        assert_eq!(
            outcome,
            MatchOutcome::RepoKeyMiss {
                repo_key: "acme/unknown".to_string()
            }
        );
    }

    #[test]
    fn unparseable_repo_url_uses_names() {
        let catalog = catalog();
        let outcome = choose_project(&catalog, "Gizmo", Some("https://github.com/tools"));
        assert_eq!(matched_path(&outcome), Some(PathBuf::from("gizmo.md")));
    }

    #[test]
    fn matches_by_title_stem_or_id() {
        let catalog = catalog();
        for name in ["Widget Project", "widget", "GZ", "gizmo"] {
            assert!(
                choose_project(&catalog, name, None).project().is_some(),
                "expected a match for {name}"
            );
        }
    }

    #[test]
    fn substring_requires_project_key_inside_row_key() {
        let catalog = Catalog::new(
            vec![project("wp.md", "Widget Project", "https://github.com/acme/wp", None)],
            Vec::new(),
        );
        assert_eq!(choose_project(&catalog, "Widget", None), MatchOutcome::NoCandidate);

        let outcome = choose_project(&catalog, "The Widget Project (2024)", None);
        assert_eq!(matched_path(&outcome), Some(PathBuf::from("wp.md")));
    }

    #[test]
    fn empty_name_never_matches() {
        let catalog = catalog();
        assert_eq!(choose_project(&catalog, " -- ", None), MatchOutcome::NoCandidate);
    }
}
