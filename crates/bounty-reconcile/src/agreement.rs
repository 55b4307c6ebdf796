//! Whether a row's repository claim agrees with a project's recorded one.

use bounty_catalog::ProjectFile;
use bounty_core::{Namespace, RepoIdentity, parse_namespace, parse_repo_identity};

/// What a row's `Project Repo URL` says about the repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowClaim {
    /// A full `owner/name` identity.
    Repo(RepoIdentity),
    /// Only an organization-level URL.
    Namespace(Namespace),
    /// Nothing to contest.
    None,
}

impl RowClaim {
    /// Parse the most specific claim `url` supports.
    #[must_use]
    pub fn from_url(url: Option<&str>) -> Self {
        let Some(url) = url else {
            return Self::None;
        };
        if let Some(identity) = parse_repo_identity(url) {
            return Self::Repo(identity);
        }
        parse_namespace(url).map_or(Self::None, Self::Namespace)
    }
}

/// Check a claim against a project.
///
/// A full identity must name the same repo key (ignoring case). A namespace
/// must share the provider and the owner segment. No claim always agrees.
#[must_use]
pub fn agrees(claim: &RowClaim, project: &ProjectFile) -> bool {
    match claim {
        RowClaim::Repo(identity) => identity.same_key(&project.repo_key),
        RowClaim::Namespace(namespace) => {
            namespace.provider == project.provider
                && namespace.owner.eq_ignore_ascii_case(project.owner())
        }
        RowClaim::None => true,
    }
}
