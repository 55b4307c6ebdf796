//! Repository identity extraction from hosted-VCS URLs.
//!
//! URLs go through [`url::Url`]: only the lowercased host and the path are
//! looked at. Anything that does not parse as an absolute URL with a host
//! yields `None`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use url::Url;

use crate::provider::Provider;

static ISSUE_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"/(?:issues|pull|merge_requests)/(\d+)").expect("valid issue number regex")
});

/// Canonical `(provider, "owner/name")` identity of a hosted repository.
///
/// Keys compare case-insensitively; the stored key keeps its original casing
/// so it can be written back verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoIdentity {
    pub provider: Provider,
    pub repo_key: String,
}

impl RepoIdentity {
    #[must_use]
    pub fn new(provider: Provider, repo_key: impl Into<String>) -> Self {
        Self {
            provider,
            repo_key: repo_key.into(),
        }
    }

    /// Case-insensitive repo key comparison.
    #[must_use]
    pub fn same_key(&self, other: &str) -> bool {
        self.repo_key.eq_ignore_ascii_case(other)
    }

    /// First path segment of the repo key.
    #[must_use]
    pub fn owner(&self) -> &str {
        repo_key_owner(&self.repo_key)
    }

    #[must_use]
    pub fn canonical_url(&self) -> String {
        canonical_url(self.provider, &self.repo_key)
    }
}

impl fmt::Display for RepoIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.provider, self.repo_key)
    }
}

/// Provider plus top-level owner segment. Coarser than [`RepoIdentity`];
/// used when a URL only names an organization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Namespace {
    pub provider: Provider,
    pub owner: String,
}

/// Host and path of a URL, as far as identity parsing cares.
struct UrlParts {
    host: String,
    path: String,
}

impl UrlParts {
    fn split(url: &str) -> Option<Self> {
        let parsed = Url::parse(url.trim()).ok()?;
        let host = parsed.host_str()?.to_ascii_lowercase();

        Some(Self {
            host,
            path: parsed.path().to_string(),
        })
    }

    fn provider(&self) -> Option<Provider> {
        Provider::from_host(&self.host)
    }
}

fn repo_key_owner(repo_key: &str) -> &str {
    repo_key.split('/').next().unwrap_or(repo_key)
}

/// Detect the hosting provider of `url`.
#[must_use]
pub fn parse_provider(url: &str) -> Option<Provider> {
    UrlParts::split(url)?.provider()
}

/// Extract the canonical `owner/name` repo key.
///
/// GitHub keys are the first two path segments. GitLab keys may be nested
/// groups, so the key is everything before the `/-/` separator, or the whole
/// path when there is none.
///
/// ```
/// use bounty_core::parse_repo_key;
///
/// assert_eq!(
///     parse_repo_key("https://github.com/acme/widget/issues/42").as_deref(),
///     Some("acme/widget")
/// );
/// assert_eq!(
///     parse_repo_key("https://gitlab.com/acme/tools/widget/-/issues/7").as_deref(),
///     Some("acme/tools/widget")
/// );
/// assert_eq!(parse_repo_key("https://github.com/acme"), None);
/// ```
#[must_use]
pub fn parse_repo_key(url: &str) -> Option<String> {
    let parts = UrlParts::split(url)?;
    let path = parts.path.trim_matches('/');

    match parts.provider()? {
        Provider::Github => {
            let mut segments = path.split('/').filter(|segment| !segment.is_empty());
            let owner = segments.next()?;
            let name = segments.next()?;
            let name = name.strip_suffix(".git").unwrap_or(name);
            if name.is_empty() {
                return None;
            }
            Some(format!("{owner}/{name}"))
        }
        Provider::Gitlab => {
            let key = match path.split_once("/-/") {
                Some((project, _)) => project,
                None => path.strip_suffix(".git").unwrap_or(path),
            };
            let key = key.trim_end_matches('/');
            (!key.is_empty()).then(|| key.to_string())
        }
    }
}

/// Provider and repo key together.
#[must_use]
pub fn parse_repo_identity(url: &str) -> Option<RepoIdentity> {
    let provider = parse_provider(url)?;
    let repo_key = parse_repo_key(url)?;
    Some(RepoIdentity { provider, repo_key })
}

/// Provider plus the first path segment only.
#[must_use]
pub fn parse_namespace(url: &str) -> Option<Namespace> {
    let parts = UrlParts::split(url)?;
    let provider = parts.provider()?;

    let path = parts.path.trim_matches('/');
    let path = path.split_once("/-/").map_or(path, |(project, _)| project);
    let owner = path.split('/').find(|segment| !segment.is_empty())?;

    Some(Namespace {
        provider,
        owner: owner.to_string(),
    })
}

/// First issue, pull request, or merge request number in `url`.
///
/// Zero is not a valid issue number and yields `None`.
#[must_use]
pub fn parse_issue_number(url: &str) -> Option<u64> {
    let captures = ISSUE_NUMBER.captures(url.trim())?;
    captures
        .get(1)?
        .as_str()
        .parse::<u64>()
        .ok()
        .filter(|number| *number > 0)
}

/// Build the canonical web URL of a repository.
#[must_use]
pub fn canonical_url(provider: Provider, repo_key: &str) -> String {
    format!("https://{}/{repo_key}", provider.host())
}
