//! Project files and their matching keys.

use std::path::{Path, PathBuf};

use bounty_core::{Provider, normalize_token, parse_provider, parse_repo_key};
use bounty_frontmatter::FrontMatter;

use crate::error::ExclusionReason;

/// Identity fields of one project markdown file.
///
/// The normalized `stem_key`, `title_key`, and `id_key` are computed once at
/// construction; the struct is read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectFile {
    pub path: PathBuf,
    pub title: String,
    pub project_url: String,
    pub repo_key: String,
    pub provider: Provider,
    pub id: Option<String>,
    stem_key: String,
    title_key: String,
    id_key: Option<String>,
}

impl ProjectFile {
    /// Build a project from raw header values.
    ///
    /// An empty `id` counts as absent.
    pub fn new(
        path: impl Into<PathBuf>,
        title: impl Into<String>,
        project_url: impl Into<String>,
        id: Option<String>,
    ) -> Result<Self, ExclusionReason> {
        let path = path.into();
        let title = title.into();
        let project_url = project_url.into();

        if title.is_empty() {
            return Err(ExclusionReason::MissingTitle);
        }
        if project_url.is_empty() {
            return Err(ExclusionReason::MissingProjectUrl);
        }
        let (Some(provider), Some(repo_key)) =
            (parse_provider(&project_url), parse_repo_key(&project_url))
        else {
            return Err(ExclusionReason::UnparseableProjectUrl(project_url));
        };

        let id = id.filter(|id| !id.is_empty());
        let stem_key = path
            .file_stem()
            .map(|stem| normalize_token(&stem.to_string_lossy()))
            .unwrap_or_default();
        let title_key = normalize_token(&title);
        let id_key = id.as_deref().map(normalize_token);

        Ok(Self {
            path,
            title,
            project_url,
            repo_key,
            provider,
            id,
            stem_key,
            title_key,
            id_key,
        })
    }

    /// Read the identity fields out of a project file's front matter.
    pub fn from_markdown(path: &Path, text: &str) -> Result<Self, ExclusionReason> {
        let document = FrontMatter::split(text)?;
        Self::new(
            path,
            document.field("title").unwrap_or_default(),
            document.field("project_url").unwrap_or_default(),
            document.field("id"),
        )
    }

    #[must_use]
    pub fn stem_key(&self) -> &str {
        &self.stem_key
    }

    #[must_use]
    pub fn title_key(&self) -> &str {
        &self.title_key
    }

    #[must_use]
    pub fn id_key(&self) -> Option<&str> {
        self.id_key.as_deref()
    }

    /// Every non-empty matching key of the project.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        [Some(self.stem_key()), Some(self.title_key()), self.id_key()]
            .into_iter()
            .flatten()
            .filter(|key| !key.is_empty())
    }

    /// Owner segment of the recorded repo key.
    #[must_use]
    pub fn owner(&self) -> &str {
        self.repo_key.split('/').next().unwrap_or(&self.repo_key)
    }
}
