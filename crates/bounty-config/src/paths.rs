//! Input locations.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// CSV export file name looked up under the root by default.
pub const DEFAULT_CSV: &str = "Bounties-Veena's view.csv";

/// Projects directory under the root by default.
pub const DEFAULT_PROJECTS_DIR: &str = "src/projects";

fn default_csv() -> PathBuf {
    PathBuf::from(DEFAULT_CSV)
}

fn default_projects_dir() -> PathBuf {
    PathBuf::from(DEFAULT_PROJECTS_DIR)
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PathsConfig {
    /// Bounty CSV export. Relative paths are taken from the root.
    #[serde(default = "default_csv")]
    pub csv: PathBuf,

    /// Directory of project markdown files. Relative paths are taken from
    /// the root.
    #[serde(default = "default_projects_dir")]
    pub projects_dir: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            csv: default_csv(),
            projects_dir: default_projects_dir(),
        }
    }
}

impl PathsConfig {
    /// The CSV path, resolved against `root` when relative.
    #[must_use]
    pub fn csv_path(&self, root: &Path) -> PathBuf {
        resolve(root, &self.csv)
    }

    /// The projects directory, resolved against `root` when relative.
    #[must_use]
    pub fn projects_path(&self, root: &Path) -> PathBuf {
        resolve(root, &self.projects_dir)
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.csv.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "paths.csv",
                reason: "must not be empty".to_string(),
            });
        }
        if self.projects_dir.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "paths.projects_dir",
                reason: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

fn resolve(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}
