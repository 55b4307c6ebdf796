//! Scanning a projects directory into a [`Catalog`].

use std::fs;
use std::path::{Path, PathBuf};

use crate::catalog::{Catalog, ExcludedFile};
use crate::error::{CatalogError, ExclusionReason};
use crate::project::ProjectFile;

/// Load every `*.md` file directly inside `projects_dir`.
///
/// Files that are not UTF-8, or lack a front matter, a `title`, or a `project_url` with a
/// parseable repo key are excluded rather than failing the scan.
///
/// # Errors
///
/// Fails when `projects_dir` does not exist or a directory entry or file
/// cannot be read.
pub fn load_catalog(projects_dir: &Path) -> Result<Catalog, CatalogError> {
    if !projects_dir.is_dir() {
        return Err(CatalogError::MissingDirectory {
            path: projects_dir.to_path_buf(),
        });
    }

    let mut projects = Vec::new();
    let mut excluded = Vec::new();
    for path in markdown_files(projects_dir)? {
        let bytes = fs::read(&path).map_err(|source| CatalogError::Io {
            path: path.clone(),
            source,
        })?;

        let parsed = String::from_utf8(bytes)
            .map_err(|_| ExclusionReason::InvalidUtf8)
            .and_then(|text| ProjectFile::from_markdown(&path, &text));
        match parsed {
            Ok(project) => projects.push(project),
            Err(reason) => {
                tracing::debug!(
                    path = %path.display(),
                    %reason,
                    "excluding project file from catalog"
                );
                excluded.push(ExcludedFile { path, reason });
            }
        }
    }

    tracing::debug!(
        dir = %projects_dir.display(),
        loaded = projects.len(),
        excluded = excluded.len(),
        "loaded project catalog"
    );
    Ok(Catalog::new(projects, excluded))
}

fn markdown_files(dir: &Path) -> Result<Vec<PathBuf>, CatalogError> {
    let io_error = |source| CatalogError::Io {
        path: dir.to_path_buf(),
        source,
    };

    let mut paths = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_error)? {
        let path = entry.map_err(io_error)?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "md") {
            paths.push(path);
        }
    }
    paths.sort();
    Ok(paths)
}
