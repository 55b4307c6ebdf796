//! The per-row reconciliation loop.

use std::fs;
use std::path::{Path, PathBuf};

use bounty_catalog::{Catalog, ProjectFile, choose_project_with};
use bounty_frontmatter::update_bounties;

use crate::agreement::{RowClaim, agrees};
use crate::error::ReconcileError;
use crate::options::{ReconcileOptions, Resolution, resolve_mismatch};
use crate::report::{ProjectUrlMismatch, ProjectUrlSync, RunReport, UnmatchedReason, UnmatchedRow};
use crate::row::BountyRow;

/// Why a row was not considered at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    NoProjectName,
    NoBounties,
}

/// What happened to one row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowOutcome {
    Skipped(SkipReason),
    Unmatched(UnmatchedReason),
    /// Mismatch under strict mode; nothing written.
    Refused { path: PathBuf },
    /// Rendered output equals the file on disk.
    Unchanged { path: PathBuf },
    /// File changed, or would change in a dry run.
    Updated { path: PathBuf },
}

/// Reconciles rows one at a time against a fixed catalog.
#[derive(Debug)]
pub struct Reconciler<'a> {
    catalog: &'a Catalog,
    options: ReconcileOptions,
    report: RunReport,
}

impl<'a> Reconciler<'a> {
    #[must_use]
    pub fn new(catalog: &'a Catalog, options: ReconcileOptions) -> Self {
        let report = RunReport {
            dry_run: options.dry_run,
            strict: options.strict_project_url_match,
            duplicate_repo_keys: catalog.duplicate_repo_keys().to_vec(),
            ..RunReport::default()
        };
        Self {
            catalog,
            options,
            report,
        }
    }

    /// Process one row, recording its outcome in the report.
    ///
    /// # Errors
    ///
    /// Fails when the matched project file cannot be read, written, or has
    /// no usable front matter.
    pub fn process(&mut self, row: &BountyRow) -> Result<RowOutcome, ReconcileError> {
        if row.project_name.is_empty() {
            self.report.skipped_rows += 1;
            return Ok(RowOutcome::Skipped(SkipReason::NoProjectName));
        }
        if row.bounties.is_empty() {
            tracing::debug!(project = %row.project_name, "row has no parseable bounties; skipping");
            self.report.skipped_rows += 1;
            return Ok(RowOutcome::Skipped(SkipReason::NoBounties));
        }

        let outcome = choose_project_with(
            self.catalog,
            &row.project_name,
            row.project_repo_url.as_deref(),
            self.options.match_options(),
        );
        let Some(project) = outcome.project() else {
            let reason =
                UnmatchedReason::from_outcome(&outcome).unwrap_or(UnmatchedReason::NoMatch);
            tracing::debug!(
                project = %row.project_name,
                %reason,
                "row did not match a project file"
            );
            self.report.unmatched_rows.push(UnmatchedRow {
                project_name: row.project_name.clone(),
                reason: reason.clone(),
            });
            return Ok(RowOutcome::Unmatched(reason));
        };

        let claim = RowClaim::from_url(row.project_repo_url.as_deref());
        let mut project_url_override = None;
        if !agrees(&claim, project) {
            match resolve_mismatch(&claim, self.options) {
                Resolution::Sync { project_url } => {
                    tracing::info!(
                        path = %project.path.display(),
                        %project_url,
                        "syncing project_url from CSV"
                    );
                    self.report.synced.push(ProjectUrlSync {
                        project_name: row.project_name.clone(),
                        path: project.path.clone(),
                        project_url: project_url.clone(),
                    });
                    project_url_override = Some(project_url);
                }
                Resolution::Warn => self.record_mismatch(row, project),
                Resolution::Fail => {
                    self.record_mismatch(row, project);
                    self.report.strict_failures += 1;
                    return Ok(RowOutcome::Refused {
                        path: project.path.clone(),
                    });
                }
            }
        }

        self.write_bounties(row, project, project_url_override.as_deref())
    }

    /// Finish the run and hand over the report.
    #[must_use]
    pub fn finish(self) -> RunReport {
        self.report
    }

    fn record_mismatch(&mut self, row: &BountyRow, project: &ProjectFile) {
        let mismatch = ProjectUrlMismatch {
            project_name: row.project_name.clone(),
            csv_repo_url: row.project_repo_url.clone().unwrap_or_default(),
            path: project.path.clone(),
            project_url: project.project_url.clone(),
        };
        tracing::warn!("project_url mismatch: {mismatch}");
        self.report.mismatches.push(mismatch);
    }

    fn write_bounties(
        &mut self,
        row: &BountyRow,
        project: &ProjectFile,
        project_url_override: Option<&str>,
    ) -> Result<RowOutcome, ReconcileError> {
        let path = &project.path;
        let original = read_file(path)?;
        let updated = update_bounties(&original, &row.bounties, project_url_override).map_err(
            |source| ReconcileError::FrontMatter {
                path: path.clone(),
                source,
            },
        )?;

        if updated == original {
            return Ok(RowOutcome::Unchanged { path: path.clone() });
        }

        if self.options.dry_run {
            tracing::debug!(path = %path.display(), "dry run; not writing");
        } else {
            fs::write(path, updated).map_err(|source| ReconcileError::Io {
                action: "write",
                path: path.clone(),
                source,
            })?;
            tracing::info!(
                path = %path.display(),
                bounties = row.bounties.len(),
                "updated project bounties"
            );
        }

        self.report.record_update(path.clone());
        Ok(RowOutcome::Updated { path: path.clone() })
    }
}

fn read_file(path: &Path) -> Result<String, ReconcileError> {
    fs::read_to_string(path).map_err(|source| ReconcileError::Io {
        action: "read",
        path: path.to_path_buf(),
        source,
    })
}

/// Reconcile every row and return the report.
///
/// Processing stops at the first fatal error; non-fatal issues are collected.
///
/// # Errors
///
/// See [`Reconciler::process`].
pub fn reconcile<I>(
    catalog: &Catalog,
    rows: I,
    options: ReconcileOptions,
) -> Result<RunReport, ReconcileError>
where
    I: IntoIterator<Item = BountyRow>,
{
    let mut reconciler = Reconciler::new(catalog, options);
    for row in rows {
        reconciler.process(&row)?;
    }
    Ok(reconciler.finish())
}
