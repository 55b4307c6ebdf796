//! # bounty-reconcile
//!
//! Per-row reconciliation: match a CSV row to a project, check that the
//! row's repository claim agrees with the project's `project_url`, apply the
//! configured mismatch policy, and write the rendered bounty block back.
//!
//! Non-fatal problems (unmatched rows, identity mismatches) are collected in
//! a [`RunReport`]. Only structural problems with a file being edited, or
//! I/O failures, abort the run.

mod agreement;
mod engine;
mod error;
mod options;
mod report;
mod row;

pub use agreement::{RowClaim, agrees};
pub use engine::{Reconciler, RowOutcome, SkipReason, reconcile};
pub use error::ReconcileError;
pub use options::{ReconcileOptions, Resolution, resolve_mismatch};
pub use report::{ProjectUrlMismatch, ProjectUrlSync, RunReport, UnmatchedReason, UnmatchedRow};
pub use row::{BountyRow, PROJECT_NAME_COLUMN, PROJECT_REPO_URL_COLUMN};
