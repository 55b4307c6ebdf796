use std::io::Write;
use std::process::ExitCode;

use anyhow::Context;
use bounty_catalog::load_catalog;
use bounty_reconcile::reconcile;

use crate::bootstrap::Settings;
use crate::{csv_input, output};

/// How a completed run ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    Success,
    /// The CSV or the projects directory does not exist.
    MissingInput,
    /// Strict mode refused at least one row.
    StrictFailure,
}

impl RunStatus {
    pub const fn code(self) -> u8 {
        match self {
            Self::Success => 0,
            Self::StrictFailure => 1,
            Self::MissingInput => 2,
        }
    }
}

impl From<RunStatus> for ExitCode {
    fn from(status: RunStatus) -> Self {
        Self::from(status.code())
    }
}

/// Run one reconciliation pass and print its report.
pub fn execute<O: Write, E: Write>(
    settings: &Settings,
    out: &mut O,
    err: &mut E,
) -> anyhow::Result<RunStatus> {
    if !settings.csv.exists() {
        writeln!(err, "CSV not found: {}", settings.csv.display())?;
        return Ok(RunStatus::MissingInput);
    }
    if !settings.projects_dir.exists() {
        writeln!(
            err,
            "Projects dir not found: {}",
            settings.projects_dir.display()
        )?;
        return Ok(RunStatus::MissingInput);
    }

    let catalog =
        load_catalog(&settings.projects_dir).context("failed to load project catalog")?;
    tracing::info!(
        projects = catalog.len(),
        excluded = catalog.excluded().len(),
        "loaded project catalog"
    );

    let rows = csv_input::read_rows(&settings.csv)?;
    let report =
        reconcile(&catalog, rows, settings.options).context("reconciliation aborted")?;
    if report.skipped_rows > 0 {
        tracing::info!(
            rows = report.skipped_rows,
            "skipped rows without a name or bounties"
        );
    }

    output::write_report(&report, settings.format, out, err)?;

    Ok(if report.strict_failed() {
        RunStatus::StrictFailure
    } else {
        RunStatus::Success
    })
}
