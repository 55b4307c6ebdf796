use std::io::Write;

use bounty_reconcile::RunReport;

use crate::cli::OutputFormat;

/// Print the run report in the requested format.
///
/// Text mode lists updated files on `out` and every issue category on
/// `err`. JSON mode prints the whole report on `out`.
pub fn write_report<O: Write, E: Write>(
    report: &RunReport,
    format: OutputFormat,
    out: &mut O,
    err: &mut E,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string_pretty(report)?)?,
        OutputFormat::Text => write_text(report, out, err)?,
    }
    Ok(())
}

fn write_text<O: Write, E: Write>(
    report: &RunReport,
    out: &mut O,
    err: &mut E,
) -> std::io::Result<()> {
    let verb = if report.dry_run { "Would update" } else { "Updated" };
    for path in &report.updated_files {
        writeln!(out, "{verb}: {}", path.display())?;
    }

    if !report.unmatched_rows.is_empty() {
        writeln!(
            err,
            "Unmatched CSV rows (could not map to a project markdown file):"
        )?;
        for row in &report.unmatched_rows {
            writeln!(err, "  - {} ({})", row.project_name, row.reason)?;
        }
    }

    if !report.mismatches.is_empty() {
        let strict = if report.strict { " (strict)" } else { "" };
        writeln!(
            err,
            "Project URL mismatches (CSV vs markdown `project_url`):{strict}"
        )?;
        for mismatch in &report.mismatches {
            writeln!(err, "  - {mismatch}")?;
        }
    }

    if !report.synced.is_empty() {
        writeln!(err, "Synced markdown `project_url` from CSV:")?;
        for synced in &report.synced {
            writeln!(err, "  - {synced}")?;
        }
    }

    if !report.duplicate_repo_keys.is_empty() {
        writeln!(err, "Duplicate repo keys in catalog (last file wins):")?;
        for duplicate in &report.duplicate_repo_keys {
            let paths: Vec<String> = duplicate
                .paths
                .iter()
                .map(|path| path.display().to_string())
                .collect();
            writeln!(err, "  - {}: {}", duplicate.repo_key, paths.join(", "))?;
        }
    }

    Ok(())
}
