//! Reading bounty rows from the CSV export.

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::Context;
use bounty_reconcile::BountyRow;

const BOM: char = '\u{feff}';

/// Read every data row of the export at `path`.
pub fn read_rows(path: &Path) -> anyhow::Result<Vec<BountyRow>> {
    let file =
        File::open(path).with_context(|| format!("failed to open CSV {}", path.display()))?;
    rows_from_reader(file).with_context(|| format!("failed to read CSV {}", path.display()))
}

/// Parse rows from any reader. Columns are looked up by header name; a
/// repeated header resolves to its last occurrence.
pub fn rows_from_reader<R: Read>(reader: R) -> anyhow::Result<Vec<BountyRow>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = reader.headers().context("missing CSV header row")?.clone();
    let columns: HashMap<String, usize> = headers
        .iter()
        .enumerate()
        .map(|(index, name)| (name.trim_start_matches(BOM).to_string(), index))
        .collect();

    let mut rows = Vec::new();
    for (line, record) in reader.records().enumerate() {
        let record = record.with_context(|| format!("malformed CSV record {}", line + 1))?;
        rows.push(BountyRow::from_columns(|name| {
            columns.get(name).and_then(|index| record.get(*index))
        }));
    }

    tracing::debug!(rows = rows.len(), "read CSV rows");
    Ok(rows)
}
