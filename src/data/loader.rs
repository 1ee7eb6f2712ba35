use std::path::Path;

use anyhow::{Context, Result};

use super::model::Table;

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// Read a comma-delimited UTF-8 file into a [`Table`].
///
/// The first record is taken as the header; every following record becomes
/// one row of owned cells. Standard CSV quoting (fields containing commas or
/// newlines wrapped in double quotes) is handled by the reader. The whole
/// file is materialized in memory before anything else happens.
pub fn load_csv(path: &Path) -> Result<Table> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("opening CSV {}", path.display()))?;

    let header: Vec<String> = reader
        .headers()
        .context("reading CSV header")?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let mut rows = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;
        rows.push(record.iter().map(|cell| cell.to_string()).collect());
    }

    Ok(Table { header, rows })
}
