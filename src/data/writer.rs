use std::fs;
use std::io;
use std::path::Path;

use anyhow::{Context, Result};

use super::model::Table;

// ---------------------------------------------------------------------------
// CSV writer + destination swap
// ---------------------------------------------------------------------------

/// Write `table` to `path` as comma-delimited UTF-8, header first, fully
/// overwriting any existing file there. Quoting is applied by the writer
/// wherever a cell contains a comma, quote, or newline.
pub fn write_csv(table: &Table, path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("creating {}", path.display()))?;

    writer.write_record(&table.header).context("writing header")?;
    for (row_no, row) in table.rows.iter().enumerate() {
        writer
            .write_record(row)
            .with_context(|| format!("writing row {row_no}"))?;
    }
    writer.flush().context("flushing CSV output")?;
    Ok(())
}

/// Swap the fully written `temp` file into place at `dest`.
///
/// This delete-then-rename pair is the atomicity boundary of the whole run:
/// `rename` within one filesystem never exposes a partial file, so after
/// this call either the old destination or the complete new one exists.
/// On failure the temp file is deliberately left on disk for inspection.
pub fn replace_file(temp: &Path, dest: &Path) -> io::Result<()> {
    if dest.exists() {
        fs::remove_file(dest)?;
    }
    fs::rename(temp, dest)
}
