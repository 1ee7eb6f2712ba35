use std::path::PathBuf;

use log::{info, warn};
use serde::Serialize;
use thiserror::Error;

use crate::data::filter::{self, FilterSpec, FilterStats};
use crate::data::{loader, writer};

// ---------------------------------------------------------------------------
// ScrubJob – one batch invocation, fully parameterized
// ---------------------------------------------------------------------------

/// Everything one run needs: where to read, where to stage, where to land,
/// and what to keep. Paths are explicit so the same logic runs against
/// arbitrary locations in tests.
#[derive(Debug, Clone)]
pub struct ScrubJob {
    /// Source table. Must exist; checked before any side effect.
    pub source: PathBuf,
    /// Staging file, fully written before the destination is touched.
    pub temp: PathBuf,
    /// Final destination, replaced via delete-then-rename.
    pub dest: PathBuf,
    pub filter: FilterSpec,
}

/// Counters and warnings surfaced after a successful run.
#[derive(Debug, Clone, Serialize)]
pub struct ScrubSummary {
    pub stats: FilterStats,
    /// Expected columns that were absent from the input header.
    pub missing_columns: Vec<String>,
}

#[derive(Debug, Error)]
pub enum ScrubError {
    /// Source file absent. Nothing has been written or removed.
    #[error("input file not found: {}", .0.display())]
    MissingInput(PathBuf),

    /// Deleting or renaming into the destination failed after the staging
    /// file was fully written. The staging file is left on disk.
    #[error("could not replace {}: {source}", .dest.display())]
    Replace {
        dest: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Uncategorized failures: parse errors, staging write errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// ---------------------------------------------------------------------------
// The one-shot run
// ---------------------------------------------------------------------------

/// Execute one scrub: load, filter, stage, swap. Returns the row accounting
/// on success. Side effects on the filesystem are exactly: the staging file
/// is created or overwritten, any old destination is deleted, and the new
/// destination appears via rename.
pub fn run(job: &ScrubJob) -> Result<ScrubSummary, ScrubError> {
    if !job.source.exists() {
        return Err(ScrubError::MissingInput(job.source.clone()));
    }

    info!("reading {}", job.source.display());
    let table = loader::load_csv(&job.source)?;
    info!("read {} rows", table.len());
    if table.is_empty() {
        warn!("source has a header but no data rows");
    }

    let filtered = filter::apply(&table, &job.filter);
    if !filtered.missing_columns.is_empty() {
        warn!(
            "columns not found in input: {}",
            filtered.missing_columns.join(", ")
        );
    }

    let stats = filtered.stats;
    info!(
        "kept {} rows ({} dropped by category, {} dropped by genre)",
        stats.kept, stats.dropped_category, stats.dropped_genre
    );

    writer::write_csv(&filtered.table, &job.temp)?;
    info!("staged output at {}", job.temp.display());

    writer::replace_file(&job.temp, &job.dest).map_err(|source| ScrubError::Replace {
        dest: job.dest.clone(),
        source,
    })?;
    info!("replaced {}", job.dest.display());

    Ok(ScrubSummary {
        stats,
        missing_columns: filtered.missing_columns,
    })
}
