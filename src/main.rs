mod data;
mod pipeline;

use anyhow::Result;

use data::filter::FilterSpec;
use pipeline::ScrubJob;

// Fixed invocation: no flags, no environment configuration. The three paths
// and the filter sets below are the whole interface.
const SOURCE: &str = "public/OGiMDB.csv";
const STAGING: &str = "public/iMDB_cleaned.csv";
const DEST: &str = "public/iMDB.csv";

const KEEP_COLUMNS: [&str; 11] = [
    "Const",
    "Title",
    "Title Type",
    "IMDb Rating",
    "Runtime (mins)",
    "Year",
    "Genres",
    "Num Votes",
    "Release Date",
    "Directors",
    "Your Rating",
];

const CATEGORY_COLUMN: &str = "Title Type";
const ALLOWED_CATEGORIES: [&str; 2] = ["Movie", "TV Series"];

const GENRE_COLUMN: &str = "Genres";
const EXCLUDED_GENRES: [&str; 3] = ["Animation", "Game-Show", "Video Game"];

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let job = ScrubJob {
        source: SOURCE.into(),
        temp: STAGING.into(),
        dest: DEST.into(),
        filter: FilterSpec {
            keep_columns: KEEP_COLUMNS.iter().map(|c| c.to_string()).collect(),
            category_column: CATEGORY_COLUMN.to_string(),
            allowed_categories: ALLOWED_CATEGORIES.iter().map(|c| c.to_string()).collect(),
            genre_column: GENRE_COLUMN.to_string(),
            excluded_genres: EXCLUDED_GENRES.iter().map(|g| g.to_string()).collect(),
        },
    };

    let summary = pipeline::run(&job)?;
    log::info!(
        "done: {} of {} rows kept in {DEST}",
        summary.stats.kept,
        summary.stats.read
    );
    Ok(())
}
