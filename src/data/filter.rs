use serde::{Deserialize, Serialize};

use super::model::Table;

// ---------------------------------------------------------------------------
// Filter spec: which columns survive and which rows are kept
// ---------------------------------------------------------------------------

/// Declarative description of one scrub: column projection plus the two row
/// predicates. All data, no globals, so tests can run the same logic against
/// arbitrary specs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterSpec {
    /// Desired output columns, in output order. Entries absent from the
    /// input header are skipped (with a warning upstream), not errors.
    pub keep_columns: Vec<String>,
    /// Column holding the row's category (e.g. `Title Type`).
    pub category_column: String,
    /// Categories that are retained; any other value drops the row.
    pub allowed_categories: Vec<String>,
    /// Column holding the free-text genre tags (e.g. `Genres`).
    pub genre_column: String,
    /// A row is dropped when its genre text contains any of these as a
    /// case-sensitive substring. No tokenization: a token matching inside a
    /// longer genre name also drops the row.
    pub excluded_genres: Vec<String>,
}

/// Row accounting for one [`apply`] pass.
///
/// A row failing both predicates is counted once, under category, because
/// the genre check only runs on rows that passed the category check.
/// Invariant: `read == kept + dropped_category + dropped_genre`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FilterStats {
    pub read: usize,
    pub kept: usize,
    pub dropped_category: usize,
    pub dropped_genre: usize,
}

/// Result of filtering: the projected table plus accounting.
#[derive(Debug, Clone)]
pub struct Filtered {
    /// Surviving rows, projected to the available columns.
    pub table: Table,
    pub stats: FilterStats,
    /// `keep_columns` entries that were absent from the input header.
    pub missing_columns: Vec<String>,
}

// ---------------------------------------------------------------------------
// The filtering pass
// ---------------------------------------------------------------------------

/// Project `table` to the available subset of `spec.keep_columns` and drop
/// rows failing either predicate. Category membership is checked first; the
/// genre substring check runs only on rows that passed it. Relative row
/// order is preserved.
pub fn apply(table: &Table, spec: &FilterSpec) -> Filtered {
    // Output columns: keep_columns ∩ header, in keep_columns order.
    let mut available: Vec<String> = Vec::new();
    let mut keep_indices: Vec<usize> = Vec::new();
    let mut missing_columns: Vec<String> = Vec::new();
    for col in &spec.keep_columns {
        match table.column_index(col) {
            Some(idx) => {
                available.push(col.clone());
                keep_indices.push(idx);
            }
            None => missing_columns.push(col.clone()),
        }
    }

    let category_idx = table.column_index(&spec.category_column);
    let genre_idx = table.column_index(&spec.genre_column);

    let mut stats = FilterStats::default();
    let mut rows: Vec<Vec<String>> = Vec::new();

    for row in &table.rows {
        stats.read += 1;

        let category = category_idx.and_then(|i| row.get(i)).map(String::as_str);
        if !category.is_some_and(|c| spec.allowed_categories.iter().any(|a| a == c)) {
            stats.dropped_category += 1;
            continue;
        }

        // Absent genre column or short row reads as empty text, never null.
        let genres = genre_idx
            .and_then(|i| row.get(i))
            .map(String::as_str)
            .unwrap_or("");
        if spec.excluded_genres.iter().any(|ex| genres.contains(ex.as_str())) {
            stats.dropped_genre += 1;
            continue;
        }

        rows.push(
            keep_indices
                .iter()
                .map(|&i| row.get(i).cloned().unwrap_or_default())
                .collect(),
        );
        stats.kept += 1;
    }

    Filtered {
        table: Table {
            header: available,
            rows,
        },
        stats,
        missing_columns,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec() -> FilterSpec {
        FilterSpec {
            keep_columns: vec!["Title".to_string(), "Title Type".to_string(), "Genres".to_string()],
            category_column: "Title Type".to_string(),
            allowed_categories: vec!["Movie".to_string(), "TV Series".to_string()],
            genre_column: "Genres".to_string(),
            excluded_genres: vec![
                "Animation".to_string(),
                "Game-Show".to_string(),
                "Video Game".to_string(),
            ],
        }
    }

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    fn table(header: &[&str], rows: &[&[&str]]) -> Table {
        Table {
            header: header.iter().map(|h| h.to_string()).collect(),
            rows: rows.iter().map(|r| row(r)).collect(),
        }
    }

    #[test]
    fn drops_rows_with_excluded_genre_substring() {
        let t = table(
            &["Title", "Title Type", "Genres"],
            &[&["A", "Movie", "Action, Animation"], &["B", "Movie", "Drama"]],
        );
        let out = apply(&t, &spec());
        assert_eq!(out.stats.dropped_genre, 1);
        assert_eq!(out.table.rows, vec![row(&["B", "Movie", "Drama"])]);
    }

    #[test]
    fn drops_rows_outside_category_allow_list() {
        let t = table(
            &["Title", "Title Type", "Genres"],
            &[&["A", "Short", "Drama"], &["B", "TV Series", "Drama, Thriller"]],
        );
        let out = apply(&t, &spec());
        assert_eq!(out.stats.dropped_category, 1);
        assert_eq!(out.stats.kept, 1);
        assert_eq!(out.table.rows[0][0], "B");
    }

    #[test]
    fn row_failing_both_predicates_counts_under_category() {
        let t = table(
            &["Title", "Title Type", "Genres"],
            &[&["A", "Short", "Animation"]],
        );
        let out = apply(&t, &spec());
        assert_eq!(out.stats.dropped_category, 1);
        assert_eq!(out.stats.dropped_genre, 0);
    }

    #[test]
    fn row_counts_always_balance() {
        let t = table(
            &["Title", "Title Type", "Genres"],
            &[
                &["A", "Movie", "Drama"],
                &["B", "Short", "Drama"],
                &["C", "Movie", "Video Game"],
                &["D", "Podcast", "Game-Show"],
            ],
        );
        let out = apply(&t, &spec());
        assert_eq!(
            out.stats.read,
            out.stats.kept + out.stats.dropped_category + out.stats.dropped_genre
        );
        assert_eq!(out.stats.kept, 1);
        assert_eq!(out.stats.dropped_category, 2);
        assert_eq!(out.stats.dropped_genre, 1);
    }

    #[test]
    fn output_header_follows_keep_order_not_input_order() {
        // Input header deliberately reversed relative to keep_columns.
        let t = table(
            &["Genres", "Title Type", "Title"],
            &[&["Drama", "Movie", "A"]],
        );
        let out = apply(&t, &spec());
        assert_eq!(out.table.header, vec!["Title", "Title Type", "Genres"]);
        assert_eq!(out.table.rows[0], row(&["A", "Movie", "Drama"]));
    }

    #[test]
    fn missing_keep_columns_are_reported_not_fatal() {
        let t = table(&["Title", "Title Type"], &[&["A", "Movie"]]);
        let out = apply(&t, &spec());
        assert_eq!(out.missing_columns, vec!["Genres"]);
        assert_eq!(out.table.header, vec!["Title", "Title Type"]);
        // No genre column: genre text reads as empty, the row survives.
        assert_eq!(out.stats.kept, 1);
    }

    #[test]
    fn missing_category_column_drops_everything() {
        let t = table(&["Title", "Genres"], &[&["A", "Drama"]]);
        let out = apply(&t, &spec());
        assert_eq!(out.stats.dropped_category, 1);
        assert_eq!(out.stats.kept, 0);
    }

    #[test]
    fn substring_match_is_case_sensitive_and_untokenized() {
        let t = table(
            &["Title", "Title Type", "Genres"],
            &[
                &["A", "Movie", "animation"],         // lowercase: survives
                &["B", "Movie", "Stop-Animation"],    // superset: dropped
            ],
        );
        let out = apply(&t, &spec());
        assert_eq!(out.stats.kept, 1);
        assert_eq!(out.stats.dropped_genre, 1);
        assert_eq!(out.table.rows[0][0], "A");
    }

    #[test]
    fn short_rows_project_as_empty_cells() {
        let t = table(
            &["Title", "Title Type", "Genres"],
            &[&["A", "Movie"]],
        );
        let out = apply(&t, &spec());
        assert_eq!(out.stats.kept, 1);
        assert_eq!(out.table.rows[0], row(&["A", "Movie", ""]));
    }

    #[test]
    fn spec_round_trips_through_json() {
        let original = spec();
        let text = serde_json::to_string(&original).unwrap();
        let parsed: FilterSpec = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed.keep_columns, original.keep_columns);
        assert_eq!(parsed.excluded_genres, original.excluded_genres);
    }

    #[test]
    fn extra_input_columns_are_projected_away() {
        let t = table(
            &["Const", "Title", "Title Type", "Genres", "URL"],
            &[&["tt1", "A", "Movie", "Drama", "http://x"]],
        );
        let out = apply(&t, &spec());
        assert_eq!(out.table.header, vec!["Title", "Title Type", "Genres"]);
        assert_eq!(out.table.rows[0], row(&["A", "Movie", "Drama"]));
    }
}
