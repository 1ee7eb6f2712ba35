// ---------------------------------------------------------------------------
// Table – a fully materialized delimited-text table
// ---------------------------------------------------------------------------

/// One in-memory table: a header row plus data rows.
///
/// Cells are positional; row `i` cell `j` belongs to column `header[j]`.
/// Rows shorter than the header are legal and read as empty cells.
/// Header names are assumed unique; duplicates are not detected here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    /// Ordered column names.
    pub header: Vec<String>,
    /// Data rows, in source order.
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Position of `name` in the header, if present.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.header.iter().position(|h| h == name)
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
