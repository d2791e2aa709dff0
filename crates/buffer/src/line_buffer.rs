/// Ordered sequence of text rows.
///
/// Rows are zero-indexed and contiguous. The buffer always contains at least
/// one row; a freshly created buffer holds a single empty row. Columns and
/// row lengths are measured in `char`s, not bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineBuffer {
    rows: Vec<String>,
}

impl LineBuffer {
    /// Create a buffer with a single empty row.
    pub fn new() -> Self {
        Self {
            rows: vec![String::new()],
        }
    }

    /// Create a buffer from existing rows.
    ///
    /// An empty row list collapses to the canonical single-empty-row buffer
    /// so the never-empty invariant holds from the start.
    pub fn from_rows(rows: Vec<String>) -> Self {
        if rows.is_empty() {
            Self::new()
        } else {
            Self { rows }
        }
    }

    /// Number of rows. Always at least 1.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Whether `row` is a valid row index.
    pub fn is_valid_row(&self, row: usize) -> bool {
        row < self.rows.len()
    }

    /// Length of `row` in chars, or 0 for an out-of-range row.
    pub fn row_len(&self, row: usize) -> usize {
        self.rows.get(row).map_or(0, |r| r.chars().count())
    }

    /// Text of `row`, if it exists.
    pub fn row(&self, row: usize) -> Option<&str> {
        self.rows.get(row).map(String::as_str)
    }

    /// All rows in order.
    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    /// Owned copy of all rows, for snapshots.
    pub fn to_rows(&self) -> Vec<String> {
        self.rows.clone()
    }
}

impl Default for LineBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_buffer_has_one_empty_row() {
        let buf = LineBuffer::new();
        assert_eq!(buf.row_count(), 1);
        assert_eq!(buf.row(0), Some(""));
    }

    #[test]
    fn test_from_rows_empty_collapses_to_single_row() {
        let buf = LineBuffer::from_rows(Vec::new());
        assert_eq!(buf.row_count(), 1);
        assert_eq!(buf.row_len(0), 0);
    }

    #[test]
    fn test_row_len_counts_chars_not_bytes() {
        let buf = LineBuffer::from_rows(vec!["héllo".to_string()]);
        assert_eq!(buf.row_len(0), 5);
    }

    #[test]
    fn test_out_of_range_row() {
        let buf = LineBuffer::new();
        assert!(!buf.is_valid_row(1));
        assert_eq!(buf.row_len(1), 0);
        assert_eq!(buf.row(1), None);
    }
}
