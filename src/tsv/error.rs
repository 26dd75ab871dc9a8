/// Errors that can occur while reading a QC export file.
#[derive(Debug, thiserror::Error)]
pub enum TsvError {
    /// I/O error opening or reading the input file
    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),

    /// Header has the wrong number of columns
    #[error("Invalid file header. Expected {expected} columns but got {actual}.")]
    HeaderColumnCount { expected: usize, actual: usize },

    /// A header token disagrees with the declared schema
    #[error("Invalid header element: Expected {expected} but got {actual}.")]
    HeaderMismatch { expected: String, actual: String },

    /// A data row failed to parse; carries the 1-based row number and the
    /// verbatim offending line
    #[error("Invalid qcml file. Offending line: nr={row}; {line}")]
    Row {
        row: usize,
        line: String,
        source: RowError,
    },

    /// Cooperative cancellation observed between rows
    #[error("Import cancelled")]
    Cancelled,
}

/// Row-level failures reported by a format's row parser.
///
/// Always wrapped into [`TsvError::Row`] by the engine, which adds the row
/// number and the original line text.
#[derive(Debug, thiserror::Error)]
pub enum RowError {
    /// Wrong number of tab-separated fields
    #[error("expected {expected} fields but got {actual}")]
    FieldCount { expected: usize, actual: usize },

    /// A numeric field failed to parse
    #[error("column {column}: cannot parse '{value}' as a number")]
    InvalidNumber { column: &'static str, value: String },
}
