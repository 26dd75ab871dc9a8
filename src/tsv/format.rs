use crate::table::{Cell, TableSpec};

use super::RowError;

/// Per-format capability plugged into the generic engine: the declared
/// file header and the token to typed-cell mapping for one row.
///
/// Implementations are stateless with respect to individual rows; their
/// only state is the fixed schema declared at construction.
pub trait TsvFormat {
    /// The exact expected header tokens, positions `0..N-1`.
    ///
    /// The engine derives its authoritative column count `N` from the
    /// length of this slice.
    fn header(&self) -> &[&'static str];

    /// Convert the raw tokens of one data line into typed cells, one per
    /// declared column.
    ///
    /// Fails if the token count disagrees with the schema or a numeric
    /// token does not parse; the engine wraps the failure with the row
    /// number and the original line.
    fn parse_row(&self, tokens: &[&str]) -> Result<Vec<Cell>, RowError>;

    /// The output table schema. Output column names may differ from the
    /// file-header tokens.
    fn table_spec(&self) -> TableSpec;
}
