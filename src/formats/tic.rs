use crate::table::{Cell, ColumnSpec, ColumnType, TableSpec};
use crate::tsv::{RowError, TsvFormat};

use super::parse_double;

const HEADER: [&str; 2] = ["RT_(sec)", "TIC"];

/// Total-ion-current trace export: retention time in seconds against the
/// summed ion current, both doubles.
///
/// The output columns are named `RT` and `TIC`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TicFormat;

impl TicFormat {
    pub fn new() -> Self {
        Self
    }
}

impl TsvFormat for TicFormat {
    fn header(&self) -> &[&'static str] {
        &HEADER
    }

    fn parse_row(&self, tokens: &[&str]) -> Result<Vec<Cell>, RowError> {
        if tokens.len() != 2 {
            return Err(RowError::FieldCount {
                expected: 2,
                actual: tokens.len(),
            });
        }
        Ok(vec![
            Cell::Double(parse_double("RT", tokens[0])?),
            Cell::Double(parse_double("TIC", tokens[1])?),
        ])
    }

    fn table_spec(&self) -> TableSpec {
        TableSpec::new(vec![
            ColumnSpec::new("RT", ColumnType::Double),
            ColumnSpec::new("TIC", ColumnType::Double),
        ])
    }
}
