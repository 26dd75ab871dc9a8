use serde::Serialize;

use super::{Cell, TableSpec};

/// One completed, typed row: a sequential key plus one cell per declared
/// column.
///
/// Keys are `"Row 1"`, `"Row 2"`, ... in strict input order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Row {
    pub key: String,
    pub cells: Vec<Cell>,
}

impl Row {
    pub fn new(key: String, cells: Vec<Cell>) -> Self {
        Self { key, cells }
    }
}

/// Ordered, append-only collector of completed rows.
///
/// The TSV engine hands each row over immediately after parsing and never
/// retains it. Implementations must preserve insertion order.
pub trait RowSink {
    fn add_row(&mut self, row: Row);
}

impl RowSink for Vec<Row> {
    fn add_row(&mut self, row: Row) {
        self.push(row);
    }
}

/// A full in-memory table: the output schema plus the collected rows.
#[derive(Debug, Clone)]
pub struct TableBuffer {
    spec: TableSpec,
    rows: Vec<Row>,
}

impl TableBuffer {
    pub fn new(spec: TableSpec) -> Self {
        Self {
            spec,
            rows: Vec::new(),
        }
    }

    pub fn spec(&self) -> &TableSpec {
        &self.spec
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn into_rows(self) -> Vec<Row> {
        self.rows
    }
}

impl RowSink for TableBuffer {
    fn add_row(&mut self, row: Row) {
        self.rows.push(row);
    }
}
