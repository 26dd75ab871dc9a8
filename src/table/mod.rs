//! # Typed Table Model
//!
//! In-memory representation of an imported QC table: typed cells, rows
//! keyed in input order, the fixed column schema a format declares, and the
//! [`RowSink`] abstraction the TSV engine appends completed rows to.
//!
//! The sink is ordered, append-only, and single-writer; concurrent imports
//! must each use their own sink.

mod cell;
mod sink;
mod spec;


pub use cell::{Cell, ColumnType};
pub use sink::{Row, RowSink, TableBuffer};
pub use spec::{ColumnSpec, TableSpec};
