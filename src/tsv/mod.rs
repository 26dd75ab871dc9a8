//! # Generic TSV Engine
//!
//! This module provides the shared machinery for reading QC export files:
//! header validation against a declared schema, line-by-line tokenization,
//! row bookkeeping, and strict error reporting with line numbers.
//!
//! Per-format concerns (the expected header tokens and the token to typed
//! cell mapping) are supplied through the [`TsvFormat`] trait; the engine
//! itself is format-agnostic and is instantiated once per concrete reader.
//!
//! ## Error Semantics
//!
//! The engine never attempts partial recovery. A header that disagrees with
//! the declared schema fails before any row is produced; the first
//! malformed data row aborts the whole run with the 1-based row number and
//! the verbatim offending line. Rows appended to the sink before the
//! failure remain there (no rollback) but no further rows are produced.
//!
//! ## Example
//!
//! ```rust,no_run
//! use qcimport::formats::IdFormat;
//! use qcimport::table::TableBuffer;
//! use qcimport::tsv::{Never, TsvFormat, TsvReader};
//!
//! let format = IdFormat::new();
//! let mut table = TableBuffer::new(format.table_spec());
//! let reader = TsvReader::new(format);
//! reader.run("identifications.tsv", &mut table, &Never)?;
//! # Ok::<(), qcimport::tsv::TsvError>(())
//! ```

mod cancel;
mod error;
mod format;
mod reader;

#[cfg(test)]
mod tests;

pub use cancel::{CancelFlag, Cancellation, Never};
pub use error::{RowError, TsvError};
pub use format::TsvFormat;
pub use reader::TsvReader;
