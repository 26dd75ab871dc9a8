//! # qcimport - QC Export File Readers
//!
//! `qcimport` reads the tab-separated export files produced by mass
//! spectrometry quality-control pipelines into typed in-memory tables.
//!
//! Two export formats are supported:
//!
//! - **TIC traces**: two double columns (retention time, total ion current).
//! - **Peptide identification tables**: twelve mixed-type columns
//!   (retention time, m/z, protein ID, score, charge, ...).
//!
//! Both are driven by the same generic TSV engine: the first line of the
//! file is a mandatory header that must match the format's declared column
//! names exactly, every subsequent non-blank line becomes one typed row,
//! and any malformed row aborts the whole import. QC export files are
//! machine-generated, so a single deviation indicates a corrupted or
//! incompatible source; skipping rows would silently distort downstream
//! statistics.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use qcimport::formats::TicFormat;
//! use qcimport::table::Row;
//! use qcimport::tsv::{Never, TsvReader};
//!
//! let reader = TsvReader::new(TicFormat::new());
//! let mut rows: Vec<Row> = Vec::new();
//! let count = reader.run("tic_trace.tsv", &mut rows, &Never)?;
//! println!("Imported {} rows", count);
//! # Ok::<(), qcimport::tsv::TsvError>(())
//! ```
//!
//! ## Architecture
//!
//! The library is organized into the following modules:
//!
//! - [`table`]: Typed cells, rows, column schemas, and the row sink
//!   abstraction that collects completed rows in order.
//! - [`tsv`]: The generic TSV engine: header validation, tokenization,
//!   row bookkeeping, error reporting, and cooperative cancellation.
//! - [`formats`]: The concrete format adapters (TIC trace, ID table) that
//!   plug into the engine.

pub mod formats;
pub mod table;
pub mod tsv;
