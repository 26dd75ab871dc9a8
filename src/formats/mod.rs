//! # QC Export Format Adapters
//!
//! The concrete file formats understood by the engine, one adapter each:
//!
//! - [`TicFormat`]: total-ion-current traces, two double columns.
//! - [`IdFormat`]: peptide identification tables, twelve mixed-type
//!   columns with per-column defaults for empty `Annots` and `Similarity`
//!   fields.
//!
//! Each adapter declares its file header and output schema once at
//! construction and is stateless across rows.

mod id;
mod tic;


pub use id::IdFormat;
pub use tic::TicFormat;

use crate::tsv::RowError;

fn parse_double(column: &'static str, token: &str) -> Result<f64, RowError> {
    token.parse().map_err(|_| RowError::InvalidNumber {
        column,
        value: token.to_string(),
    })
}

fn parse_int(column: &'static str, token: &str) -> Result<i32, RowError> {
    token.parse().map_err(|_| RowError::InvalidNumber {
        column,
        value: token.to_string(),
    })
}
