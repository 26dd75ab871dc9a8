use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::table::{Row, RowSink};

use super::{Cancellation, TsvError, TsvFormat};

/// The TSV field separator: a single horizontal tab.
const SEPARATOR: char = '\t';

/// Generic reader for QC export files.
///
/// Owns file iteration, header validation, tokenization, and row
/// bookkeeping; delegates the header declaration and the per-row cell
/// construction to the [`TsvFormat`] it was built with. The expected
/// column count is the length of the format's declared header.
pub struct TsvReader<F: TsvFormat> {
    format: F,
    ignore_additional_columns: bool,
}

impl<F: TsvFormat> TsvReader<F> {
    /// Create a reader for the given format. Additional header columns are
    /// reported as errors unless [`ignore_additional_columns`] is set.
    ///
    /// [`ignore_additional_columns`]: TsvReader::ignore_additional_columns
    pub fn new(format: F) -> Self {
        Self {
            format,
            ignore_additional_columns: false,
        }
    }

    /// If set, header columns beyond the declared schema are silently
    /// ignored instead of failing the import. Default is false.
    pub fn ignore_additional_columns(mut self, ignore: bool) -> Self {
        self.ignore_additional_columns = ignore;
        self
    }

    pub fn format(&self) -> &F {
        &self.format
    }

    /// Read the file at `path` into `sink`, returning the number of rows
    /// appended.
    ///
    /// The file handle is held only for the duration of the call and is
    /// released on every exit path. Errors are logged before being
    /// returned to the caller.
    pub fn run<P, S, C>(&self, path: P, sink: &mut S, cancel: &C) -> Result<usize, TsvError>
    where
        P: AsRef<Path>,
        S: RowSink + ?Sized,
        C: Cancellation + ?Sized,
    {
        let result = File::open(path)
            .map_err(TsvError::from)
            .and_then(|file| self.read_from(BufReader::new(file), sink, cancel));

        if let Err(ref err) = result {
            log::error!("{}", err);
        }
        result
    }

    /// Read from an already-open buffered source.
    ///
    /// Same contract as [`run`], minus the file handling and the error
    /// logging.
    ///
    /// [`run`]: TsvReader::run
    pub fn read_from<R, S, C>(&self, reader: R, sink: &mut S, cancel: &C) -> Result<usize, TsvError>
    where
        R: BufRead,
        S: RowSink + ?Sized,
        C: Cancellation + ?Sized,
    {
        let expected = self.format.header().len();
        let mut lines = reader.lines();

        // Header: a missing first line counts as zero columns.
        let header_line = lines.next().transpose()?;
        let header_tokens: Vec<&str> = match header_line.as_deref() {
            Some(line) => line.split(SEPARATOR).collect(),
            None => Vec::new(),
        };

        if header_tokens.len() < expected
            || (header_tokens.len() > expected && !self.ignore_additional_columns)
        {
            return Err(TsvError::HeaderColumnCount {
                expected,
                actual: header_tokens.len(),
            });
        }

        // Tokens beyond the declared schema are never compared.
        for (actual, expected_name) in header_tokens.iter().zip(self.format.header()) {
            if actual != expected_name {
                return Err(TsvError::HeaderMismatch {
                    expected: expected_name.to_string(),
                    actual: actual.to_string(),
                });
            }
        }

        let mut row_idx = 1usize;
        for line in lines {
            let line = line?;

            // Blank lines do not consume a row number.
            if line.trim().is_empty() {
                continue;
            }

            let tokens: Vec<&str> = line.split(SEPARATOR).collect();
            let cells = self
                .format
                .parse_row(&tokens)
                .map_err(|source| TsvError::Row {
                    row: row_idx,
                    line: line.clone(),
                    source,
                })?;

            sink.add_row(Row::new(format!("Row {}", row_idx), cells));

            if cancel.is_cancelled() {
                return Err(TsvError::Cancelled);
            }
            row_idx += 1;
        }

        Ok(row_idx - 1)
    }
}
