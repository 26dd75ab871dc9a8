use std::io::Cursor;
use std::io::Write;

use super::*;
use crate::table::{Cell, ColumnSpec, ColumnType, Row, TableSpec};

/// Minimal three-column format used to exercise the engine in isolation.
struct TestFormat;

impl TsvFormat for TestFormat {
    fn header(&self) -> &[&'static str] {
        &["A", "B", "C"]
    }

    fn parse_row(&self, tokens: &[&str]) -> Result<Vec<Cell>, RowError> {
        if tokens.len() != 3 {
            return Err(RowError::FieldCount {
                expected: 3,
                actual: tokens.len(),
            });
        }
        let a: f64 = tokens[0].parse().map_err(|_| RowError::InvalidNumber {
            column: "A",
            value: tokens[0].to_string(),
        })?;
        let b: i32 = tokens[1].parse().map_err(|_| RowError::InvalidNumber {
            column: "B",
            value: tokens[1].to_string(),
        })?;
        Ok(vec![
            Cell::Double(a),
            Cell::Int(b),
            Cell::Str(tokens[2].to_string()),
        ])
    }

    fn table_spec(&self) -> TableSpec {
        TableSpec::new(vec![
            ColumnSpec::new("A", ColumnType::Double),
            ColumnSpec::new("B", ColumnType::Int),
            ColumnSpec::new("C", ColumnType::Str),
        ])
    }
}

/// Cancellation token that fires on the nth poll.
struct CancelAfter {
    remaining: std::cell::Cell<usize>,
}

impl CancelAfter {
    fn new(rows: usize) -> Self {
        Self {
            remaining: std::cell::Cell::new(rows),
        }
    }
}

impl Cancellation for CancelAfter {
    fn is_cancelled(&self) -> bool {
        let left = self.remaining.get();
        if left <= 1 {
            return true;
        }
        self.remaining.set(left - 1);
        false
    }
}

fn read(input: &str) -> Result<Vec<Row>, TsvError> {
    let reader = TsvReader::new(TestFormat);
    let mut rows = Vec::new();
    reader.read_from(Cursor::new(input), &mut rows, &Never)?;
    Ok(rows)
}

#[test]
fn test_well_formed_input() -> Result<(), TsvError> {
    let rows = read("A\tB\tC\n1.5\t2\tx\n3.25\t-4\ty\n")?;

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].key, "Row 1");
    assert_eq!(
        rows[0].cells,
        vec![Cell::Double(1.5), Cell::Int(2), Cell::Str("x".to_string())]
    );
    assert_eq!(rows[1].key, "Row 2");
    assert_eq!(rows[1].cells[1], Cell::Int(-4));
    Ok(())
}

#[test]
fn test_returns_row_count() -> Result<(), TsvError> {
    let reader = TsvReader::new(TestFormat);
    let mut rows = Vec::new();
    let count = reader.read_from(
        Cursor::new("A\tB\tC\n1\t1\ta\n2\t2\tb\n3\t3\tc\n"),
        &mut rows,
        &Never,
    )?;
    assert_eq!(count, 3);
    assert_eq!(rows.len(), 3);
    Ok(())
}

#[test]
fn test_blank_lines_skipped_without_consuming_row_numbers() -> Result<(), TsvError> {
    let rows = read("A\tB\tC\n\n1\t1\ta\n   \n\t\n2\t2\tb\n\n")?;

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].key, "Row 1");
    assert_eq!(rows[1].key, "Row 2");
    Ok(())
}

#[test]
fn test_missing_final_newline() -> Result<(), TsvError> {
    let rows = read("A\tB\tC\n1\t1\ta")?;
    assert_eq!(rows.len(), 1);
    Ok(())
}

#[test]
fn test_header_with_fewer_columns_fails() {
    let err = read("A\tB\n").expect_err("short header must fail");
    match err {
        TsvError::HeaderColumnCount { expected, actual } => {
            assert_eq!(expected, 3);
            assert_eq!(actual, 2);
        }
        other => panic!("unexpected error: {}", other),
    }
    assert_eq!(
        read("A\tB\n").expect_err("short header").to_string(),
        "Invalid file header. Expected 3 columns but got 2."
    );
}

#[test]
fn test_header_with_extra_columns_fails_by_default() {
    let err = read("A\tB\tC\tD\n").expect_err("extra column must fail");
    assert!(matches!(
        err,
        TsvError::HeaderColumnCount {
            expected: 3,
            actual: 4
        }
    ));
}

#[test]
fn test_trailing_tab_counts_as_extra_column() {
    // "A\tB\tC\t" splits into four tokens, the last one empty.
    let err = read("A\tB\tC\t\n").expect_err("trailing tab must fail");
    assert!(matches!(
        err,
        TsvError::HeaderColumnCount {
            expected: 3,
            actual: 4
        }
    ));
}

#[test]
fn test_ignore_additional_columns_accepts_extra_header_tokens() -> Result<(), TsvError> {
    let reader = TsvReader::new(TestFormat).ignore_additional_columns(true);
    let mut rows = Vec::new();
    // The extra tokens are never compared against the schema.
    reader.read_from(
        Cursor::new("A\tB\tC\tanything\televen more\n1\t1\ta\n"),
        &mut rows,
        &Never,
    )?;
    assert_eq!(rows.len(), 1);
    Ok(())
}

#[test]
fn test_ignore_additional_columns_still_rejects_short_header() {
    let reader = TsvReader::new(TestFormat).ignore_additional_columns(true);
    let mut rows: Vec<Row> = Vec::new();
    let err = reader
        .read_from(Cursor::new("A\tB\n"), &mut rows, &Never)
        .expect_err("short header must fail regardless of the ignore flag");
    assert!(matches!(err, TsvError::HeaderColumnCount { .. }));
}

#[test]
fn test_header_mismatch_reports_first_bad_position() {
    let err = read("A\tX\tC\n").expect_err("misspelled header must fail");
    match &err {
        TsvError::HeaderMismatch { expected, actual } => {
            assert_eq!(expected, "B");
            assert_eq!(actual, "X");
        }
        other => panic!("unexpected error: {}", other),
    }
    assert_eq!(
        err.to_string(),
        "Invalid header element: Expected B but got X."
    );
}

#[test]
fn test_reordered_header_fails() {
    let err = read("B\tA\tC\n").expect_err("reordered header must fail");
    assert!(matches!(err, TsvError::HeaderMismatch { .. }));
}

#[test]
fn test_empty_input_fails_header_check() {
    let err = read("").expect_err("empty input must fail");
    assert!(matches!(
        err,
        TsvError::HeaderColumnCount {
            expected: 3,
            actual: 0
        }
    ));
}

#[test]
fn test_bad_row_aborts_and_keeps_earlier_rows() {
    let reader = TsvReader::new(TestFormat);
    let mut rows: Vec<Row> = Vec::new();
    let err = reader
        .read_from(
            Cursor::new("A\tB\tC\n1\t1\ta\n2\t2\tb\nnot-a-number\t3\tc\n4\t4\td\n"),
            &mut rows,
            &Never,
        )
        .expect_err("malformed row must abort the run");

    // Rows before the failure stay in the sink; none after it are produced.
    assert_eq!(rows.len(), 2);
    assert_eq!(
        err.to_string(),
        "Invalid qcml file. Offending line: nr=3; not-a-number\t3\tc"
    );
    match err {
        TsvError::Row { row, line, source } => {
            assert_eq!(row, 3);
            assert_eq!(line, "not-a-number\t3\tc");
            assert!(matches!(source, RowError::InvalidNumber { column: "A", .. }));
        }
        other => panic!("unexpected error: {}", other),
    }
}

#[test]
fn test_wrong_field_count_aborts() {
    let err = read("A\tB\tC\n1\t1\n").expect_err("short row must abort");
    match err {
        TsvError::Row { row, source, .. } => {
            assert_eq!(row, 1);
            assert!(matches!(
                source,
                RowError::FieldCount {
                    expected: 3,
                    actual: 2
                }
            ));
        }
        other => panic!("unexpected error: {}", other),
    }
}

#[test]
fn test_cancellation_keeps_exactly_polled_rows() {
    let reader = TsvReader::new(TestFormat);
    let mut rows: Vec<Row> = Vec::new();
    let err = reader
        .read_from(
            Cursor::new("A\tB\tC\n1\t1\ta\n2\t2\tb\n3\t3\tc\n"),
            &mut rows,
            &CancelAfter::new(2),
        )
        .expect_err("cancellation must abort the run");

    assert!(matches!(err, TsvError::Cancelled));
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1].key, "Row 2");
}

#[test]
fn test_run_reads_from_disk() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("test.tsv");
    let mut file = std::fs::File::create(&path)?;
    write!(file, "A\tB\tC\n1.5\t2\tx\n")?;
    drop(file);

    let reader = TsvReader::new(TestFormat);
    let mut rows: Vec<Row> = Vec::new();
    let count = reader.run(&path, &mut rows, &Never)?;

    assert_eq!(count, 1);
    assert_eq!(rows[0].cells[0], Cell::Double(1.5));
    Ok(())
}

#[test]
fn test_run_on_missing_file_is_io_error() {
    let reader = TsvReader::new(TestFormat);
    let mut rows: Vec<Row> = Vec::new();
    let err = reader
        .run("/nonexistent/qc/export.tsv", &mut rows, &Never)
        .expect_err("missing file must fail");
    assert!(matches!(err, TsvError::Io(_)));
}
