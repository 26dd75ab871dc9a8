use crate::table::{Cell, ColumnSpec, ColumnType, TableSpec};
use crate::tsv::{RowError, TsvFormat};

use super::{parse_double, parse_int};

const HEADER: [&str; 12] = [
    "RT",
    "MZ",
    "uniqueness",
    "ProteinID",
    "target/decoy",
    "Score",
    "PeptideSequence",
    "Annots",
    "Similarity",
    "Charge",
    "TheoreticalWeight",
    "Oxidation_(M)",
];

/// Peptide identification table export, twelve mixed-type columns.
///
/// `Annots` and `Similarity` may be empty in the file and default to `0`
/// and `0.0`; every other numeric column treats an empty field as a parse
/// error. The `target/decoy` and `Oxidation_(M)` header tokens map to the
/// output columns `target-decoy` and `Oxidation_M`.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdFormat;

impl IdFormat {
    pub fn new() -> Self {
        Self
    }
}

impl TsvFormat for IdFormat {
    fn header(&self) -> &[&'static str] {
        &HEADER
    }

    fn parse_row(&self, tokens: &[&str]) -> Result<Vec<Cell>, RowError> {
        if tokens.len() != 12 {
            return Err(RowError::FieldCount {
                expected: 12,
                actual: tokens.len(),
            });
        }

        // Empty Annots/Similarity fields occur in real exports and default
        // rather than fail.
        let annots = if tokens[7].is_empty() {
            0
        } else {
            parse_int("Annots", tokens[7])?
        };
        let similarity = if tokens[8].is_empty() {
            0.0
        } else {
            parse_double("Similarity", tokens[8])?
        };

        Ok(vec![
            Cell::Double(parse_double("RT", tokens[0])?),
            Cell::Double(parse_double("MZ", tokens[1])?),
            Cell::Str(tokens[2].to_string()),
            Cell::Str(tokens[3].to_string()),
            Cell::Str(tokens[4].to_string()),
            Cell::Double(parse_double("Score", tokens[5])?),
            Cell::Str(tokens[6].to_string()),
            Cell::Int(annots),
            Cell::Double(similarity),
            Cell::Int(parse_int("Charge", tokens[9])?),
            Cell::Double(parse_double("TheoreticalWeight", tokens[10])?),
            Cell::Str(tokens[11].to_string()),
        ])
    }

    fn table_spec(&self) -> TableSpec {
        TableSpec::new(vec![
            ColumnSpec::new("RT", ColumnType::Double),
            ColumnSpec::new("MZ", ColumnType::Double),
            ColumnSpec::new("uniqueness", ColumnType::Str),
            ColumnSpec::new("ProteinID", ColumnType::Str),
            ColumnSpec::new("target-decoy", ColumnType::Str),
            ColumnSpec::new("Score", ColumnType::Double),
            ColumnSpec::new("PeptideSequence", ColumnType::Str),
            ColumnSpec::new("Annots", ColumnType::Int),
            ColumnSpec::new("Similarity", ColumnType::Double),
            ColumnSpec::new("Charge", ColumnType::Int),
            ColumnSpec::new("TheoreticalWeight", ColumnType::Double),
            ColumnSpec::new("Oxidation_M", ColumnType::Str),
        ])
    }
}
