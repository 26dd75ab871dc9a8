use serde::Serialize;
use std::fmt;

/// A single typed value in an imported table.
///
/// Serializes untagged, so a JSON export carries the bare value
/// (`1.5`, `3`, `"TRYPSIN"`) rather than a variant wrapper.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Cell {
    /// Double-precision numeric value
    Double(f64),
    /// Integer value
    Int(i32),
    /// Free-form string value
    Str(String),
}

impl Cell {
    /// The column type this cell belongs to.
    pub fn column_type(&self) -> ColumnType {
        match self {
            Cell::Double(_) => ColumnType::Double,
            Cell::Int(_) => ColumnType::Int,
            Cell::Str(_) => ColumnType::Str,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Double(v) => write!(f, "{}", v),
            Cell::Int(v) => write!(f, "{}", v),
            Cell::Str(v) => write!(f, "{}", v),
        }
    }
}

/// The declared type of one table column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    Double,
    Int,
    Str,
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ColumnType::Double => "double",
            ColumnType::Int => "int",
            ColumnType::Str => "string",
        };
        write!(f, "{}", name)
    }
}
