use super::ColumnType;

/// Name and type of one output column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSpec {
    pub name: String,
    pub ty: ColumnType,
}

impl ColumnSpec {
    pub fn new(name: &str, ty: ColumnType) -> Self {
        Self {
            name: name.to_string(),
            ty,
        }
    }
}

/// The fixed, ordered output schema of one file format.
///
/// Declared once at format construction and never mutated. Output column
/// names are not necessarily the file-header tokens: the TIC trace header
/// `RT_(sec)` maps to the output column `RT`, and the ID table headers
/// `target/decoy` and `Oxidation_(M)` map to `target-decoy` and
/// `Oxidation_M`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSpec {
    columns: Vec<ColumnSpec>,
}

impl TableSpec {
    pub fn new(columns: Vec<ColumnSpec>) -> Self {
        Self { columns }
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn columns(&self) -> &[ColumnSpec] {
        &self.columns
    }

    /// Output column names, in declaration order.
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }
}
