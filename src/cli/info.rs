use anyhow::Result;

use qcimport::tsv::TsvFormat;

/// Print the file header and output schema of a format.
pub fn run_info<F: TsvFormat>(format: F) -> Result<()> {
    println!("File header:    {}", format.header().join("\t"));
    println!("Output columns:");
    for column in format.table_spec().columns() {
        println!("  {:<20} {}", column.name, column.ty);
    }
    Ok(())
}
