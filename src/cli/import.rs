use anyhow::{Context, Result};
use log::info;
use std::fs::File;
use std::io::{self, Write};

use qcimport::table::TableBuffer;
use qcimport::tsv::{Never, TsvFormat, TsvReader};

use super::ImportArgs;

/// Import a QC export with the given format and write it out as CSV or
/// JSON.
pub fn run_import<F: TsvFormat>(format: F, args: ImportArgs) -> Result<()> {
    let spec = format.table_spec();
    let reader = TsvReader::new(format).ignore_additional_columns(args.ignore_extra_columns);
    let mut table = TableBuffer::new(spec);

    reader
        .run(&args.input, &mut table, &Never)
        .with_context(|| format!("failed to import {}", args.input.display()))?;

    info!("Imported {} rows from {}", table.len(), args.input.display());

    match &args.output {
        Some(path) => {
            let file =
                File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
            write_table(&table, file, args.json)?;
            info!("Wrote {}", path.display());
        }
        None => {
            let stdout = io::stdout();
            write_table(&table, stdout.lock(), args.json)?;
        }
    }

    Ok(())
}

fn write_table<W: Write>(table: &TableBuffer, writer: W, json: bool) -> Result<()> {
    if json {
        write_json(table, writer)
    } else {
        write_csv(table, writer)
    }
}

/// CSV export: a leading "Row ID" key column, then the output-schema
/// column names.
fn write_csv<W: Write>(table: &TableBuffer, writer: W) -> Result<()> {
    let mut csv_writer = csv::WriterBuilder::new().from_writer(writer);

    let mut header = vec!["Row ID".to_string()];
    header.extend(table.spec().column_names().map(str::to_string));
    csv_writer.write_record(&header)?;

    for row in table.rows() {
        let mut record = vec![row.key.clone()];
        record.extend(row.cells.iter().map(|cell| cell.to_string()));
        csv_writer.write_record(&record)?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// JSON export: an array of objects keyed by output column name.
fn write_json<W: Write>(table: &TableBuffer, writer: W) -> Result<()> {
    let mut objects = Vec::with_capacity(table.len());

    for row in table.rows() {
        let mut object = serde_json::Map::new();
        object.insert(
            "Row ID".to_string(),
            serde_json::Value::String(row.key.clone()),
        );
        for (column, cell) in table.spec().columns().iter().zip(&row.cells) {
            object.insert(column.name.clone(), serde_json::to_value(cell)?);
        }
        objects.push(object);
    }

    serde_json::to_writer_pretty(writer, &objects)?;
    Ok(())
}
