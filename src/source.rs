//! Reading one CSV file into a [`Table`].

use crate::error::{CetlError, Result};
use crate::table::{Schema, Table};
use std::fs::File;
use std::path::Path;

/// Parse the CSV file at `path` into a table.
///
/// The first record is the header and becomes the schema. Every data row
/// must have exactly one cell per header column; a ragged row, a duplicate
/// column name, or an empty file fails the whole read. All cells are kept
/// as strings, exactly as written.
pub fn read_table(path: &Path) -> Result<Table> {
    let file = File::open(path).map_err(|source| CetlError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(file);

    let headers = reader.headers().map_err(|err| CetlError::from_csv(path, err))?;
    if headers.is_empty() {
        return Err(CetlError::Format {
            path: path.to_path_buf(),
            message: "missing header row".into(),
        });
    }
    let columns: Vec<String> = headers.iter().map(str::to_string).collect();
    let schema = Schema::new(columns).map_err(|dup| CetlError::Format {
        path: path.to_path_buf(),
        message: format!("duplicate column `{}` in header", dup.0),
    })?;

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|err| CetlError::from_csv(path, err))?;
        rows.push(record.iter().map(str::to_string).collect());
    }
    Ok(Table::new(schema, rows))
}
