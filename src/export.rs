use crate::error::{CetlError, Result};
use crate::table::Table;
use std::fs::File;
use std::path::Path;

/// Write `table` to `path` as CSV, restricted to `columns` in the given
/// order.
///
/// The header line lists `columns` verbatim, then one line per row with the
/// cells of those columns. Lines end with `\n` on every platform and fields
/// are quoted only when they contain a delimiter, quote, or newline, so the
/// same table always serializes to the same bytes. An existing file is
/// overwritten; a missing parent directory is an I/O error, never created
/// here. An empty column list writes an empty file.
pub fn write_table<S: AsRef<str>>(table: &Table, path: &Path, columns: &[S]) -> Result<()> {
    let positions = columns
        .iter()
        .map(|c| {
            table
                .schema()
                .position(c.as_ref())
                .ok_or_else(|| CetlError::missing_column(c.as_ref(), "report"))
        })
        .collect::<Result<Vec<_>>>()?;

    let file = File::create(path).map_err(|source| CetlError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(file);

    if !positions.is_empty() {
        writer
            .write_record(columns.iter().map(|c| c.as_ref()))
            .map_err(|err| CetlError::from_csv(path, err))?;
        for row in table.rows() {
            writer
                .write_record(positions.iter().map(|&i| row[i].as_str()))
                .map_err(|err| CetlError::from_csv(path, err))?;
        }
    }
    writer.flush().map_err(|source| CetlError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(())
}
