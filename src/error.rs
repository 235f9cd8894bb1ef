//! Failure taxonomy for the pipeline: I/O, malformed CSV, missing columns,
//! and incompatible schemas. Errors propagate unmodified to the caller; no
//! stage retries or degrades to a partial result.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, CetlError>;

/// Any failure the pipeline can surface.
#[derive(Debug, Error)]
pub enum CetlError {
    /// A file or directory could not be opened, read, or written.
    #[error("{}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        source: io::Error,
    },

    /// A CSV file violated its own structure (no header, ragged row,
    /// duplicate column name, unbalanced quoting).
    #[error("{}: {}", .path.display(), .message)]
    Format { path: PathBuf, message: String },

    /// A column an operation depends on is absent from its input table.
    #[error("missing column `{column}` in {table} table")]
    MissingColumn { column: String, table: String },

    /// Tables that should line up have incompatible column sets.
    #[error("schema mismatch: {0}")]
    SchemaMismatch(String),
}

impl CetlError {
    pub(crate) fn missing_column(column: &str, table: &str) -> Self {
        CetlError::MissingColumn {
            column: column.into(),
            table: table.into(),
        }
    }

    /// Split a csv-crate error into the I/O and format halves of the
    /// taxonomy. The rendered message is captured before the kind is
    /// extracted because it carries the record/line position.
    pub(crate) fn from_csv(path: &Path, err: csv::Error) -> Self {
        let message = err.to_string();
        match err.into_kind() {
            csv::ErrorKind::Io(source) => CetlError::Io {
                path: path.to_path_buf(),
                source,
            },
            _ => CetlError::Format {
                path: path.to_path_buf(),
                message,
            },
        }
    }
}
