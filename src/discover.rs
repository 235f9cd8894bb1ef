use crate::error::{CetlError, Result};
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// List the `*.csv` files directly inside `dir`, sorted by path.
///
/// Only the top level is scanned; subdirectories and files with other
/// extensions are skipped. Sorting makes the load order independent of the
/// filesystem's directory listing, so repeated runs process files in the
/// same order. An unreadable or missing directory is an error, not an empty
/// list.
pub fn csv_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = entry.map_err(|err| walk_error(dir, err))?;
        let path = entry.path();
        if entry.file_type().is_file() && path.extension().is_some_and(|ext| ext == "csv") {
            files.push(path.to_path_buf());
        }
    }
    files.sort();
    Ok(files)
}

fn walk_error(dir: &Path, err: walkdir::Error) -> CetlError {
    let path = err.path().unwrap_or(dir).to_path_buf();
    let message = err.to_string();
    let source = err
        .into_io_error()
        .unwrap_or_else(|| io::Error::other(message));
    CetlError::Io { path, source }
}
