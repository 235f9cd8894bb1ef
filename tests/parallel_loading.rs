#[path = "common/mod.rs"]
mod common;

use cetl::{load_all, read_table, CetlError, WorkerPool};
use common::*;
use std::path::PathBuf;

/// Loading a file set concatenates rows in file-list order: all rows of the
/// first file, then the second, and so on, regardless of which worker
/// parsed which file.
#[test]
fn load_all_concatenates_in_list_order() {
    let corpus = make_corpus_basic();
    let paths: Vec<PathBuf> = ["clicks_1.csv", "clicks_2.csv", "clicks_3.csv"]
        .iter()
        .map(|f| corpus.clicks_dir.join(f))
        .collect();

    let pool = WorkerPool::new(Some(2)).unwrap();
    let table = load_all(&pool, &paths, None).unwrap();

    assert_eq!(table.len(), 6);
    assert_eq!(table.schema().columns(), ["date", "user_id", "click_target"]);
    let rows: Vec<_> = table.rows().collect();
    assert_eq!(rows[0], ["2020-01-01", "1", "ad_banner"]); // clicks_1, first row
    assert_eq!(rows[2], ["2020-01-02", "1", "ad_banner"]); // clicks_2, first row
    assert_eq!(rows[5], ["2020-01-03", "9", "footer_link"]); // clicks_3, only row
}

/// The same file list loads to an identical table whatever the pool size;
/// order comes from the list, not from worker scheduling. Covers pools both
/// smaller and larger than the file count.
#[test]
fn load_all_is_deterministic_across_pool_sizes() {
    let corpus = make_corpus_basic();
    let paths: Vec<PathBuf> = ["clicks_1.csv", "clicks_2.csv", "clicks_3.csv"]
        .iter()
        .map(|f| corpus.clicks_dir.join(f))
        .collect();

    let reference = load_all(&WorkerPool::new(Some(1)).unwrap(), &paths, None).unwrap();
    for workers in [2, 3, 8] {
        let pool = WorkerPool::new(Some(workers)).unwrap();
        assert_eq!(load_all(&pool, &paths, None).unwrap(), reference);
    }
}

/// An empty file list is a valid load producing the zero-column table.
#[test]
fn empty_file_list_yields_empty_table() {
    let pool = WorkerPool::new(Some(2)).unwrap();
    let table = load_all(&pool, &[], None).unwrap();
    assert!(table.is_empty());
    assert!(table.schema().is_empty());
}

/// Files sharing a column set but not a column order are re-projected onto
/// the first file's order cell by cell.
#[test]
fn reordered_columns_align_to_first_file() {
    let dir = tempfile::tempdir().unwrap();
    write_csv(
        &dir.path().join("a.csv"),
        &["date,user_id,click_target", "2020-01-01,1,ad_banner"],
    );
    write_csv(
        &dir.path().join("b.csv"),
        &["user_id,click_target,date", "2,search_box,2020-01-02"],
    );
    let paths = vec![dir.path().join("a.csv"), dir.path().join("b.csv")];

    let pool = WorkerPool::new(Some(1)).unwrap();
    let table = load_all(&pool, &paths, None).unwrap();

    assert_eq!(table.schema().columns(), ["date", "user_id", "click_target"]);
    let rows: Vec<_> = table.rows().collect();
    assert_eq!(rows[1], ["2020-01-02", "2", "search_box"]);
}

/// A file whose column set genuinely differs fails the whole load.
#[test]
fn disjoint_schemas_abort_the_load() {
    let dir = tempfile::tempdir().unwrap();
    write_csv(
        &dir.path().join("a.csv"),
        &["date,user_id,click_target", "2020-01-01,1,ad_banner"],
    );
    write_csv(&dir.path().join("b.csv"), &["date,user_id", "2020-01-02,2"]);
    let paths = vec![dir.path().join("a.csv"), dir.path().join("b.csv")];

    let pool = WorkerPool::new(Some(2)).unwrap();
    let err = load_all(&pool, &paths, None).unwrap_err();
    assert!(matches!(err, CetlError::SchemaMismatch(_)), "unexpected error: {err}");
}

/// A missing file surfaces as an I/O error carrying the offending path.
#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    write_csv(&dir.path().join("a.csv"), &["date,user_id", "2020-01-01,1"]);
    let paths = vec![dir.path().join("a.csv"), dir.path().join("nope.csv")];

    let pool = WorkerPool::new(Some(2)).unwrap();
    match load_all(&pool, &paths, None).unwrap_err() {
        CetlError::Io { path, .. } => assert!(path.ends_with("nope.csv")),
        other => panic!("unexpected error: {other}"),
    }
}

/// A row with the wrong cell count is a format error, not silent padding
/// or truncation.
#[test]
fn ragged_row_is_format_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.csv");
    write_csv(&path, &["date,user_id,click_target", "2020-01-01,1"]);

    match read_table(&path).unwrap_err() {
        CetlError::Format { path: p, .. } => assert_eq!(p, path),
        other => panic!("unexpected error: {other}"),
    }
}

/// A zero-byte file has no header row to define a schema.
#[test]
fn headerless_file_is_format_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.csv");
    write_csv(&path, &[]);

    match read_table(&path).unwrap_err() {
        CetlError::Format { message, .. } => assert!(message.contains("header")),
        other => panic!("unexpected error: {other}"),
    }
}

/// Duplicate column names are rejected at read time.
#[test]
fn duplicate_header_is_format_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dup.csv");
    write_csv(&path, &["date,user_id,date", "2020-01-01,1,2020-01-02"]);

    match read_table(&path).unwrap_err() {
        CetlError::Format { message, .. } => assert!(message.contains("duplicate")),
        other => panic!("unexpected error: {other}"),
    }
}

/// Cells load as verbatim strings: leading zeros survive and quoted fields
/// keep their embedded delimiters. A file with only a header is a valid,
/// empty table.
#[test]
fn cells_are_verbatim_strings() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("raw.csv");
    write_csv(&path, &["id,country", "007,lt", "8,\"L,T\""]);

    let table = read_table(&path).unwrap();
    let rows: Vec<_> = table.rows().collect();
    assert_eq!(rows[0], ["007", "lt"]);
    assert_eq!(rows[1], ["8", "L,T"]);

    let header_only = dir.path().join("header_only.csv");
    write_csv(&header_only, &["id,country"]);
    let table = read_table(&header_only).unwrap();
    assert_eq!(table.schema().columns(), ["id", "country"]);
    assert!(table.is_empty());
}
