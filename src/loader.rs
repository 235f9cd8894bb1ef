//! Parallel loading of a CSV file set into one unified table.
//!
//! The file list is split into contiguous partitions in list order, one per
//! worker. Each worker parses its partition sequentially and the results
//! land in partition-indexed slots, so the fan-in sees partitions in list
//! order no matter which worker finished first. The concatenated row order
//! is therefore a pure function of the input list.

use crate::error::Result;
use crate::pool::WorkerPool;
use crate::source::read_table;
use crate::table::Table;
use indicatif::ProgressBar;
use std::path::PathBuf;

/// Load every file in `paths` and concatenate the results in `paths` order.
///
/// An empty list yields [`Table::empty`]. Any single file failing to parse
/// fails the whole load; when several partitions fail, the error from the
/// earliest partition in list order is the one reported. `progress`, when
/// given, is bumped once per file from whichever worker loaded it.
pub fn load_all(
    pool: &WorkerPool,
    paths: &[PathBuf],
    progress: Option<&ProgressBar>,
) -> Result<Table> {
    if paths.is_empty() {
        return Ok(Table::empty());
    }

    let per_worker = paths.len().div_ceil(pool.workers());
    let partitions: Vec<&[PathBuf]> = paths.chunks(per_worker).collect();

    let mut slots: Vec<Result<Vec<Table>>> = Vec::with_capacity(partitions.len());
    slots.resize_with(partitions.len(), || Ok(Vec::new()));

    pool.scope(|scope| {
        for (slot, partition) in slots.iter_mut().zip(partitions.iter().copied()) {
            scope.spawn(move |_| {
                *slot = load_partition(partition, progress);
            });
        }
    });

    let mut tables = Vec::with_capacity(paths.len());
    for slot in slots {
        tables.extend(slot?);
    }
    Table::concat(tables)
}

fn load_partition(paths: &[PathBuf], progress: Option<&ProgressBar>) -> Result<Vec<Table>> {
    let mut tables = Vec::with_capacity(paths.len());
    for path in paths {
        tracing::debug!(path = %path.display(), "reading csv file");
        tables.push(read_table(path)?);
        if let Some(pb) = progress {
            pb.inc(1);
        }
    }
    Ok(tables)
}
