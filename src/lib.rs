mod config;
mod discover;
mod error;
mod pool;
mod source;
mod table;

mod aggregate;
mod export;
mod join;
mod loader;
mod progress;
mod util;

mod pipeline;

pub use crate::config::{Config, InputConfig, OutputConfig};
pub use crate::error::{CetlError, Result};
pub use crate::pipeline::{run, RunSummary};
pub use crate::table::{DuplicateColumn, Schema, Table};

// Expose the individual stages so the pieces compose outside the stock run.
pub use crate::aggregate::aggregate_by_date;
pub use crate::export::write_table;
pub use crate::join::join_and_filter;
pub use crate::loader::load_all;
pub use crate::pool::WorkerPool;
pub use crate::source::read_table;

// Expose progress helpers for binaries driving their own loads.
pub use crate::progress::make_count_progress;
