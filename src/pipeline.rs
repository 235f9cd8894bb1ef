use crate::aggregate::aggregate_by_date;
use crate::config::Config;
use crate::discover::csv_files;
use crate::error::Result as CetlResult;
use crate::export::write_table;
use crate::join::join_and_filter;
use crate::loader::load_all;
use crate::pool::WorkerPool;
use crate::progress::make_count_progress;
use crate::util::init_tracing_once;
use anyhow::{Context, Result};
use std::path::PathBuf;

/// File name of the per-date click count report.
const TOTAL_CLICKS_FILE: &str = "total_clicks.csv";

/// What a completed run produced, for logging and assertions.
#[derive(Clone, Debug)]
pub struct RunSummary {
    pub clicks_rows: usize,
    pub users_rows: usize,
    pub distinct_dates: usize,
    pub filtered_rows: usize,
    pub total_clicks_path: PathBuf,
    pub filtered_clicks_path: PathBuf,
}

/// Execute the whole pipeline described by `config`.
///
/// Discovers both CSV sets, loads each across a worker pool sized from the
/// configuration, then produces the two reports from the in-memory tables:
/// the per-date click counts and the per-country filtered click details.
/// The first failure aborts the run; the pool is torn down before this
/// returns on every path.
pub fn run(config: &Config) -> Result<RunSummary> {
    init_tracing_once();

    let pool = WorkerPool::new(config.input.parallelism_number).context("building worker pool")?;
    let country = config.country();

    let clicks_files = csv_files(&config.input.input_clicks)
        .with_context(|| format!("listing clicks input {}", config.input.input_clicks.display()))?;
    let users_files = csv_files(&config.input.input_users)
        .with_context(|| format!("listing users input {}", config.input.input_users.display()))?;
    tracing::info!(
        clicks_files = clicks_files.len(),
        users_files = users_files.len(),
        workers = pool.workers(),
        country = country,
        "planned input files"
    );

    let pb = make_count_progress(clicks_files.len() as u64, "Loading clicks");
    let clicks = load_all(&pool, &clicks_files, Some(&pb)).context("loading clicks files")?;
    pb.finish_with_message("clicks loaded");

    let pb = make_count_progress(users_files.len() as u64, "Loading users");
    let users = load_all(&pool, &users_files, Some(&pb)).context("loading users files")?;
    pb.finish_with_message("users loaded");

    tracing::info!(
        clicks_rows = clicks.len(),
        users_rows = users.len(),
        "datasets loaded"
    );

    let total_clicks_path = config.output.output_total_clicks.join(TOTAL_CLICKS_FILE);
    let filtered_clicks_path = config
        .output
        .output_filtered_clicks
        .join(format!("{country}_clicks.csv"));

    // The two report paths only read the loaded tables, so they can run side
    // by side on the same pool. When both fail, the per-date report's error
    // is the one surfaced.
    let (total, filtered) = pool.join(
        || -> CetlResult<usize> {
            let report = aggregate_by_date(&clicks)?;
            write_table(&report, &total_clicks_path, &["date", "count"])?;
            Ok(report.len())
        },
        || -> CetlResult<usize> {
            let report = join_and_filter(&clicks, &users, country)?;
            let columns = report.schema().columns().to_vec();
            write_table(&report, &filtered_clicks_path, &columns)?;
            Ok(report.len())
        },
    );
    let distinct_dates =
        total.with_context(|| format!("writing {}", total_clicks_path.display()))?;
    let filtered_rows =
        filtered.with_context(|| format!("writing {}", filtered_clicks_path.display()))?;

    tracing::info!(distinct_dates, filtered_rows, "reports written");

    Ok(RunSummary {
        clicks_rows: clicks.len(),
        users_rows: users.len(),
        distinct_dates,
        filtered_rows,
        total_clicks_path,
        filtered_clicks_path,
    })
}
