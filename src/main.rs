use anyhow::Result;
use cetl::Config;
use std::time::Instant;

const CONFIG_PATH: &str = "config.json";

fn main() -> Result<()> {
    let started = Instant::now();

    let config = Config::from_file(CONFIG_PATH)?;
    let summary = cetl::run(&config)?;
    tracing::info!(
        total_clicks = %summary.total_clicks_path.display(),
        filtered_clicks = %summary.filtered_clicks_path.display(),
        "run finished"
    );

    println!("Completed in: {:.3} sec", started.elapsed().as_secs_f64());
    Ok(())
}
