// File: crates/time-plots/src/bin/plot_time.rs
// Summary: Writes time1.png and time2.png into the working directory.

use anyhow::Result;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let written = time_plots::render_all(".")?;
    tracing::info!(count = written.len(), "done");
    Ok(())
}
