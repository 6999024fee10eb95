// File: crates/arrival-gen/src/bin/generate_examples.rs
// Summary: CLI that writes synthetic customer records to a text file (default `test.txt`).

use anyhow::{Context, Result};
use arrival_gen::{generate_records, make_rng, write_records, GeneratorArgs};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let config = GeneratorArgs::parse().into_config().context("invalid configuration")?;
    info!(
        customers = config.customers,
        enter = ?(config.enter.min(), config.enter.max()),
        service = ?(config.service.min(), config.service.max()),
        seed = ?config.seed,
        pairing = ?config.pairing,
        "generating records"
    );

    let mut rng = make_rng(config.seed);
    let records = generate_records(&config, &mut rng);
    write_records(&config.output, &records)
        .with_context(|| format!("failed to write '{}'", config.output.display()))?;

    info!(path = %config.output.display(), rows = records.len(), "wrote records");
    Ok(())
}
