//! Main entry point for the zipfind CLI application.
//!
//! Matches go to stdout, one `<archive> : <entry>` line each; diagnostics
//! and the final summary go to stderr.

use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use log::{info, warn};

use zipfind::{Cli, Composition, Predicate};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .parse_default_env()
        .format_timestamp(None)
        .init();

    info!("Looking for name: {}", cli.name);
    info!("Looking for size: {}", cli.size);
    info!("Looking for min depth: {}", cli.min_depth);
    info!("Looking for max depth: {}", cli.max_depth);

    // Filters are validated before the walk starts
    let config = cli.filter_config()?;
    if let Some(range) = config.depth {
        info!("Min depth: {}  max depth: {:?}", range.min, range.max);
    }

    let predicate = Predicate::new(&config, cli.composition());
    if predicate.composition() == Composition::NameOnly
        && (config.min_size.is_some() || config.depth.is_some())
    {
        warn!("--name-only is set: size and depth filters do not affect matches");
    }

    let started = Instant::now();
    let stats = cli
        .walker()
        .search(&predicate, &mut std::io::stdout().lock())
        .await?;

    if !cli.quiet {
        eprintln!("\n{}", stats.summary(started.elapsed()));
    }

    Ok(())
}
