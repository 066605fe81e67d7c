mod cli;
mod config;
mod convert;
mod logging;

use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use firstsun_counter::Counter;

use crate::cli::Cli;
use crate::config::FirstsunToml;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    // 1. Load optional TOML config
    let mut toml = if let Some(ref path) = cli.config {
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        toml::from_str::<FirstsunToml>(&toml_str).context("failed to parse TOML config")?
    } else {
        FirstsunToml::default()
    };

    // 2. Apply CLI overrides
    if let Some(year) = cli.ref_year {
        toml.ref_year = Some(year);
    }
    if let Some(ref day) = cli.first_day {
        toml.ref_first_day = Some(day.clone());
    }

    // 3. Build the counter and answer the query
    let counter_cfg = convert::build_counter_config(&toml)?;
    let counter = Counter::new(&counter_cfg).context("invalid counter configuration")?;
    info!(
        ref_year = counter.ref_year(),
        ref_offset = counter.ref_offset(),
        from = cli.from_year,
        to = cli.to_year,
        "counting first-of-month Sundays"
    );
    let total = counter
        .total_sundays(cli.from_year, cli.to_year)
        .context("invalid query range")?;

    println!("{total}");
    Ok(())
}
