use std::path::PathBuf;

use clap::Parser;

/// Firstsun first-of-month Sunday counter.
#[derive(Parser)]
#[command(
    name = "firstsun",
    version,
    about = "Count Sundays falling on the first of the month"
)]
pub struct Cli {
    /// First year of the inclusive query range.
    pub from_year: i32,

    /// Last year of the inclusive query range.
    pub to_year: i32,

    /// Path to TOML configuration file describing the calendar model.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the reference year from config.
    #[arg(long = "ref-year")]
    pub ref_year: Option<i32>,

    /// Override the reference year's first weekday from config.
    #[arg(long = "first-day")]
    pub first_day: Option<String>,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
