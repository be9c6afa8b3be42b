//! Almanac CLI - Command-line interface for holiday calendars.
//!
//! # Usage
//!
//! ```bash
//! # List the registered calendars
//! almanac codes
//!
//! # Is a date a business day?
//! almanac check GBLO 2010-12-27
//!
//! # Holidays of a year
//! almanac holidays NYSE --year 2012
//!
//! # Move five business days
//! almanac shift USNY 2015-12-24 5
//!
//! # Adjust a date
//! almanac adjust EUTA 2015-05-01 --convention modified-following
//!
//! # Easter Sundays
//! almanac easter 2024 --to 2030
//! ```

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;
mod commands;
mod error;
mod output;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let registry = commands::load_registry(cli.definitions.as_deref())?;
    let format = cli.format;

    match cli.command {
        Commands::Codes(args) => commands::codes::execute(args, &registry, format)?,
        Commands::Check(args) => commands::check::execute(args, &registry, format)?,
        Commands::Holidays(args) => commands::holidays::execute(args, &registry, format)?,
        Commands::Shift(args) => commands::shift::execute(args, &registry, format)?,
        Commands::Adjust(args) => commands::adjust::execute(args, &registry, format)?,
        Commands::Easter(args) => commands::easter::execute(args, format)?,
    }

    Ok(())
}

/// Logs go to stderr so table and JSON output stay clean.
fn init_logging(verbose: u8) {
    let default_filter = match verbose {
        0 => "almanac_core=warn,almanac_cli=warn",
        1 => "almanac_core=info,almanac_cli=info",
        2 => "almanac_core=debug,almanac_cli=debug",
        _ => "almanac_core=trace,almanac_cli=trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
