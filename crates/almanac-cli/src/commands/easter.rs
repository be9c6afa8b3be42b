//! Easter command implementation.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use almanac_core::calendars::{easter_sunday, FIRST_GREGORIAN_YEAR, MAX_YEAR};
use almanac_core::types::Date;

use crate::cli::OutputFormat;
use crate::error::CliError;
use crate::output::print_output;

/// Arguments for the easter command.
#[derive(Args, Debug)]
pub struct EasterArgs {
    /// Year
    pub year: i32,

    /// Last year (inclusive)
    #[arg(long)]
    pub to: Option<i32>,
}

/// Easter Sunday of one year.
#[derive(Debug, Serialize, Tabled)]
pub struct EasterRow {
    #[tabled(rename = "Year")]
    pub year: i32,
    #[tabled(rename = "Easter Sunday")]
    pub easter_sunday: Date,
}

/// Execute the easter command.
pub fn execute(args: EasterArgs, format: OutputFormat) -> Result<()> {
    let last = args.to.unwrap_or(args.year);
    if last < args.year {
        return Err(CliError::InvalidYears(format!("{} is before {}", last, args.year)).into());
    }
    let supported = FIRST_GREGORIAN_YEAR..=MAX_YEAR;
    if !supported.contains(&args.year) || !supported.contains(&last) {
        return Err(CliError::InvalidYears(format!(
            "{}..={} is outside {}..={}",
            args.year, last, FIRST_GREGORIAN_YEAR, MAX_YEAR
        ))
        .into());
    }

    let mut rows = Vec::new();
    for year in args.year..=last {
        let sunday = easter_sunday(year).ok_or_else(|| {
            CliError::InvalidYears(format!("Easter is undefined for {}", year))
        })?;
        rows.push(EasterRow {
            year,
            easter_sunday: sunday,
        });
    }

    print_output(&rows, format)
}
