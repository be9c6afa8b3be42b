//! Holidays command implementation.
//!
//! Lists the generated holidays of a calendar. Weekend days are not listed
//! unless a holiday falls on one and was left in place.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use almanac_core::registry::CalendarRegistry;
use almanac_core::types::Date;

use crate::cli::OutputFormat;
use crate::commands::lookup;
use crate::error::CliError;
use crate::output::print_output;

/// Arguments for the holidays command.
#[derive(Args, Debug)]
pub struct HolidaysArgs {
    /// Calendar code
    pub code: String,

    /// Year to list
    #[arg(short, long)]
    pub year: i32,

    /// Last year to list (inclusive). Defaults to --year.
    #[arg(long)]
    pub to: Option<i32>,
}

/// A listed holiday.
#[derive(Debug, Serialize, Tabled)]
pub struct HolidayRow {
    #[tabled(rename = "Weekday")]
    pub weekday: String,
    #[tabled(rename = "Date")]
    pub date: Date,
}

/// Execute the holidays command.
pub fn execute(
    args: HolidaysArgs,
    registry: &CalendarRegistry,
    format: OutputFormat,
) -> Result<()> {
    let calendar = lookup(registry, &args.code)?;
    let last = args.to.unwrap_or(args.year);
    if last < args.year {
        return Err(CliError::InvalidYears(format!("{} is before {}", last, args.year)).into());
    }

    let mut rows = Vec::new();
    for year in args.year..=last {
        for date in calendar.holidays_in_year(year)? {
            rows.push(HolidayRow {
                weekday: date.weekday().to_string(),
                date,
            });
        }
    }

    print_output(&rows, format)
}
