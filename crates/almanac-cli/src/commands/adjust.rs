//! Adjust command implementation.
//!
//! Applies a business day convention to a date.

use anyhow::Result;
use clap::Args;

use almanac_core::calendars::{BusinessDayConvention, Calendar};
use almanac_core::registry::CalendarRegistry;

use crate::cli::OutputFormat;
use crate::commands::{lookup, parse_date};
use crate::output::{print_output, KeyValue};

/// Arguments for the adjust command.
#[derive(Args, Debug)]
pub struct AdjustArgs {
    /// Calendar code
    pub code: String,

    /// Date to adjust (YYYY-MM-DD)
    pub date: String,

    /// Convention: following, modified-following, preceding, modified-preceding,
    /// nearest, unadjusted. Use "all" to show every convention.
    #[arg(short, long, default_value = "following")]
    pub convention: String,
}

/// Execute the adjust command.
pub fn execute(args: AdjustArgs, registry: &CalendarRegistry, format: OutputFormat) -> Result<()> {
    let calendar = lookup(registry, &args.code)?;
    let date = parse_date(&args.date)?;

    let conventions = if args.convention.eq_ignore_ascii_case("all") {
        BusinessDayConvention::ALL.to_vec()
    } else {
        vec![args.convention.parse::<BusinessDayConvention>()?]
    };

    let mut rows = Vec::with_capacity(conventions.len());
    for convention in conventions {
        rows.push(KeyValue::new(
            convention.to_string(),
            calendar.adjust(date, convention)?,
        ));
    }

    print_output(&rows, format)
}
