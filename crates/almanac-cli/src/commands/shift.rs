//! Shift command implementation.

use anyhow::Result;
use clap::Args;

use almanac_core::calendars::Calendar;
use almanac_core::registry::CalendarRegistry;

use crate::cli::OutputFormat;
use crate::commands::{lookup, parse_date};
use crate::output::{print_output, KeyValue};

/// Arguments for the shift command.
#[derive(Args, Debug)]
pub struct ShiftArgs {
    /// Calendar code
    pub code: String,

    /// Start date (YYYY-MM-DD)
    pub date: String,

    /// Business days to move; negative moves backward
    #[arg(allow_negative_numbers = true)]
    pub days: i64,
}

/// Execute the shift command.
pub fn execute(args: ShiftArgs, registry: &CalendarRegistry, format: OutputFormat) -> Result<()> {
    let calendar = lookup(registry, &args.code)?;
    let date = parse_date(&args.date)?;

    let shifted = calendar.shift_business_days(date, args.days)?;
    if format == OutputFormat::Minimal {
        println!("{}", shifted);
        return Ok(());
    }

    let rows = vec![
        KeyValue::new("Calendar", calendar.code()),
        KeyValue::new("Start", date),
        KeyValue::new("Business days", args.days),
        KeyValue::new("Calendar days", shifted - date),
        KeyValue::new("Result", shifted),
    ];

    print_output(&rows, format)
}
