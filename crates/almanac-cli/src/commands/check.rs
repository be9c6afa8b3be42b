//! Check command implementation.
//!
//! Reports whether a date is a business day and, if not, why.

use anyhow::Result;
use clap::Args;

use almanac_core::calendars::Calendar;
use almanac_core::registry::CalendarRegistry;
use almanac_core::types::Date;
use almanac_core::{AlmanacError, AlmanacResult};

use crate::cli::OutputFormat;
use crate::commands::{lookup, parse_date};
use crate::output::{print_output, print_success, print_warning, KeyValue};

/// Arguments for the check command.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Calendar code (e.g. GBLO, or GBLO+USNY for a joint calendar)
    pub code: String,

    /// Date to check (YYYY-MM-DD)
    pub date: String,
}

/// Execute the check command.
pub fn execute(args: CheckArgs, registry: &CalendarRegistry, format: OutputFormat) -> Result<()> {
    let calendar = lookup(registry, &args.code)?;
    let date = parse_date(&args.date)?;

    let business_day = calendar.is_business_day(date)?;
    if format == OutputFormat::Minimal {
        println!("{}", business_day);
        return Ok(());
    }

    let reason = if business_day {
        "-"
    } else if calendar.weekend().contains(date.weekday()) {
        "weekend"
    } else {
        "holiday"
    };

    let next = neighbour(calendar.next_business_day(date))?;
    let previous = neighbour(calendar.previous_business_day(date))?;

    if format == OutputFormat::Table {
        let verdict = format!("{} in {}", date, calendar.code());
        if business_day {
            print_success(&format!("{verdict} is a business day"));
        } else {
            print_warning(&format!("{verdict} is not a business day ({reason})"));
        }
    }

    let rows = vec![
        KeyValue::new("Calendar", calendar.code()),
        KeyValue::new("Date", date),
        KeyValue::new("Weekday", date.weekday()),
        KeyValue::new("Business day", business_day),
        KeyValue::new("Reason", reason),
        KeyValue::new("Next business day", next),
        KeyValue::new("Previous business day", previous),
    ];

    print_output(&rows, format)
}

/// A neighbouring business day beyond the generated range shows as "-".
fn neighbour(result: AlmanacResult<Date>) -> AlmanacResult<String> {
    match result {
        Ok(date) => Ok(date.to_string()),
        Err(AlmanacError::QueryOutOfRange { .. }) => Ok("-".to_string()),
        Err(err) => Err(err),
    }
}
