//! Codes command implementation.
//!
//! Lists the registered calendars with their weekend and generated range.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use almanac_core::registry::CalendarRegistry;

use crate::cli::OutputFormat;
use crate::output::print_output;

/// Arguments for the codes command.
#[derive(Args, Debug)]
pub struct CodesArgs {
    /// Build each calendar and report its holiday count
    #[arg(long)]
    pub count: bool,
}

/// One registered calendar.
#[derive(Debug, Serialize, Tabled)]
pub struct CodeRow {
    #[tabled(rename = "Name")]
    pub name: String,
    #[tabled(rename = "Weekend")]
    pub weekend: String,
    #[tabled(rename = "Years")]
    pub years: String,
    #[tabled(rename = "Holidays")]
    pub holidays: String,
    #[tabled(rename = "Code")]
    pub code: String,
}

/// Execute the codes command.
pub fn execute(args: CodesArgs, registry: &CalendarRegistry, format: OutputFormat) -> Result<()> {
    let mut rows = Vec::with_capacity(registry.len());
    for code in registry.codes() {
        let Some(definition) = registry.definition(code) else {
            continue;
        };
        let holidays = if args.count {
            registry.lookup(code)?.holiday_count().to_string()
        } else {
            "-".to_string()
        };
        rows.push(CodeRow {
            name: definition.name.clone().unwrap_or_default(),
            weekend: definition.weekend.to_string(),
            years: format!("{}-{}", definition.start_year, definition.end_year),
            holidays,
            code: code.to_string(),
        });
    }

    print_output(&rows, format)
}
