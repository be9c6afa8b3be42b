//! CLI argument definitions.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};

use crate::commands::{AdjustArgs, CheckArgs, CodesArgs, EasterArgs, HolidaysArgs, ShiftArgs};

/// Almanac - Holiday calendars and business day arithmetic
#[derive(Parser)]
#[command(name = "almanac")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// JSON file of extra calendar definitions (replaces built-ins with the same code)
    #[arg(short, long, global = true, env = "ALMANAC_DEFINITIONS")]
    pub definitions: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// List registered calendar codes
    Codes(CodesArgs),

    /// Check whether a date is a business day
    Check(CheckArgs),

    /// List the holidays of a calendar in a year
    Holidays(HolidaysArgs),

    /// Move a date by a number of business days
    Shift(ShiftArgs),

    /// Adjust a date with a business day convention
    Adjust(AdjustArgs),

    /// Print Easter Sunday for a year or range of years
    Easter(EasterArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
    /// Minimal output (just the value)
    Minimal,
}
