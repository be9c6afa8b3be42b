//! Output formatting utilities.

use std::io::{self, Write};

use colored::Colorize;
use serde::Serialize;
use tabled::{
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};

use crate::cli::OutputFormat;

/// Writes rows to stdout in the requested format.
///
/// `Minimal` prints the last column of every row, one per line, so the
/// answer column of each command goes last.
pub fn print_output<T: Serialize + Tabled>(rows: &[T], format: OutputFormat) -> anyhow::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match format {
        OutputFormat::Table if rows.is_empty() => writeln!(out, "No results.")?,
        OutputFormat::Table => {
            let table = Table::new(rows)
                .with(Style::rounded())
                .with(Modify::new(Columns::first()).with(Alignment::left()))
                .to_string();
            writeln!(out, "{table}")?;
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, rows)?;
            writeln!(out)?;
        }
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(&mut out);
            for row in rows {
                writer.serialize(row)?;
            }
            writer.flush()?;
        }
        OutputFormat::Minimal => {
            for row in rows {
                if let Some(value) = row.fields().last() {
                    writeln!(out, "{value}")?;
                }
            }
        }
    }

    Ok(())
}

/// Prints a green check line.
pub fn print_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

/// Prints a yellow warning line to stderr.
pub fn print_warning(message: &str) {
    eprintln!("{} {}", "⚠".yellow(), message);
}

/// A labelled value, shown as a two-column table.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct KeyValue {
    #[tabled(rename = "Field")]
    pub key: String,
    #[tabled(rename = "Value")]
    pub value: String,
}

impl KeyValue {
    pub fn new(key: impl Into<String>, value: impl ToString) -> Self {
        Self {
            key: key.into(),
            value: value.to_string(),
        }
    }
}
