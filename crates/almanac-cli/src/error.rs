//! CLI error types.

use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid date format.
    #[error("Invalid date format: {0}. Use YYYY-MM-DD.")]
    InvalidDate(String),

    /// Year outside what a command accepts.
    #[error("Invalid year range: {0}")]
    InvalidYears(String),

    /// Error raised by the calendar engine.
    #[error(transparent)]
    Calendar(#[from] almanac_core::AlmanacError),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
