//! Error types for the CLI

use thiserror::Error;

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    /// No registered day matches the requested identifier
    #[error("unknown day: {0}")]
    UnknownDay(String),

    /// Registration error
    #[error("registration error: {0}")]
    Registration(#[from] aoc_harness::RegistrationError),

    /// Day error
    #[error("day error: {0}")]
    Day(#[from] aoc_harness::DayError),
}
