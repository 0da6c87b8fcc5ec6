//! Error types for the harness library

use crate::day::Title;
use thiserror::Error;

/// Error type for parsing a day's input text
#[derive(Debug, Clone, Error)]
pub enum ParseError {
    /// Input format doesn't match expected structure
    #[error("invalid format: {0}")]
    InvalidFormat(String),
    /// Required data is missing from input
    #[error("missing data: {0}")]
    MissingData(String),
}

/// Error type for running a part's logic function
#[derive(Debug, Error)]
pub enum SolveError {
    /// Error occurred while parsing the input
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The logic ran to completion but produced no answer
    #[error("no answer: {0}")]
    NoAnswer(String),
}

/// Error type for day operations
#[derive(Debug, Error)]
pub enum DayError {
    /// Neither candidate input file exists for the requested title
    #[error("could not find input for day {day} part {title}")]
    InputNotFound { day: String, title: Title },
    /// No registered part matches the requested title
    #[error("could not find part {title} for day {day}")]
    PartNotFound { day: String, title: Title },
    /// An existing input file could not be read
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
    /// Error occurred while solving a part
    #[error(transparent)]
    Solve(#[from] SolveError),
}

/// Error type for registration failures
#[derive(Debug, Clone, Error)]
pub enum RegistrationError {
    /// Attempted to register a day whose identifier is already taken
    #[error("duplicate day registration for identifier {0}")]
    DuplicateDay(String),
}
