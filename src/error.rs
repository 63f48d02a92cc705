//! Error types for taskcmd
//!
//! `StoreError` covers the data file. `TaskError` covers bad user input and
//! is always shown to the user; none of these end the interactive session.

use std::io;
use thiserror::Error;

/// Failure reading or writing the task file
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("could not access task file: {0}")]
    Io(#[from] io::Error),
    /// File exists but is not a list of well-formed tasks
    #[error("task file is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// Rejected user input
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TaskError {
    #[error("Invalid {field} \"{value}\". Use {expected}.")]
    InvalidFormat {
        field: &'static str,
        value: String,
        expected: &'static str,
    },
    #[error("No entry {index}. Pick 1-{len}.")]
    InvalidSelection { index: usize, len: usize },
    #[error("Input must be a number, got \"{0}\".")]
    InvalidInput(String),
    #[error("{0} cannot be empty.")]
    EmptyField(&'static str),
}
