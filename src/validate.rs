//! Input validation shared by the interactive prompts and the subcommands

use chrono::{NaiveDate, NaiveTime};
use std::ops::RangeInclusive;

use crate::error::TaskError;

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const TIME_FORMAT: &str = "%H:%M";

const DATE_HINT: &str = "YYYY-MM-DD (e.g. 2026-01-30)";
const TIME_HINT: &str = "HH:MM (e.g. 14:30)";

/// Parse a `YYYY-MM-DD` date. Month and day may drop their leading zero;
/// the year is always four digits.
pub fn parse_date(input: &str) -> Result<NaiveDate, TaskError> {
    let invalid = || TaskError::InvalidFormat {
        field: "date",
        value: input.to_string(),
        expected: DATE_HINT,
    };

    if !has_shape(input, '-', &[4..=4, 1..=2, 1..=2]) {
        return Err(invalid());
    }
    NaiveDate::parse_from_str(input, DATE_FORMAT).map_err(|_| invalid())
}

/// Parse a 24-hour `HH:MM` time. Hour and minute may drop their leading zero.
pub fn parse_time(input: &str) -> Result<NaiveTime, TaskError> {
    let invalid = || TaskError::InvalidFormat {
        field: "time",
        value: input.to_string(),
        expected: TIME_HINT,
    };

    if !has_shape(input, ':', &[1..=2, 1..=2]) {
        return Err(invalid());
    }
    NaiveTime::parse_from_str(input, TIME_FORMAT).map_err(|_| invalid())
}

/// Validate a date and return it as stored: `YYYY-MM-DD`, zero-padded
pub fn normalize_date(input: &str) -> Result<String, TaskError> {
    Ok(parse_date(input)?.format(DATE_FORMAT).to_string())
}

/// Validate a time and return it as stored: `HH:MM`, zero-padded
pub fn normalize_time(input: &str) -> Result<String, TaskError> {
    Ok(parse_time(input)?.format(TIME_FORMAT).to_string())
}

/// Digit groups separated by `sep`, each group's length within its range.
/// Rules out signs, whitespace and short years that chrono would accept.
fn has_shape(input: &str, sep: char, groups: &[RangeInclusive<usize>]) -> bool {
    let parts: Vec<&str> = input.split(sep).collect();
    parts.len() == groups.len()
        && parts.iter().zip(groups).all(|(part, len)| {
            len.contains(&part.len()) && part.bytes().all(|b| b.is_ascii_digit())
        })
}

/// Parse a 1-based list position and return the 0-based index
pub fn parse_selection(input: &str, len: usize) -> Result<usize, TaskError> {
    let input = input.trim();
    let index: usize = input
        .parse()
        .map_err(|_| TaskError::InvalidInput(input.to_string()))?;

    if index == 0 || index > len {
        return Err(TaskError::InvalidSelection { index, len });
    }
    Ok(index - 1)
}

/// Trim a required text field, rejecting blank input
pub fn require(field: &'static str, input: &str) -> Result<String, TaskError> {
    let value = input.trim();
    if value.is_empty() {
        return Err(TaskError::EmptyField(field));
    }
    Ok(value.to_string())
}
