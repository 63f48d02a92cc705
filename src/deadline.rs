//! Deadline proximity for incomplete tasks
//!
//! Warnings are computed against the instant they are asked for and never
//! stored.

use chrono::{Local, NaiveDateTime, TimeDelta};
use std::fmt;

use crate::models::Task;

const SECS_PER_HOUR: i64 = 3600;
const SECS_PER_MINUTE: i64 = 60;

/// A computed warning about one task's deadline
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeadlineWarning {
    Overdue { title: String, hours: i64, minutes: i64 },
    Upcoming { title: String, hours: i64, minutes: i64 },
}

impl fmt::Display for DeadlineWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Overdue { title, hours, minutes } => write!(
                f,
                "Task \"{}\" is already {} hours {} minutes late",
                title, hours, minutes
            ),
            Self::Upcoming { title, hours, minutes } => write!(
                f,
                "Task \"{}\" deadline in {} hours {} minutes",
                title, hours, minutes
            ),
        }
    }
}

/// Combine a task's stored date and time into one local timestamp
pub fn deadline_of(task: &Task) -> Option<NaiveDateTime> {
    let combined = format!("{} {}", task.due_date, task.due_time);
    NaiveDateTime::parse_from_str(&combined, "%Y-%m-%d %H:%M").ok()
}

/// Warnings for every incomplete task, in list order.
///
/// Tasks whose date or time no longer parse are skipped. An upcoming deadline
/// less than a minute away produces no warning.
pub fn analyze(tasks: &[Task], now: NaiveDateTime) -> Vec<DeadlineWarning> {
    tasks
        .iter()
        .filter(|task| !task.is_completed())
        .filter_map(|task| {
            let deadline = deadline_of(task)?;
            classify(&task.title, deadline - now)
        })
        .collect()
}

/// Same as [`analyze`] using the current local time
pub fn analyze_now(tasks: &[Task]) -> Vec<DeadlineWarning> {
    analyze(tasks, Local::now().naive_local())
}

fn classify(title: &str, delta: TimeDelta) -> Option<DeadlineWarning> {
    if delta < TimeDelta::zero() {
        // num_seconds truncates toward zero, which floors the magnitude
        let (hours, minutes) = split(delta.num_seconds().abs());
        return Some(DeadlineWarning::Overdue {
            title: title.to_string(),
            hours,
            minutes,
        });
    }

    let (hours, minutes) = split(delta.num_seconds());
    if hours == 0 && minutes == 0 {
        return None;
    }
    Some(DeadlineWarning::Upcoming {
        title: title.to_string(),
        hours,
        minutes,
    })
}

fn split(total_secs: i64) -> (i64, i64) {
    (
        total_secs / SECS_PER_HOUR,
        (total_secs % SECS_PER_HOUR) / SECS_PER_MINUTE,
    )
}
