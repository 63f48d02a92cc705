//! Text tables for task lists and the deadline warning block
//!
//! Every renderer returns a `String`; callers decide where to print it.

use chrono::NaiveDateTime;

use crate::cli::ui::{clip, rule};
use crate::deadline::{analyze, DeadlineWarning};
use crate::models::Task;

pub const NO_TASKS: &str = "No tasks. Add one from the menu.";

const TABLE_WIDTH: usize = 107;

/// Column widths and the character budget shown inside each
struct Column {
    width: usize,
    keep: usize,
}

const NO: Column = Column { width: 4, keep: 4 };
const TITLE: Column = Column { width: 25, keep: 23 };
const SUBJECT: Column = Column { width: 15, keep: 13 };
const TEACHER: Column = Column { width: 20, keep: 18 };
const DEADLINE: Column = Column { width: 20, keep: 20 };
const STATUS: Column = Column { width: 18, keep: 18 };

/// One row, every cell padded to its column width, trailing padding kept
fn row(cells: &[(&Column, &str)]) -> String {
    let line: Vec<String> = cells
        .iter()
        .map(|(col, text)| format!("{:<width$}", clip(text, col.keep), width = col.width))
        .collect();
    line.join(" ")
}

/// Full table: number, title, subject, teacher, deadline, status
pub fn render_task_table(tasks: &[Task]) -> String {
    if tasks.is_empty() {
        return NO_TASKS.to_string();
    }

    let mut out = Vec::with_capacity(tasks.len() + 4);
    out.push(rule('=', TABLE_WIDTH));
    out.push(row(&[
        (&NO, "No"),
        (&TITLE, "Title"),
        (&SUBJECT, "Subject"),
        (&TEACHER, "Teacher"),
        (&DEADLINE, "Deadline"),
        (&STATUS, "Status"),
    ]));
    out.push(rule('-', TABLE_WIDTH));

    for (i, task) in tasks.iter().enumerate() {
        let number = (i + 1).to_string();
        let deadline = task.deadline_label();
        out.push(row(&[
            (&NO, number.as_str()),
            (&TITLE, task.title.as_str()),
            (&SUBJECT, task.subject.as_str()),
            (&TEACHER, task.teacher.as_str()),
            (&DEADLINE, deadline.as_str()),
            (&STATUS, task.status.as_str()),
        ]));
    }

    out.push(rule('=', TABLE_WIDTH));
    out.join("\n")
}

/// Table for one subject; the subject column is dropped
pub fn render_subject_table(subject: &str, tasks: &[Task]) -> String {
    if tasks.is_empty() {
        return NO_TASKS.to_string();
    }

    let mut out = Vec::with_capacity(tasks.len() + 5);
    out.push(format!("Subject: {}", subject));
    out.push(rule('=', TABLE_WIDTH));
    out.push(row(&[
        (&NO, "No"),
        (&TITLE, "Title"),
        (&TEACHER, "Teacher"),
        (&DEADLINE, "Deadline"),
        (&STATUS, "Status"),
    ]));
    out.push(rule('-', TABLE_WIDTH));

    for (i, task) in tasks.iter().enumerate() {
        let number = (i + 1).to_string();
        let deadline = task.deadline_label();
        out.push(row(&[
            (&NO, number.as_str()),
            (&TITLE, task.title.as_str()),
            (&TEACHER, task.teacher.as_str()),
            (&DEADLINE, deadline.as_str()),
            (&STATUS, task.status.as_str()),
        ]));
    }

    out.push(rule('=', TABLE_WIDTH));
    out.join("\n")
}

/// Warning block, or `None` when nothing needs attention
pub fn render_warnings(warnings: &[DeadlineWarning]) -> Option<String> {
    if warnings.is_empty() {
        return None;
    }

    let mut out = Vec::with_capacity(warnings.len() + 4);
    out.push(rule('=', TABLE_WIDTH));
    out.push("Deadline warnings:".to_string());
    out.push(rule('-', TABLE_WIDTH));
    out.extend(warnings.iter().map(|w| w.to_string()));
    out.push(rule('=', TABLE_WIDTH));
    Some(out.join("\n"))
}

/// Full view: table followed by warnings for incomplete tasks
pub fn render_all(tasks: &[Task], now: NaiveDateTime) -> String {
    with_warnings(render_task_table(tasks), tasks, now)
}

/// Subject view: reduced table followed by warnings for that subset
pub fn render_filtered(subject: &str, tasks: &[Task], now: NaiveDateTime) -> String {
    with_warnings(render_subject_table(subject, tasks), tasks, now)
}

fn with_warnings(table: String, tasks: &[Task], now: NaiveDateTime) -> String {
    if tasks.is_empty() {
        return table;
    }
    match render_warnings(&analyze(tasks, now)) {
        Some(block) => format!("{}\n\n{}", table, block),
        None => table,
    }
}

/// Numbered titles for picking a task
pub fn render_pick_list(tasks: &[Task]) -> String {
    tasks
        .iter()
        .enumerate()
        .map(|(i, t)| format!("{}. {}", i + 1, t.title))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Numbered titles with their current status
pub fn render_status_list(tasks: &[Task]) -> String {
    tasks
        .iter()
        .enumerate()
        .map(|(i, t)| {
            let checkbox = if t.is_completed() { "[x]" } else { "[ ]" };
            format!("{}. {} {} {}", i + 1, checkbox, t.title, t.status.as_str())
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Numbered list of subjects
pub fn render_subject_list(subjects: &[String]) -> String {
    subjects
        .iter()
        .enumerate()
        .map(|(i, s)| format!("{}. {}", i + 1, s))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TaskStatus;

    fn task(title: &str, subject: &str, teacher: &str, time: &str) -> Task {
        Task::new(
            title.to_string(),
            subject.to_string(),
            teacher.to_string(),
            "2025-01-01".to_string(),
            time.to_string(),
        )
    }

    fn now() -> NaiveDateTime {
        NaiveDateTime::parse_from_str("2025-01-01 10:00", "%Y-%m-%d %H:%M").unwrap()
    }

    #[test]
    fn test_empty_views() {
        assert_eq!(render_task_table(&[]), NO_TASKS);
        assert_eq!(render_all(&[], now()), NO_TASKS);
        assert_eq!(render_filtered("Math", &[], now()), NO_TASKS);
    }

    #[test]
    fn test_table_layout() {
        let tasks = vec![task("Worksheet", "Math", "Mr. Lee", "12:00")];
        let table = render_task_table(&tasks);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], rule('=', TABLE_WIDTH));
        assert_eq!(lines[1].chars().count(), TABLE_WIDTH);
        assert_eq!(lines[3].chars().count(), TABLE_WIDTH);
        assert_eq!(
            lines[1].trim_end(),
            "No   Title                     Subject         Teacher              Deadline             Status"
        );
        assert_eq!(
            lines[3].trim_end(),
            "1    Worksheet                 Math            Mr. Lee              2025-01-01 12:00     Incomplete"
        );
    }

    #[test]
    fn test_rows_keep_width_with_wide_cells() {
        let tasks = vec![task("日本語の宿題をやる日本語の宿題をやる日本語の宿題", "国語", "先生", "12:00")];
        let table = render_task_table(&tasks);
        let row = table.lines().nth(3).unwrap();
        assert_eq!(row.chars().count(), TABLE_WIDTH);
        assert!(row.ends_with("Incomplete        "));
    }

    #[test]
    fn test_long_fields_are_cut() {
        let tasks = vec![task(
            "An extremely long assignment title",
            "Advanced Mathematics",
            "Professor Maximilian Jones",
            "12:00",
        )];
        let table = render_task_table(&tasks);
        let row = table.lines().nth(3).unwrap();

        assert!(row.contains("An extremely long assig  "));
        assert!(!row.contains("assignment"));
        assert!(row.contains("Advanced Math  "));
        assert!(row.contains("Professor Maximili  "));
    }

    #[test]
    fn test_unicode_cut_is_char_based() {
        let tasks = vec![task("日本語の宿題をやる日本語の宿題をやる日本語の宿題", "国語", "先生", "12:00")];
        let table = render_task_table(&tasks);
        let row = table.lines().nth(3).unwrap();
        assert!(row.contains("日本語の宿題をやる日本語の宿題をやる日本語の宿"));
        assert!(!row.contains("日本語の宿題をやる日本語の宿題をやる日本語の宿題"));
    }

    #[test]
    fn test_subject_table_drops_subject_column() {
        let tasks = vec![task("Worksheet", "Math", "Mr. Lee", "12:00")];
        let table = render_subject_table("Math", &tasks);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines[0], "Subject: Math");
        assert_eq!(lines[2].chars().count(), TABLE_WIDTH - 16);
        assert_eq!(
            lines[2].trim_end(),
            "No   Title                     Teacher              Deadline             Status"
        );
        assert_eq!(
            lines[4].trim_end(),
            "1    Worksheet                 Mr. Lee              2025-01-01 12:00     Incomplete"
        );
    }

    #[test]
    fn test_render_all_appends_warnings() {
        let mut done = task("Done", "Math", "Mr. Lee", "08:00");
        done.status = TaskStatus::Complete;
        let tasks = vec![
            task("Worksheet", "Math", "Mr. Lee", "12:00"),
            done,
            task("Poem", "English", "Ms. Ray", "08:00"),
        ];
        let view = render_all(&tasks, now());

        assert!(view.contains("Deadline warnings:"));
        assert!(view.contains("Task \"Worksheet\" deadline in 2 hours 0 minutes"));
        assert!(view.contains("Task \"Poem\" is already 2 hours 0 minutes late"));
        assert!(!view.contains("Task \"Done\""));
        let upcoming = view.find("Worksheet\" deadline").unwrap();
        let overdue = view.find("Poem\" is already").unwrap();
        assert!(upcoming < overdue);
    }

    #[test]
    fn test_no_warning_block_when_quiet() {
        let tasks = vec![task("Worksheet", "Math", "Mr. Lee", "10:00")];
        let view = render_all(&tasks, now());
        assert!(!view.contains("Deadline warnings:"));
        assert_eq!(render_warnings(&[]), None);
    }

    #[test]
    fn test_filtered_warnings_limited_to_subset() {
        let tasks = vec![task("Worksheet", "Math", "Mr. Lee", "12:00")];
        let view = render_filtered("Math", &tasks, now());
        assert!(view.starts_with("Subject: Math"));
        assert!(view.contains("Task \"Worksheet\" deadline in 2 hours 0 minutes"));
    }

    #[test]
    fn test_pick_lists() {
        let mut done = task("Poem", "English", "Ms. Ray", "08:00");
        done.toggle();
        let tasks = vec![task("Worksheet", "Math", "Mr. Lee", "12:00"), done];

        assert_eq!(render_pick_list(&tasks), "1. Worksheet\n2. Poem");
        assert_eq!(
            render_status_list(&tasks),
            "1. [ ] Worksheet Incomplete\n2. [x] Poem Complete"
        );
        assert_eq!(
            render_subject_list(&["Math".to_string(), "English".to_string()]),
            "1. Math\n2. English"
        );
    }
}
