use anyhow::Result;

use crate::cli::ui::{self, text_input};
use crate::error::TaskError;
use crate::models::Task;
use crate::store::TaskStore;
use crate::validate::{normalize_date, normalize_time, require};

/// Field values supplied up front; anything missing is prompted for
#[derive(Debug, Clone, Default)]
pub struct NewTask {
    pub title: Option<String>,
    pub subject: Option<String>,
    pub teacher: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
}

/// Execute the add command.
///
/// A blank title, subject or teacher aborts before anything is written.
/// Date and time are asked for again until they parse.
pub fn run_add(store: &TaskStore, tasks: &mut Vec<Task>, input: NewTask) -> Result<()> {
    add_with(store, tasks, input, text_input)
}

/// Add flow with the line source supplied by the caller
fn add_with(
    store: &TaskStore,
    tasks: &mut Vec<Task>,
    input: NewTask,
    mut read: impl FnMut(&str) -> Result<String>,
) -> Result<()> {
    let title = require("Title", &given_or_prompt(input.title, "Title:", &mut read)?)?;
    let subject = require("Subject", &given_or_prompt(input.subject, "Subject:", &mut read)?)?;
    let teacher = require("Teacher", &given_or_prompt(input.teacher, "Teacher:", &mut read)?)?;

    let due_date = match input.date {
        Some(date) => normalize_date(date.trim())?,
        None => prompt_until_valid("Due date (YYYY-MM-DD):", normalize_date, &mut read)?,
    };
    let due_time = match input.time {
        Some(time) => normalize_time(time.trim())?,
        None => prompt_until_valid("Due time (HH:MM):", normalize_time, &mut read)?,
    };

    let task = Task::new(title, subject, teacher, due_date, due_time);
    store.add_task(tasks, task)?;
    tracing::debug!(count = tasks.len(), "task added");

    ui::status("Task added.");
    Ok(())
}

fn given_or_prompt(
    given: Option<String>,
    prompt: &str,
    read: &mut impl FnMut(&str) -> Result<String>,
) -> Result<String> {
    match given {
        Some(value) => Ok(value),
        None => read(prompt),
    }
}

/// Ask until `normalize` accepts the answer, then return its canonical form
fn prompt_until_valid(
    prompt: &str,
    normalize: fn(&str) -> Result<String, TaskError>,
    read: &mut impl FnMut(&str) -> Result<String>,
) -> Result<String> {
    loop {
        let input = read(prompt)?;
        match normalize(input.trim()) {
            Ok(value) => return Ok(value),
            Err(e) => ui::error(&e.to_string()),
        }
    }
}
