use anyhow::Result;

use crate::cli::display::render_pick_list;
use crate::cli::ui::{self, keep_prompt, text_input};
use crate::models::Task;
use crate::store::{TaskEdit, TaskStore};
use crate::validate::{parse_date, parse_selection, parse_time};

/// Execute the edit command.
///
/// `number` is the 1-based position; when missing the list is shown and the
/// user picks one. With no `edit`, every field is prompted with its current
/// value and an empty answer keeps it.
pub fn run_edit(
    store: &TaskStore,
    tasks: &mut Vec<Task>,
    number: Option<String>,
    edit: Option<TaskEdit>,
) -> Result<()> {
    edit_with(store, tasks, number, edit, text_input)
}

fn edit_with(
    store: &TaskStore,
    tasks: &mut Vec<Task>,
    number: Option<String>,
    edit: Option<TaskEdit>,
    mut read: impl FnMut(&str) -> Result<String>,
) -> Result<()> {
    if tasks.is_empty() {
        ui::status("No tasks to edit.");
        return Ok(());
    }

    let number = match number {
        Some(n) => n,
        None => {
            println!("{}\n", render_pick_list(tasks));
            read("Task number to edit:")?
        }
    };
    let index = parse_selection(&number, tasks.len())?;

    let edit = match edit {
        Some(edit) => edit,
        None => prompt_edit(&tasks[index], &mut read)?,
    };

    let errors = store.edit_task(tasks, index, &edit)?;
    for e in &errors {
        ui::error(&format!("{} Left unchanged.", e));
    }

    ui::status("Task updated.");
    Ok(())
}

/// Ask for every field. A bad date or time is reported straight away and
/// dropped from the edit.
fn prompt_edit(task: &Task, read: &mut impl FnMut(&str) -> Result<String>) -> Result<TaskEdit> {
    println!("\nEditing: {}", task.title);
    println!("(Press Enter to keep the current value)\n");

    let mut ask = |field: &str, current: &str| read(&keep_prompt(field, current));

    let title = ask("Title", &task.title)?;
    let subject = ask("Subject", &task.subject)?;
    let teacher = ask("Teacher", &task.teacher)?;

    let mut due_date = ask("Due date", &task.due_date)?;
    if !due_date.is_empty() {
        if let Err(e) = parse_date(&due_date) {
            ui::error(&format!("{} Left unchanged.", e));
            due_date.clear();
        }
    }

    let mut due_time = ask("Due time", &task.due_time)?;
    if !due_time.is_empty() {
        if let Err(e) = parse_time(&due_time) {
            ui::error(&format!("{} Left unchanged.", e));
            due_time.clear();
        }
    }

    Ok(TaskEdit {
        title: Some(title),
        subject: Some(subject),
        teacher: Some(teacher),
        due_date: Some(due_date),
        due_time: Some(due_time),
    })
}
