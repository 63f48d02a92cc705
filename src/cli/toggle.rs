use anyhow::Result;

use crate::cli::display::render_status_list;
use crate::cli::ui::{self, text_input};
use crate::models::{Task, TaskStatus};
use crate::store::TaskStore;
use crate::validate::parse_selection;

/// Execute the toggle command: complete ↔ incomplete
pub fn run_toggle(store: &TaskStore, tasks: &mut Vec<Task>, number: Option<String>) -> Result<()> {
    if tasks.is_empty() {
        ui::status("No tasks.");
        return Ok(());
    }

    let number = match number {
        Some(n) => n,
        None => {
            println!("{}\n", render_status_list(tasks));
            text_input("Task number to mark done / not done:")?
        }
    };
    let index = parse_selection(&number, tasks.len())?;

    let status = store.toggle_task(tasks, index)?;
    let title = &tasks[index].title;
    match status {
        TaskStatus::Complete => ui::status(&format!("Marked \"{}\" complete.", title)),
        TaskStatus::Incomplete => ui::status(&format!("Marked \"{}\" incomplete.", title)),
    }
    Ok(())
}
