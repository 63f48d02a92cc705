use anyhow::Result;

use super::TaskStore;
use crate::error::TaskError;
use crate::models::{Task, TaskStatus};
use crate::validate::{normalize_date, normalize_time};

/// Requested changes to one task. Blank or missing fields keep their value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskEdit {
    pub title: Option<String>,
    pub subject: Option<String>,
    pub teacher: Option<String>,
    pub due_date: Option<String>,
    pub due_time: Option<String>,
}

impl TaskEdit {
    /// Apply every valid change. A bad date or time is reported and
    /// skipped; the other fields still apply.
    pub fn apply(&self, task: &mut Task) -> Vec<TaskError> {
        let mut errors = Vec::new();

        if let Some(title) = non_blank(&self.title) {
            task.title = title.to_string();
        }
        if let Some(subject) = non_blank(&self.subject) {
            task.subject = subject.to_string();
        }
        if let Some(teacher) = non_blank(&self.teacher) {
            task.teacher = teacher.to_string();
        }
        if let Some(date) = non_blank(&self.due_date) {
            match normalize_date(date) {
                Ok(date) => task.due_date = date,
                Err(e) => errors.push(e),
            }
        }
        if let Some(time) = non_blank(&self.due_time) {
            match normalize_time(time) {
                Ok(time) => task.due_time = time,
                Err(e) => errors.push(e),
            }
        }

        errors
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn check_index(tasks: &[Task], index: usize) -> Result<(), TaskError> {
    if index >= tasks.len() {
        return Err(TaskError::InvalidSelection {
            index: index + 1,
            len: tasks.len(),
        });
    }
    Ok(())
}

impl TaskStore {
    /// Append a task and persist
    pub fn add_task(&self, tasks: &mut Vec<Task>, task: Task) -> Result<()> {
        tasks.push(task);
        self.save(tasks)?;
        Ok(())
    }

    /// Apply an edit to the task at `index` (0-based) and persist, even when
    /// nothing changed. Returns the field errors that were skipped.
    pub fn edit_task(&self, tasks: &mut [Task], index: usize, edit: &TaskEdit) -> Result<Vec<TaskError>> {
        check_index(tasks, index)?;
        let errors = edit.apply(&mut tasks[index]);
        self.save(tasks)?;
        Ok(errors)
    }

    /// Remove the task at `index` (0-based), persist, and return it
    pub fn delete_task(&self, tasks: &mut Vec<Task>, index: usize) -> Result<Task> {
        check_index(tasks, index)?;
        let removed = tasks.remove(index);
        self.save(tasks)?;
        Ok(removed)
    }

    /// Flip the status of the task at `index` (0-based), persist, and
    /// return the new status
    pub fn toggle_task(&self, tasks: &mut [Task], index: usize) -> Result<TaskStatus> {
        check_index(tasks, index)?;
        tasks[index].toggle();
        let status = tasks[index].status;
        self.save(tasks)?;
        Ok(status)
    }
}

/// Distinct subjects in the order they first appear
pub fn subjects(tasks: &[Task]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for task in tasks {
        if !seen.iter().any(|s| s == &task.subject) {
            seen.push(task.subject.clone());
        }
    }
    seen
}

/// Tasks with exactly this subject, in list order
pub fn tasks_for_subject(tasks: &[Task], subject: &str) -> Vec<Task> {
    tasks.iter().filter(|t| t.subject == subject).cloned().collect()
}
