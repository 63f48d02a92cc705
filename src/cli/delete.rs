use anyhow::Result;

use crate::cli::display::render_pick_list;
use crate::cli::ui::{self, text_input};
use crate::models::Task;
use crate::store::TaskStore;
use crate::validate::parse_selection;

/// Execute the delete command
pub fn run_delete(store: &TaskStore, tasks: &mut Vec<Task>, number: Option<String>) -> Result<()> {
    if tasks.is_empty() {
        ui::status("No tasks to delete.");
        return Ok(());
    }

    let number = match number {
        Some(n) => n,
        None => {
            println!("{}\n", render_pick_list(tasks));
            text_input("Task number to delete:")?
        }
    };
    let index = parse_selection(&number, tasks.len())?;

    let removed = store.delete_task(tasks, index)?;
    ui::status(&format!("Deleted \"{}\".", removed.title));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TaskError;
    use tempfile::TempDir;

    fn task(title: &str) -> Task {
        Task::new(
            title.to_string(),
            "Math".to_string(),
            "Mr. Lee".to_string(),
            "2026-03-01".to_string(),
            "09:00".to_string(),
        )
    }

    #[test]
    fn test_delete_by_number() {
        let dir = TempDir::new().unwrap();
        let store = TaskStore::open_at(dir.path().join("tasks.json"));
        let mut tasks = vec![task("A"), task("B"), task("C")];
        store.save(&tasks).unwrap();

        run_delete(&store, &mut tasks, Some("2".to_string())).unwrap();

        let titles: Vec<String> = store.load().into_iter().map(|t| t.title).collect();
        assert_eq!(titles, vec!["A", "C"]);
    }

    #[test]
    fn test_delete_rejects_zero() {
        let dir = TempDir::new().unwrap();
        let store = TaskStore::open_at(dir.path().join("tasks.json"));
        let mut tasks = vec![task("A")];

        let err = run_delete(&store, &mut tasks, Some("0".to_string())).unwrap_err();
        assert_eq!(
            err.downcast_ref::<TaskError>(),
            Some(&TaskError::InvalidSelection { index: 0, len: 1 })
        );
        assert_eq!(tasks.len(), 1);
        assert!(!store.path().exists());
    }

    #[test]
    fn test_delete_empty_list_is_noop() {
        let dir = TempDir::new().unwrap();
        let store = TaskStore::open_at(dir.path().join("tasks.json"));
        let mut tasks = Vec::new();
        run_delete(&store, &mut tasks, Some("1".to_string())).unwrap();
        assert!(!store.path().exists());
    }
}
