use std::fs::{self, File};
use std::io::{BufReader, ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::StoreError;
use crate::models::Task;

mod tasks;

pub use tasks::{subjects, tasks_for_subject, TaskEdit};

/// JSON file holding the full task list
pub struct TaskStore {
    path: PathBuf,
}

impl TaskStore {
    /// Open the store at the configured path
    pub fn open(config: &Config) -> Self {
        Self::open_at(config.data_file.clone())
    }

    pub fn open_at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load all tasks, starting empty when the file is missing or unreadable.
    ///
    /// Corruption is logged and otherwise ignored so a damaged file never
    /// stops the program; the next save overwrites it.
    pub fn load(&self) -> Vec<Task> {
        match self.try_load() {
            Ok(tasks) => tasks,
            Err(StoreError::Corrupt(e)) => {
                tracing::warn!(path = %self.path.display(), error = %e, "task file corrupt, starting empty");
                Vec::new()
            }
            Err(StoreError::Io(e)) => {
                tracing::warn!(path = %self.path.display(), error = %e, "task file unreadable, starting empty");
                Vec::new()
            }
        }
    }

    /// Load all tasks, reporting why the file could not be read
    pub fn try_load(&self) -> Result<Vec<Task>, StoreError> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let tasks: Vec<Task> = serde_json::from_reader(BufReader::new(file))?;
        tracing::debug!(count = tasks.len(), path = %self.path.display(), "loaded tasks");
        Ok(tasks)
    }

    /// Overwrite the file with the full task list
    pub fn save(&self, tasks: &[Task]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_string_pretty(tasks)?;
        let mut file = File::create(&self.path)?;
        file.write_all(json.as_bytes())?;
        file.flush()?;

        tracing::debug!(count = tasks.len(), path = %self.path.display(), "saved tasks");
        Ok(())
    }
}
