use serde::{Deserialize, Serialize};

/// Completion state of a task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum TaskStatus {
    #[default]
    #[serde(alias = "Belum Selesai")]
    Incomplete,
    #[serde(alias = "Selesai")]
    Complete,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Incomplete => "Incomplete",
            Self::Complete => "Complete",
        }
    }

    /// The other state
    pub fn flipped(self) -> Self {
        match self {
            Self::Incomplete => Self::Complete,
            Self::Complete => Self::Incomplete,
        }
    }
}

/// A school assignment.
///
/// `due_date` and `due_time` hold the text that passed validation when the
/// task was written (`YYYY-MM-DD` and `HH:MM`). A hand-edited file may still
/// carry bad values; readers of these fields must not assume they parse.
/// The aliases accept files written by the earlier version of the tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    #[serde(alias = "nama_tugas")]
    pub title: String,
    #[serde(alias = "mata_pelajaran")]
    pub subject: String,
    #[serde(alias = "guru")]
    pub teacher: String,
    #[serde(alias = "tanggal")]
    pub due_date: String,
    #[serde(alias = "jam")]
    pub due_time: String,
    pub status: TaskStatus,
}

impl Task {
    pub fn new(
        title: String,
        subject: String,
        teacher: String,
        due_date: String,
        due_time: String,
    ) -> Self {
        Self {
            title,
            subject,
            teacher,
            due_date,
            due_time,
            status: TaskStatus::Incomplete,
        }
    }

    /// Check if task is completed
    pub fn is_completed(&self) -> bool {
        self.status == TaskStatus::Complete
    }

    /// Flip between complete and incomplete
    pub fn toggle(&mut self) {
        self.status = self.status.flipped();
    }

    /// Deadline as shown in tables: `YYYY-MM-DD HH:MM`
    pub fn deadline_label(&self) -> String {
        format!("{} {}", self.due_date, self.due_time)
    }
}
