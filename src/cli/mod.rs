use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::store::TaskEdit;

pub mod add;
pub mod delete;
pub mod display;
pub mod edit;
pub mod filter;
pub mod list;
pub mod menu;
pub mod toggle;
pub mod ui;

pub use add::{run_add, NewTask};
pub use delete::run_delete;
pub use edit::run_edit;
pub use filter::run_filter;
pub use list::{run_list, run_warnings};
pub use menu::run_menu;
pub use toggle::run_toggle;

#[derive(Parser)]
#[command(name = "taskcmd")]
#[command(about = "School assignment tracker for the command line")]
#[command(version)]
pub struct Cli {
    /// Task file to use (default: $TASKCMD_FILE or ./tasks.json)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show all tasks with deadline warnings
    List,
    /// Add a task; missing fields are prompted for
    Add(AddArgs),
    /// Edit a task by its list number
    Edit(EditArgs),
    /// Delete a task by its list number
    Delete(NumberArgs),
    /// Mark a task done, or not done again
    Toggle(NumberArgs),
    /// Show the tasks for one subject
    Filter(FilterArgs),
    /// Show only the deadline warnings
    Warnings,
}

#[derive(Args)]
pub struct AddArgs {
    #[arg(long)]
    pub title: Option<String>,
    #[arg(short, long)]
    pub subject: Option<String>,
    #[arg(long)]
    pub teacher: Option<String>,
    /// Due date (YYYY-MM-DD)
    #[arg(short, long)]
    pub date: Option<String>,
    /// Due time (HH:MM, 24-hour)
    #[arg(short, long)]
    pub time: Option<String>,
}

impl From<AddArgs> for NewTask {
    fn from(args: AddArgs) -> Self {
        NewTask {
            title: args.title,
            subject: args.subject,
            teacher: args.teacher,
            date: args.date,
            time: args.time,
        }
    }
}

#[derive(Args)]
pub struct EditArgs {
    /// List number of the task (1-based)
    pub number: String,
    #[arg(long)]
    pub title: Option<String>,
    #[arg(short, long)]
    pub subject: Option<String>,
    #[arg(long)]
    pub teacher: Option<String>,
    /// Due date (YYYY-MM-DD)
    #[arg(short, long)]
    pub date: Option<String>,
    /// Due time (HH:MM, 24-hour)
    #[arg(short, long)]
    pub time: Option<String>,
}

impl EditArgs {
    /// Field changes from flags, or `None` to prompt for every field
    pub fn edit(&self) -> Option<TaskEdit> {
        let edit = TaskEdit {
            title: self.title.clone(),
            subject: self.subject.clone(),
            teacher: self.teacher.clone(),
            due_date: self.date.clone(),
            due_time: self.time.clone(),
        };
        if edit == TaskEdit::default() {
            None
        } else {
            Some(edit)
        }
    }
}

#[derive(Args)]
pub struct NumberArgs {
    /// List number of the task (1-based)
    pub number: String,
}

#[derive(Args)]
pub struct FilterArgs {
    /// Subject name, matched exactly; omit to pick from a list
    pub subject: Option<String>,
}
