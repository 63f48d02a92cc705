use chrono::Local;

use crate::cli::display::{render_all, render_warnings};
use crate::deadline::analyze_now;
use crate::models::Task;

/// Print every task followed by the deadline warnings
pub fn run_list(tasks: &[Task]) {
    println!("{}", render_all(tasks, Local::now().naive_local()));
}

/// Print only the deadline warnings
pub fn run_warnings(tasks: &[Task]) {
    match render_warnings(&analyze_now(tasks)) {
        Some(block) => println!("{}", block),
        None => println!("Nothing due."),
    }
}
