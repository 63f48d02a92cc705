use anyhow::Result;
use chrono::{Local, NaiveDateTime};

use crate::cli::display::{render_filtered, render_subject_list, NO_TASKS};
use crate::cli::ui::text_input;
use crate::models::Task;
use crate::store::{subjects, tasks_for_subject};
use crate::validate::parse_selection;

/// Execute the filter command. Read-only.
///
/// Subjects are offered in the order they first appear in the list. A
/// subject given by name that matches nothing shows the empty notice.
pub fn run_filter(tasks: &[Task], subject: Option<String>) -> Result<()> {
    let view = filter_view(tasks, subject, text_input, Local::now().naive_local())?;
    println!("{}", view);
    Ok(())
}

/// Build the filtered view, asking for a subject through `read` when none
/// was given
fn filter_view(
    tasks: &[Task],
    subject: Option<String>,
    mut read: impl FnMut(&str) -> Result<String>,
    now: NaiveDateTime,
) -> Result<String> {
    if tasks.is_empty() {
        return Ok(NO_TASKS.to_string());
    }

    let subject = match subject {
        Some(s) => s.trim().to_string(),
        None => pick_subject(tasks, &mut read)?,
    };

    let matching = tasks_for_subject(tasks, &subject);
    Ok(render_filtered(&subject, &matching, now))
}

fn pick_subject(tasks: &[Task], read: &mut impl FnMut(&str) -> Result<String>) -> Result<String> {
    let subjects = subjects(tasks);
    println!("{}\n", render_subject_list(&subjects));

    let input = read("Subject number:")?;
    let index = parse_selection(&input, subjects.len())?;
    Ok(subjects[index].clone())
}
