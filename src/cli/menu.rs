//! Main menu for taskcmd
//!
//! Numbered choices read as text. The task file is reloaded before every
//! choice, so edits made elsewhere show up on the next round.

use anyhow::{anyhow, Result};
use std::io::{self, IsTerminal};

use crate::cli::ui::{self, clear_screen, rule, text_input, wait_for_continue};
use crate::cli::{run_add, run_delete, run_edit, run_filter, run_list, run_toggle, NewTask};
use crate::store::TaskStore;

const MENU_WIDTH: usize = 60;

/// Menu options with type-safe variants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuOption {
    List,
    Add,
    Edit,
    Delete,
    Toggle,
    Filter,
    Quit,
}

impl MenuOption {
    const ALL: &'static [MenuOption] = &[
        MenuOption::List,
        MenuOption::Add,
        MenuOption::Edit,
        MenuOption::Delete,
        MenuOption::Toggle,
        MenuOption::Filter,
        MenuOption::Quit,
    ];

    fn label(self) -> &'static str {
        match self {
            MenuOption::List => "View all tasks",
            MenuOption::Add => "Add task",
            MenuOption::Edit => "Edit task",
            MenuOption::Delete => "Delete task",
            MenuOption::Toggle => "Mark done / not done",
            MenuOption::Filter => "Filter by subject",
            MenuOption::Quit => "Quit",
        }
    }

    fn number(self) -> usize {
        MenuOption::ALL
            .iter()
            .position(|opt| *opt == self)
            .map_or(0, |i| i + 1)
    }

    /// Only the exact strings "1".."7" are accepted
    fn from_input(s: &str) -> Option<MenuOption> {
        MenuOption::ALL
            .iter()
            .find(|opt| opt.number().to_string() == s)
            .copied()
    }
}

fn render_menu() -> String {
    let mut out = vec![rule('=', MENU_WIDTH), "taskcmd: school assignments".to_string(), rule('=', MENU_WIDTH)];
    out.extend(
        MenuOption::ALL
            .iter()
            .map(|opt| format!("{}. {}", opt.number(), opt.label())),
    );
    out.push(rule('=', MENU_WIDTH));
    out.join("\n")
}

/// Run the interactive main menu
pub fn run_menu(store: &TaskStore) -> Result<()> {
    // TTY check: interactive menu requires a terminal
    if !io::stdin().is_terminal() {
        return Err(anyhow!(
            "Interactive menu requires a terminal. Use subcommands for non-interactive use:\n  \
            taskcmd list\n  \
            taskcmd add --title <TITLE> --subject <SUBJECT> --teacher <TEACHER> --date <DATE> --time <TIME>\n  \
            Run 'taskcmd --help' for all options."
        ));
    }

    loop {
        let _ = clear_screen();
        println!("{}\n", render_menu());

        let input = match text_input(&format!("Choose (1-{}):", MenuOption::ALL.len())) {
            Ok(input) => input,
            // Ctrl+C or terminal trouble: leave quietly
            Err(_) => return Ok(()),
        };

        let Some(choice) = MenuOption::from_input(&input) else {
            ui::error(&format!("Invalid choice. Pick 1-{}.", MenuOption::ALL.len()));
            wait_for_continue();
            continue;
        };

        if choice == MenuOption::Quit {
            println!("\nThanks for using taskcmd. Goodbye!");
            return Ok(());
        }

        println!();
        // Execute command - all errors caught and displayed
        if let Err(e) = execute_command(store, choice) {
            tracing::debug!(choice = ?choice, error = %e, "menu command failed");
            ui::error(&e.to_string());
        }
        wait_for_continue();
    }
}

/// Execute a menu command against a freshly loaded list
fn execute_command(store: &TaskStore, choice: MenuOption) -> Result<()> {
    let mut tasks = store.load();

    match choice {
        MenuOption::List => {
            run_list(&tasks);
            Ok(())
        }
        MenuOption::Add => run_add(store, &mut tasks, NewTask::default()),
        MenuOption::Edit => run_edit(store, &mut tasks, None, None),
        MenuOption::Delete => run_delete(store, &mut tasks, None),
        MenuOption::Toggle => run_toggle(store, &mut tasks, None),
        MenuOption::Filter => run_filter(&tasks, None),
        MenuOption::Quit => Ok(()),
    }
}
