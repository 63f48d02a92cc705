//! Shared UI primitives for taskcmd
//!
//! Conventions:
//! - Prompts: sentence case with colon: `Title:`
//! - Feedback: short sentence, period at the end: `Task added.`
//! - Errors go to stderr prefixed with `Error:`

use anyhow::Result;
use crossterm::{
    cursor,
    terminal::{Clear, ClearType},
    ExecutableCommand,
};
use inquire::{ui::RenderConfig, Text};
use std::io::{self, Write};

// ============================================================================
// Layout Primitives
// ============================================================================

/// Cut a string to at most `max_chars` characters. No ellipsis, no word
/// boundaries; multi-byte characters are never split.
pub fn clip(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

/// Horizontal rule of `width` copies of `ch`
#[inline]
pub fn rule(ch: char, width: usize) -> String {
    std::iter::repeat(ch).take(width).collect()
}

// ============================================================================
// Message Functions
// ============================================================================

/// Print a status message to stdout
#[inline]
pub fn status(msg: &str) {
    println!("{}", msg);
}

/// Print an error message to stderr
#[inline]
pub fn error(msg: &str) {
    eprintln!("Error: {}", msg);
}

// ============================================================================
// Terminal and Prompts
// ============================================================================

/// Clear the screen and move cursor to top-left
pub fn clear_screen() -> Result<()> {
    let mut stdout = io::stdout();
    stdout.execute(Clear(ClearType::All))?;
    stdout.execute(cursor::MoveTo(0, 0))?;
    stdout.flush()?;
    Ok(())
}

pub fn minimal_render_config() -> RenderConfig<'static> {
    RenderConfig::default_colored()
        .with_prompt_prefix(inquire::ui::Styled::new(""))
        .with_answered_prompt_prefix(inquire::ui::Styled::new(""))
}

/// Prompt for one line of text. Escape counts as an empty answer.
pub fn text_input(prompt: &str) -> Result<String> {
    let result = Text::new(prompt)
        .with_render_config(minimal_render_config())
        .prompt_skippable()?;
    Ok(result.map(|s| s.trim().to_string()).unwrap_or_default())
}

/// Prompt text showing the current value in brackets; empty keeps it
pub fn keep_prompt(field: &str, current: &str) -> String {
    format!("{} [{}]:", field, current)
}

/// Wait for the user to press enter
pub fn wait_for_continue() {
    println!();
    let _ = Text::new("Press Enter to continue...")
        .with_render_config(minimal_render_config())
        .prompt_skippable();
}
