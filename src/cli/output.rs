//! Output formatting utilities for CLI.

use despot::share::{collapse_share_text, share_text};
use despot::{Ending, GameState, Rank};
use serde::Serialize;

/// JSON-serializable playthrough result.
#[derive(Debug, Serialize)]
pub(super) struct JsonRunResult {
    /// Year the game ended in.
    pub(super) final_year: u16,
    /// Final happiness value.
    pub(super) final_happiness: u32,
    /// Whether the regime collapsed (happiness overflow).
    pub(super) collapsed: bool,
    /// Ending rank.
    pub(super) rank: Rank,
    /// Ending headline.
    pub(super) title: &'static str,
    /// Ending narrative.
    pub(super) description: &'static str,
    /// Decision log, one entry per year.
    pub(super) log: Vec<String>,
    /// Pre-formatted social-share text.
    pub(super) share_text: String,
}

impl JsonRunResult {
    /// Assemble the result from the final state and ending.
    pub(super) fn new(state: &GameState, ending: Ending, collapsed: bool) -> Self {
        let share = if collapsed {
            collapse_share_text()
        } else {
            share_text(&ending, state.happiness)
        };

        Self {
            final_year: state.year,
            final_happiness: state.happiness,
            collapsed,
            rank: ending.rank,
            title: ending.title,
            description: ending.description,
            log: state.log.clone(),
            share_text: share,
        }
    }
}

/// Format a playthrough result as human-readable text.
pub(super) fn format_text(state: &GameState, ending: Ending, collapsed: bool) -> String {
    let mut output = String::new();

    if collapsed {
        output.push_str(&format!("{} (year {})\n", ending.title, state.year));
    } else {
        output.push_str(&format!("ARCHIVE: {}\n", ending.title));
    }
    output.push_str(&format!("  Rank: {}\n", ending.rank));
    output.push_str(&format!("  Final happiness: {}/100\n\n", state.happiness));
    output.push_str(&format!("{}\n\n", ending.description));

    if !state.log.is_empty() {
        output.push_str("Decision log:\n");
        for entry in &state.log {
            output.push_str(&format!("  {entry}\n"));
        }
        output.push('\n');
    }

    output.push_str("Share:\n");
    let share = if collapsed {
        collapse_share_text()
    } else {
        share_text(&ending, state.happiness)
    };
    for line in share.lines() {
        output.push_str(&format!("  {line}\n"));
    }

    output
}
