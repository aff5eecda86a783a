//! Run command implementation - scripted playthroughs.

use super::output::{format_text, JsonRunResult};
use super::{CliError, OutputFormat};
use despot::{GameState, Phase, ScenarioTable};
use std::path::Path;

/// Execute the run command.
///
/// Choices are consumed one per year until the game terminates. The
/// scenario table uses the degrading loader, so a missing file produces an
/// immediate finale rather than an error.
///
/// # Errors
///
/// Returns an error if the choice list runs out before the game ends, or
/// if JSON serialization fails.
pub(crate) fn execute(
    scenarios: &Path,
    choices: &[u8],
    format: OutputFormat,
) -> Result<(), CliError> {
    let table = ScenarioTable::load_or_empty(scenarios);
    let mut state = GameState::new();
    let mut next_choice = choices.iter().copied();

    let (ending, collapsed) = loop {
        match state.phase(&table) {
            Phase::InPlay(_) => {
                let Some(choice) = next_choice.next() else {
                    return Err(CliError::new(format!(
                        "ran out of choices at year {} (happiness {})",
                        state.year, state.happiness
                    )));
                };
                state.apply_decision(&table, choice);
                state.advance_turn();
            }
            Phase::Collapse(ending) => break (ending, true),
            Phase::Finale(ending) => break (ending, false),
        }
    };

    match format {
        OutputFormat::Text => {
            print!("{}", format_text(&state, ending, collapsed));
        }
        OutputFormat::Json => {
            let result = JsonRunResult::new(&state, ending, collapsed);
            let json = serde_json::to_string_pretty(&result)
                .map_err(|e| CliError::new(format!("JSON serialization failed: {e}")))?;
            println!("{json}");
        }
    }

    Ok(())
}
