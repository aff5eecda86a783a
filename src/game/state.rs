//! Session state for one playthrough.
//!
//! The original game kept this in a process-wide web session; here it is an
//! explicit value the hosting layer owns. The engine never assumes any
//! persistence mechanism: serialize the state between requests however the
//! host likes (cookie, server-side store, in-memory map), or keep it on the
//! stack for a local playthrough.

use serde::{Deserialize, Serialize};

use crate::game::{delta_for, Ending, Tag};
use crate::scenario::{Scenario, ScenarioTable};

/// Year of the first decision.
pub const START_YEAR: u16 = 2026;

/// Last year with a decision; the finale begins once the year passes this.
pub const FINAL_YEAR: u16 = 2035;

/// Reported national happiness at the start of a reign.
pub const INITIAL_HAPPINESS: u32 = 30;

/// Happiness above this value collapses the regime on the next check.
///
/// Overflow is deliberately not clamped: blowing past the ceiling is the
/// collapse trigger, not a saturation point.
pub const HAPPINESS_CEILING: u32 = 100;

/// Log title used when a decision addresses an option the scenario does
/// not define. Such a decision resolves through the reform default.
const FALLBACK_TITLE: &str = "Decision";

/// Where the game stands at the start of a request.
#[derive(Debug, Clone, Copy)]
pub enum Phase<'a> {
    /// A scenario awaits this year's decision.
    InPlay(&'a Scenario),
    /// Happiness blew past the ceiling; the regime collapsed.
    Collapse(Ending),
    /// The decade ran its course (or the table ran out of years).
    Finale(Ending),
}

/// Result of a decision attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecisionOutcome {
    /// The decision was applied with this happiness delta.
    Applied {
        /// Signed happiness change before the floor clamp.
        delta: i32,
    },
    /// This year's decision was already taken; nothing changed.
    AlreadyDecided,
    /// No scenario exists for the current year; nothing changed.
    NoScenario,
}

/// Complete per-session game state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Current year (2026..=2035 during play).
    pub year: u16,
    /// Reported national happiness. Never negative; may exceed the
    /// ceiling, which triggers collapse.
    pub happiness: u32,
    /// One `"[year] title"` entry per decision taken, in order.
    pub log: Vec<String>,
    /// Gate preventing a second decision in the same year.
    pub turn_complete: bool,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Fresh state at the start of a reign.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            year: START_YEAR,
            happiness: INITIAL_HAPPINESS,
            log: Vec::new(),
            turn_complete: false,
        }
    }

    /// Reset to the start-of-reign state.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Resolve where the game stands against the scenario table.
    ///
    /// The collapse check comes first and wins regardless of year. With
    /// happiness inside the ceiling, a year past [`FINAL_YEAR`] or a year
    /// the table has no scenario for resolves to the finale; otherwise the
    /// current year's scenario is in play. An empty table therefore ends
    /// the game immediately, which is exactly how unloadable scenario data
    /// degrades.
    #[must_use]
    pub fn phase<'a>(&self, table: &'a ScenarioTable) -> Phase<'a> {
        if self.happiness > HAPPINESS_CEILING {
            return Phase::Collapse(Ending::collapse());
        }
        if self.year > FINAL_YEAR {
            return Phase::Finale(Ending::for_happiness(self.happiness));
        }
        match table.get(self.year) {
            Some(scenario) => Phase::InPlay(scenario),
            None => Phase::Finale(Ending::for_happiness(self.happiness)),
        }
    }

    /// Apply the decision numbered `choice` (1-based) for the current year.
    ///
    /// Idempotent within a turn: once `turn_complete` is set, repeated
    /// calls change nothing. A choice the scenario does not define still
    /// applies, through the reform default and a fixed log title. The
    /// happiness floor is clamped at 0; the ceiling is not clamped.
    pub fn apply_decision(&mut self, table: &ScenarioTable, choice: u8) -> DecisionOutcome {
        if self.turn_complete {
            return DecisionOutcome::AlreadyDecided;
        }
        let Some(scenario) = table.get(self.year) else {
            return DecisionOutcome::NoScenario;
        };

        let (title, delta) = match scenario.option(choice) {
            Some(opt) => (opt.title.as_str(), delta_for(opt.tag.as_deref())),
            None => (FALLBACK_TITLE, Tag::Reform.delta()),
        };

        self.happiness = self.happiness.saturating_add_signed(delta);
        self.log.push(format!("[{}] {title}", self.year));
        self.turn_complete = true;

        DecisionOutcome::Applied { delta }
    }

    /// Advance to the next year.
    ///
    /// Only moves when this year's decision is complete; returns whether
    /// the year actually advanced.
    pub fn advance_turn(&mut self) -> bool {
        if self.turn_complete {
            self.year += 1;
            self.turn_complete = false;
            true
        } else {
            false
        }
    }

    /// Decision log joined into the display text shown each turn.
    #[must_use]
    pub fn log_text(&self) -> String {
        self.log.join("\n")
    }
}
