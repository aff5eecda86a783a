//! Game layer for Despot.
//!
//! Implements the yearly decision cycle on top of the scenario table:
//! - Session state (year, happiness, decision log, turn gate)
//! - Tag-to-delta mapping for decision options
//! - Termination checks and ending-rank lookup

mod ending;
mod state;
mod tag;

pub use ending::{Ending, Rank};
pub use state::{
    DecisionOutcome, GameState, Phase, FINAL_YEAR, HAPPINESS_CEILING, INITIAL_HAPPINESS,
    START_YEAR,
};
pub use tag::{delta_for, Tag};
