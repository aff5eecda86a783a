// Allow unwrap in tests (test code is not production)
#![cfg_attr(test, allow(clippy::unwrap_used))]
//! Despot: a deterministic single-player propaganda-state narrative game.
//!
//! One decision per year, 2026 through 2035. Each decision moves the
//! reported national happiness by a fixed amount depending on its tag;
//! overshoot the ceiling and the regime collapses, survive the decade and
//! the final figure picks one of five archive endings.
//!
//! The crate is the game engine only: an explicit [`GameState`] value,
//! pure transition functions, and a read-only [`ScenarioTable`] loaded
//! from CSV. Hosting layers (the bundled CLI, or a web front end) own
//! rendering and state persistence; `GameState` is serde-serializable for
//! exactly that purpose.

pub mod error;
pub mod game;
pub mod scenario;
pub mod share;

pub use error::{ScenarioError, ScenarioResult};
pub use game::{DecisionOutcome, Ending, GameState, Phase, Rank, Tag};
pub use scenario::{ChoiceOption, Scenario, ScenarioTable};
