//! Error types for scenario data loading.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Errors raised while loading a scenario table.
///
/// The game flow never surfaces these: [`crate::scenario::ScenarioTable::load_or_empty`]
/// degrades any failure to an empty table, which resolves every year to the
/// finale path. The strict loader used by tooling reports them.
#[derive(Debug)]
pub enum ScenarioError {
    /// The scenario file could not be read.
    Io {
        /// Path of the file that failed to open or read.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
    /// The CSV stream was malformed.
    Csv(csv::Error),
    /// The header row has no `year` column.
    MissingYearColumn,
}

impl fmt::Display for ScenarioError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScenarioError::Io { path, source } => {
                write!(f, "failed to read {}: {source}", path.display())
            }
            ScenarioError::Csv(e) => write!(f, "malformed scenario CSV: {e}"),
            ScenarioError::MissingYearColumn => {
                write!(f, "scenario CSV header has no `year` column")
            }
        }
    }
}

impl std::error::Error for ScenarioError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ScenarioError::Io { source, .. } => Some(source),
            ScenarioError::Csv(e) => Some(e),
            ScenarioError::MissingYearColumn => None,
        }
    }
}

impl From<csv::Error> for ScenarioError {
    fn from(e: csv::Error) -> Self {
        ScenarioError::Csv(e)
    }
}

/// Result type for strict scenario loading.
pub type ScenarioResult<T> = Result<T, ScenarioError>;
