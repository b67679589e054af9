//! Turn-level errors.

use formic_grid::GridError;
use std::error::Error;
use std::fmt;

/// Structural failure while ingesting a turn.
///
/// Deliberately narrow: running low on time, failing to find paths, or
/// leaving agents unordered are normal outcomes reported in the turn
/// metrics, not errors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TurnError {
    /// The observation feed referenced an invalid cell.
    Feed(GridError),
}

impl fmt::Display for TurnError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Feed(err) => write!(f, "observation feed rejected: {err}"),
        }
    }
}

impl Error for TurnError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Feed(err) => Some(err),
        }
    }
}

impl From<GridError> for TurnError {
    fn from(err: GridError) -> Self {
        Self::Feed(err)
    }
}
