//! The scheduler's output unit.

use formic_core::{Cell, Direction};
use std::fmt;

/// One accepted agent move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Order {
    /// Cell the agent moves from.
    pub origin: Cell,
    /// Cardinal step taken.
    pub direction: Direction,
    /// Cell the agent ends the turn on.
    pub destination: Cell,
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.origin, self.direction.as_char())
    }
}
