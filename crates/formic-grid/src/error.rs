//! Error types for board construction and observation application.

use formic_core::Cell;
use std::error::Error;
use std::fmt;

/// Errors from [`Grid`](crate::Grid) construction and mutation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GridError {
    /// A board dimension is zero.
    EmptyBoard,
    /// An observation referenced a cell outside the board.
    CellOutOfBounds {
        /// The offending cell.
        cell: Cell,
        /// Board rows.
        rows: u16,
        /// Board columns.
        cols: u16,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyBoard => write!(f, "board has zero rows or columns"),
            Self::CellOutOfBounds { cell, rows, cols } => {
                write!(f, "cell {cell} outside {rows}x{cols} board")
            }
        }
    }
}

impl Error for GridError {}
