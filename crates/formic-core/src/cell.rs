//! Board coordinates and movement directions.

use std::fmt;

/// A board coordinate `(row, col)`.
///
/// Cells do not know the board dimensions; all wraparound arithmetic goes
/// through the grid so a `Cell` is always a plain pair. Rows grow southward,
/// columns grow eastward.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    /// Row index, `0 <= row < rows`.
    pub row: u16,
    /// Column index, `0 <= col < cols`.
    pub col: u16,
}

impl Cell {
    /// Create a cell from row and column.
    pub const fn new(row: u16, col: u16) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(u16, u16)> for Cell {
    fn from((row, col): (u16, u16)) -> Self {
        Self { row, col }
    }
}

/// Cardinal movement direction on the 4-connected board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Direction {
    /// Row − 1.
    North = 0,
    /// Col + 1.
    East = 1,
    /// Row + 1.
    South = 2,
    /// Col − 1.
    West = 3,
}

impl Direction {
    /// All four directions in N/E/S/W order.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Returns the `(row_offset, col_offset)` for this direction.
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Direction::North => (-1, 0),
            Direction::East => (0, 1),
            Direction::South => (1, 0),
            Direction::West => (0, -1),
        }
    }

    /// The opposite direction.
    pub const fn reverse(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }

    /// Lowercase wire letter (`n`/`e`/`s`/`w`) used by the order boundary.
    pub const fn as_char(self) -> char {
        match self {
            Direction::North => 'n',
            Direction::East => 'e',
            Direction::South => 's',
            Direction::West => 'w',
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}
