//! Dense destination claims.

use formic_core::Cell;
use formic_grid::Grid;

/// Per-turn occupancy claims over the board.
///
/// Reset at the start of assignment with every friendly agent's cell
/// claimed, so a stationary agent blocks its square by default. An
/// accepted move releases the origin and claims the destination
/// immediately, making the new occupancy visible to every later agent in
/// the same turn.
#[derive(Clone, Debug)]
pub struct ClaimSet {
    rows: u16,
    cols: u16,
    claimed: Vec<bool>,
}

impl ClaimSet {
    /// Create an empty claim set for a board of the given size.
    pub fn new(rows: u16, cols: u16) -> Self {
        Self {
            rows,
            cols,
            claimed: vec![false; rows as usize * cols as usize],
        }
    }

    fn index(&self, cell: Cell) -> usize {
        cell.row as usize * self.cols as usize + cell.col as usize
    }

    /// Reset for a new turn, claiming every friendly agent's cell.
    pub fn begin_turn(&mut self, grid: &Grid) {
        self.claimed.fill(false);
        for cell in grid.my_ants() {
            let idx = self.index(cell);
            self.claimed[idx] = true;
        }
    }

    /// Whether the cell is claimed for end-of-turn occupancy.
    pub fn is_claimed(&self, cell: Cell) -> bool {
        self.claimed[self.index(cell)]
    }

    /// Commit a move: free the origin, take the destination.
    pub fn commit_move(&mut self, origin: Cell, destination: Cell) {
        let from = self.index(origin);
        let to = self.index(destination);
        self.claimed[from] = false;
        self.claimed[to] = true;
    }

    /// Number of claimed cells.
    pub fn claimed_count(&self) -> usize {
        self.claimed.iter().filter(|&&c| c).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use formic_core::PlayerId;
    use formic_grid::Observation;

    #[test]
    fn begin_turn_claims_agent_cells() {
        let mut grid = Grid::new(5, 5).unwrap();
        grid.apply(Cell::new(1, 1), Observation::Ant(PlayerId::ME))
            .unwrap();
        grid.apply(Cell::new(3, 3), Observation::Ant(PlayerId(1)))
            .unwrap();
        let mut claims = ClaimSet::new(5, 5);
        claims.begin_turn(&grid);
        assert!(claims.is_claimed(Cell::new(1, 1)));
        // Enemy cells are not claimed; combat resolution handles those.
        assert!(!claims.is_claimed(Cell::new(3, 3)));
        assert_eq!(claims.claimed_count(), 1);
    }

    #[test]
    fn commit_move_swaps_claims() {
        let mut claims = ClaimSet::new(5, 5);
        let mut grid = Grid::new(5, 5).unwrap();
        grid.apply(Cell::new(1, 1), Observation::Ant(PlayerId::ME))
            .unwrap();
        claims.begin_turn(&grid);
        claims.commit_move(Cell::new(1, 1), Cell::new(1, 2));
        assert!(!claims.is_claimed(Cell::new(1, 1)));
        assert!(claims.is_claimed(Cell::new(1, 2)));
    }
}
