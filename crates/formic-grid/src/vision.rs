//! Vision disk and per-turn visibility mask.

use crate::grid::Grid;
use formic_core::Cell;

/// Precomputed Euclidean vision disk.
///
/// Holds every `(dr, dc)` offset with `dr² + dc² ≤ viewradius²`. Computed
/// once at game start; the per-turn visibility sweep is then pure index
/// arithmetic.
#[derive(Clone, Debug)]
pub struct VisionOffsets {
    offsets: Vec<(i32, i32)>,
    radius2: u32,
}

impl VisionOffsets {
    /// Build the disk for a squared view radius.
    pub fn new(viewradius2: u32) -> Self {
        let reach = (viewradius2 as f64).sqrt() as i32;
        let mut offsets = Vec::new();
        for dr in -reach..=reach {
            for dc in -reach..=reach {
                if (dr * dr + dc * dc) as u32 <= viewradius2 {
                    offsets.push((dr, dc));
                }
            }
        }
        Self { offsets, radius2: viewradius2 }
    }

    /// The squared radius this disk was built for.
    pub fn radius2(&self) -> u32 {
        self.radius2
    }

    /// The (non-squared) view radius.
    pub fn radius(&self) -> f64 {
        (self.radius2 as f64).sqrt()
    }

    /// Number of cells in the disk.
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    /// Whether the disk is empty. Never true: the origin is always included.
    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// Iterate the disk's offsets.
    pub fn iter(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.offsets.iter().copied()
    }
}

/// Per-turn visibility mask over the board.
///
/// Recomputed from scratch every turn by stamping the vision disk around
/// each friendly agent. Also drives terrain discovery: a visible unknown
/// cell is revealed as land on the [`Grid`].
#[derive(Clone, Debug)]
pub struct Visibility {
    rows: u16,
    cols: u16,
    visible: Vec<bool>,
}

impl Visibility {
    /// Create an all-invisible mask for a board of the given size.
    pub fn new(rows: u16, cols: u16) -> Self {
        Self {
            rows,
            cols,
            visible: vec![false; rows as usize * cols as usize],
        }
    }

    /// Recompute the mask from the grid's current friendly agents and
    /// reveal newly observed terrain.
    pub fn recompute(&mut self, grid: &mut Grid, offsets: &VisionOffsets) {
        self.visible.fill(false);
        let agents = grid.my_ants();
        for agent in agents {
            for (dr, dc) in offsets.iter() {
                let cell = grid.wrap(agent.row as i32 + dr, agent.col as i32 + dc);
                let idx = self.index(cell);
                self.visible[idx] = true;
            }
        }
        for idx in 0..self.visible.len() {
            if self.visible[idx] {
                grid.reveal(self.cell_at(idx));
            }
        }
    }

    /// Whether the cell is visible this turn.
    pub fn is_visible(&self, cell: Cell) -> bool {
        self.visible[self.index(cell)]
    }

    /// Number of currently visible cells.
    pub fn visible_count(&self) -> usize {
        self.visible.iter().filter(|&&v| v).count()
    }

    fn index(&self, cell: Cell) -> usize {
        cell.row as usize * self.cols as usize + cell.col as usize
    }

    fn cell_at(&self, index: usize) -> Cell {
        Cell::new(
            (index / self.cols as usize) as u16,
            (index % self.cols as usize) as u16,
        )
    }

    #[cfg(test)]
    pub(crate) fn mark_visible_for_test(&mut self, grid: &Grid, cell: Cell) {
        debug_assert!(grid.in_bounds(cell));
        let idx = self.index(cell);
        self.visible[idx] = true;
    }
}
