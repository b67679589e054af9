//! The toroidal board.

use crate::error::GridError;
use crate::tile::{Observation, Tile};
use crate::vision::Visibility;
use formic_core::{Cell, Direction, PlayerId};
use indexmap::IndexMap;
use smallvec::SmallVec;

/// Fixed-size toroidal board: terrain plus entity occupancy.
///
/// All coordinates wrap modulo `rows`/`cols`; distance is toroidal
/// Manhattan (`min(|Δ|, size − |Δ|)` per axis, summed). Terrain starts
/// fully [`Tile::Unknown`] and accumulates knowledge across turns; entity
/// registries (agents, food, corpses) are cleared by [`Grid::begin_turn`]
/// and refilled from the observation feed. Hills persist across turns so
/// a remembered enemy hill keeps attracting agents after it scrolls out of
/// vision; [`Grid::forget_razed_hills`] drops a remembered hill whose cell
/// is visible but no longer reported.
#[derive(Clone, Debug)]
pub struct Grid {
    rows: u16,
    cols: u16,
    tiles: Vec<Tile>,
    ants: IndexMap<Cell, PlayerId>,
    food: Vec<Cell>,
    dead: Vec<(Cell, PlayerId)>,
    hills: IndexMap<Cell, PlayerId>,
    hills_reported: Vec<Cell>,
}

impl Grid {
    /// Create an all-unknown board.
    ///
    /// Returns `Err(GridError::EmptyBoard)` if either dimension is zero.
    pub fn new(rows: u16, cols: u16) -> Result<Self, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::EmptyBoard);
        }
        Ok(Self {
            rows,
            cols,
            tiles: vec![Tile::Unknown; rows as usize * cols as usize],
            ants: IndexMap::new(),
            food: Vec::new(),
            dead: Vec::new(),
            hills: IndexMap::new(),
            hills_reported: Vec::new(),
        })
    }

    /// Number of rows.
    pub fn rows(&self) -> u16 {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> u16 {
        self.cols
    }

    /// Total cell count.
    pub fn cell_count(&self) -> usize {
        self.rows as usize * self.cols as usize
    }

    /// Row-major flat index of a cell.
    pub fn index(&self, cell: Cell) -> usize {
        cell.row as usize * self.cols as usize + cell.col as usize
    }

    /// Cell at a row-major flat index.
    pub fn cell_at(&self, index: usize) -> Cell {
        Cell::new(
            (index / self.cols as usize) as u16,
            (index % self.cols as usize) as u16,
        )
    }

    /// Whether a cell lies inside the board's coordinate range.
    pub fn in_bounds(&self, cell: Cell) -> bool {
        cell.row < self.rows && cell.col < self.cols
    }

    /// Wrap signed coordinates onto the torus.
    pub fn wrap(&self, row: i32, col: i32) -> Cell {
        let rows = self.rows as i32;
        let cols = self.cols as i32;
        Cell::new(
            (((row % rows) + rows) % rows) as u16,
            (((col % cols) + cols) % cols) as u16,
        )
    }

    /// Terrain at a cell.
    pub fn tile(&self, cell: Cell) -> Tile {
        self.tiles[self.index(cell)]
    }

    /// Whether a cell can be walked onto. False iff water.
    pub fn passable(&self, cell: Cell) -> bool {
        !self.tile(cell).is_water()
    }

    /// One step from `cell` in `direction`, with wraparound.
    pub fn destination(&self, cell: Cell, direction: Direction) -> Cell {
        let (dr, dc) = direction.offset();
        self.wrap(cell.row as i32 + dr, cell.col as i32 + dc)
    }

    /// The four cardinal neighbours, each tagged with its direction.
    pub fn neighbors(&self, cell: Cell) -> SmallVec<[(Cell, Direction); 4]> {
        Direction::ALL
            .iter()
            .map(|&dir| (self.destination(cell, dir), dir))
            .collect()
    }

    /// Toroidal Manhattan distance.
    pub fn distance(&self, a: Cell, b: Cell) -> u32 {
        let dr = (a.row as i32 - b.row as i32).unsigned_abs();
        let dc = (a.col as i32 - b.col as i32).unsigned_abs();
        dr.min(self.rows as u32 - dr) + dc.min(self.cols as u32 - dc)
    }

    /// The one or two directions that shorten the toroidal distance from
    /// `from` to `to`, axis by axis. Empty iff the cells coincide.
    pub fn directions_to(&self, from: Cell, to: Cell) -> SmallVec<[Direction; 2]> {
        let mut out = SmallVec::new();
        let half_rows = self.rows / 2;
        let half_cols = self.cols / 2;

        if from.row < to.row {
            let d = to.row - from.row;
            if d >= half_rows {
                out.push(Direction::North);
            }
            if d <= half_rows {
                out.push(Direction::South);
            }
        } else if to.row < from.row {
            let d = from.row - to.row;
            if d >= half_rows {
                out.push(Direction::South);
            }
            if d <= half_rows {
                out.push(Direction::North);
            }
        }
        if from.col < to.col {
            let d = to.col - from.col;
            if d >= half_cols {
                out.push(Direction::West);
            }
            if d <= half_cols {
                out.push(Direction::East);
            }
        } else if to.col < from.col {
            let d = from.col - to.col;
            if d >= half_cols {
                out.push(Direction::East);
            }
            if d <= half_cols {
                out.push(Direction::West);
            }
        }
        out
    }

    // ── Per-turn refresh ────────────────────────────────────────────

    /// Clear per-turn entity state before applying a new observation feed.
    ///
    /// Agent, food, and corpse cells revert to land; water and hills are
    /// retained. Must be called exactly once per turn, before
    /// [`Grid::apply`].
    pub fn begin_turn(&mut self) {
        for (&cell, _) in &self.ants {
            let idx = cell.row as usize * self.cols as usize + cell.col as usize;
            self.tiles[idx] = Tile::Land;
        }
        for &cell in &self.food {
            let idx = cell.row as usize * self.cols as usize + cell.col as usize;
            self.tiles[idx] = Tile::Land;
        }
        for &(cell, _) in &self.dead {
            let idx = cell.row as usize * self.cols as usize + cell.col as usize;
            self.tiles[idx] = Tile::Land;
        }
        self.ants.clear();
        self.food.clear();
        self.dead.clear();
        self.hills_reported.clear();
    }

    /// Apply one observation feed entry. Last write wins on duplicates:
    /// a conflicting report overwrites the tile and evicts the cell from
    /// any stale entity registry, so a cell reported as food and then
    /// water ends up as plain water.
    ///
    /// A dead report never overwrites a non-land tile (food can spawn on a
    /// cell where an agent just died) but is always recorded in the corpse
    /// list.
    pub fn apply(&mut self, cell: Cell, observation: Observation) -> Result<(), GridError> {
        if !self.in_bounds(cell) {
            return Err(GridError::CellOutOfBounds {
                cell,
                rows: self.rows,
                cols: self.cols,
            });
        }
        let idx = self.index(cell);
        match observation {
            Observation::Water => {
                self.tiles[idx] = Tile::Water;
                self.ants.swap_remove(&cell);
                self.food.retain(|&f| f != cell);
            }
            Observation::Food => {
                self.tiles[idx] = Tile::Food;
                self.ants.swap_remove(&cell);
                if !self.food.contains(&cell) {
                    self.food.push(cell);
                }
            }
            Observation::Ant(owner) => {
                self.tiles[idx] = Tile::Ant(owner);
                self.food.retain(|&f| f != cell);
                self.ants.insert(cell, owner);
            }
            Observation::Dead(owner) => {
                if self.tiles[idx] == Tile::Land {
                    self.tiles[idx] = Tile::Dead;
                }
                self.dead.push((cell, owner));
            }
            Observation::Hill(owner) => {
                self.hills.insert(cell, owner);
                self.hills_reported.push(cell);
            }
        }
        Ok(())
    }

    /// Flip an unknown cell to land. Called by the visibility tracker for
    /// every currently observable cell.
    pub fn reveal(&mut self, cell: Cell) {
        let idx = self.index(cell);
        if self.tiles[idx] == Tile::Unknown {
            self.tiles[idx] = Tile::Land;
        }
    }

    /// Drop remembered hills whose cell is visible this turn but was not
    /// reported: the hill has been razed.
    pub fn forget_razed_hills(&mut self, visibility: &Visibility) {
        let reported = std::mem::take(&mut self.hills_reported);
        self.hills
            .retain(|cell, _| !visibility.is_visible(*cell) || reported.contains(cell));
        self.hills_reported = reported;
    }

    // ── Entity queries ──────────────────────────────────────────────

    /// Cells occupied by the bot's own agents, in feed order.
    pub fn my_ants(&self) -> Vec<Cell> {
        self.ants
            .iter()
            .filter(|(_, owner)| owner.is_me())
            .map(|(&cell, _)| cell)
            .collect()
    }

    /// Visible enemy agents with their owners.
    pub fn enemy_ants(&self) -> Vec<(Cell, PlayerId)> {
        self.ants
            .iter()
            .filter(|(_, owner)| !owner.is_me())
            .map(|(&cell, &owner)| (cell, owner))
            .collect()
    }

    /// Whether one of the bot's own agents stands on the cell.
    pub fn is_my_ant(&self, cell: Cell) -> bool {
        self.ants.get(&cell).is_some_and(|owner| owner.is_me())
    }

    /// The owner of the agent on a cell, if any.
    pub fn ant_at(&self, cell: Cell) -> Option<PlayerId> {
        self.ants.get(&cell).copied()
    }

    /// Known food cells.
    pub fn food(&self) -> &[Cell] {
        &self.food
    }

    /// Agents reported dead this turn.
    pub fn dead(&self) -> &[(Cell, PlayerId)] {
        &self.dead
    }

    /// The bot's own hills.
    pub fn my_hills(&self) -> Vec<Cell> {
        self.hills
            .iter()
            .filter(|(_, owner)| owner.is_me())
            .map(|(&cell, _)| cell)
            .collect()
    }

    /// Known enemy hills (including remembered, currently invisible ones).
    pub fn enemy_hills(&self) -> Vec<(Cell, PlayerId)> {
        self.hills
            .iter()
            .filter(|(_, owner)| !owner.is_me())
            .map(|(&cell, &owner)| (cell, owner))
            .collect()
    }

    // ── Spatial queries ─────────────────────────────────────────────

    /// Unknown cells with at least one known neighbour: the exploration
    /// frontier.
    pub fn frontier(&self) -> Vec<Cell> {
        let mut out = Vec::new();
        for idx in 0..self.tiles.len() {
            if self.tiles[idx] != Tile::Unknown {
                continue;
            }
            let cell = self.cell_at(idx);
            let on_edge = self
                .neighbors(cell)
                .iter()
                .any(|&(nb, _)| self.tile(nb).is_known());
            if on_edge {
                out.push(cell);
            }
        }
        out
    }

    /// Number of never-observed cells.
    pub fn unknown_count(&self) -> usize {
        self.tiles.iter().filter(|t| !t.is_known()).count()
    }

    /// Known non-water cells within a square window of `radius` around
    /// `center` (center excluded). Used for patrol targets.
    pub fn nearby_cells(&self, center: Cell, radius: u16) -> Vec<Cell> {
        let r = radius as i32;
        let mut out = Vec::new();
        for dr in -r..=r {
            for dc in -r..=r {
                if dr == 0 && dc == 0 {
                    continue;
                }
                let cell = self.wrap(center.row as i32 + dr, center.col as i32 + dc);
                let tile = self.tile(cell);
                if tile.is_known() && !tile.is_water() {
                    out.push(cell);
                }
            }
        }
        out
    }

    /// Pretty-printed board for diagnostics, one `# `-prefixed line per row.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity((self.cols as usize + 3) * self.rows as usize);
        for row in 0..self.rows {
            out.push_str("# ");
            for col in 0..self.cols {
                out.push(self.tile(Cell::new(row, col)).glyph());
            }
            out.push('\n');
        }
        out
    }
}
