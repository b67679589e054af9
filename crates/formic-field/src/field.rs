//! Double-buffered diffusion field.

use crate::sources::FixedSources;
use formic_core::{Cell, Channel, TurnClock};
use formic_grid::Grid;
use std::time::Instant;

/// Five diffusion planes over the board, double-buffered.
///
/// A pass reads the front buffer, writes the back buffer, and swaps, so
/// every cell of a generation sees a consistent previous generation
/// (Jacobi, not Gauss-Seidel). The field is cleared and rebuilt from
/// sources each turn; agents only ever compare neighbour values, so the
/// absolute scale after `k` passes is irrelevant.
#[derive(Clone, Debug)]
pub struct PotentialField {
    rows: u16,
    cols: u16,
    front: Vec<f32>,
    back: Vec<f32>,
}

impl PotentialField {
    /// Create an all-zero field for a board of the given size.
    pub fn new(rows: u16, cols: u16) -> Self {
        let len = rows as usize * cols as usize * Channel::COUNT;
        Self {
            rows,
            cols,
            front: vec![0.0; len],
            back: vec![0.0; len],
        }
    }

    fn cells(&self) -> usize {
        self.rows as usize * self.cols as usize
    }

    fn index(&self, cell: Cell, channel: Channel) -> usize {
        channel.index() * self.cells() + cell.row as usize * self.cols as usize + cell.col as usize
    }

    /// Zero every plane. Called at the start of each turn.
    pub fn clear(&mut self) {
        self.front.fill(0.0);
        self.back.fill(0.0);
    }

    /// The current value at a cell in a channel.
    pub fn value(&self, cell: Cell, channel: Channel) -> f32 {
        self.front[self.index(cell, channel)]
    }

    /// Allied minus enemy presence at a cell. Negative means the cell sits
    /// deeper in enemy influence than in ours.
    pub fn danger(&self, cell: Cell) -> f32 {
        self.value(cell, Channel::Allied) - self.value(cell, Channel::Enemy)
    }

    /// Owned copy of all planes, plane-major. For diagnostics.
    pub fn snapshot(&self) -> Vec<f32> {
        self.front.clone()
    }

    /// Overwrite every cell whose fixed source is positive with the source
    /// value. Floors, not increments: sources hold their seed exactly.
    pub fn reseed(&mut self, sources: &FixedSources) {
        for (dst, &src) in self.front.iter_mut().zip(sources.as_slice()) {
            if src > 0.0 {
                *dst = src;
            }
        }
    }

    /// One Jacobi pass: each non-water cell becomes the mean of its four
    /// toroidal neighbours, per channel. Water stays at 0, and cells under
    /// friendly agents have their goal channels forced to 0 so an agent
    /// never chases influence it is already standing on.
    pub fn diffuse_pass(&mut self, grid: &Grid) {
        let rows = self.rows as usize;
        let cols = self.cols as usize;
        let cells = rows * cols;

        let blocked: Vec<bool> = (0..cells)
            .map(|i| !grid.passable(grid.cell_at(i)))
            .collect();

        for channel in Channel::ALL {
            let plane = channel.index() * cells;
            for r in 0..rows {
                let row_north = (if r == 0 { rows - 1 } else { r - 1 }) * cols;
                let row_south = (if r + 1 == rows { 0 } else { r + 1 }) * cols;
                let row = r * cols;
                for c in 0..cols {
                    let i = row + c;
                    if blocked[i] {
                        self.back[plane + i] = 0.0;
                        continue;
                    }
                    let west = if c == 0 { cols - 1 } else { c - 1 };
                    let east = if c + 1 == cols { 0 } else { c + 1 };
                    let sum = self.front[plane + row_north + c]
                        + self.front[plane + row_south + c]
                        + self.front[plane + row + west]
                        + self.front[plane + row + east];
                    self.back[plane + i] = 0.25 * sum;
                }
            }
        }
        std::mem::swap(&mut self.front, &mut self.back);

        for cell in grid.my_ants() {
            let idx = cell.row as usize * cols + cell.col as usize;
            for channel in Channel::ALL {
                if channel.zeroed_under_agents() {
                    self.front[channel.index() * cells + idx] = 0.0;
                }
            }
        }
    }

    /// Run `diffuse_pass` + [`PotentialField::reseed`] repeatedly until the
    /// next pass would eat into the reserve, estimating its cost from the
    /// last measured pass. Always runs at least one pass, even with the
    /// clock already exhausted. Returns the number of passes run.
    pub fn run_until_budget(
        &mut self,
        grid: &Grid,
        sources: &FixedSources,
        clock: &dyn TurnClock,
        reserve_ms: i64,
    ) -> u32 {
        let mut passes = 0u32;
        let mut last_cost_ms = 0i64;
        loop {
            if passes > 0 && clock.time_remaining_ms() - last_cost_ms <= reserve_ms {
                break;
            }
            let started = Instant::now();
            self.diffuse_pass(grid);
            self.reseed(sources);
            last_cost_ms = started.elapsed().as_millis() as i64;
            passes += 1;
        }
        passes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::SourceTuning;
    use formic_core::PlayerId;
    use formic_grid::{Observation, Visibility, VisionOffsets};
    use proptest::prelude::*;

    fn c(row: u16, col: u16) -> Cell {
        Cell::new(row, col)
    }

    /// A clock that hands out a fixed sequence of remaining-time readings.
    struct ScriptedClock {
        readings: std::cell::RefCell<Vec<i64>>,
    }

    impl ScriptedClock {
        fn new(mut readings: Vec<i64>) -> Self {
            readings.reverse();
            Self {
                readings: std::cell::RefCell::new(readings),
            }
        }
    }

    impl TurnClock for ScriptedClock {
        fn time_remaining_ms(&self) -> i64 {
            let mut readings = self.readings.borrow_mut();
            readings.pop().unwrap_or(-1)
        }
    }

    fn sources_with_food(rows: u16, cols: u16, cell: Cell) -> (Grid, FixedSources) {
        let mut grid = Grid::new(rows, cols).unwrap();
        grid.apply(cell, Observation::Food).unwrap();
        let offsets = VisionOffsets::new(1);
        let vis = Visibility::new(rows, cols);
        let mut sources = FixedSources::new(rows, cols);
        sources.rebuild(&grid, &vis, &offsets, &SourceTuning::default());
        (grid, sources)
    }

    #[test]
    fn single_source_spreads_quarter_to_neighbours() {
        let (grid, sources) = sources_with_food(7, 7, c(3, 3));
        let mut field = PotentialField::new(7, 7);
        field.reseed(&sources);
        field.diffuse_pass(&grid);
        field.reseed(&sources);

        assert_eq!(field.value(c(3, 3), Channel::Food), 1000.0);
        for nb in [c(2, 3), c(4, 3), c(3, 2), c(3, 4)] {
            assert_eq!(field.value(nb, Channel::Food), 250.0);
        }
        assert_eq!(field.value(c(1, 3), Channel::Food), 0.0);
    }

    #[test]
    fn water_holds_zero_through_all_passes() {
        let (mut grid, sources) = sources_with_food(7, 7, c(3, 3));
        grid.apply(c(3, 4), Observation::Water).unwrap();
        let mut field = PotentialField::new(7, 7);
        field.reseed(&sources);
        for _ in 0..10 {
            field.diffuse_pass(&grid);
            field.reseed(&sources);
            assert_eq!(field.value(c(3, 4), Channel::Food), 0.0);
        }
        // Influence still flows around the wall.
        assert!(field.value(c(3, 5), Channel::Food) > 0.0);
    }

    #[test]
    fn reseed_overwrites_rather_than_adds() {
        let (grid, sources) = sources_with_food(7, 7, c(3, 3));
        let mut field = PotentialField::new(7, 7);
        field.reseed(&sources);
        for _ in 0..5 {
            field.diffuse_pass(&grid);
            field.reseed(&sources);
            assert_eq!(field.value(c(3, 3), Channel::Food), 1000.0);
        }
    }

    #[test]
    fn friendly_agent_cell_zeroes_goal_channels() {
        let (mut grid, sources) = sources_with_food(7, 7, c(3, 3));
        grid.apply(c(3, 2), Observation::Ant(PlayerId::ME)).unwrap();
        let mut field = PotentialField::new(7, 7);
        field.reseed(&sources);
        field.diffuse_pass(&grid);

        assert_eq!(field.value(c(3, 2), Channel::Food), 0.0);
        assert_eq!(field.value(c(3, 2), Channel::Explore), 0.0);
        assert_eq!(field.value(c(3, 2), Channel::Combat), 0.0);
        // Presence channels are left alone.
        assert_eq!(field.value(c(3, 4), Channel::Food), 250.0);
    }

    #[test]
    fn exhausted_clock_still_runs_one_pass() {
        let (grid, sources) = sources_with_food(5, 5, c(2, 2));
        let mut field = PotentialField::new(5, 5);
        field.reseed(&sources);
        let clock = ScriptedClock::new(vec![]);
        let passes = field.run_until_budget(&grid, &sources, &clock, 100);
        assert_eq!(passes, 1);
        assert!(field.value(c(2, 3), Channel::Food) > 0.0);
    }

    #[test]
    fn budget_loop_stops_at_reserve() {
        let (grid, sources) = sources_with_food(5, 5, c(2, 2));
        let mut field = PotentialField::new(5, 5);
        field.reseed(&sources);
        // Plenty of time twice, then under the reserve.
        let clock = ScriptedClock::new(vec![500, 400, 50]);
        let passes = field.run_until_budget(&grid, &sources, &clock, 100);
        assert_eq!(passes, 3);
    }

    #[test]
    fn danger_is_allied_minus_enemy() {
        let mut field = PotentialField::new(5, 5);
        let mut grid = Grid::new(5, 5).unwrap();
        grid.apply(c(2, 2), Observation::Ant(PlayerId::ME)).unwrap();
        grid.apply(c(2, 4), Observation::Ant(PlayerId(1))).unwrap();
        let offsets = VisionOffsets::new(1);
        let vis = Visibility::new(5, 5);
        let mut sources = FixedSources::new(5, 5);
        sources.rebuild(&grid, &vis, &offsets, &SourceTuning::default());
        field.reseed(&sources);

        assert_eq!(field.danger(c(2, 2)), 1000.0);
        assert!(field.danger(c(2, 4)) < 0.0);
    }

    proptest! {
        /// With a single source on an open board, influence decays with
        /// toroidal distance along any straight line from the source.
        #[test]
        fn decay_is_monotone_along_axes(passes in 1usize..8) {
            let (grid, sources) = sources_with_food(9, 9, c(4, 4));
            let mut field = PotentialField::new(9, 9);
            field.reseed(&sources);
            for _ in 0..passes {
                field.diffuse_pass(&grid);
                field.reseed(&sources);
            }
            for step in 0..4u16 {
                let closer = field.value(c(4, 4 + step), Channel::Food);
                let farther = field.value(c(4, 5 + step), Channel::Food);
                prop_assert!(closer >= farther, "{closer} < {farther} at {step}");
            }
        }

        /// A pass never produces a value above the strongest source.
        #[test]
        fn values_stay_bounded_by_max_source(passes in 1usize..10) {
            let (grid, sources) = sources_with_food(7, 7, c(3, 3));
            let mut field = PotentialField::new(7, 7);
            field.reseed(&sources);
            for _ in 0..passes {
                field.diffuse_pass(&grid);
                field.reseed(&sources);
            }
            for value in field.snapshot() {
                prop_assert!(value <= 1000.0);
            }
        }
    }
}
