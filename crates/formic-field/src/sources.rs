//! Fixed source floors rebuilt from the board each turn.

use crate::tuning::SourceTuning;
use formic_core::{Cell, Channel};
use formic_grid::{Grid, Visibility, VisionOffsets};

/// Per-cell, per-channel source floors.
///
/// Positive entries are reasserted by overwrite after every diffusion pass,
/// so a source's cell holds exactly its seed value while neighbours fill in
/// from averaging. Storage is plane-major (one contiguous plane per
/// channel), the same layout as the field itself.
#[derive(Clone, Debug)]
pub struct FixedSources {
    rows: u16,
    cols: u16,
    values: Vec<f32>,
}

impl FixedSources {
    /// Create an empty source map for a board of the given size.
    pub fn new(rows: u16, cols: u16) -> Self {
        Self {
            rows,
            cols,
            values: vec![0.0; rows as usize * cols as usize * Channel::COUNT],
        }
    }

    fn cells(&self) -> usize {
        self.rows as usize * self.cols as usize
    }

    fn index(&self, cell: Cell, channel: Channel) -> usize {
        channel.index() * self.cells() + cell.row as usize * self.cols as usize + cell.col as usize
    }

    /// The source floor at a cell, 0.0 where no source sits.
    pub fn value(&self, cell: Cell, channel: Channel) -> f32 {
        self.values[self.index(cell, channel)]
    }

    /// Raw plane-major storage, `Channel::COUNT` planes of `rows × cols`.
    pub fn as_slice(&self) -> &[f32] {
        &self.values
    }

    fn raise(&mut self, cell: Cell, channel: Channel, value: f32) {
        let idx = self.index(cell, channel);
        if value > self.values[idx] {
            self.values[idx] = value;
        }
    }

    /// Rebuild every source floor from the current board state.
    ///
    /// Food cells and frontier cells seed their channels directly. Enemy
    /// agents seed COMBAT scaled by the local force balance within the
    /// vision disk, so an outnumbered enemy pulls harder than one backed by
    /// a swarm. Enemy hills seed COMBAT at full strength while visible and
    /// at half strength from memory. Friendly hills seed ALLIED, and when
    /// threatened also paint a defensive ring; their diagonal corners
    /// double as rally stations for a population-scaled garrison.
    pub fn rebuild(
        &mut self,
        grid: &Grid,
        visibility: &Visibility,
        offsets: &VisionOffsets,
        tuning: &SourceTuning,
    ) {
        self.values.fill(0.0);

        for &cell in grid.food() {
            self.raise(cell, Channel::Food, tuning.food);
        }

        for cell in grid.frontier() {
            self.raise(cell, Channel::Explore, tuning.explore);
        }

        let my_ants = grid.my_ants();
        for &cell in &my_ants {
            self.raise(cell, Channel::Allied, tuning.agent);
        }
        for (cell, _) in grid.enemy_ants() {
            self.raise(cell, Channel::Enemy, tuning.agent);

            let mut allies = 0u32;
            let mut foes = 0u32;
            for (dr, dc) in offsets.iter() {
                let nearby = grid.wrap(cell.row as i32 + dr, cell.col as i32 + dc);
                match grid.ant_at(nearby) {
                    Some(owner) if owner.is_me() => allies += 1,
                    Some(_) => foes += 1,
                    None => {}
                }
            }
            let balance =
                tuning.enemy_agent * (allies as f32 + 1.0) / (foes as f32 + 1.0);
            self.raise(cell, Channel::Combat, balance.min(tuning.food));
        }

        for (cell, _) in grid.enemy_hills() {
            let seed = if visibility.is_visible(cell) {
                tuning.enemy_hill_visible
            } else {
                tuning.enemy_hill_remembered
            };
            self.raise(cell, Channel::Combat, seed);
        }

        let mut stations = (my_ants.len() as u32 / tuning.ants_per_defender) as usize;
        for hill in grid.my_hills() {
            self.raise(hill, Channel::Allied, tuning.own_hill);

            let threatened = offsets.iter().any(|(dr, dc)| {
                let nearby = grid.wrap(hill.row as i32 + dr, hill.col as i32 + dc);
                grid.ant_at(nearby).is_some_and(|owner| !owner.is_me())
            });
            if threatened {
                for (nb, _) in grid.neighbors(hill) {
                    if grid.passable(nb) {
                        self.raise(nb, Channel::Combat, tuning.defense_bonus);
                    }
                }
            }

            // Rally stations on the hill's diagonal corners.
            for (dr, dc) in [(-1, -1), (-1, 1), (1, -1), (1, 1)] {
                if stations == 0 {
                    break;
                }
                let corner = grid.wrap(hill.row as i32 + dr, hill.col as i32 + dc);
                if grid.tile(corner).is_known() && grid.passable(corner) {
                    self.raise(corner, Channel::Food, tuning.food);
                    stations -= 1;
                }
            }
        }
    }
}
