//! Scheduler tunables.

/// Knobs shared by both assignment strategies.
#[derive(Clone, Copy, Debug)]
pub struct SchedulerConfig {
    /// Full wall-clock budget for a turn, in milliseconds.
    pub turntime_ms: i64,
    /// Fraction of the turn budget that must remain when assignment stops.
    pub reserve_fraction: f64,
    /// Combat gradients are ignored below this population; small colonies
    /// forage instead of fighting.
    pub min_combat_agents: usize,
    /// When combat reasoning is active, refuse cells whose allied-minus-
    /// enemy balance is below the negation of this margin.
    pub danger_margin: f32,
    /// Square window half-width for patrol target selection.
    pub patrol_radius: u16,
    /// Squared vision radius; bounds siege range and explore candidates.
    pub viewradius2: u32,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            turntime_ms: 500,
            reserve_fraction: 0.08,
            min_combat_agents: 20,
            danger_margin: 300.0,
            patrol_radius: 10,
            viewradius2: 55,
        }
    }
}

impl SchedulerConfig {
    /// Milliseconds that must stay on the clock when assignment stops.
    pub fn reserve_ms(&self) -> i64 {
        (self.reserve_fraction * self.turntime_ms as f64) as i64
    }
}
