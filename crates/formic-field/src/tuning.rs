//! Source magnitudes for the potential field.

/// Seed values written into [`FixedSources`](crate::FixedSources).
///
/// Magnitudes only matter relative to each other: agents compare neighbour
/// values within one channel, and channels are arbitrated by priority, not
/// by value. The defaults keep food and exploration on comparable scales so
/// a feeding run is not starved the moment a frontier opens nearby.
#[derive(Clone, Copy, Debug)]
pub struct SourceTuning {
    /// Seed on each food cell (FOOD channel).
    pub food: f32,
    /// Seed on each frontier cell (EXPLORE channel).
    pub explore: f32,
    /// Base seed on each enemy agent cell (COMBAT channel), before the
    /// local force-balance weighting.
    pub enemy_agent: f32,
    /// Seed on a currently visible enemy hill (COMBAT channel).
    pub enemy_hill_visible: f32,
    /// Seed on a remembered, currently invisible enemy hill (COMBAT).
    pub enemy_hill_remembered: f32,
    /// Seed on cells adjacent to a threatened friendly hill (COMBAT).
    pub defense_bonus: f32,
    /// Seed on each agent cell in its side's presence channel.
    pub agent: f32,
    /// Seed on each friendly hill (ALLIED channel).
    pub own_hill: f32,
    /// One defensive station is seeded per this many friendly agents.
    pub ants_per_defender: u32,
}

impl Default for SourceTuning {
    fn default() -> Self {
        Self {
            food: 1000.0,
            explore: 250.0,
            enemy_agent: 200.0,
            enemy_hill_visible: 600.0,
            enemy_hill_remembered: 300.0,
            defense_bonus: 500.0,
            agent: 1000.0,
            own_hill: 3000.0,
            ants_per_defender: 10,
        }
    }
}
