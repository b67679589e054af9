//! Per-match simulation state.

use crate::config::GameSettings;
use formic_core::TurnId;
use formic_grid::VisionOffsets;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// State that outlives a turn but belongs to no single subsystem.
///
/// Owns the match RNG so every random choice flows from the configured
/// seed; callers thread `&mut context.rng` rather than reaching for a
/// global. The vision disk is precomputed here once per match.
#[derive(Clone, Debug)]
pub struct SimulationContext {
    /// Precomputed vision disk.
    pub offsets: VisionOffsets,
    /// Match RNG, seeded from [`GameSettings::seed`].
    pub rng: ChaCha8Rng,
    /// Turns ingested so far.
    pub turn: TurnId,
}

impl SimulationContext {
    /// Build the per-match state from validated settings.
    pub fn new(settings: &GameSettings) -> Self {
        Self {
            offsets: VisionOffsets::new(settings.viewradius2),
            rng: ChaCha8Rng::seed_from_u64(settings.seed),
            turn: TurnId::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::RngCore;

    #[test]
    fn same_seed_same_stream() {
        let settings = GameSettings::default();
        let mut a = SimulationContext::new(&settings);
        let mut b = SimulationContext::new(&settings);
        assert_eq!(a.rng.next_u64(), b.rng.next_u64());
        assert_eq!(a.offsets.len(), b.offsets.len());
    }
}
