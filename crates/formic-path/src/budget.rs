//! Per-turn search allowance.

/// Caps on pathfinding work.
///
/// `max_expansions` bounds a single search (sized to the vision disk, so a
/// path search never wanders far beyond what the agent can see).
/// `max_searches` bounds the whole turn; [`SearchBudget::begin_turn`]
/// resets the counter. Exhausted budgets make searches return `None`
/// without touching the board.
#[derive(Clone, Copy, Debug)]
pub struct SearchBudget {
    /// Maximum node expansions for one search.
    pub max_expansions: u32,
    /// Maximum searches per turn.
    pub max_searches: u32,
    searches_used: u32,
}

impl SearchBudget {
    /// Default per-turn search cap.
    pub const DEFAULT_MAX_SEARCHES: u32 = 6;

    /// Budget with the given per-search expansion cap and the default
    /// per-turn search cap.
    pub fn new(max_expansions: u32) -> Self {
        Self {
            max_expansions,
            max_searches: Self::DEFAULT_MAX_SEARCHES,
            searches_used: 0,
        }
    }

    /// Budget with explicit caps.
    pub fn with_searches(max_expansions: u32, max_searches: u32) -> Self {
        Self {
            max_expansions,
            max_searches,
            searches_used: 0,
        }
    }

    /// Reset the per-turn search counter.
    pub fn begin_turn(&mut self) {
        self.searches_used = 0;
    }

    /// Searches consumed since the last [`SearchBudget::begin_turn`].
    pub fn searches_used(&self) -> u32 {
        self.searches_used
    }

    /// Whether the per-turn search cap has been reached.
    pub fn exhausted(&self) -> bool {
        self.searches_used >= self.max_searches
    }

    /// Consume one search slot. Returns false, consuming nothing, when the
    /// cap is already reached.
    pub fn try_consume(&mut self) -> bool {
        if self.exhausted() {
            return false;
        }
        self.searches_used += 1;
        true
    }
}
