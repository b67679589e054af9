//! Wall-clock turn deadline.

use formic_core::TurnClock;
use std::time::Instant;

/// Monotonic countdown started when a turn's feed arrives.
///
/// Every read hits the clock; nothing is cached, so a slow diffusion pass
/// is visible to the very next poll. Goes negative once the budget is
/// blown, which downstream reserve checks treat like any other low value.
#[derive(Clone, Debug)]
pub struct TurnTimer {
    started: Instant,
    budget_ms: i64,
}

impl TurnTimer {
    /// Start the countdown with the given budget.
    pub fn start(budget_ms: i64) -> Self {
        Self {
            started: Instant::now(),
            budget_ms,
        }
    }
}

impl TurnClock for TurnTimer {
    fn time_remaining_ms(&self) -> i64 {
        self.budget_ms - self.started.elapsed().as_millis() as i64
    }
}
