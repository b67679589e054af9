//! The turn-deadline oracle.

/// Polling-based view of the time left in the current turn.
///
/// Implementations measure true elapsed time since turn start against the
/// turn budget, so callers must not cache a returned value across work;
/// poll again after every unit of work instead. The value may go negative
/// once the budget is overshot.
///
/// All budget enforcement in this workspace happens *before* starting a
/// unit of work (a diffusion pass, an agent's order); nothing preempts work
/// already in flight.
pub trait TurnClock {
    /// Milliseconds remaining in the current turn budget.
    fn time_remaining_ms(&self) -> i64;
}
