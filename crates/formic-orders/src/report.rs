//! Per-turn assignment counters.

/// What the scheduler did this turn, by motive.
///
/// Returned alongside the order list so callers can log or assert on
/// behavior without re-deriving it from the orders.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SchedulerReport {
    /// Moves chasing the food channel or a food plan.
    pub food: u32,
    /// Moves chasing the explore channel or an explore plan.
    pub explore: u32,
    /// Moves chasing the combat channel.
    pub combat: u32,
    /// Moves following a patrol plan.
    pub patrol: u32,
    /// Moves following a siege plan.
    pub siege: u32,
    /// Moves with no gradient to follow, taken in a random direction.
    pub random: u32,
    /// Agents left standing because every candidate cell was unusable.
    pub stuck: u32,
    /// Orders issued in total.
    pub issued: u32,
    /// Whether assignment stopped early to protect the time reserve.
    pub truncated: bool,
}
