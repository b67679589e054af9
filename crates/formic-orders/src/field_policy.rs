//! Gradient-following assignment.

use crate::claims::ClaimSet;
use crate::config::SchedulerConfig;
use crate::movement::try_move;
use crate::order::Order;
use crate::report::SchedulerReport;
use formic_core::{Cell, Channel, Direction, TurnClock};
use formic_field::PotentialField;
use formic_grid::Grid;
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, warn};

/// Stateless strategy: each agent greedily climbs one channel's gradient.
///
/// Channel priority is Combat > Food > Explore, each considered only when
/// some neighbour carries a nonzero value; Combat additionally requires
/// the colony to have grown past `min_combat_agents`. An agent with no
/// gradient at all walks in a uniformly random direction, which is what
/// keeps early-game agents from clumping on a flat field.
#[derive(Clone, Debug)]
pub struct FieldPolicy {
    config: SchedulerConfig,
}

impl FieldPolicy {
    /// Strategy with the given tunables.
    pub fn new(config: SchedulerConfig) -> Self {
        Self { config }
    }

    /// Assign one order per agent until done or out of time.
    pub fn assign_orders<R: Rng>(
        &self,
        grid: &Grid,
        field: &PotentialField,
        claims: &mut ClaimSet,
        clock: &dyn TurnClock,
        rng: &mut R,
    ) -> (Vec<Order>, SchedulerReport) {
        let agents = grid.my_ants();
        let combat_ready = agents.len() >= self.config.min_combat_agents;
        let reserve_ms = self.config.reserve_ms();
        let mut orders = Vec::with_capacity(agents.len());
        let mut report = SchedulerReport::default();

        for (done, &agent) in agents.iter().enumerate() {
            if clock.time_remaining_ms() < reserve_ms {
                report.truncated = true;
                warn!(
                    assigned = done,
                    total = agents.len(),
                    "order assignment truncated at time reserve"
                );
                break;
            }

            let mut ranked: Vec<(Direction, f32)> = Vec::with_capacity(4);
            let channel = self.pick_channel(grid, field, agent, combat_ready);
            for (cell, direction) in grid.neighbors(agent) {
                let value = match channel {
                    Some(channel) => field.value(cell, channel),
                    None => 0.0,
                };
                ranked.push((direction, value));
            }
            // Shuffle first so the stable sort breaks value ties randomly.
            ranked.shuffle(rng);
            ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
            let directions: Vec<Direction> = ranked.iter().map(|&(d, _)| d).collect();

            let order = try_move(grid, claims, agent, &directions, |cell| {
                !combat_ready || field.danger(cell) >= -self.config.danger_margin
            });
            match order {
                Some(order) => {
                    match channel {
                        Some(Channel::Combat) => report.combat += 1,
                        Some(Channel::Food) => report.food += 1,
                        Some(Channel::Explore) => report.explore += 1,
                        _ => report.random += 1,
                    }
                    report.issued += 1;
                    orders.push(order);
                }
                None => {
                    report.stuck += 1;
                    debug!(agent = %agent, "no usable move, standing still");
                }
            }
        }
        (orders, report)
    }

    /// Highest-priority channel with any nonzero neighbour value.
    fn pick_channel(
        &self,
        grid: &Grid,
        field: &PotentialField,
        agent: Cell,
        combat_ready: bool,
    ) -> Option<Channel> {
        let candidates = [Channel::Combat, Channel::Food, Channel::Explore];
        for channel in candidates {
            if channel == Channel::Combat && !combat_ready {
                continue;
            }
            let pull = grid
                .neighbors(agent)
                .iter()
                .any(|&(cell, _)| field.value(cell, channel) > 0.0);
            if pull {
                return Some(channel);
            }
        }
        None
    }
}
