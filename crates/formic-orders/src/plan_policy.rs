//! Standing-order assignment.

use crate::claims::ClaimSet;
use crate::config::SchedulerConfig;
use crate::movement::try_move;
use crate::order::Order;
use crate::report::SchedulerReport;
use formic_core::{Cell, Direction, TurnClock};
use formic_grid::Grid;
use formic_path::{find_first_path, find_path, SearchBudget};
use indexmap::IndexMap;
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, warn};

/// How many of the closest frontier cells an explore acquisition tries.
const EXPLORE_CANDIDATES: usize = 8;

/// What a standing plan is for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlanKind {
    /// Walk a path to a food cell.
    Food,
    /// Walk a path to a frontier cell.
    Explore,
    /// Drift toward a nearby known cell, no path.
    Patrol,
    /// Walk a path to an enemy hill.
    Siege,
    /// Acquisition failed; idle until next turn.
    Nothing,
}

/// A multi-turn commitment for one agent.
///
/// Keyed by the agent's current cell and re-keyed to the destination on
/// every successful move, so the plan follows the agent without any agent
/// identity. `remaining` is decremented once per turn; a plan that
/// outlives 1.3× its initial path length is assumed stale and dropped.
#[derive(Clone, Debug)]
pub struct Plan {
    /// Why the agent is moving.
    pub kind: PlanKind,
    /// Where the agent is headed.
    pub target: Cell,
    /// Precomputed route, start and target inclusive. `None` for greedy
    /// plans (patrol).
    pub path: Option<Vec<Cell>>,
    /// Turns left before the plan expires.
    pub remaining: i32,
}

impl Plan {
    fn with_path(kind: PlanKind, target: Cell, path: Vec<Cell>) -> Self {
        let remaining = (path.len() as f32 * 1.3) as i32;
        Self {
            kind,
            target,
            path: Some(path),
            remaining,
        }
    }
}

/// Stateful strategy: agents commit to targets for multiple turns.
///
/// Cheaper per turn than gradient-following once paths are cached, and
/// immune to the oscillation a noisy field can cause, at the price of
/// staleness: every cached plan is revalidated against the current board
/// before reuse and dropped on any mismatch.
#[derive(Clone, Debug)]
pub struct PlanPolicy {
    config: SchedulerConfig,
    plans: IndexMap<Cell, Plan>,
}

impl PlanPolicy {
    /// Strategy with the given tunables and no cached plans.
    pub fn new(config: SchedulerConfig) -> Self {
        Self {
            config,
            plans: IndexMap::new(),
        }
    }

    /// Number of currently cached plans.
    pub fn active_plans(&self) -> usize {
        self.plans.len()
    }

    /// Assign one order per agent until done or out of time.
    pub fn assign_orders<R: Rng>(
        &mut self,
        grid: &Grid,
        budget: &mut SearchBudget,
        claims: &mut ClaimSet,
        clock: &dyn TurnClock,
        rng: &mut R,
    ) -> (Vec<Order>, SchedulerReport) {
        let agents = grid.my_ants();
        let reserve_ms = self.config.reserve_ms();
        let mut orders = Vec::with_capacity(agents.len());
        let mut report = SchedulerReport::default();

        let mut cached = std::mem::take(&mut self.plans);
        let mut taken_food: Vec<Cell> = cached
            .values()
            .filter(|plan| plan.kind == PlanKind::Food)
            .map(|plan| plan.target)
            .collect();

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

            let plan = match cached.swap_remove(&agent) {
                Some(plan) => match self.revalidate(grid, agent, plan) {
                    Some(plan) => plan,
                    None => self.acquire(grid, agent, &mut taken_food, budget, rng),
                },
                None => self.acquire(grid, agent, &mut taken_food, budget, rng),
            };

            if plan.kind == PlanKind::Nothing {
                report.stuck += 1;
                self.plans.insert(agent, plan);
                continue;
            }

            let ranked = self.next_step(grid, agent, &plan, rng);
            match try_move(grid, claims, agent, &ranked, |_| true) {
                Some(order) => {
                    match plan.kind {
                        PlanKind::Food => report.food += 1,
                        PlanKind::Explore => report.explore += 1,
                        PlanKind::Patrol => report.patrol += 1,
                        PlanKind::Siege => report.siege += 1,
                        PlanKind::Nothing => {}
                    }
                    report.issued += 1;
                    self.plans.insert(order.destination, plan);
                    orders.push(order);
                }
                None => {
                    report.stuck += 1;
                    debug!(agent = %agent, "plan step blocked, standing still");
                    self.plans.insert(agent, plan);
                }
            }
        }

        // Plans for agents the truncation skipped stay cached in place.
        for (cell, plan) in cached {
            self.plans.insert(cell, plan);
        }
        (orders, report)
    }

    /// Age a cached plan and drop it on any staleness.
    fn revalidate(&self, grid: &Grid, agent: Cell, mut plan: Plan) -> Option<Plan> {
        plan.remaining -= 1;
        if plan.remaining < 0 || agent == plan.target {
            return None;
        }
        if let Some(path) = &plan.path {
            if !path.contains(&agent) || path.iter().any(|&cell| !grid.passable(cell)) {
                return None;
            }
        }
        match plan.kind {
            PlanKind::Food if !grid.food().contains(&plan.target) => None,
            PlanKind::Siege
                if !grid
                    .enemy_hills()
                    .iter()
                    .any(|&(cell, _)| cell == plan.target) =>
            {
                None
            }
            _ => Some(plan),
        }
    }

    /// Acquisition cascade: siege, food, explore, patrol, idle. Siege and
    /// food targets must lie within the agent's vision radius.
    fn acquire<R: Rng>(
        &self,
        grid: &Grid,
        agent: Cell,
        taken_food: &mut Vec<Cell>,
        budget: &mut SearchBudget,
        rng: &mut R,
    ) -> Plan {
        let hills: Vec<Cell> = grid
            .enemy_hills()
            .iter()
            .map(|&(cell, _)| cell)
            .filter(|&cell| self.within_vision(grid, agent, cell))
            .collect();
        if let Some((target, path)) = find_first_path(grid, agent, &hills, budget, rng) {
            return Plan::with_path(PlanKind::Siege, target, path);
        }

        let mut food: Vec<Cell> = grid
            .food()
            .iter()
            .copied()
            .filter(|&cell| {
                !taken_food.contains(&cell) && self.within_vision(grid, agent, cell)
            })
            .collect();
        food.sort_by_key(|&cell| grid.distance(agent, cell));
        if let Some(&target) = food.first() {
            if let Some(path) = find_path(grid, agent, target, budget) {
                taken_food.push(target);
                return Plan::with_path(PlanKind::Food, target, path);
            }
        }

        let mut frontier = grid.frontier();
        frontier.sort_by_key(|&cell| grid.distance(agent, cell));
        frontier.truncate(EXPLORE_CANDIDATES);
        if let Some((target, path)) = find_first_path(grid, agent, &frontier, budget, rng) {
            return Plan::with_path(PlanKind::Explore, target, path);
        }

        let nearby = grid.nearby_cells(agent, self.config.patrol_radius);
        if !nearby.is_empty() {
            let target = nearby[rng.random_range(0..nearby.len())];
            let remaining = (grid.distance(agent, target) as f32 * 1.3) as i32;
            return Plan {
                kind: PlanKind::Patrol,
                target,
                path: None,
                remaining,
            };
        }

        Plan {
            kind: PlanKind::Nothing,
            target: agent,
            path: None,
            remaining: 0,
        }
    }

    /// Ranked candidate directions for the plan's next step.
    fn next_step<R: Rng>(
        &self,
        grid: &Grid,
        agent: Cell,
        plan: &Plan,
        rng: &mut R,
    ) -> Vec<Direction> {
        let toward = match &plan.path {
            Some(path) => {
                // Revalidation guarantees the agent is on the path and not
                // at its end.
                let pos = path.iter().position(|&cell| cell == agent);
                match pos.and_then(|p| path.get(p + 1)) {
                    Some(&next) => next,
                    None => plan.target,
                }
            }
            None => plan.target,
        };
        let mut ranked: Vec<Direction> = grid.directions_to(agent, toward).into_vec();
        ranked.shuffle(rng);
        ranked
    }

    /// Toroidal squared-Euclidean range check against the vision radius.
    fn within_vision(&self, grid: &Grid, a: Cell, b: Cell) -> bool {
        let dr = (a.row as i32 - b.row as i32).unsigned_abs();
        let dc = (a.col as i32 - b.col as i32).unsigned_abs();
        let dr = dr.min(grid.rows() as u32 - dr);
        let dc = dc.min(grid.cols() as u32 - dc);
        dr * dr + dc * dc <= self.config.viewradius2
    }
}
