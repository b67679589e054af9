//! The per-turn pipeline.

use crate::config::{ConfigError, GameSettings, Strategy};
use crate::context::SimulationContext;
use crate::error::TurnError;
use crate::metrics::{FieldSnapshot, TurnMetrics, TurnOutcome};
use crate::timer::TurnTimer;
use formic_core::{Cell, TurnClock};
use formic_field::{FixedSources, PotentialField, SourceTuning};
use formic_grid::{Grid, Observation, Visibility};
use formic_orders::{ClaimSet, FieldPolicy, PlanPolicy, SchedulerConfig};
use formic_path::SearchBudget;
use std::time::Instant;
use tracing::debug;

/// Fraction of the turn budget the diffusion loop must leave untouched
/// for order assignment and output.
const DIFFUSION_RESERVE_FRACTION: f64 = 0.35;

/// The bot's spatial core, one instance per match.
///
/// Feed each turn's observations to [`Engine::play_turn`] and relay the
/// returned orders. All state the bot carries between turns lives here:
/// discovered terrain, remembered hills, cached plans, the match RNG.
pub struct Engine {
    settings: GameSettings,
    context: SimulationContext,
    grid: Grid,
    visibility: Visibility,
    sources: FixedSources,
    tuning: SourceTuning,
    field: PotentialField,
    budget: SearchBudget,
    claims: ClaimSet,
    field_policy: FieldPolicy,
    plan_policy: PlanPolicy,
}

impl Engine {
    /// Build an engine for a match. Fails only on invalid settings.
    pub fn new(settings: GameSettings) -> Result<Self, ConfigError> {
        settings.validate()?;
        let grid = Grid::new(settings.rows, settings.cols).map_err(|_| {
            ConfigError::ZeroDimension {
                rows: settings.rows,
                cols: settings.cols,
            }
        })?;
        let scheduler = SchedulerConfig {
            turntime_ms: settings.turntime_ms,
            reserve_fraction: settings.reserve_fraction,
            min_combat_agents: settings.min_combat_agents,
            danger_margin: 300.0,
            patrol_radius: 10,
            viewradius2: settings.viewradius2,
        };
        let tuning = SourceTuning {
            ants_per_defender: settings.ants_per_defender,
            ..SourceTuning::default()
        };
        Ok(Self {
            context: SimulationContext::new(&settings),
            grid,
            visibility: Visibility::new(settings.rows, settings.cols),
            sources: FixedSources::new(settings.rows, settings.cols),
            tuning,
            field: PotentialField::new(settings.rows, settings.cols),
            budget: SearchBudget::new(settings.viewradius2),
            claims: ClaimSet::new(settings.rows, settings.cols),
            field_policy: FieldPolicy::new(scheduler),
            plan_policy: PlanPolicy::new(scheduler),
            settings,
        })
    }

    /// The validated match settings.
    pub fn settings(&self) -> &GameSettings {
        &self.settings
    }

    /// Read-only view of the discovered board.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Owned copy of the current field planes.
    pub fn field_snapshot(&self) -> FieldSnapshot {
        FieldSnapshot::new(self.settings.rows, self.settings.cols, self.field.snapshot())
    }

    /// Run one turn against a fresh wall-clock timer.
    pub fn play_turn(&mut self, feed: &[(Cell, Observation)]) -> Result<TurnOutcome, TurnError> {
        let timer = TurnTimer::start(self.settings.turntime_ms);
        self.play_turn_with_clock(feed, &timer)
    }

    /// Run one turn against a caller-supplied clock. Test seam; match code
    /// uses [`Engine::play_turn`].
    pub fn play_turn_with_clock(
        &mut self,
        feed: &[(Cell, Observation)],
        clock: &dyn TurnClock,
    ) -> Result<TurnOutcome, TurnError> {
        let started = Instant::now();
        self.context.turn = self.context.turn.next();

        self.grid.begin_turn();
        for &(cell, observation) in feed {
            self.grid.apply(cell, observation)?;
        }
        self.visibility.recompute(&mut self.grid, &self.context.offsets);
        self.grid.forget_razed_hills(&self.visibility);

        self.sources
            .rebuild(&self.grid, &self.visibility, &self.context.offsets, &self.tuning);
        self.field.clear();
        self.field.reseed(&self.sources);
        let diffusion_reserve_ms =
            (self.settings.turntime_ms as f64 * DIFFUSION_RESERVE_FRACTION) as i64;
        let diffusion_passes =
            self.field
                .run_until_budget(&self.grid, &self.sources, clock, diffusion_reserve_ms);

        self.claims.begin_turn(&self.grid);
        self.budget.begin_turn();
        let (orders, report) = match self.settings.strategy {
            Strategy::FieldFollowing => self.field_policy.assign_orders(
                &self.grid,
                &self.field,
                &mut self.claims,
                clock,
                &mut self.context.rng,
            ),
            Strategy::PlanFollowing => self.plan_policy.assign_orders(
                &self.grid,
                &mut self.budget,
                &mut self.claims,
                clock,
                &mut self.context.rng,
            ),
        };

        let metrics = TurnMetrics {
            turn: self.context.turn,
            agents: self.grid.my_ants().len(),
            diffusion_passes,
            orders_issued: report.issued,
            truncated: report.truncated,
            elapsed_ms: started.elapsed().as_millis() as u64,
            report,
        };
        debug!(
            turn = %metrics.turn,
            agents = metrics.agents,
            passes = metrics.diffusion_passes,
            orders = metrics.orders_issued,
            elapsed_ms = metrics.elapsed_ms,
            "turn complete"
        );
        Ok(TurnOutcome { orders, metrics })
    }
}
