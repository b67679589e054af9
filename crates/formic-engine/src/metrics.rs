//! Per-turn results and diagnostics.

use formic_core::{Cell, Channel, TurnId};
use formic_orders::{Order, SchedulerReport};

/// Everything a turn produced.
#[derive(Clone, Debug)]
pub struct TurnOutcome {
    /// At most one move per agent, collision-free.
    pub orders: Vec<Order>,
    /// What it cost to produce them.
    pub metrics: TurnMetrics,
}

/// Counters describing one turn's work.
#[derive(Clone, Copy, Debug)]
pub struct TurnMetrics {
    /// Which turn this was.
    pub turn: TurnId,
    /// Friendly agents alive at ingestion.
    pub agents: usize,
    /// Diffusion passes completed within budget.
    pub diffusion_passes: u32,
    /// Orders issued.
    pub orders_issued: u32,
    /// Whether order assignment stopped early on the time reserve.
    pub truncated: bool,
    /// Wall-clock cost of the whole turn.
    pub elapsed_ms: u64,
    /// Per-motive assignment counters.
    pub report: SchedulerReport,
}

/// Owned copy of the field's channel planes, for inspection off the hot
/// path.
#[derive(Clone, Debug)]
pub struct FieldSnapshot {
    rows: u16,
    cols: u16,
    values: Vec<f32>,
}

impl FieldSnapshot {
    pub(crate) fn new(rows: u16, cols: u16, values: Vec<f32>) -> Self {
        Self { rows, cols, values }
    }

    /// Board rows.
    pub fn rows(&self) -> u16 {
        self.rows
    }

    /// Board columns.
    pub fn cols(&self) -> u16 {
        self.cols
    }

    /// The captured value at a cell in a channel.
    pub fn value(&self, cell: Cell, channel: Channel) -> f32 {
        let cells = self.rows as usize * self.cols as usize;
        let idx = cell.row as usize * self.cols as usize + cell.col as usize;
        self.values[channel.index() * cells + idx]
    }
}
