//! Turn orchestration: from observation feed to order set.
//!
//! [`Engine`] wires the board, visibility, potential field, pathfinder,
//! and order scheduler into a single [`Engine::play_turn`] call that
//! always returns before the wall-clock deadline. Errors are reserved for
//! structural misuse of the API; running out of time mid-turn is a normal
//! outcome reported through [`TurnMetrics`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod config;
mod context;
mod engine;
mod error;
mod metrics;
mod timer;

pub use config::{ConfigError, GameSettings, Strategy};
pub use context::SimulationContext;
pub use engine::Engine;
pub use error::TurnError;
pub use metrics::{FieldSnapshot, TurnMetrics, TurnOutcome};
pub use timer::TurnTimer;
