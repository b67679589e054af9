//! Formic: the spatial reasoning core of a swarm game bot.
//!
//! This is the top-level facade crate re-exporting the public API of all
//! Formic sub-crates. For most users, adding `formic` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use formic::prelude::*;
//!
//! let mut engine = Engine::new(GameSettings {
//!     rows: 20,
//!     cols: 20,
//!     ..GameSettings::default()
//! })
//! .unwrap();
//!
//! // One friendly agent, one food item.
//! let feed = vec![
//!     (Cell::new(3, 3), Observation::Ant(PlayerId::ME)),
//!     (Cell::new(3, 8), Observation::Food),
//! ];
//! let outcome = engine.play_turn(&feed).unwrap();
//! for order in &outcome.orders {
//!     println!("o {} {} {}", order.origin.row, order.origin.col,
//!              order.direction.as_char());
//! }
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the
//! prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `formic-core` | `Cell`, `Direction`, `Channel`, IDs, `TurnClock` |
//! | [`grid`] | `formic-grid` | Toroidal board, terrain, visibility |
//! | [`field`] | `formic-field` | Potential field, fixed sources, tuning |
//! | [`path`] | `formic-path` | Budgeted A* searches |
//! | [`orders`] | `formic-orders` | Claim set, strategies, scheduler report |
//! | [`engine`] | `formic-engine` | `Engine`, settings, timer, metrics |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types and traits (`formic-core`).
pub use formic_core as types;

/// Toroidal board, terrain state, and visibility (`formic-grid`).
pub use formic_grid as grid;

/// Multi-channel potential field (`formic-field`).
pub use formic_field as field;

/// Budgeted A* pathfinding (`formic-path`).
pub use formic_path as path;

/// Order assignment strategies (`formic-orders`).
pub use formic_orders as orders;

/// Turn orchestration (`formic-engine`).
pub use formic_engine as engine;

/// Common imports for typical Formic usage.
///
/// ```rust
/// use formic::prelude::*;
/// ```
pub mod prelude {
    pub use formic_core::{Cell, Channel, Direction, PlayerId, TurnClock, TurnId};
    pub use formic_engine::{
        ConfigError, Engine, GameSettings, Strategy, TurnError, TurnMetrics, TurnOutcome,
        TurnTimer,
    };
    pub use formic_field::{FixedSources, PotentialField, SourceTuning};
    pub use formic_grid::{Grid, GridError, Observation, Tile, Visibility, VisionOffsets};
    pub use formic_orders::{Order, SchedulerConfig, SchedulerReport};
    pub use formic_path::SearchBudget;
}
