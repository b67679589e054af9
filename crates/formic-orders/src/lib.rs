//! Order assignment: turning field gradients and standing plans into a
//! collision-free set of agent moves.
//!
//! Two interchangeable strategies share the same movement validation:
//! [`FieldPolicy`] follows potential-field gradients cell by cell, while
//! [`PlanPolicy`] commits agents to multi-turn standing plans backed by A*
//! paths. Both route every accepted move through a [`ClaimSet`] so no two
//! agents ever target the same destination, and both stop issuing orders
//! when the turn's time reserve is reached.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod claims;
mod config;
mod field_policy;
mod movement;
mod order;
mod plan_policy;
mod report;

pub use claims::ClaimSet;
pub use config::SchedulerConfig;
pub use field_policy::FieldPolicy;
pub use order::Order;
pub use plan_policy::{Plan, PlanKind, PlanPolicy};
pub use report::SchedulerReport;
