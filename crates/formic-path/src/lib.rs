//! Budgeted A* over the toroidal board.
//!
//! Path searches are a scarce per-turn resource: each one is capped in
//! node expansions, and the whole turn is capped in searches. Both caps
//! live in [`SearchBudget`]; once either is hit, searches fail soft with
//! `None` and the caller falls back to field-following movement.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod astar;
mod budget;

pub use astar::{find_first_path, find_path};
pub use budget::SearchBudget;
