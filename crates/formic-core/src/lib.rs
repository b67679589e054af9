//! Core types and traits for the Formic swarm bot.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! fundamental vocabulary used throughout the workspace: board coordinates,
//! movement directions, potential-field channels, player identity, the turn
//! counter, and the turn-deadline oracle trait.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod cell;
mod channel;
mod clock;
mod id;

pub use cell::{Cell, Direction};
pub use channel::Channel;
pub use clock::TurnClock;
pub use id::{PlayerId, TurnId};
