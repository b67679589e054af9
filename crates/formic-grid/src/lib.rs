//! Toroidal board, terrain state, and visibility tracking.
//!
//! [`Grid`] owns the per-cell terrain classification and entity occupancy
//! refreshed from the observation feed each turn. [`Visibility`] applies a
//! precomputed Euclidean vision disk ([`VisionOffsets`]) around every
//! friendly agent, with wraparound, and flips newly observed cells from
//! unknown to land.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod error;
mod grid;
mod tile;
mod vision;

pub use error::GridError;
pub use grid::Grid;
pub use tile::{Observation, Tile};
pub use vision::{VisionOffsets, Visibility};
