//! Multi-channel potential field over the toroidal board.
//!
//! Each turn the engine rebuilds [`FixedSources`] from the board state,
//! then runs Jacobi averaging passes over the [`PotentialField`] until the
//! wall-clock budget runs out. Agents later descend the resulting gradients
//! by comparing the four neighbour values of their cell, so the field never
//! needs to converge; more passes just push influence further.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod field;
mod sources;
mod tuning;

pub use field::PotentialField;
pub use sources::FixedSources;
pub use tuning::SourceTuning;
