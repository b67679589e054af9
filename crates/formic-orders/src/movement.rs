//! Move validation shared by both strategies.

use crate::claims::ClaimSet;
use crate::order::Order;
use formic_core::{Cell, Direction};
use formic_grid::Grid;

/// Accept the first direction whose destination is passable, unclaimed,
/// and allowed by `permitted`. Commits the claim on acceptance.
///
/// Returns `None` when every candidate is unusable; the agent then stands
/// still with its origin claim intact.
pub(crate) fn try_move(
    grid: &Grid,
    claims: &mut ClaimSet,
    origin: Cell,
    ranked: &[Direction],
    mut permitted: impl FnMut(Cell) -> bool,
) -> Option<Order> {
    for &direction in ranked {
        let destination = grid.destination(origin, direction);
        if !grid.passable(destination) || claims.is_claimed(destination) {
            continue;
        }
        if !permitted(destination) {
            continue;
        }
        claims.commit_move(origin, destination);
        return Some(Order {
            origin,
            direction,
            destination,
        });
    }
    None
}
