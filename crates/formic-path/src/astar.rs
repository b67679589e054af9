//! A* search with dense per-search state.

use crate::budget::SearchBudget;
use formic_core::Cell;
use formic_grid::Grid;
use rand::seq::SliceRandom;
use rand::Rng;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Shortest path from `start` to `goal`, inclusive of both.
///
/// A* over the 4-connected torus with unit step cost and the toroidal
/// Manhattan heuristic (admissible and consistent there, so the first pop
/// of a node is final). Ties on `f` break FIFO via an insertion sequence
/// number, which keeps paths straight instead of staircasing.
///
/// A water goal is rejected up front, before a search slot is spent.
/// Returns `None` when the per-turn search cap is already spent, or when
/// the goal is unreachable or not found within the expansion cap; every
/// search that actually runs consumes one slot.
pub fn find_path(
    grid: &Grid,
    start: Cell,
    goal: Cell,
    budget: &mut SearchBudget,
) -> Option<Vec<Cell>> {
    if !grid.passable(goal) {
        return None;
    }
    if !budget.try_consume() {
        return None;
    }

    let cells = grid.cell_count();
    let start_idx = grid.index(start);
    let goal_idx = grid.index(goal);

    let mut cost = vec![u32::MAX; cells];
    let mut parent = vec![usize::MAX; cells];
    let mut closed = vec![false; cells];
    let mut open = BinaryHeap::new();
    let mut seq = 0u32;
    let mut expansions = 0u32;

    cost[start_idx] = 0;
    open.push(Reverse((grid.distance(start, goal), seq, start_idx)));

    while let Some(Reverse((_, _, idx))) = open.pop() {
        if closed[idx] {
            continue;
        }
        closed[idx] = true;

        if idx == goal_idx {
            return Some(reconstruct(grid, &parent, start_idx, goal_idx));
        }

        expansions += 1;
        if expansions > budget.max_expansions {
            return None;
        }

        let here = grid.cell_at(idx);
        let step_cost = cost[idx] + 1;
        for (nb, _) in grid.neighbors(here) {
            if !grid.passable(nb) {
                continue;
            }
            let nb_idx = grid.index(nb);
            if step_cost < cost[nb_idx] {
                cost[nb_idx] = step_cost;
                parent[nb_idx] = idx;
                seq += 1;
                open.push(Reverse((step_cost + grid.distance(nb, goal), seq, nb_idx)));
            }
        }
    }
    None
}

/// A path to the first reachable candidate, tried in shuffled order.
///
/// Each attempt consumes a search slot; a spent budget short-circuits the
/// remaining candidates.
pub fn find_first_path<R: Rng>(
    grid: &Grid,
    origin: Cell,
    candidates: &[Cell],
    budget: &mut SearchBudget,
    rng: &mut R,
) -> Option<(Cell, Vec<Cell>)> {
    let mut order: Vec<Cell> = candidates.to_vec();
    order.shuffle(rng);
    for goal in order {
        if budget.exhausted() {
            return None;
        }
        if let Some(path) = find_path(grid, origin, goal, budget) {
            return Some((goal, path));
        }
    }
    None
}

fn reconstruct(grid: &Grid, parent: &[usize], start_idx: usize, goal_idx: usize) -> Vec<Cell> {
    let mut path = vec![grid.cell_at(goal_idx)];
    let mut idx = goal_idx;
    while idx != start_idx {
        idx = parent[idx];
        path.push(grid.cell_at(idx));
    }
    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use formic_grid::Observation;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn c(row: u16, col: u16) -> Cell {
        Cell::new(row, col)
    }

    fn wall(grid: &mut Grid, cells: &[(u16, u16)]) {
        for &(r, col) in cells {
            grid.apply(c(r, col), Observation::Water).unwrap();
        }
    }

    #[test]
    fn open_grid_path_is_optimal() {
        let grid = Grid::new(10, 10).unwrap();
        let mut budget = SearchBudget::new(200);
        let path = find_path(&grid, c(1, 1), c(4, 5), &mut budget).unwrap();
        assert_eq!(path.len() as u32, grid.distance(c(1, 1), c(4, 5)) + 1);
        assert_eq!(path[0], c(1, 1));
        assert_eq!(*path.last().unwrap(), c(4, 5));
        // Consecutive cells are unit steps.
        for pair in path.windows(2) {
            assert_eq!(grid.distance(pair[0], pair[1]), 1);
        }
    }

    #[test]
    fn path_wraps_across_the_seam() {
        let grid = Grid::new(10, 10).unwrap();
        let mut budget = SearchBudget::new(200);
        let path = find_path(&grid, c(0, 1), c(0, 9), &mut budget).unwrap();
        // Two steps west through the wrap, not eight east.
        assert_eq!(path.len(), 3);
    }

    #[test]
    fn start_equals_goal() {
        let grid = Grid::new(5, 5).unwrap();
        let mut budget = SearchBudget::new(50);
        assert_eq!(
            find_path(&grid, c(2, 2), c(2, 2), &mut budget),
            Some(vec![c(2, 2)])
        );
    }

    #[test]
    fn walled_goal_is_unreachable() {
        let mut grid = Grid::new(8, 8).unwrap();
        wall(
            &mut grid,
            &[(2, 3), (2, 4), (2, 5), (3, 3), (3, 5), (4, 3), (4, 4), (4, 5)],
        );
        let mut budget = SearchBudget::new(500);
        assert_eq!(find_path(&grid, c(0, 0), c(3, 4), &mut budget), None);
        // Water itself is never a valid goal.
        assert_eq!(find_path(&grid, c(0, 0), c(2, 3), &mut budget), None);
    }

    #[test]
    fn detour_routes_around_water() {
        let mut grid = Grid::new(9, 9).unwrap();
        // Vertical wall with a gap at row 7.
        wall(
            &mut grid,
            &[(0, 4), (1, 4), (2, 4), (3, 4), (4, 4), (5, 4), (6, 4)],
        );
        let mut budget = SearchBudget::new(500);
        let path = find_path(&grid, c(3, 2), c(3, 6), &mut budget).unwrap();
        assert!(path.len() > 5, "must detour, got {} cells", path.len());
        assert!(path.iter().all(|&cell| grid.passable(cell)));
    }

    #[test]
    fn expansion_cap_fails_soft() {
        let grid = Grid::new(20, 20).unwrap();
        let mut budget = SearchBudget::new(3);
        assert_eq!(find_path(&grid, c(0, 0), c(10, 10), &mut budget), None);
    }

    #[test]
    fn search_cap_short_circuits() {
        let grid = Grid::new(10, 10).unwrap();
        let mut budget = SearchBudget::with_searches(200, 2);
        assert!(find_path(&grid, c(0, 0), c(3, 3), &mut budget).is_some());
        assert!(find_path(&grid, c(0, 0), c(4, 4), &mut budget).is_some());
        assert_eq!(find_path(&grid, c(0, 0), c(5, 5), &mut budget), None);
        assert_eq!(budget.searches_used(), 2);

        budget.begin_turn();
        assert!(find_path(&grid, c(0, 0), c(3, 3), &mut budget).is_some());
    }

    #[test]
    fn water_goal_spends_no_search_slot() {
        let mut grid = Grid::new(8, 8).unwrap();
        wall(&mut grid, &[(2, 2)]);
        let mut budget = SearchBudget::with_searches(200, 1);
        assert_eq!(find_path(&grid, c(0, 0), c(2, 2), &mut budget), None);
        assert_eq!(budget.searches_used(), 0);
        // The single slot is still available for a real search.
        assert!(find_path(&grid, c(0, 0), c(4, 4), &mut budget).is_some());
    }

    #[test]
    fn first_path_picks_a_reachable_candidate() {
        let mut grid = Grid::new(8, 8).unwrap();
        // Box in one candidate.
        wall(&mut grid, &[(5, 5), (5, 7), (4, 6), (6, 6)]);
        let mut budget = SearchBudget::new(500);
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let candidates = [c(5, 6), c(1, 1)];
        let (goal, path) =
            find_first_path(&grid, c(0, 0), &candidates, &mut budget, &mut rng).unwrap();
        assert_eq!(goal, c(1, 1));
        assert_eq!(*path.last().unwrap(), c(1, 1));
    }

    #[test]
    fn first_path_respects_spent_budget() {
        let grid = Grid::new(8, 8).unwrap();
        let mut budget = SearchBudget::with_searches(500, 0);
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        assert_eq!(
            find_first_path(&grid, c(0, 0), &[c(3, 3)], &mut budget, &mut rng),
            None
        );
    }

    proptest! {
        /// On an open board every path is exactly distance + 1 cells.
        #[test]
        fn open_paths_match_the_metric(
            sr in 0u16..12, sc in 0u16..12,
            gr in 0u16..12, gc in 0u16..12,
        ) {
            let grid = Grid::new(12, 12).unwrap();
            let mut budget = SearchBudget::new(500);
            let path = find_path(&grid, c(sr, sc), c(gr, gc), &mut budget).unwrap();
            prop_assert_eq!(path.len() as u32, grid.distance(c(sr, sc), c(gr, gc)) + 1);
        }
    }
}
