use grid_util::point::Point;

use crate::grid::NavGrid;
use crate::node::travel_cost;
use crate::solver::GridSolver;

/// Heuristic-guided search. The heuristic is the straight-line travel cost
/// to the goal under the same elevation weighting as edge costs; both the
/// horizontal and vertical terms telescope along any real path, so with a
/// factor of 1.0 the estimate never overestimates and found paths are
/// optimal. A factor above 1.0 trades optimality for fewer expansions.
#[derive(Clone, Debug)]
pub struct AstarSolver {
    pub heuristic_factor: f32,
}

impl AstarSolver {
    pub fn new() -> AstarSolver {
        AstarSolver {
            heuristic_factor: 1.0,
        }
    }
}

impl Default for AstarSolver {
    fn default() -> AstarSolver {
        AstarSolver::new()
    }
}

impl GridSolver for AstarSolver {
    fn heuristic(&self, grid: &NavGrid, from: Point, goal: Point) -> f32 {
        travel_cost(grid.node(from), grid.node(goal)) * self.heuristic_factor
    }
}
