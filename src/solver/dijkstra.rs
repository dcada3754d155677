use grid_util::point::Point;

use crate::grid::NavGrid;
use crate::solver::GridSolver;

/// Uniform-cost search: a zero heuristic makes the expansion priority the
/// accumulated path cost alone.
#[derive(Clone, Debug, Default)]
pub struct DijkstraSolver;

impl GridSolver for DijkstraSolver {
    fn heuristic(&self, _: &NavGrid, _: Point, _: Point) -> f32 {
        0.0
    }
}
