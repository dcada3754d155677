//! Search algorithm variants. Both run through the shared expansion loop in
//! [crate::search]; a solver only chooses the heuristic term of the
//! expansion priority.

use grid_util::point::Point;

use crate::context::SearchContext;
use crate::grid::NavGrid;
use crate::search::{shortest_path, CancelToken, SearchOutcome};
use crate::NavError;

pub mod astar;
pub mod dijkstra;

pub trait GridSolver {
    /// Estimated remaining cost from `from` to `goal`. Must never
    /// overestimate the true cost under the grid's elevation-weighted cost
    /// model, or the search loses its optimality guarantee.
    fn heuristic(&self, grid: &NavGrid, from: Point, goal: Point) -> f32;

    /// Runs the search and reconstructs the predecessor chain. The chain is
    /// degenerate (just the goal) unless the outcome is `Found`.
    fn find_path(
        &self,
        grid: &NavGrid,
        ctx: &mut SearchContext,
        start: Point,
        goal: Point,
        cancel: &CancelToken,
    ) -> Result<(SearchOutcome, Vec<Point>), NavError>
    where
        Self: Sized,
    {
        let outcome = shortest_path(grid, self, ctx, start, goal, cancel)?;
        let path = ctx.reconstruct_path(goal);
        Ok((outcome, path))
    }
}
