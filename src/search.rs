//! The expansion loop shared by both search algorithms.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use grid_util::point::Point;
use log::{debug, trace};

use crate::context::SearchContext;
use crate::frontier::Frontier;
use crate::grid::NavGrid;
use crate::solver::GridSolver;
use crate::NavError;

/// Terminal state of a search run. `Unreachable` and `Cancelled` are normal
/// results, not errors: the engine reconstructs a degenerate path and moves
/// on to the next cycle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SearchOutcome {
    /// The goal was reached; `cost` is its cumulative path cost.
    Found { cost: f32 },
    /// The frontier was exhausted (or every cell visited) without reaching
    /// the goal through walkable cells.
    Unreachable,
    /// The cancellation token fired before the search finished.
    Cancelled,
}

/// Externally owned cancellation signal, checked once per frontier pop to
/// bound worst-case latency on large grids.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> CancelToken {
        CancelToken::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Runs a priority-guided search from `start` to `goal`, leaving distances
/// and predecessor links in `ctx` for reconstruction.
///
/// The solver only contributes the heuristic term of the expansion priority:
/// a zero heuristic gives uniform-cost (Dijkstra) order, an admissible one
/// gives A*. Edge costs come from the grid's elevation-weighted cost model
/// and are non-negative, so the usual optimality guarantees hold.
///
/// Walkability is enforced on successors only. The start is expanded and the
/// goal is tested without a walkability check, so an obstructed start still
/// searches outward while an obstructed goal is simply never relaxed and
/// reports `Unreachable`.
///
/// Out-of-bounds coordinates are a caller contract violation and fail fast.
pub fn shortest_path<S: GridSolver>(
    grid: &NavGrid,
    solver: &S,
    ctx: &mut SearchContext,
    start: Point,
    goal: Point,
    cancel: &CancelToken,
) -> Result<SearchOutcome, NavError> {
    grid.check_bounds(start)?;
    grid.check_bounds(goal)?;

    ctx.reset();
    ctx.relax(start, 0.0, None);
    let mut frontier = Frontier::new();
    frontier.push(solver.heuristic(grid, start, goal), start);

    while let Some((priority, current)) = frontier.pop_min() {
        if cancel.is_cancelled() {
            debug!("search cancelled at ({}, {})", current.x, current.y);
            return Ok(SearchOutcome::Cancelled);
        }
        if current == goal {
            break;
        }
        // Stale duplicate from a superseded relaxation.
        if ctx.is_visited(current) {
            continue;
        }
        trace!("expanding ({}, {}) at priority {}", current.x, current.y, priority);

        let current_dist = ctx.distance(current);
        for (neighbor, edge_cost) in grid.successors(current) {
            let new_dist = current_dist + edge_cost;
            if new_dist < ctx.distance(neighbor) {
                ctx.relax(neighbor, new_dist, Some(current));
                frontier.push(new_dist + solver.heuristic(grid, neighbor, goal), neighbor);
            }
        }
        ctx.visit(current);
        // Safety bound: every cell has been expanded.
        if ctx.visited_len() == grid.len() {
            break;
        }
    }

    let cost = ctx.distance(goal);
    if cost.is_finite() {
        Ok(SearchOutcome::Found { cost })
    } else {
        debug!(
            "goal ({}, {}) unreachable from ({}, {})",
            goal.x, goal.y, start.x, start.y
        );
        Ok(SearchOutcome::Unreachable)
    }
}
