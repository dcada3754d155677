//! # terrain_pathfinding
//!
//! A grid-based pathfinding system over sampled terrain. A navigation grid is
//! built once from a continuous height field, obstacles are re-classified at
//! a host-chosen cadence, and each cycle runs both an
//! [A*](https://en.wikipedia.org/wiki/A*_search_algorithm) and a
//! [Dijkstra](https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm) search
//! over the same elevation-weighted cost model, marking the resulting paths
//! on the grid for rendering.
//!
//! Both searches share one expansion loop ([`search::shortest_path`]) and
//! differ only in the heuristic their [`solver::GridSolver`] supplies.

pub mod context;
pub mod engine;
pub mod frontier;
pub mod grid;
pub mod node;
pub mod search;
pub mod solver;
pub mod terrain;

use thiserror::Error;

pub use grid_util::point::Point;

/// Vertical offset applied to every sampled height so nodes sit above the
/// terrain surface rather than inside it.
pub const HEIGHT_CLEARANCE: f32 = 25.0;

/// Weight applied to elevation change in the edge cost and heuristic.
/// Vertical traversal is this many times more expensive than horizontal.
pub const ELEVATION_WEIGHT: f32 = 40.0;

/// Radius handed to the obstacle source when classifying a cell.
pub const OBSTACLE_PROBE_RADIUS: f32 = 1.0;

/// Cell span of the experimental long-jump successors (off by default).
pub const LONG_JUMP_SPAN: i32 = 9;

/// Inline capacity for neighbor lists; a Moore neighborhood has 8 entries.
pub(crate) const N_SMALLVEC_SIZE: usize = 8;

/// Construction and query contract violations. Unreachable goals are not
/// errors; they are reported as [`search::SearchOutcome::Unreachable`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NavError {
    /// Terrain bounds and step size resolved to a grid with no cells.
    #[error("terrain of {size_x}x{size_z} cells is degenerate")]
    DegenerateGrid { size_x: usize, size_z: usize },
    /// The grid step must be a positive number of world units.
    #[error("grid step must be positive, got {0}")]
    InvalidStep(u32),
    /// A start or goal coordinate lies outside the grid.
    #[error("cell ({0}, {1}) is outside the grid")]
    OutOfBounds(i32, i32),
}
