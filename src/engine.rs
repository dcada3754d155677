//! Cycle orchestration: one cycle re-classifies obstacles, runs both
//! solvers over the same start/goal pair and marks their paths on the grid.
//! The cadence is the host's business; [FixedInterval] is the default
//! tick-count policy, polled by the host's own timer or frame loop.

use grid_util::point::Point;
use log::info;

use crate::context::SearchContext;
use crate::grid::NavGrid;
use crate::node::NodeState;
use crate::search::{CancelToken, SearchOutcome};
use crate::solver::astar::AstarSolver;
use crate::solver::dijkstra::DijkstraSolver;
use crate::solver::GridSolver;
use crate::terrain::ObstacleSource;
use crate::NavError;

/// Result of one solver within a cycle. The path is degenerate (just the
/// goal cell) unless the outcome is `Found`.
#[derive(Clone, Debug)]
pub struct PathRun {
    pub outcome: SearchOutcome,
    pub path: Vec<Point>,
}

/// Everything one cycle produced, in run order.
#[derive(Clone, Debug)]
pub struct CycleReport {
    pub astar: PathRun,
    pub dijkstra: PathRun,
}

/// Owns the grid and search scratch state and drives the per-cycle
/// classify-search-mark sequence for a fixed start/goal pair.
#[derive(Debug)]
pub struct NavEngine {
    grid: NavGrid,
    astar: AstarSolver,
    dijkstra: DijkstraSolver,
    context: SearchContext,
    start: Point,
    goal: Point,
}

impl NavEngine {
    pub fn new(grid: NavGrid, start: Point, goal: Point) -> Result<NavEngine, NavError> {
        grid.check_bounds(start)?;
        grid.check_bounds(goal)?;
        Ok(NavEngine {
            grid,
            astar: AstarSolver::new(),
            dijkstra: DijkstraSolver,
            context: SearchContext::new(),
            start,
            goal,
        })
    }

    /// Engine over the grid's corner-to-corner pair, the usual demo setup.
    pub fn corner_to_corner(grid: NavGrid) -> NavEngine {
        let start = Point::new(0, 0);
        let goal = Point::new(grid.size_x() as i32 - 1, grid.size_z() as i32 - 1);
        // Both corners exist on any successfully constructed grid.
        NavEngine::new(grid, start, goal).unwrap()
    }

    pub fn grid(&self) -> &NavGrid {
        &self.grid
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn goal(&self) -> Point {
        self.goal
    }

    /// Runs one full cycle: classify every cell, then A*, then Dijkstra,
    /// marking each reconstructed chain on the grid. An unreachable goal is
    /// a normal report, and the next cycle starts from clean search state
    /// either way.
    pub fn run_cycle<O: ObstacleSource>(
        &mut self,
        obstacles: &O,
        cancel: &CancelToken,
    ) -> Result<CycleReport, NavError> {
        self.grid.classify_obstacles(obstacles);

        let astar = self.astar.clone();
        let dijkstra = self.dijkstra.clone();
        let astar_run = self.run_marked(&astar, NodeState::AstarPath, "A*", cancel)?;
        let dijkstra_run =
            self.run_marked(&dijkstra, NodeState::DijkstraPath, "Dijkstra", cancel)?;

        Ok(CycleReport {
            astar: astar_run,
            dijkstra: dijkstra_run,
        })
    }

    fn run_marked<S: GridSolver>(
        &mut self,
        solver: &S,
        state: NodeState,
        label: &str,
        cancel: &CancelToken,
    ) -> Result<PathRun, NavError> {
        let (outcome, path) =
            solver.find_path(&self.grid, &mut self.context, self.start, self.goal, cancel)?;
        match outcome {
            SearchOutcome::Found { cost } => info!("{}: {}", label, cost),
            SearchOutcome::Unreachable => info!("{}: goal unreachable", label),
            SearchOutcome::Cancelled => info!("{}: cancelled", label),
        }
        self.grid.mark_path(&path, state);
        Ok(PathRun { outcome, path })
    }
}

/// Fixed-cadence trigger policy. The host reports its tick counter; the
/// interval answers whether a cycle is due and schedules the next one.
#[derive(Clone, Copy, Debug)]
pub struct FixedInterval {
    period: u64,
    next_at: u64,
}

impl FixedInterval {
    pub fn new(period: u64) -> FixedInterval {
        FixedInterval {
            period: period.max(1),
            next_at: 0,
        }
    }

    pub fn due(&mut self, now: u64) -> bool {
        if now < self.next_at {
            return false;
        }
        self.next_at = now + self.period;
        true
    }
}

impl Default for FixedInterval {
    /// The conventional cadence: one cycle every 100 ticks.
    fn default() -> FixedInterval {
        FixedInterval::new(100)
    }
}
