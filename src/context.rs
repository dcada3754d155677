//! Per-search scratch state.
//!
//! Distances, predecessors and the visited set belong to a single search
//! run, not to the grid: the context is wiped at the start of every run, so
//! an A* pass and a Dijkstra pass over the same grid can never leak state
//! into each other.

use fxhash::{FxBuildHasher, FxHashSet};
use grid_util::point::Point;
use indexmap::IndexMap;

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

#[derive(Clone, Copy, Debug)]
struct CellRecord {
    distance: f32,
    predecessor: Option<Point>,
}

/// Search bookkeeping keyed by cell coordinate. Cells without a record are
/// unexplored: distance +infinity, no predecessor.
#[derive(Debug, Default)]
pub struct SearchContext {
    records: FxIndexMap<Point, CellRecord>,
    visited: FxHashSet<Point>,
}

impl SearchContext {
    pub fn new() -> SearchContext {
        SearchContext::default()
    }

    /// Wipes all state from the previous run, keeping allocations.
    pub fn reset(&mut self) {
        self.records.clear();
        self.visited.clear();
    }

    /// Cumulative path cost from the run's start, +infinity if unexplored.
    /// This is the authoritative "was a path found" signal for the goal.
    pub fn distance(&self, cell: Point) -> f32 {
        self.records
            .get(&cell)
            .map_or(f32::INFINITY, |r| r.distance)
    }

    pub fn predecessor(&self, cell: Point) -> Option<Point> {
        self.records.get(&cell).and_then(|r| r.predecessor)
    }

    /// Records an improved path to `cell`. A plain write: the caller's
    /// accumulated cost is authoritative, nothing is recomputed here.
    pub fn relax(&mut self, cell: Point, distance: f32, predecessor: Option<Point>) {
        self.records.insert(
            cell,
            CellRecord {
                distance,
                predecessor,
            },
        );
    }

    pub fn visit(&mut self, cell: Point) {
        self.visited.insert(cell);
    }

    pub fn is_visited(&self, cell: Point) -> bool {
        self.visited.contains(&cell)
    }

    pub fn visited_len(&self) -> usize {
        self.visited.len()
    }

    /// Walks predecessor links from `goal` back to the unlinked start and
    /// returns the chain in start-to-goal order. An unreached goal yields a
    /// degenerate single-cell chain; callers must consult
    /// [distance](Self::distance) rather than chain length.
    pub fn reconstruct_path(&self, goal: Point) -> Vec<Point> {
        let mut cursor = Some(goal);
        let mut path: Vec<Point> = std::iter::from_fn(|| {
            cursor.take().map(|cell| {
                cursor = self.predecessor(cell);
                cell
            })
        })
        .collect();
        path.reverse();
        path
    }
}
