//! The navigation grid: built once from terrain samples, re-classified for
//! obstacles every cycle, and queried for successors during search.

use core::fmt;

use grid_util::point::Point;
use log::debug;
use smallvec::SmallVec;

use crate::node::{travel_cost, GridNode, NodeState, Point3};
use crate::terrain::{ObstacleSource, TerrainSource};
use crate::{NavError, HEIGHT_CLEARANCE, LONG_JUMP_SPAN, N_SMALLVEC_SIZE, OBSTACLE_PROBE_RADIUS};

/// A fixed-shape 2D collection of [GridNode]. Cell coordinates are
/// [Point]s where `x` indexes the terrain's width axis and `y` indexes its
/// depth (world `z`) axis. The shape never changes after construction; only
/// node states mutate.
#[derive(Clone, Debug)]
pub struct NavGrid {
    size_x: usize,
    size_z: usize,
    nodes: Vec<GridNode>,
    /// Enables the experimental long-jump successors: in addition to its
    /// Moore neighborhood, a cell far enough from every border also connects
    /// to the 8 cells [LONG_JUMP_SPAN] steps away, at a small cost markup.
    /// Off by default.
    pub long_jumps: bool,
}

impl NavGrid {
    /// Builds the grid by sampling `terrain` every `step` world units.
    /// The grid has `floor(width / step) x floor(depth / step)` cells; each
    /// node sits [HEIGHT_CLEARANCE] units above the sampled surface.
    pub fn from_terrain<T: TerrainSource>(terrain: &T, step: u32) -> Result<NavGrid, NavError> {
        if step == 0 {
            return Err(NavError::InvalidStep(step));
        }
        let (width, depth) = terrain.bounds();
        let g = step as f32;
        let size_x = (width / g).floor().max(0.0) as usize;
        let size_z = (depth / g).floor().max(0.0) as usize;
        if size_x == 0 || size_z == 0 {
            return Err(NavError::DegenerateGrid { size_x, size_z });
        }
        let mut nodes = Vec::with_capacity(size_x * size_z);
        for x in 0..size_x {
            for z in 0..size_z {
                let wx = (x as u32 * step) as f32;
                let wz = (z as u32 * step) as f32;
                let wy = terrain.sample_height(wx, wz) + HEIGHT_CLEARANCE;
                nodes.push(GridNode::new(Point3::new(wx, wy, wz)));
            }
        }
        debug!("built {}x{} navigation grid (step {})", size_x, size_z, step);
        Ok(NavGrid {
            size_x,
            size_z,
            nodes,
            long_jumps: false,
        })
    }

    pub fn size_x(&self) -> usize {
        self.size_x
    }

    pub fn size_z(&self) -> usize {
        self.size_z
    }

    /// Total number of cells; the search loop's exhaustion bound.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn in_bounds(&self, cell: Point) -> bool {
        cell.x >= 0
            && cell.y >= 0
            && (cell.x as usize) < self.size_x
            && (cell.y as usize) < self.size_z
    }

    /// Fail-fast contract check for caller-supplied start/goal coordinates.
    pub fn check_bounds(&self, cell: Point) -> Result<(), NavError> {
        if self.in_bounds(cell) {
            Ok(())
        } else {
            Err(NavError::OutOfBounds(cell.x, cell.y))
        }
    }

    fn ix(&self, cell: Point) -> usize {
        debug_assert!(self.in_bounds(cell));
        cell.x as usize * self.size_z + cell.y as usize
    }

    pub fn node(&self, cell: Point) -> &GridNode {
        &self.nodes[self.ix(cell)]
    }

    fn node_mut(&mut self, cell: Point) -> &mut GridNode {
        let ix = self.ix(cell);
        &mut self.nodes[ix]
    }

    pub fn state(&self, cell: Point) -> NodeState {
        self.node(cell).state()
    }

    pub fn walkable(&self, cell: Point) -> bool {
        self.node(cell).walkable()
    }

    /// Re-evaluates every cell against the obstacle source. Runs once per
    /// cycle, before any search, and clears the previous cycle's path
    /// highlights as a side effect of classification.
    pub fn classify_obstacles<O: ObstacleSource>(&mut self, obstacles: &O) {
        for node in &mut self.nodes {
            let blocked = obstacles.is_obstructed(node.world_position, OBSTACLE_PROBE_RADIUS);
            node.classify(blocked);
        }
    }

    /// Walkable successors of a cell with their edge costs: the
    /// bounds-clipped Moore neighborhood, plus long-jump targets when
    /// enabled. The cell itself is never filtered for walkability; only
    /// successors are.
    pub fn successors(&self, cell: Point) -> SmallVec<[(Point, f32); N_SMALLVEC_SIZE]> {
        let mut succ: SmallVec<[(Point, f32); N_SMALLVEC_SIZE]> = cell
            .moore_neighborhood()
            .into_iter()
            .filter(|&n| self.in_bounds(n) && self.walkable(n))
            .map(|n| (n, travel_cost(self.node(cell), self.node(n))))
            .collect();
        if self.long_jumps {
            self.push_long_jumps(cell, &mut succ);
        }
        succ
    }

    /// Long jumps connect to cells [LONG_JUMP_SPAN] steps out in each of the
    /// 8 directions, but only when the target keeps a full span of margin to
    /// every border. Cost is the direct travel cost marked up by
    /// (span + 1) / span.
    fn push_long_jumps(&self, cell: Point, succ: &mut SmallVec<[(Point, f32); N_SMALLVEC_SIZE]>) {
        let span = LONG_JUMP_SPAN;
        let markup = (span + 1) as f32 / span as f32;
        for dx in -1..=1 {
            for dz in -1..=1 {
                if dx == 0 && dz == 0 {
                    continue;
                }
                let target = Point::new(cell.x + dx * span, cell.y + dz * span);
                if target.x >= span
                    && target.y >= span
                    && target.x < self.size_x as i32 - span
                    && target.y < self.size_z as i32 - span
                    && self.walkable(target)
                {
                    let cost = travel_cost(self.node(cell), self.node(target)) * markup;
                    succ.push((target, cost));
                }
            }
        }
    }

    /// Highlights a reconstructed path for the rendering collaborator.
    /// Obstructed cells (possible only at path endpoints) keep their state.
    pub fn mark_path(&mut self, path: &[Point], state: NodeState) {
        for &cell in path {
            self.node_mut(cell).highlight(state);
        }
    }
}

impl fmt::Display for NavGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for z in (0..self.size_z as i32).rev() {
            for x in 0..self.size_x as i32 {
                let c = match self.state(Point::new(x, z)) {
                    NodeState::Walkable => '.',
                    NodeState::AstarPath => 'A',
                    NodeState::DijkstraPath => 'D',
                    NodeState::Obstructed => '#',
                };
                write!(f, "{}", c)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terrain::SampledTerrain;

    fn flat(width: f32, depth: f32) -> SampledTerrain<fn(f32, f32) -> f32> {
        SampledTerrain {
            width,
            depth,
            height: |_, _| 0.0,
        }
    }

    #[test]
    fn builds_grid_from_bounds_and_step() {
        let grid = NavGrid::from_terrain(&flat(100.0, 60.0), 20).unwrap();
        assert_eq!(grid.size_x(), 5);
        assert_eq!(grid.size_z(), 3);
        let node = grid.node(Point::new(2, 1));
        assert_eq!(node.world_position.x, 40.0);
        assert_eq!(node.world_position.z, 20.0);
        assert_eq!(node.world_position.y, HEIGHT_CLEARANCE);
        assert_eq!(node.state(), NodeState::Walkable);
    }

    #[test]
    fn degenerate_terrain_is_an_error() {
        let err = NavGrid::from_terrain(&flat(10.0, 60.0), 20).unwrap_err();
        assert_eq!(
            err,
            NavError::DegenerateGrid {
                size_x: 0,
                size_z: 3
            }
        );
        let err = NavGrid::from_terrain(&flat(100.0, 60.0), 0).unwrap_err();
        assert_eq!(err, NavError::InvalidStep(0));
    }

    #[test]
    fn classification_flips_both_ways() {
        let mut grid = NavGrid::from_terrain(&flat(40.0, 40.0), 10).unwrap();
        let blocked_at_origin =
            |p: crate::node::Point3, _r: f32| p.x == 0.0 && p.z == 0.0;
        grid.classify_obstacles(&blocked_at_origin);
        assert!(!grid.walkable(Point::new(0, 0)));
        assert!(grid.walkable(Point::new(1, 0)));
        grid.classify_obstacles(&crate::terrain::NoObstacles);
        assert!(grid.walkable(Point::new(0, 0)));
    }

    #[test]
    fn successors_clip_bounds_and_skip_obstructed() {
        let mut grid = NavGrid::from_terrain(&flat(40.0, 40.0), 10).unwrap();
        // Corner cell has 3 in-bounds neighbors.
        assert_eq!(grid.successors(Point::new(0, 0)).len(), 3);
        let blocked = |p: crate::node::Point3, _r: f32| p.x == 10.0 && p.z == 10.0;
        grid.classify_obstacles(&blocked);
        // The diagonal neighbor (1, 1) is now obstructed.
        assert_eq!(grid.successors(Point::new(0, 0)).len(), 2);
    }

    #[test]
    fn long_jumps_only_with_margin() {
        let mut grid = NavGrid::from_terrain(&flat(400.0, 400.0), 10).unwrap();
        grid.long_jumps = true;
        let span = LONG_JUMP_SPAN;
        // 40x40 grid: from (20, 20) every jump target keeps span margin.
        let succ = grid.successors(Point::new(20, 20));
        assert_eq!(succ.len(), 8 + 8);
        let jump = succ
            .iter()
            .find(|(p, _)| *p == Point::new(20 + span, 20))
            .unwrap();
        // 9 cells of 10 units, marked up by 10/9.
        assert!((jump.1 - 100.0).abs() < 1e-3);
        // From (10, 10) only the three targets away from the near borders
        // keep the required margin.
        assert_eq!(grid.successors(Point::new(10, 10)).len(), 8 + 3);
        // The margin constrains the target, not the origin: the corner
        // still jumps diagonally to (span, span).
        let corner = grid.successors(Point::new(0, 0));
        assert_eq!(corner.len(), 3 + 1);
        assert!(corner.iter().any(|(p, _)| *p == Point::new(span, span)));
    }
}
