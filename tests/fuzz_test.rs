//! Fuzzes the two solvers against each other and against a flood-fill
//! reachability oracle on many random obstacle layouts: whenever the goal is
//! reachable both must find it, and their path costs must agree (the A*
//! heuristic is admissible).

use std::collections::{HashSet, VecDeque};

use grid_util::point::Point;
use rand::prelude::*;
use terrain_pathfinding::context::SearchContext;
use terrain_pathfinding::grid::NavGrid;
use terrain_pathfinding::search::{CancelToken, SearchOutcome};
use terrain_pathfinding::solver::{astar::AstarSolver, dijkstra::DijkstraSolver, GridSolver};
use terrain_pathfinding::terrain::SampledTerrain;

const STEP: u32 = 10;

fn random_grid(n: usize, rng: &mut StdRng, hilly: bool) -> NavGrid {
    let terrain = SampledTerrain {
        width: (n as u32 * STEP) as f32,
        depth: (n as u32 * STEP) as f32,
        height: move |x: f32, z: f32| {
            if hilly {
                (x * 0.13).sin() * 6.0 + (z * 0.09).cos() * 4.0
            } else {
                0.0
            }
        },
    };
    let mut grid = NavGrid::from_terrain(&terrain, STEP).unwrap();
    let start = Point::new(0, 0);
    let end = Point::new(n as i32 - 1, n as i32 - 1);
    let mut blocked: HashSet<(i32, i32)> = HashSet::new();
    for x in 0..n as i32 {
        for z in 0..n as i32 {
            let cell = Point::new(x, z);
            if cell != start && cell != end && rng.gen_bool(0.4) {
                blocked.insert((x, z));
            }
        }
    }
    let source = move |p: terrain_pathfinding::node::Point3, _r: f32| {
        blocked.contains(&((p.x / STEP as f32) as i32, (p.z / STEP as f32) as i32))
    };
    grid.classify_obstacles(&source);
    grid
}

/// Flood fill over the grid's own successor relation.
fn reachable(grid: &NavGrid, start: Point, goal: Point) -> bool {
    let mut seen = HashSet::new();
    let mut queue = VecDeque::new();
    seen.insert(start);
    queue.push_back(start);
    while let Some(cell) = queue.pop_front() {
        if cell == goal {
            return true;
        }
        for (next, _) in grid.successors(cell) {
            if seen.insert(next) {
                queue.push_back(next);
            }
        }
    }
    false
}

fn visualize_grid(grid: &NavGrid, start: &Point, end: &Point) {
    for z in (0..grid.size_z() as i32).rev() {
        for x in 0..grid.size_x() as i32 {
            let p = Point::new(x, z);
            if *start == p {
                print!("S");
            } else if *end == p {
                print!("G");
            } else if !grid.walkable(p) {
                print!("#");
            } else {
                print!(".");
            }
        }
        println!();
    }
}

#[test]
fn fuzz() {
    const N: usize = 10;
    const N_GRIDS: usize = 1000;
    let mut rng = StdRng::seed_from_u64(0);
    let astar = AstarSolver::new();
    let mut ctx = SearchContext::new();
    let cancel = CancelToken::new();

    let start = Point::new(0, 0);
    let end = Point::new(N as i32 - 1, N as i32 - 1);
    for _ in 0..N_GRIDS {
        let grid = random_grid(N, &mut rng, false);
        let expected = reachable(&grid, start, end);
        let (outcome, _) = astar.find_path(&grid, &mut ctx, start, end, &cancel).unwrap();
        let found = matches!(outcome, SearchOutcome::Found { .. });
        if found != expected {
            visualize_grid(&grid, &start, &end);
        }
        assert_eq!(found, expected);
    }
}

#[test]
fn fuzz_distance() {
    const N: usize = 8;
    const N_GRIDS: usize = 1000;
    let mut rng = StdRng::seed_from_u64(0);
    let astar = AstarSolver::new();
    let dijkstra = DijkstraSolver;
    let mut ctx = SearchContext::new();
    let cancel = CancelToken::new();

    let start = Point::new(0, 0);
    let end = Point::new(N as i32 - 1, N as i32 - 1);
    for hilly in [false, true] {
        for _ in 0..N_GRIDS {
            let grid = random_grid(N, &mut rng, hilly);
            let (astar_outcome, _) = astar.find_path(&grid, &mut ctx, start, end, &cancel).unwrap();
            let (dijkstra_outcome, _) = dijkstra
                .find_path(&grid, &mut ctx, start, end, &cancel)
                .unwrap();
            match (astar_outcome, dijkstra_outcome) {
                (
                    SearchOutcome::Found { cost: astar_cost },
                    SearchOutcome::Found { cost: dijkstra_cost },
                ) => {
                    if dijkstra_cost >= 0.01 {
                        let delta = (astar_cost - dijkstra_cost).abs() / dijkstra_cost;
                        if delta >= 0.01 {
                            println!(
                                "Astar distance: {astar_cost}; Dijkstra distance: {dijkstra_cost}"
                            );
                            visualize_grid(&grid, &start, &end);
                        }
                        assert!(delta < 0.01);
                    }
                }
                (a, d) => assert_eq!(a, d),
            }
        }
    }
}
