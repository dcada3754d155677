//! Builds a navigation grid over synthetic rolling terrain, scatters a few
//! spherical obstacles and runs classify-and-search cycles on a fixed tick
//! interval, printing the marked grid after each cycle.
//!
//! Run with `RUST_LOG=info` to see the per-algorithm path costs.

use terrain_pathfinding::engine::{FixedInterval, NavEngine};
use terrain_pathfinding::grid::NavGrid;
use terrain_pathfinding::node::Point3;
use terrain_pathfinding::search::CancelToken;
use terrain_pathfinding::terrain::SampledTerrain;

fn main() {
    env_logger::init();

    let terrain = SampledTerrain {
        width: 300.0,
        depth: 300.0,
        height: |x: f32, z: f32| (x * 0.04).sin() * 5.0 + (z * 0.03).cos() * 4.0,
    };
    let grid = NavGrid::from_terrain(&terrain, 10).expect("terrain is large enough");
    let mut engine = NavEngine::corner_to_corner(grid);

    // Three static sphere obstacles in world coordinates.
    let spheres = [
        Point3::new(100.0, 0.0, 100.0),
        Point3::new(150.0, 0.0, 60.0),
        Point3::new(60.0, 0.0, 200.0),
    ];
    let obstacles = move |p: Point3, radius: f32| {
        spheres.iter().any(|s| {
            let dx = p.x - s.x;
            let dz = p.z - s.z;
            (dx * dx + dz * dz).sqrt() < 35.0 + radius
        })
    };

    let mut interval = FixedInterval::default();
    let cancel = CancelToken::new();
    for tick in 0..300u64 {
        if !interval.due(tick) {
            continue;
        }
        let report = engine
            .run_cycle(&obstacles, &cancel)
            .expect("corner cells are always in bounds");
        println!("tick {tick}:");
        println!("{}", engine.grid());
        println!(
            "  A* path: {} cells, Dijkstra path: {} cells",
            report.astar.path.len(),
            report.dijkstra.path.len()
        );
    }
}
