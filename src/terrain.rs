//! Collaborator seams: terrain sampling and obstacle detection are provided
//! by the host, the grid only consumes them through these traits.

use crate::node::Point3;

/// Continuous terrain the navigation grid is sampled from.
pub trait TerrainSource {
    /// Horizontal extent of the terrain as `(width, depth)` in world units.
    fn bounds(&self) -> (f32, f32);
    /// Terrain height at a horizontal world coordinate.
    fn sample_height(&self, x: f32, z: f32) -> f32;
}

/// Spatial occupancy test, typically backed by a physics overlap query.
/// May be arbitrarily expensive; it is called once per cell per cycle.
pub trait ObstacleSource {
    fn is_obstructed(&self, position: Point3, radius: f32) -> bool;
}

/// A terrain described by fixed bounds and a height function. Handy for
/// hosts that already have a procedural height field, and for tests.
#[derive(Clone, Debug)]
pub struct SampledTerrain<F> {
    pub width: f32,
    pub depth: f32,
    pub height: F,
}

impl<F> TerrainSource for SampledTerrain<F>
where
    F: Fn(f32, f32) -> f32,
{
    fn bounds(&self) -> (f32, f32) {
        (self.width, self.depth)
    }

    fn sample_height(&self, x: f32, z: f32) -> f32 {
        (self.height)(x, z)
    }
}

/// An obstacle source that reports everything as free.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoObstacles;

impl ObstacleSource for NoObstacles {
    fn is_obstructed(&self, _position: Point3, _radius: f32) -> bool {
        false
    }
}

impl<F> ObstacleSource for F
where
    F: Fn(Point3, f32) -> bool,
{
    fn is_obstructed(&self, position: Point3, radius: f32) -> bool {
        self(position, radius)
    }
}
