//! Navigation nodes: one per grid cell, carrying the sampled world position
//! and the walkability/highlight state that collaborators render.

/// A position in world space. `y` is the sampled terrain height plus the
/// grid's fixed clearance; `x`/`z` span the horizontal plane.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Point3 {
    pub fn new(x: f32, y: f32, z: f32) -> Point3 {
        Point3 { x, y, z }
    }

    /// Straight-line distance between two world positions.
    pub fn distance(&self, other: &Point3) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }
}

/// Cell state as exposed to the rendering collaborator. `Obstructed` is
/// authoritative: it is set only by classification and wins over any
/// highlight request until the next classification pass clears it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeState {
    /// Traversable and not on any computed path.
    Walkable,
    /// On the most recent A* path.
    AstarPath,
    /// On the most recent Dijkstra path.
    DijkstraPath,
    /// Blocked by an obstacle; excluded from neighbor expansion.
    Obstructed,
}

#[derive(Clone, Debug)]
pub struct GridNode {
    pub world_position: Point3,
    state: NodeState,
}

impl GridNode {
    pub fn new(world_position: Point3) -> GridNode {
        GridNode {
            world_position,
            state: NodeState::Walkable,
        }
    }

    pub fn state(&self) -> NodeState {
        self.state
    }

    /// Walkability is derived: anything that is not obstructed can be
    /// traversed, including cells highlighted as part of a previous path.
    pub fn walkable(&self) -> bool {
        self.state != NodeState::Obstructed
    }

    /// Applies the classifier verdict for this cycle. This is the only way a
    /// cell becomes (or stops being) `Obstructed`, and it also clears any
    /// highlight left over from the previous cycle's paths.
    pub fn classify(&mut self, obstructed: bool) {
        self.state = if obstructed {
            NodeState::Obstructed
        } else {
            NodeState::Walkable
        };
    }

    /// Marks the cell with an "on path" state. Obstructed cells refuse the
    /// highlight; classification runs before search, so a path can only
    /// touch an obstructed endpoint, never an interior cell.
    pub fn highlight(&mut self, state: NodeState) {
        if self.state == NodeState::Obstructed {
            return;
        }
        self.state = state;
    }

    /// Clears a highlight back to `Walkable`. Obstructed cells stay put.
    pub fn fade(&mut self) {
        if self.state == NodeState::Obstructed {
            return;
        }
        self.state = NodeState::Walkable;
    }
}

/// Cost of traversing directly between two nodes. Elevation change is
/// weighted far above horizontal movement, so paths strongly prefer flat
/// routes over shortcuts across slopes.
pub fn travel_cost(a: &GridNode, b: &GridNode) -> f32 {
    let pa = &a.world_position;
    let pb = &b.world_position;
    pa.distance(pb) + crate::ELEVATION_WEIGHT * (pa.y - pb.y).abs()
}
