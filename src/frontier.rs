//! Min-priority frontier over float-keyed cells.
//!
//! Decrease-key is implemented by re-insertion: a cell may sit in the heap
//! several times under different priorities, and only its first (cheapest)
//! pop is authoritative. The stale later pops are discarded by the search
//! loop against its visited set.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use grid_util::point::Point;

struct FrontierEntry {
    priority: f32,
    cell: Point,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.priority.total_cmp(&other.priority) == Ordering::Equal
    }
}

impl Eq for FrontierEntry {}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so the max-heap pops the smallest priority. total_cmp
        // gives a total order on floats, so exact ties are harmless.
        other.priority.total_cmp(&self.priority)
    }
}

/// The queue of cells pending expansion, cheapest first.
#[derive(Default)]
pub struct Frontier {
    heap: BinaryHeap<FrontierEntry>,
}

impl Frontier {
    pub fn new() -> Frontier {
        Frontier {
            heap: BinaryHeap::new(),
        }
    }

    pub fn push(&mut self, priority: f32, cell: Point) {
        self.heap.push(FrontierEntry { priority, cell });
    }

    pub fn pop_min(&mut self) -> Option<(f32, Point)> {
        self.heap.pop().map(|e| (e.priority, e.cell))
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }
}
