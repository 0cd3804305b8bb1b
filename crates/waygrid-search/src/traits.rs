use waygrid_core::{GridGraph, Point};

use crate::distance::manhattan;

/// Minimal pathfinding interface — provides neighbour enumeration.
///
/// Every edge between neighbours costs exactly 1; non-uniform movement
/// costs are out of scope for this engine.
pub trait Pather {
    /// Append neighbours of `p` into `buf`. The caller clears `buf` before calling.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>);
}

/// Pather with an admissible heuristic, as required by A*.
pub trait AstarPather: Pather {
    /// Heuristic estimate of the distance from `from` to `to`.
    /// Must never overestimate the true cost (admissible).
    fn estimate(&self, from: Point, to: Point) -> i32;
}

impl Pather for GridGraph {
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        GridGraph::neighbors(self, p, buf);
    }
}

impl AstarPather for GridGraph {
    /// Manhattan distance — admissible and consistent on a 4-connected
    /// unit-cost grid.
    fn estimate(&self, from: Point, to: Point) -> i32 {
        manhattan(from, to)
    }
}
