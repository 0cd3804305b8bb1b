//! The [`GridGraph`] — passability and adjacency for a square grid.
//!
//! A `GridGraph` is a side × side grid of cells addressed by [`Point`],
//! each either passable or flagged as a barrier. It answers the adjacency
//! queries the search engine needs and nothing else: neighbour sets are
//! computed on demand from the current flags, so a search started after a
//! barrier edit always observes the edit.

use crate::geom::Point;

/// A square grid of passability flags.
///
/// Cells outside the grid count as impassable, so `passable` and
/// `neighbors` are total; passing out-of-bounds coordinates is still a
/// caller bug, just not a panicking one. Barriers must not be edited
/// while a search holds a borrow of the grid (the borrow checker enforces
/// this, since mutation takes `&mut self`).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridGraph {
    side: i32,
    /// Row-major; `true` means barrier.
    barriers: Vec<bool>,
}

impl GridGraph {
    /// Create a new grid of the given side length with every cell passable.
    pub fn new(side: i32) -> Self {
        let n = side.max(0) as usize;
        Self {
            side: side.max(0),
            barriers: vec![false; n * n],
        }
    }

    /// Side length of the square grid.
    #[inline]
    pub fn side(&self) -> i32 {
        self.side
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.barriers.len()
    }

    /// Whether the grid has no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.barriers.is_empty()
    }

    /// Whether `p` is inside the grid bounds.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && p.x < self.side && p.y < self.side
    }

    #[inline]
    fn idx(&self, p: Point) -> Option<usize> {
        if self.contains(p) {
            Some((p.y * self.side + p.x) as usize)
        } else {
            None
        }
    }

    /// Whether `p` is an in-bounds, non-barrier cell.
    #[inline]
    pub fn passable(&self, p: Point) -> bool {
        match self.idx(p) {
            Some(i) => !self.barriers[i],
            None => false,
        }
    }

    /// Flag `p` as a barrier. No-op out of bounds.
    pub fn set_barrier(&mut self, p: Point) {
        if let Some(i) = self.idx(p) {
            self.barriers[i] = true;
        }
    }

    /// Remove the barrier flag from `p`. No-op out of bounds.
    pub fn clear_barrier(&mut self, p: Point) {
        if let Some(i) = self.idx(p) {
            self.barriers[i] = false;
        }
    }

    /// Remove every barrier flag.
    pub fn clear(&mut self) {
        self.barriers.fill(false);
    }

    /// Number of cells currently flagged as barriers.
    pub fn barrier_count(&self) -> usize {
        self.barriers.iter().filter(|&&b| b).count()
    }

    /// Append the passable 4-directional neighbours of `p` into `buf`.
    /// The caller clears `buf` before calling.
    pub fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        for n in p.neighbors_4() {
            if self.passable(n) {
                buf.push(n);
            }
        }
    }

    /// Row-major iterator over `(Point, is_barrier)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Point, bool)> + '_ {
        let side = self.side;
        self.barriers.iter().enumerate().map(move |(i, &b)| {
            let p = Point::new(i as i32 % side, i as i32 / side);
            (p, b)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_grid_is_all_passable() {
        let g = GridGraph::new(4);
        assert_eq!(g.len(), 16);
        assert_eq!(g.barrier_count(), 0);
        for (p, b) in g.iter() {
            assert!(!b);
            assert!(g.passable(p));
        }
    }

    #[test]
    fn barrier_toggle() {
        let mut g = GridGraph::new(4);
        let p = Point::new(2, 1);
        g.set_barrier(p);
        assert!(!g.passable(p));
        assert_eq!(g.barrier_count(), 1);
        g.clear_barrier(p);
        assert!(g.passable(p));
        assert_eq!(g.barrier_count(), 0);
    }

    #[test]
    fn out_of_bounds_is_impassable() {
        let mut g = GridGraph::new(3);
        assert!(!g.passable(Point::new(-1, 0)));
        assert!(!g.passable(Point::new(0, 3)));
        // Mutation out of bounds is a no-op, not a panic.
        g.set_barrier(Point::new(99, 99));
        assert_eq!(g.barrier_count(), 0);
    }

    #[test]
    fn neighbors_center_edge_corner() {
        let g = GridGraph::new(3);
        let mut buf = Vec::new();

        g.neighbors(Point::new(1, 1), &mut buf);
        assert_eq!(buf.len(), 4);

        buf.clear();
        g.neighbors(Point::new(0, 1), &mut buf);
        assert_eq!(buf.len(), 3);

        buf.clear();
        g.neighbors(Point::new(0, 0), &mut buf);
        assert_eq!(buf.len(), 2);
    }

    #[test]
    fn neighbors_exclude_barriers() {
        let mut g = GridGraph::new(3);
        g.set_barrier(Point::new(1, 0));
        let mut buf = Vec::new();
        g.neighbors(Point::new(1, 1), &mut buf);
        assert_eq!(buf.len(), 3);
        assert!(!buf.contains(&Point::new(1, 0)));
    }

    #[test]
    fn neighbors_reflect_later_edits() {
        // Neighbour sets are recomputed per call, so an edit between two
        // queries must show up in the second.
        let mut g = GridGraph::new(3);
        let mut buf = Vec::new();
        g.neighbors(Point::new(1, 1), &mut buf);
        assert_eq!(buf.len(), 4);

        g.set_barrier(Point::new(2, 1));
        buf.clear();
        g.neighbors(Point::new(1, 1), &mut buf);
        assert_eq!(buf.len(), 3);
    }

    #[test]
    fn clear_resets_all_barriers() {
        let mut g = GridGraph::new(3);
        g.set_barrier(Point::new(0, 0));
        g.set_barrier(Point::new(2, 2));
        g.clear();
        assert_eq!(g.barrier_count(), 0);
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn grid_round_trip() {
        let mut g = GridGraph::new(5);
        g.set_barrier(Point::new(1, 2));
        g.set_barrier(Point::new(4, 4));
        let json = serde_json::to_string(&g).unwrap();
        let back: GridGraph = serde_json::from_str(&json).unwrap();
        assert_eq!(g, back);
        assert!(!back.passable(Point::new(1, 2)));
    }
}
