use waygrid_core::Point;

use crate::SearchRange;
use crate::searchrange::{DistNode, UNREACHABLE};
use crate::traits::Pather;

impl SearchRange {
    /// Compute a multi-source breadth-first search distance map.
    ///
    /// Each step has cost 1. Expansion stops when the distance exceeds
    /// `max_dist`. Returns a slice of all reached nodes, in expansion
    /// order. Since edges are uniform, the distances are exact shortest
    /// path lengths, which makes this the exhaustive oracle against
    /// which the A* results can be checked.
    pub fn bfs_map<P: Pather>(
        &mut self,
        pather: &P,
        sources: &[Point],
        max_dist: i32,
    ) -> &[DistNode] {
        // Reset.
        for v in self.bfs_map.iter_mut() {
            *v = UNREACHABLE;
        }
        self.bfs_results.clear();

        let mut queue = std::mem::take(&mut self.bfs_queue);
        queue.clear();

        for &src in sources {
            if let Some(si) = self.idx(src) {
                if self.bfs_map[si] != UNREACHABLE {
                    continue;
                }
                self.bfs_map[si] = 0;
                queue.push_back(si);
                self.bfs_results.push(DistNode { pos: src, cost: 0 });
            }
        }

        let mut nbuf = std::mem::take(&mut self.nbuf);

        while let Some(ci) = queue.pop_front() {
            let current_dist = self.bfs_map[ci];
            let cp = self.point(ci);

            nbuf.clear();
            pather.neighbors(cp, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                if self.bfs_map[ni] != UNREACHABLE {
                    continue;
                }
                let nd = current_dist + 1;
                if nd > max_dist {
                    continue;
                }
                self.bfs_map[ni] = nd;
                queue.push_back(ni);
                self.bfs_results.push(DistNode { pos: np, cost: nd });
            }
        }

        self.nbuf = nbuf;
        self.bfs_queue = queue;
        &self.bfs_results
    }

    /// Query the BFS distance at a specific point.
    ///
    /// Returns [`UNREACHABLE`] if the point is outside the range or was
    /// not reached by the last `bfs_map` call.
    pub fn bfs_at(&self, p: Point) -> i32 {
        match self.idx(p) {
            Some(i) => self.bfs_map[i],
            None => UNREACHABLE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use waygrid_core::GridGraph;

    #[test]
    fn distances_on_open_grid() {
        let grid = GridGraph::new(4);
        let mut sr = SearchRange::new(4);
        let reached = sr.bfs_map(&grid, &[Point::new(0, 0)], i32::MAX);
        assert_eq!(reached.len(), 16);
        assert_eq!(sr.bfs_at(Point::new(0, 0)), 0);
        assert_eq!(sr.bfs_at(Point::new(3, 3)), 6);
        assert_eq!(sr.bfs_at(Point::new(2, 1)), 3);
    }

    #[test]
    fn barriers_block_expansion() {
        let mut grid = GridGraph::new(3);
        // Wall off the right column.
        grid.set_barrier(Point::new(1, 0));
        grid.set_barrier(Point::new(1, 1));
        grid.set_barrier(Point::new(1, 2));
        let mut sr = SearchRange::new(3);
        sr.bfs_map(&grid, &[Point::new(0, 0)], i32::MAX);
        assert_eq!(sr.bfs_at(Point::new(2, 0)), UNREACHABLE);
        assert_eq!(sr.bfs_at(Point::new(0, 2)), 2);
    }

    #[test]
    fn max_dist_truncates() {
        let grid = GridGraph::new(5);
        let mut sr = SearchRange::new(5);
        sr.bfs_map(&grid, &[Point::new(0, 0)], 2);
        assert_eq!(sr.bfs_at(Point::new(2, 0)), 2);
        assert_eq!(sr.bfs_at(Point::new(3, 0)), UNREACHABLE);
    }

    #[test]
    fn multi_source() {
        let grid = GridGraph::new(5);
        let mut sr = SearchRange::new(5);
        sr.bfs_map(&grid, &[Point::new(0, 0), Point::new(4, 4)], i32::MAX);
        assert_eq!(sr.bfs_at(Point::new(0, 0)), 0);
        assert_eq!(sr.bfs_at(Point::new(4, 4)), 0);
        assert_eq!(sr.bfs_at(Point::new(2, 2)), 4);
    }
}
