use std::collections::BinaryHeap;
use std::ops::ControlFlow;

use waygrid_core::Point;

use crate::searchrange::{FrontierEntry, SearchRange};
use crate::traits::AstarPather;

/// Terminal outcome of a single shortest-path query.
///
/// `Unreachable` and `Aborted` are ordinary results, not errors: a drained
/// frontier is the definitive "no path" answer, and cancellation is a
/// caller-requested stop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Shortest path from start to goal, both endpoints included.
    Path(Vec<Point>),
    /// The frontier drained without the goal ever being popped.
    Unreachable,
    /// The observer requested early termination.
    Aborted,
}

impl SearchOutcome {
    /// The path, if one was found.
    pub fn into_path(self) -> Option<Vec<Point>> {
        match self {
            Self::Path(p) => Some(p),
            _ => None,
        }
    }

    /// Whether a path was found.
    pub fn is_path(&self) -> bool {
        matches!(self, Self::Path(_))
    }
}

/// Receives expansion progress during a search.
///
/// Called once per expansion step with the cell just closed (`None` when
/// that cell is the start, which is never reported closed) and the cells
/// newly pushed onto the frontier. Purely observational: the search
/// outcome must not depend on the observer, except that returning
/// `ControlFlow::Break(())` cancels the search, which then returns
/// [`SearchOutcome::Aborted`]. The cancellation check happens once per
/// expansion.
pub trait SearchObserver {
    fn expanded(&mut self, closed: Option<Point>, opened: &[Point]) -> ControlFlow<()>;
}

/// Observer that records nothing and never cancels.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullObserver;

impl SearchObserver for NullObserver {
    fn expanded(&mut self, _closed: Option<Point>, _opened: &[Point]) -> ControlFlow<()> {
        ControlFlow::Continue(())
    }
}

impl SearchRange {
    /// Compute the shortest path from `from` to `to` using A*.
    ///
    /// Returns the full path (including both endpoints) or `None` if no
    /// path exists within the current range.
    pub fn astar_path<P: AstarPather>(
        &mut self,
        pather: &P,
        from: Point,
        to: Point,
    ) -> Option<Vec<Point>> {
        self.astar_path_observed(pather, from, to, &mut NullObserver)
            .into_path()
    }

    /// A* with an expansion observer.
    ///
    /// The search terminates the first time the goal is *popped* from the
    /// frontier, not the first time it is discovered; with an admissible
    /// heuristic this is what guarantees the returned path is shortest.
    /// Expansion order is deterministic: the frontier is min-ordered by
    /// f-score, ties broken FIFO by insertion sequence, and relaxation
    /// accepts only strict improvements, so equal-cost ties keep the
    /// earlier-found path.
    pub fn astar_path_observed<P, O>(
        &mut self,
        pather: &P,
        from: Point,
        to: Point,
        observer: &mut O,
    ) -> SearchOutcome
    where
        P: AstarPather,
        O: SearchObserver,
    {
        let Some(start_idx) = self.idx(from) else {
            return SearchOutcome::Unreachable;
        };
        let Some(goal_idx) = self.idx(to) else {
            return SearchOutcome::Unreachable;
        };

        if start_idx == goal_idx {
            return SearchOutcome::Path(vec![from]);
        }

        // Bump generation to lazily invalidate all nodes.
        self.generation = self.generation.wrapping_add(1);
        let cur_gen = self.generation;

        // Initialise the start node.
        {
            let node = &mut self.nodes[start_idx];
            node.g = 0;
            node.f = pather.estimate(from, to);
            node.parent = usize::MAX;
            node.generation = cur_gen;
            node.open = true;
        }

        let mut open: BinaryHeap<FrontierEntry> = BinaryHeap::new();
        let mut seq: u32 = 0;
        open.push(FrontierEntry {
            idx: start_idx,
            f: self.nodes[start_idx].f,
            seq,
        });

        let mut nbuf = std::mem::take(&mut self.nbuf);
        let mut opened: Vec<Point> = Vec::new();
        let mut aborted = false;

        let found = 'search: loop {
            let Some(current) = open.pop() else {
                break 'search false;
            };

            let ci = current.idx;

            // Skip entries whose cell is no longer a genuine frontier
            // member.
            if self.nodes[ci].generation != cur_gen || !self.nodes[ci].open {
                continue;
            }

            if ci == goal_idx {
                break 'search true;
            }

            self.nodes[ci].open = false;
            let current_g = self.nodes[ci].g;
            let current_point = self.point(ci);

            nbuf.clear();
            pather.neighbors(current_point, &mut nbuf);
            opened.clear();

            for &np in nbuf.iter() {
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                // Uniform unit edge cost.
                let tentative_g = current_g + 1;

                let n = &mut self.nodes[ni];
                if n.generation == cur_gen {
                    // Strict improvement only: an equal-cost rediscovery
                    // keeps the earlier path.
                    if tentative_g >= n.g {
                        continue;
                    }
                } else {
                    n.generation = cur_gen;
                    n.open = false;
                }

                n.g = tentative_g;
                n.f = tentative_g + pather.estimate(np, to);
                n.parent = ci;

                // A cell already on the frontier keeps its queued entry
                // (and queued priority); only newly discovered cells get
                // pushed.
                if !n.open {
                    n.open = true;
                    seq += 1;
                    open.push(FrontierEntry {
                        idx: ni,
                        f: n.f,
                        seq,
                    });
                    opened.push(np);
                }
            }

            let closed = if ci == start_idx {
                None
            } else {
                Some(current_point)
            };
            if observer.expanded(closed, &opened).is_break() {
                aborted = true;
                break 'search false;
            }
        };

        self.nbuf = nbuf;

        if aborted {
            return SearchOutcome::Aborted;
        }
        if !found {
            return SearchOutcome::Unreachable;
        }

        // Reconstruct the path by walking parent links back from the goal.
        let mut path = Vec::new();
        let mut ci = goal_idx;
        while ci != usize::MAX {
            path.push(self.point(ci));
            ci = self.nodes[ci].parent;
        }
        path.reverse();
        SearchOutcome::Path(path)
    }
}
