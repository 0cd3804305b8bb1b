//! Display state for search visualization.
//!
//! The engine reports progress as opened/closed cells; the view keeps an
//! explicit per-cell status enum, entirely separate from the passability
//! flags the algorithm reads. Painting the view has no effect on the
//! search.

use std::ops::ControlFlow;

use waygrid_core::{GridGraph, Point};
use waygrid_search::SearchObserver;

/// Display status of a single cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CellView {
    Floor,
    Barrier,
    Start,
    Goal,
    /// On the frontier, discovered but not yet expanded.
    Open,
    /// Fully expanded.
    Closed,
    /// On the final path.
    Path,
}

/// One expansion step: the cell just closed (if any) and the cells newly
/// pushed onto the frontier.
#[derive(Debug, Clone, Default)]
pub struct Step {
    pub closed: Option<Point>,
    pub opened: Vec<Point>,
}

/// Observer that records every expansion step for later replay.
#[derive(Debug, Default)]
pub struct StepRecorder {
    pub steps: Vec<Step>,
}

impl SearchObserver for StepRecorder {
    fn expanded(&mut self, closed: Option<Point>, opened: &[Point]) -> ControlFlow<()> {
        self.steps.push(Step {
            closed,
            opened: opened.to_vec(),
        });
        ControlFlow::Continue(())
    }
}

/// A side × side field of [`CellView`]s.
///
/// Start and goal keep their status no matter what is painted over
/// them, so the endpoints stay visible through the open/closed/path
/// markings.
#[derive(Debug, Clone)]
pub struct ViewGrid {
    side: i32,
    cells: Vec<CellView>,
    start: Point,
    goal: Point,
}

impl ViewGrid {
    /// Build the initial view from a grid: floor, barriers, endpoints.
    pub fn new(grid: &GridGraph, start: Point, goal: Point) -> Self {
        let side = grid.side();
        let mut cells = vec![CellView::Floor; grid.len()];
        for (p, barrier) in grid.iter() {
            if barrier {
                cells[(p.y * side + p.x) as usize] = CellView::Barrier;
            }
        }
        let mut view = Self {
            side,
            cells,
            start,
            goal,
        };
        view.paint(start, CellView::Start);
        view.paint(goal, CellView::Goal);
        view
    }

    #[inline]
    pub fn side(&self) -> i32 {
        self.side
    }

    /// Status at `p`; out-of-bounds reads answer `Floor`.
    pub fn at(&self, p: Point) -> CellView {
        if p.x >= 0 && p.y >= 0 && p.x < self.side && p.y < self.side {
            self.cells[(p.y * self.side + p.x) as usize]
        } else {
            CellView::Floor
        }
    }

    fn paint(&mut self, p: Point, v: CellView) {
        if p.x >= 0 && p.y >= 0 && p.x < self.side && p.y < self.side {
            self.cells[(p.y * self.side + p.x) as usize] = v;
        }
    }

    fn paint_over(&mut self, p: Point, v: CellView) {
        if p != self.start && p != self.goal {
            self.paint(p, v);
        }
    }

    /// Paint one recorded expansion step.
    pub fn apply(&mut self, step: &Step) {
        for &p in &step.opened {
            self.paint_over(p, CellView::Open);
        }
        if let Some(p) = step.closed {
            self.paint_over(p, CellView::Closed);
        }
    }

    /// Paint the final path over the open/closed markings.
    pub fn overlay_path(&mut self, path: &[Point]) {
        for &p in path {
            self.paint_over(p, CellView::Path);
        }
    }

    /// Row-major iterator over the rows of the field.
    pub fn rows(&self) -> impl Iterator<Item = &[CellView]> {
        self.cells.chunks(self.side.max(1) as usize)
    }
}
