//! Random barrier fields.

use rand::{Rng, RngExt};
use waygrid_core::{GridGraph, Point};

/// Generate a side × side grid where each cell is independently flagged
/// as a barrier with probability `wall_pct`. Cells in `keep_clear` are
/// always left passable.
///
/// Dense fields routinely wall the goal off entirely; the resulting
/// `Unreachable` answer is a normal outcome, not a generation failure.
pub fn random_barriers<R: Rng>(
    rng: &mut R,
    side: i32,
    wall_pct: f64,
    keep_clear: &[Point],
) -> GridGraph {
    let mut grid = GridGraph::new(side);
    for y in 0..side {
        for x in 0..side {
            if rng.random::<f64>() < wall_pct {
                grid.set_barrier(Point::new(x, y));
            }
        }
    }
    for &p in keep_clear {
        grid.clear_barrier(p);
    }
    grid
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keep_clear_cells_stay_passable() {
        let mut rng = rand::rng();
        let corners = [Point::new(0, 0), Point::new(9, 9)];
        let grid = random_barriers(&mut rng, 10, 1.0, &corners);
        assert!(grid.passable(corners[0]));
        assert!(grid.passable(corners[1]));
        assert_eq!(grid.barrier_count(), 98);
    }

    #[test]
    fn zero_density_is_all_floor() {
        let mut rng = rand::rng();
        let grid = random_barriers(&mut rng, 8, 0.0, &[]);
        assert_eq!(grid.barrier_count(), 0);
    }
}
