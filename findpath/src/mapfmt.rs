//! The ASCII map format.
//!
//! A map is a square block of glyphs, one cell per character:
//!
//! ```text
//! @..#.
//! ..##.
//! .....
//! .##..
//! ...#x
//! ```
//!
//! `#` is a barrier, `.` (or a space) is floor, `@` is the start cell and
//! `x` the goal. Blank lines are ignored; every remaining line must be as
//! long as the map is tall.

use std::error::Error;
use std::fmt;

use waygrid_core::{GridGraph, Point};

/// A parsed map: the grid plus its two designated cells.
#[derive(Debug, Clone)]
pub struct MapSpec {
    pub grid: GridGraph,
    pub start: Point,
    pub goal: Point,
}

/// Why a map failed to parse. Positions are 1-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapError {
    Empty,
    NotSquare { line: usize, len: usize, side: usize },
    UnknownGlyph { ch: char, line: usize, col: usize },
    DuplicateStart { line: usize, col: usize },
    DuplicateGoal { line: usize, col: usize },
    MissingStart,
    MissingGoal,
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "map is empty"),
            Self::NotSquare { line, len, side } => write!(
                f,
                "line {line} has {len} cells, expected {side} (map must be square)"
            ),
            Self::UnknownGlyph { ch, line, col } => {
                write!(f, "unknown glyph {ch:?} at line {line}, column {col}")
            }
            Self::DuplicateStart { line, col } => {
                write!(f, "second start '@' at line {line}, column {col}")
            }
            Self::DuplicateGoal { line, col } => {
                write!(f, "second goal 'x' at line {line}, column {col}")
            }
            Self::MissingStart => write!(f, "map has no start '@'"),
            Self::MissingGoal => write!(f, "map has no goal 'x'"),
        }
    }
}

impl Error for MapError {}

/// Parse an ASCII map into a grid with start and goal cells.
pub fn parse_map(text: &str) -> Result<MapSpec, MapError> {
    let lines: Vec<&str> = text
        .lines()
        .filter(|l| !l.trim().is_empty())
        .collect();
    if lines.is_empty() {
        return Err(MapError::Empty);
    }

    let side = lines.len();
    let mut grid = GridGraph::new(side as i32);
    let mut start = None;
    let mut goal = None;

    for (y, line) in lines.iter().enumerate() {
        let len = line.chars().count();
        if len != side {
            return Err(MapError::NotSquare {
                line: y + 1,
                len,
                side,
            });
        }
        for (x, ch) in line.chars().enumerate() {
            let p = Point::new(x as i32, y as i32);
            match ch {
                '#' => grid.set_barrier(p),
                '.' | ' ' => {}
                '@' => {
                    if start.replace(p).is_some() {
                        return Err(MapError::DuplicateStart {
                            line: y + 1,
                            col: x + 1,
                        });
                    }
                }
                'x' => {
                    if goal.replace(p).is_some() {
                        return Err(MapError::DuplicateGoal {
                            line: y + 1,
                            col: x + 1,
                        });
                    }
                }
                _ => {
                    return Err(MapError::UnknownGlyph {
                        ch,
                        line: y + 1,
                        col: x + 1,
                    });
                }
            }
        }
    }

    let start = start.ok_or(MapError::MissingStart)?;
    let goal = goal.ok_or(MapError::MissingGoal)?;
    Ok(MapSpec { grid, start, goal })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SMALL: &str = "\
@..#.
..##.
.....
.##..
...#x
";

    #[test]
    fn parses_valid_map() {
        let spec = parse_map(SMALL).unwrap();
        assert_eq!(spec.grid.side(), 5);
        assert_eq!(spec.start, Point::new(0, 0));
        assert_eq!(spec.goal, Point::new(4, 4));
        assert!(!spec.grid.passable(Point::new(3, 0)));
        assert!(spec.grid.passable(Point::new(4, 0)));
        assert_eq!(spec.grid.barrier_count(), 6);
    }

    #[test]
    fn blank_lines_are_ignored() {
        let spec = parse_map("\n@x.\n...\n...\n\n").unwrap();
        assert_eq!(spec.grid.side(), 3);
    }

    #[test]
    fn rejects_ragged_lines() {
        let err = parse_map("@x.\n..\n...\n").unwrap_err();
        assert_eq!(
            err,
            MapError::NotSquare {
                line: 2,
                len: 2,
                side: 3
            }
        );
    }

    #[test]
    fn rejects_unknown_glyphs() {
        let err = parse_map("@x?\n...\n...\n").unwrap_err();
        assert_eq!(
            err,
            MapError::UnknownGlyph {
                ch: '?',
                line: 1,
                col: 3
            }
        );
    }

    #[test]
    fn rejects_missing_or_duplicate_endpoints() {
        assert_eq!(parse_map("...\n...\n..x\n").unwrap_err(), MapError::MissingStart);
        assert_eq!(parse_map("@..\n...\n...\n").unwrap_err(), MapError::MissingGoal);
        assert_eq!(
            parse_map("@@x\n...\n...\n").unwrap_err(),
            MapError::DuplicateStart { line: 1, col: 2 }
        );
        assert_eq!(
            parse_map("@xx\n...\n...\n").unwrap_err(),
            MapError::DuplicateGoal { line: 1, col: 3 }
        );
    }

    #[test]
    fn rejects_empty_input() {
        assert_eq!(parse_map("").unwrap_err(), MapError::Empty);
        assert_eq!(parse_map("  \n \n").unwrap_err(), MapError::Empty);
    }
}
