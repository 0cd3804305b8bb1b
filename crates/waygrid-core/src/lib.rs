//! **waygrid-core** — Core types for square-grid pathfinding.
//!
//! This crate provides the foundational types used across the *waygrid*
//! workspace: the [`Point`] cell coordinate and the [`GridGraph`], a square
//! grid of passability flags that answers adjacency queries.

pub mod geom;
pub mod grid;

pub use geom::Point;
pub use grid::GridGraph;
