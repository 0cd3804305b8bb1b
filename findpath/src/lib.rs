//! Terminal front-end for the waygrid search engine.
//!
//! Builds a [`waygrid_core::GridGraph`] from an ASCII map file or a random
//! barrier field, runs the A* search with a step-recording observer, and
//! renders the expansion and the resulting path in the terminal.

pub mod mapfmt;
pub mod mapgen;
pub mod render;
pub mod view;
