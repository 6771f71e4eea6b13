//! Core module - pure placement logic with no external dependencies
//!
//! Coordinate mapping and the placement grid live here. Zero dependence
//! on the terminal, input handling, or rendering.

pub mod grid;
pub mod iso;

pub use grid::PlacementGrid;
pub use iso::{to_grid, to_pixel};
