//! **hexgrid-core** — hexagonal grid core types.
//!
//! This crate provides the value types shared by the *hexgrid* crates:
//! axial and cube coordinates with exact rounding, weighted cells, and a
//! filled hexagonal [`Grid`] with lookup, neighbour and distance queries.
//! Searches over the grid live in `hexgrid-paths`.

pub mod cell;
pub mod coord;
pub mod error;
pub mod grid;

pub use cell::Cell;
pub use coord::{Axial, Cube, DIRECTIONS, FracCube, distance, round, to_axial, to_cube};
pub use error::GridError;
pub use grid::{Grid, cell_count};
