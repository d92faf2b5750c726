//! # mpm-grid
//!
//! The background grid a solid body transfers particle data through.
//!
//! Only the setup surface lives here: [`Grid::setup`] fixes the cell
//! size from a setup token and [`Grid::init`] lays a uniform lattice of
//! nodes over the body's bounding box.

pub mod grid;

pub use grid::Grid;
