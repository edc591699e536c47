//! The data module contains the data structures for the falling sand physics engine.
//! These are where the actual grids of tiles are stored.

pub mod tile_grid;
