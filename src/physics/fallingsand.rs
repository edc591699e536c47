//! Falling sand physics engine.
//! A rectangular board of tiles, stepped one tick at a time.

pub mod data;
pub mod elements;
pub mod engine;
pub mod util;
