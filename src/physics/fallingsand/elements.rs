//! This module contains all the tiles that can live on the board.

pub mod tile;
