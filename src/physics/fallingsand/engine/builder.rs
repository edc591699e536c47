use std::fmt;

use bevy::log::info;
use rand::Rng;

use crate::physics::fallingsand::data::tile_grid::TileGrid;
use crate::physics::fallingsand::elements::tile::TileType;

use super::commands::Gravity;
use super::SandEngine;

/// The board is 150 cells wide by default
pub const DEFAULT_WIDTH: usize = 150;

/// Keeps cells square on a 640x480 window
pub const DEFAULT_HEIGHT: usize = DEFAULT_WIDTH * 480 / 640;

/// The engine could not be built from the given configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SandEngineConfigError {
    ZeroWidth,
    ZeroHeight,
    /// `width` or `height` was changed after a starting grid of another size was given
    ShapeMismatch {
        grid: (usize, usize),
        requested: (usize, usize),
    },
}

impl fmt::Display for SandEngineConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SandEngineConfigError::ZeroWidth => write!(f, "the board must be at least 1 cell wide"),
            SandEngineConfigError::ZeroHeight => {
                write!(f, "the board must be at least 1 cell tall")
            }
            SandEngineConfigError::ShapeMismatch { grid, requested } => write!(
                f,
                "the starting grid is {}x{} but the board was set to {}x{}",
                grid.0, grid.1, requested.0, requested.1
            ),
        }
    }
}
impl std::error::Error for SandEngineConfigError {}

/// Configures a [`SandEngine`]
#[derive(Debug, Clone)]
pub struct SandEngineBuilder {
    width: usize,
    height: usize,
    gravity: Gravity,
    brush_mode: TileType,
    snowing: bool,
    starting_grid: Option<TileGrid>,
}

impl Default for SandEngineBuilder {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            gravity: Gravity::Down,
            brush_mode: TileType::Sand,
            snowing: false,
            starting_grid: None,
        }
    }
}

impl SandEngineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    pub fn height(mut self, height: usize) -> Self {
        self.height = height;
        self
    }

    pub fn gravity(mut self, gravity: Gravity) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn brush_mode(mut self, brush_mode: TileType) -> Self {
        self.brush_mode = brush_mode;
        self
    }

    pub fn snowing(mut self, snowing: bool) -> Self {
        self.snowing = snowing;
        self
    }

    /// Start from this board instead of the wall fixture.
    /// The board's size overrides `width` and `height` set before it,
    /// setting a different size afterwards is an error at build time.
    /// Reset still goes back to the wall fixture.
    pub fn starting_grid(mut self, grid: TileGrid) -> Self {
        self.width = grid.get_width();
        self.height = grid.get_height();
        self.starting_grid = Some(grid);
        self
    }

    pub fn build<R: Rng>(self, rng: R) -> Result<SandEngine<R>, SandEngineConfigError> {
        if self.width == 0 {
            return Err(SandEngineConfigError::ZeroWidth);
        }
        if self.height == 0 {
            return Err(SandEngineConfigError::ZeroHeight);
        }

        let active = match self.starting_grid {
            Some(grid) => {
                let shape = (grid.get_width(), grid.get_height());
                if shape != (self.width, self.height) {
                    return Err(SandEngineConfigError::ShapeMismatch {
                        grid: shape,
                        requested: (self.width, self.height),
                    });
                }
                grid
            }
            None => {
                let mut grid = TileGrid::new_empty(self.width, self.height);
                grid.place_wall_fixture();
                grid
            }
        };
        let scratch = TileGrid::new_empty(self.width, self.height);

        info!(
            "Building a {}x{} sand engine, gravity {}, brush {}",
            self.width, self.height, self.gravity, self.brush_mode
        );
        Ok(SandEngine::new(
            active,
            scratch,
            self.gravity,
            self.brush_mode,
            self.snowing,
            rng,
        ))
    }
}
