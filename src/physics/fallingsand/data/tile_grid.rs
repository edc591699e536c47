use std::fmt;

use crate::physics::fallingsand::elements::tile::{Tile, TileType};
use crate::physics::fallingsand::util::grid::{Grid, GridOutOfBoundsError};
use crate::physics::fallingsand::util::image::RawImage;
use crate::physics::fallingsand::util::vectors::CellVector;

/// A tile grid is the whole board, a 2D grid of tiles
#[derive(Clone, Debug, PartialEq)]
pub struct TileGrid {
    grid: Grid<Tile>,
}

/* Initialization */
impl TileGrid {
    /// Creates a new tile grid of the given size filled with blank tiles
    pub fn new_empty(width: usize, height: usize) -> Self {
        Self {
            grid: Grid::new_empty(width, height),
        }
    }

    /// Parses a board printed by the `Display` impl, one row per line
    /// Mostly used to write readable tests
    pub fn from_text(text: &str) -> Result<Self, TileGridParseError> {
        let lines: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        let width = lines.first().map_or(0, |line| line.chars().count());
        let mut tiles: Vec<Tile> = Vec::with_capacity(width * lines.len());
        for (row, line) in lines.iter().enumerate() {
            if line.chars().count() != width {
                return Err(TileGridParseError::RaggedRow { row });
            }
            for (col, glyph) in line.chars().enumerate() {
                let tile_type = TileType::from_glyph(glyph).ok_or(
                    TileGridParseError::UnknownGlyph {
                        glyph,
                        at: CellVector { col, row },
                    },
                )?;
                tiles.push(tile_type.into());
            }
        }
        let height = lines.len();
        Ok(Self {
            grid: Grid::new_from_vec(width, height, tiles)
                .map_err(|_| TileGridParseError::RaggedRow { row: 0 })?,
        })
    }
}

/// Something went wrong reading a board from text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TileGridParseError {
    RaggedRow { row: usize },
    UnknownGlyph { glyph: char, at: CellVector },
}

impl fmt::Display for TileGridParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TileGridParseError::RaggedRow { row } => {
                write!(f, "row {} has a different width than the first row", row)
            }
            TileGridParseError::UnknownGlyph { glyph, at } => {
                write!(f, "unknown tile glyph {:?} at {:?}", glyph, at)
            }
        }
    }
}
impl std::error::Error for TileGridParseError {}

/* Getters & Setters */
impl TileGrid {
    pub fn get_width(&self) -> usize {
        self.grid.get_width()
    }
    pub fn get_height(&self) -> usize {
        self.grid.get_height()
    }
    pub fn get_grid(&self) -> &Grid<Tile> {
        &self.grid
    }
    pub fn get(&self, at: CellVector) -> &Tile {
        self.grid.get(at)
    }
    pub fn checked_get(&self, at: CellVector) -> Result<&Tile, GridOutOfBoundsError> {
        self.grid.checked_get(at)
    }
    pub fn get_type(&self, at: CellVector) -> TileType {
        self.grid.get(at).tile_type
    }
    pub fn set(&mut self, at: CellVector, tile: Tile) {
        self.grid.set(at, tile);
    }
    /// Changes the type of a tile, leaving the rest of it alone
    pub fn set_type(&mut self, at: CellVector, tile_type: TileType) {
        self.grid.get_mut(at).tile_type = tile_type;
    }
    /// Resets every tile to blank
    pub fn clear(&mut self) {
        self.grid.fill(Tile::BLANK);
    }
    /// How many tiles of the given type are on the board
    pub fn count(&self, tile_type: TileType) -> usize {
        self.grid
            .iter()
            .filter(|tile| tile.tile_type == tile_type)
            .count()
    }
    /// Coordinates of every tile of the given type, top row first
    pub fn positions_of(&self, tile_type: TileType) -> Vec<CellVector> {
        self.grid
            .indexed_iter()
            .filter(|(_, tile)| tile.tile_type == tile_type)
            .map(|(at, _)| at)
            .collect()
    }
}

/// Proceedural generation helpers
impl TileGrid {
    /// The starting board has a horizontal wall across the middle half of the board,
    /// halfway down
    pub fn place_wall_fixture(&mut self) {
        let quarter = self.get_width() / 4;
        let row = self.get_height() / 2;
        for col in quarter..quarter * 3 {
            self.set_type(CellVector { col, row }, TileType::Wall);
        }
    }
}

/* Drawing */
impl TileGrid {
    /// Draw the texture as the color of each tile
    pub fn get_texture(&self) -> RawImage {
        let mut out = Vec::with_capacity(self.grid.total_size() * RawImage::CHANNELS);
        for tile in self.grid.iter() {
            out.extend_from_slice(&tile.tile_type.get_color().as_rgba_u8());
        }
        RawImage {
            width: self.get_width(),
            height: self.get_height(),
            pixels: out,
        }
    }
}

impl fmt::Display for TileGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.grid.get_data().rows() {
            for tile in row {
                write!(f, "{}", tile.tile_type.get_glyph())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
