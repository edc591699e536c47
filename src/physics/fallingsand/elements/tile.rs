//! Tiles, the values stored in each cell of the board.

use bevy::render::color::Color;
use strum_macros::{Display, EnumIter};

/// What kind of material occupies a cell
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum TileType {
    #[default]
    Blank,
    Wall,
    Sand,
}

impl TileType {
    /// Sand is white, walls are blue and blank cells show the black background
    pub fn get_color(&self) -> Color {
        match self {
            TileType::Blank => Color::rgb_u8(0, 0, 0),
            TileType::Wall => Color::rgb_u8(0, 0, 255),
            TileType::Sand => Color::rgb_u8(255, 255, 255),
        }
    }

    /// The character used when printing a board as text
    pub fn get_glyph(&self) -> char {
        match self {
            TileType::Blank => '.',
            TileType::Wall => '#',
            TileType::Sand => 'o',
        }
    }

    /// Parses a glyph printed by [`TileType::get_glyph`]
    pub fn from_glyph(glyph: char) -> Option<TileType> {
        match glyph {
            '.' => Some(TileType::Blank),
            '#' => Some(TileType::Wall),
            'o' => Some(TileType::Sand),
            _ => None,
        }
    }
}

/// One cell of the board
/// Plain old data, copied around freely, no identity of its own
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tile {
    pub tile_type: TileType,
    /// Reserved for sub cell motion, the sweep never reads or writes it
    pub dx: i8,
    /// Reserved for sub cell motion, the sweep never reads or writes it
    pub dy: i8,
}

impl Tile {
    pub const BLANK: Tile = Tile::new(TileType::Blank);
    pub const SAND: Tile = Tile::new(TileType::Sand);

    pub const fn new(tile_type: TileType) -> Self {
        Self {
            tile_type,
            dx: 0,
            dy: 0,
        }
    }

    pub fn is_blank(&self) -> bool {
        self.tile_type == TileType::Blank
    }
}

impl From<TileType> for Tile {
    fn from(tile_type: TileType) -> Self {
        Tile::new(tile_type)
    }
}
