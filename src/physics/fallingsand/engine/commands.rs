//! The inputs the shell hands to the engine once per tick,
//! and the small value types that describe engine state.
#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use derive_more::{Add, AddAssign, Display, From, Into};
use strum_macros::{Display as StrumDisplay, EnumIter};

use crate::physics::fallingsand::elements::tile::TileType;
use crate::physics::fallingsand::util::vectors::CellVector;

/// Which way sand falls
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash, StrumDisplay, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Gravity {
    /// Towards increasing row index, the bottom of the screen
    #[default]
    Down,
    /// Towards decreasing row index, the top of the screen
    Up,
}

impl Gravity {
    /// The row offset a falling grain moves by, +1 or -1
    pub fn sign(&self) -> isize {
        match self {
            Gravity::Down => 1,
            Gravity::Up => -1,
        }
    }

    /// Gravity pointing the other way
    pub fn flipped(&self) -> Self {
        match self {
            Gravity::Down => Gravity::Up,
            Gravity::Up => Gravity::Down,
        }
    }
}

/// The number of ticks an engine has run
#[derive(
    Default, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Add, AddAssign, From, Into, Display,
)]
pub struct TickCount(pub u64);

/// Everything the shell wants changed before the next sweep.
/// Every field is single shot, the engine applies it once per tick it is handed in.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickCommands {
    /// Paint the current brush onto this cell
    /// Must already be a valid coordinate of the board
    pub paint: Option<CellVector>,
    /// Reverse gravity
    pub flip_gravity: bool,
    /// Start or stop the snow
    pub toggle_snow: bool,
    /// Change what the brush paints
    pub select_mode: Option<TileType>,
    /// Put the board back to its starting configuration
    pub reset: bool,
}

impl TickCommands {
    /// No commands at all, the tick only runs physics
    pub const NONE: TickCommands = TickCommands {
        paint: None,
        flip_gravity: false,
        toggle_snow: false,
        select_mode: None,
        reset: false,
    };

    /// Only paint, with whatever the brush currently holds
    pub fn paint_at(at: CellVector) -> Self {
        Self {
            paint: Some(at),
            ..Self::NONE
        }
    }

    /// True if nothing is requested
    pub fn is_empty(&self) -> bool {
        *self == Self::NONE
    }

    /// Folds a newer set of commands into this one.
    /// Toggles cancel out when requested twice, later paint and mode win.
    pub fn merge(&mut self, newer: TickCommands) {
        if newer.paint.is_some() {
            self.paint = newer.paint;
        }
        self.flip_gravity ^= newer.flip_gravity;
        self.toggle_snow ^= newer.toggle_snow;
        if newer.select_mode.is_some() {
            self.select_mode = newer.select_mode;
        }
        self.reset |= newer.reset;
    }
}
