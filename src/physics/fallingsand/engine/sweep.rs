//! One pass of the falling sand rule over the whole board.
//!
//! Reads the active grid and writes the next board into a cleared scratch grid.
//! Destinations are always checked against the scratch grid, so the first grain
//! to claim a cell wins it and every later grain in the same sweep sees it taken.

use rand::Rng;

use crate::physics::fallingsand::data::tile_grid::TileGrid;
use crate::physics::fallingsand::elements::tile::{Tile, TileType};
use crate::physics::fallingsand::util::vectors::CellVector;

use super::commands::Gravity;

/// The order rows are visited in, the row gravity pulls towards comes first
fn row_order(height: usize, gravity: Gravity) -> impl Iterator<Item = usize> {
    (0..height).map(move |i| match gravity {
        Gravity::Down => height - 1 - i,
        Gravity::Up => i,
    })
}

/// The order columns are visited in
/// Alternates every row so piles don't lean towards one side
fn col_order(width: usize, row: usize) -> impl Iterator<Item = usize> {
    (0..width).map(move |i| if row % 2 == 0 { width - 1 - i } else { i })
}

/// Run the sweep, `scratch` must be all blank and the same size as `active`
pub fn sweep<R: Rng>(
    active: &TileGrid,
    scratch: &mut TileGrid,
    gravity: Gravity,
    rng: &mut R,
) {
    debug_assert_eq!(active.get_width(), scratch.get_width());
    debug_assert_eq!(active.get_height(), scratch.get_height());
    debug_assert_eq!(scratch.count(TileType::Blank), scratch.get_grid().total_size());

    let width = active.get_width();
    for row in row_order(active.get_height(), gravity) {
        for col in col_order(width, row) {
            let at = CellVector { col, row };
            let tile = active.get(at);
            match tile.tile_type {
                TileType::Wall => scratch.set(at, *tile),
                TileType::Blank => {}
                TileType::Sand => fall(at, tile, scratch, gravity, rng),
            }
        }
    }
}

/// Move a single grain into the scratch grid
fn fall<R: Rng>(
    at: CellVector,
    tile: &Tile,
    scratch: &mut TileGrid,
    gravity: Gravity,
    rng: &mut R,
) {
    let width = scratch.get_width();
    let height = scratch.get_height();

    // Off the edge of the board, stay where we are
    let Some(below) = at.checked_offset(0, gravity.sign(), width, height) else {
        scratch.set(at, *tile);
        return;
    };

    if scratch.get(below).is_blank() {
        scratch.set(below, Tile::SAND);
        return;
    }

    // Heads we look left first, tails right first
    let sides: [isize; 2] = if rng.gen_bool(0.5) { [-1, 1] } else { [1, -1] };
    let diagonal = sides.into_iter().find_map(|dcol| {
        below
            .checked_offset(dcol, 0, width, height)
            .filter(|side| scratch.get(*side).is_blank())
    });

    match diagonal {
        Some(side) => scratch.set(side, Tile::SAND),
        // Settled
        None => scratch.set(at, *tile),
    }
}
