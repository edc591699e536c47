//! The falling sand engine.
//! Owns the board, double buffered, and steps it one tick at a time.

pub mod builder;
pub mod commands;
mod sweep;

use bevy::log::{debug, info, warn};
use rand::Rng;

use self::commands::{Gravity, TickCommands, TickCount};
use super::data::tile_grid::TileGrid;
use super::elements::tile::TileType;
use super::util::vectors::CellVector;

/// How many grains of snow fall onto the top row every tick while it is snowing
pub const SNOW_PER_TICK: usize = 9;

/// A falling sand board and everything needed to step it forward
/// Build one with [`builder::SandEngineBuilder`]
pub struct SandEngine<R: Rng> {
    /// The two boards, `buffers[active]` is the one the world sees,
    /// the other one is scratch space for the tick in progress
    buffers: [TileGrid; 2],
    active: usize,
    gravity: Gravity,
    brush_mode: TileType,
    snowing: bool,
    ticks: TickCount,
    rng: R,
}

/* Initialization */
impl<R: Rng> SandEngine<R> {
    /// Only the builder calls this, it has already checked the sizes
    pub(crate) fn new(
        active: TileGrid,
        scratch: TileGrid,
        gravity: Gravity,
        brush_mode: TileType,
        snowing: bool,
        rng: R,
    ) -> Self {
        Self {
            buffers: [active, scratch],
            active: 0,
            gravity,
            brush_mode,
            snowing,
            ticks: TickCount::default(),
            rng,
        }
    }
}

/* Getters */
impl<R: Rng> SandEngine<R> {
    /// The board as of the last tick, this is what should be drawn
    pub fn active_grid(&self) -> &TileGrid {
        &self.buffers[self.active]
    }
    /// Width and height of the board in cells
    pub fn dimensions(&self) -> (usize, usize) {
        let grid = self.active_grid();
        (grid.get_width(), grid.get_height())
    }
    pub fn gravity(&self) -> Gravity {
        self.gravity
    }
    pub fn brush_mode(&self) -> TileType {
        self.brush_mode
    }
    pub fn snowing(&self) -> bool {
        self.snowing
    }
    pub fn ticks(&self) -> TickCount {
        self.ticks
    }
}

/* Commands */
impl<R: Rng> SandEngine<R> {
    /// Clear both boards and put the wall back across the middle
    pub fn reset(&mut self) {
        for grid in self.buffers.iter_mut() {
            grid.clear();
        }
        self.active_grid_mut().place_wall_fixture();
        info!("Board reset");
    }

    /// Apply the single shot edits, the physics doesn't run here
    fn apply(&mut self, commands: &TickCommands) {
        if commands.reset {
            self.reset();
        }
        if commands.flip_gravity {
            self.gravity = self.gravity.flipped();
            debug!("Gravity now {}", self.gravity);
        }
        if let Some(mode) = commands.select_mode {
            self.brush_mode = mode;
            debug!("Brush now {}", self.brush_mode);
        }
        if commands.toggle_snow {
            self.snowing = !self.snowing;
            debug!("Snowing {}", self.snowing);
        }
    }

    fn active_grid_mut(&mut self) -> &mut TileGrid {
        &mut self.buffers[self.active]
    }
}

/* Processing */
impl<R: Rng> SandEngine<R> {
    /// Step the simulation by exactly one sweep
    /// A paint coordinate off the board is logged and skipped
    pub fn tick(&mut self, commands: &TickCommands) {
        self.apply(commands);

        let (active, scratch) = split_buffers(&mut self.buffers, self.active);
        scratch.clear();

        if self.snowing {
            let width = active.get_width();
            for _ in 0..SNOW_PER_TICK {
                let col = self.rng.gen_range(0..width);
                active.set_type(CellVector { col, row: 0 }, TileType::Sand);
            }
        }

        if let Some(at) = commands.paint {
            match active.checked_get(at).map(|_| ()) {
                Ok(()) => active.set_type(at, self.brush_mode),
                Err(err) => warn!("Skipping paint, {}", err),
            }
        }

        sweep::sweep(active, scratch, self.gravity, &mut self.rng);

        // The scratch board becomes the world, no tiles are copied
        self.active = 1 - self.active;
        self.ticks += TickCount(1);
    }
}

/// Borrow the active and scratch boards at the same time
fn split_buffers(buffers: &mut [TileGrid; 2], active: usize) -> (&mut TileGrid, &mut TileGrid) {
    let [first, second] = buffers;
    if active == 0 {
        (first, second)
    } else {
        (second, first)
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::mock::StepRng;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::builder::SandEngineBuilder;
    use super::*;

    fn engine_from(text: &str) -> SandEngine<StdRng> {
        SandEngineBuilder::new()
            .starting_grid(TileGrid::from_text(text).unwrap())
            .build(StdRng::seed_from_u64(1234))
            .unwrap()
    }

    fn sand(engine: &SandEngine<impl Rng>) -> Vec<CellVector> {
        engine.active_grid().positions_of(TileType::Sand)
    }

    #[test]
    fn test_single_grain_falls_to_the_floor() {
        let mut engine = engine_from(
            "
            ..o..
            .....
            .....
            .....
            .....
            ",
        );
        let expected = [(2, 1), (2, 2), (2, 3), (2, 4), (2, 4)];
        for (tick, (col, row)) in expected.into_iter().enumerate() {
            engine.tick(&TickCommands::NONE);
            assert_eq!(
                sand(&engine),
                vec![CellVector::new(col, row)],
                "after tick {}",
                tick + 1
            );
        }
        assert_eq!(engine.ticks(), TickCount(5));
    }

    #[test]
    fn test_gravity_symmetry() {
        let text = "
            ...
            .o.
            ...
            ";
        let mut down = engine_from(text);
        down.tick(&TickCommands::NONE);
        assert_eq!(sand(&down), vec![CellVector::new(1, 2)]);

        let mut up = engine_from(text);
        up.tick(&TickCommands {
            flip_gravity: true,
            ..TickCommands::NONE
        });
        assert_eq!(up.gravity(), Gravity::Up);
        assert_eq!(sand(&up), vec![CellVector::new(1, 0)]);
    }

    #[test]
    fn test_flipping_gravity_reverses_motion() {
        let mut engine = engine_from(
            "
            .....
            .....
            ..o..
            .....
            .....
            ",
        );
        engine.tick(&TickCommands::NONE);
        assert_eq!(sand(&engine), vec![CellVector::new(2, 3)]);
        let flip = TickCommands {
            flip_gravity: true,
            ..TickCommands::NONE
        };
        engine.tick(&flip);
        assert_eq!(sand(&engine), vec![CellVector::new(2, 2)]);
        engine.tick(&TickCommands::NONE);
        assert_eq!(sand(&engine), vec![CellVector::new(2, 1)]);
        engine.tick(&flip);
        assert_eq!(sand(&engine), vec![CellVector::new(2, 2)]);
    }

    #[test]
    fn test_forced_coin_through_the_engine() {
        let text = "
            .o.
            .o.
            ";
        let build = |rng: StepRng| {
            SandEngineBuilder::new()
                .starting_grid(TileGrid::from_text(text).unwrap())
                .build(rng)
                .unwrap()
        };
        let mut heads = build(StepRng::new(0, 0));
        heads.tick(&TickCommands::NONE);
        assert_eq!(heads.active_grid().to_string(), "...\noo.\n");

        let mut tails = build(StepRng::new(u64::MAX, 0));
        tails.tick(&TickCommands::NONE);
        assert_eq!(tails.active_grid().to_string(), "...\n.oo\n");
    }

    #[test]
    fn test_conservation_without_snow_or_paint() {
        let mut engine = SandEngineBuilder::new()
            .width(40)
            .height(30)
            .snowing(true)
            .build(StdRng::seed_from_u64(99))
            .unwrap();
        // Let some snow pile up then turn it off
        for _ in 0..20 {
            engine.tick(&TickCommands::NONE);
        }
        engine.tick(&TickCommands {
            toggle_snow: true,
            ..TickCommands::NONE
        });
        assert!(!engine.snowing());
        let before = engine.active_grid().count(TileType::Sand);
        assert!(before > 0);
        for _ in 0..100 {
            engine.tick(&TickCommands::NONE);
            assert_eq!(engine.active_grid().count(TileType::Sand), before);
        }
    }

    #[test]
    fn test_walls_never_move() {
        let mut engine = SandEngineBuilder::new()
            .width(30)
            .height(20)
            .snowing(true)
            .build(StdRng::seed_from_u64(5))
            .unwrap();
        let walls = engine.active_grid().positions_of(TileType::Wall);
        for i in 0..200 {
            let commands = TickCommands {
                // Paint sand on the top left corner and flip every so often
                paint: Some(CellVector::new(0, 0)),
                flip_gravity: i % 37 == 0,
                ..TickCommands::NONE
            };
            engine.tick(&commands);
            assert_eq!(engine.active_grid().positions_of(TileType::Wall), walls);
        }
    }

    #[test]
    fn test_snow_lands_on_top_row() {
        let mut engine = SandEngineBuilder::new()
            .width(50)
            .height(10)
            .starting_grid(TileGrid::new_empty(50, 10))
            .snowing(true)
            .build(StdRng::seed_from_u64(3))
            .unwrap();
        engine.tick(&TickCommands::NONE);
        let grains = sand(&engine);
        // Snow is placed on row 0 then falls one row in the same tick
        assert!(!grains.is_empty());
        assert!(grains.len() <= SNOW_PER_TICK);
        assert!(grains.iter().all(|at| at.row == 1));
    }

    #[test]
    fn test_snow_ignores_gravity_direction() {
        let mut engine = SandEngineBuilder::new()
            .starting_grid(TileGrid::new_empty(50, 10))
            .gravity(Gravity::Up)
            .snowing(true)
            .build(StdRng::seed_from_u64(3))
            .unwrap();
        engine.tick(&TickCommands::NONE);
        let grains = sand(&engine);
        assert!(!grains.is_empty());
        assert!(grains.iter().all(|at| at.row == 0));
    }

    #[test]
    fn test_paint_uses_brush_mode() {
        let mut engine = engine_from(
            "
            ...
            ...
            ...
            ",
        );
        engine.tick(&TickCommands {
            select_mode: Some(TileType::Wall),
            paint: Some(CellVector::new(0, 0)),
            ..TickCommands::NONE
        });
        assert_eq!(engine.brush_mode(), TileType::Wall);
        assert_eq!(engine.active_grid().to_string(), "#..\n...\n...\n");

        engine.tick(&TickCommands::paint_at(CellVector::new(2, 2)));
        assert_eq!(engine.active_grid().to_string(), "#..\n...\n..#\n");
    }

    #[test]
    fn test_reset_then_paint_in_one_tick() {
        let mut engine = SandEngineBuilder::new()
            .starting_grid(TileGrid::from_text("oooooooo\n#o#o#o#o\n........\noooooooo\n").unwrap())
            .brush_mode(TileType::Wall)
            .build(StdRng::seed_from_u64(21))
            .unwrap();
        engine.tick(&TickCommands {
            reset: true,
            paint: Some(CellVector::new(0, 0)),
            ..TickCommands::NONE
        });
        // The reset wipes the old board first, the paint lands on the fresh one
        assert_eq!(
            engine.active_grid().to_string(),
            "#.......\n........\n..####..\n........\n"
        );
    }

    #[test]
    fn test_reset_then_snow_toggle_in_one_tick() {
        let full = format!("{}\n", "o".repeat(40)).repeat(6);
        let mut engine = SandEngineBuilder::new()
            .starting_grid(TileGrid::from_text(&full).unwrap())
            .build(StdRng::seed_from_u64(4))
            .unwrap();
        assert!(!engine.snowing());
        engine.tick(&TickCommands {
            reset: true,
            toggle_snow: true,
            ..TickCommands::NONE
        });
        assert!(engine.snowing());
        // Only the snow from this very tick is left, one row down from the top
        let grains = sand(&engine);
        assert!(!grains.is_empty());
        assert!(grains.len() <= SNOW_PER_TICK);
        assert!(grains.iter().all(|at| at.row == 1));
        assert_eq!(engine.active_grid().count(TileType::Wall), 20);
    }

    #[test]
    fn test_paint_off_the_board_is_skipped() {
        let mut engine = engine_from(
            "
            ...
            ...
            ",
        );
        engine.tick(&TickCommands::paint_at(CellVector::new(3, 0)));
        engine.tick(&TickCommands::paint_at(CellVector::new(0, 2)));
        assert_eq!(engine.active_grid().to_string(), "...\n...\n");
        assert_eq!(engine.ticks(), TickCount(2));
    }

    #[test]
    fn test_eraser_removes_sand_and_walls() {
        let mut engine = engine_from(
            "
            ...
            .#.
            .o.
            ",
        );
        engine.tick(&TickCommands {
            select_mode: Some(TileType::Blank),
            paint: Some(CellVector::new(1, 1)),
            ..TickCommands::NONE
        });
        engine.tick(&TickCommands::paint_at(CellVector::new(1, 2)));
        assert_eq!(engine.active_grid().to_string(), "...\n...\n...\n");
    }

    #[test]
    fn test_painted_sand_falls_the_same_tick() {
        let mut engine = engine_from(
            "
            ...
            ...
            ",
        );
        engine.tick(&TickCommands::paint_at(CellVector::new(1, 0)));
        assert_eq!(sand(&engine), vec![CellVector::new(1, 1)]);
    }

    #[test]
    fn test_reset_restores_fixture() {
        let mut engine = SandEngineBuilder::new()
            .width(8)
            .height(4)
            .starting_grid(TileGrid::from_text("o#o#o#o#\n........\n########\noooooooo\n").unwrap())
            .build(StdRng::seed_from_u64(8))
            .unwrap();
        engine.tick(&TickCommands::NONE);
        engine.reset();
        assert_eq!(
            engine.active_grid().to_string(),
            "........\n........\n..####..\n........\n"
        );

        // And again through a tick, which also runs physics on the fresh board
        engine.tick(&TickCommands {
            reset: true,
            ..TickCommands::NONE
        });
        assert_eq!(
            engine.active_grid().to_string(),
            "........\n........\n..####..\n........\n"
        );
    }

    #[test]
    fn test_reset_on_default_board() {
        let mut engine = SandEngineBuilder::new()
            .build(StdRng::seed_from_u64(0))
            .unwrap();
        let fresh = engine.active_grid().clone();
        for _ in 0..10 {
            engine.tick(&TickCommands::paint_at(CellVector::new(75, 0)));
        }
        assert_ne!(*engine.active_grid(), fresh);
        engine.reset();
        assert_eq!(*engine.active_grid(), fresh);
    }

    #[test]
    fn test_buffers_swap_roles() {
        let mut engine = engine_from(".o.\n...\n");
        assert_eq!(engine.active, 0);
        engine.tick(&TickCommands::NONE);
        assert_eq!(engine.active, 1);
        engine.tick(&TickCommands::NONE);
        assert_eq!(engine.active, 0);
    }

    #[test]
    fn test_one_row_board() {
        let mut engine = engine_from("o.o\n");
        for gravity in [Gravity::Down, Gravity::Up] {
            assert_eq!(engine.gravity(), gravity);
            engine.tick(&TickCommands::NONE);
            assert_eq!(engine.active_grid().to_string(), "o.o\n");
            engine.tick(&TickCommands {
                flip_gravity: gravity == Gravity::Down,
                ..TickCommands::NONE
            });
        }
    }
}
