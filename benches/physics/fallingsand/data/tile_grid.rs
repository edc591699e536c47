use criterion::{criterion_group, Criterion};
use falling_sand::physics::fallingsand::data::tile_grid::TileGrid;
use falling_sand::physics::fallingsand::elements::tile::TileType;
use falling_sand::physics::fallingsand::engine::builder::{DEFAULT_HEIGHT, DEFAULT_WIDTH};
use falling_sand::physics::fallingsand::util::vectors::CellVector;

/// The default board, half full of sand
fn get_tile_grid() -> TileGrid {
    let mut grid = TileGrid::new_empty(DEFAULT_WIDTH, DEFAULT_HEIGHT);
    grid.place_wall_fixture();
    for row in DEFAULT_HEIGHT / 2 + 1..DEFAULT_HEIGHT {
        for col in 0..DEFAULT_WIDTH {
            grid.set_type(CellVector::new(col, row), TileType::Sand);
        }
    }
    grid
}

fn bench_get_texture(c: &mut Criterion) {
    let grid = get_tile_grid();
    c.bench_function("get_texture", |b| {
        b.iter(|| {
            grid.get_texture();
        })
    });
}

criterion_group!(benches, bench_get_texture);
