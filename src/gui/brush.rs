//! The brush follows the mouse, snapped to the board, and paints while the left button is held.

use bevy::app::{App, Plugin, Update};
use bevy::ecs::query::With;
use bevy::ecs::schedule::IntoSystemConfigs;
use bevy::ecs::system::{Query, Res, ResMut, Resource};
use bevy::gizmos::gizmos::Gizmos;
use bevy::input::mouse::MouseButton;
use bevy::input::Input;
use bevy::log::debug;
use bevy::math::Vec2;
use bevy::render::color::Color;
use bevy::window::{PrimaryWindow, Window};
use bevy_egui::EguiContexts;

use crate::entities::sandbox::{PendingCommands, SandBoxData};
use crate::physics::fallingsand::util::vectors::CellVector;

/// Side of the square drawn under the mouse, in window pixels
pub const CURSOR_SIZE: f32 = 10.0;

/// The brush follows the mouse and paints onto the board
pub struct BrushPlugin;

impl Plugin for BrushPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<BrushCursor>();
        app.add_systems(
            Update,
            (
                BrushCursor::move_brush_system,
                BrushCursor::apply_brush_system,
                BrushCursor::draw_brush_system,
            )
                .chain(),
        );
    }
}

/// The cell of the board under the mouse
#[derive(Resource, Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct BrushCursor {
    pub cell: CellVector,
}

/// Maps a position along one axis of the window onto a cell index, clamped onto the board
fn axis_to_index(pos: f32, extent: f32, cells: usize) -> usize {
    if extent <= 0.0 || cells == 0 {
        return 0;
    }
    let index = (pos / extent * cells as f32).floor().max(0.0) as usize;
    index.min(cells - 1)
}

/// Window coordinates, origin at the top left, to the cell of the board drawn there
/// Anything outside the window is clamped to the nearest edge cell
pub fn screen_to_cell(cursor: Vec2, window_size: Vec2, dimensions: (usize, usize)) -> CellVector {
    let (width, height) = dimensions;
    CellVector {
        col: axis_to_index(cursor.x, window_size.x, width),
        row: axis_to_index(cursor.y, window_size.y, height),
    }
}

/// The top left corner of a cell in window coordinates
pub fn cell_to_screen(cell: CellVector, window_size: Vec2, dimensions: (usize, usize)) -> Vec2 {
    let (width, height) = dimensions;
    Vec2::new(
        cell.col as f32 * window_size.x / width as f32,
        cell.row as f32 * window_size.y / height as f32,
    )
}

/// Window coordinates to world coordinates for a 2d camera centered on the window
/// World y points up, window y points down
pub fn screen_to_world(screen: Vec2, window_size: Vec2) -> Vec2 {
    Vec2::new(
        screen.x - window_size.x / 2.0,
        window_size.y / 2.0 - screen.y,
    )
}

/// Where the brush paints this frame, if anywhere
pub fn brush_paint(held: bool, over_gui: bool, cell: CellVector) -> Option<CellVector> {
    (held && !over_gui).then_some(cell)
}

fn window_size(window: &Window) -> Vec2 {
    Vec2::new(window.width(), window.height())
}

/// Bevy Systems
impl BrushCursor {
    /// Snap the brush to the cell under the mouse
    /// When the mouse leaves the window the brush stays on the last cell it was over
    pub fn move_brush_system(
        windows: Query<&Window, With<PrimaryWindow>>,
        sandbox: Res<SandBoxData>,
        mut cursor: ResMut<BrushCursor>,
    ) {
        let Ok(window) = windows.get_single() else {
            return;
        };
        let Some(position) = window.cursor_position() else {
            return;
        };
        let cell = screen_to_cell(position, window_size(window), sandbox.engine.dimensions());
        if cursor.cell != cell {
            cursor.cell = cell;
        }
    }

    /// Hold a paint command while the left button is held,
    /// unless the mouse is over one of the gui windows.
    /// Letting go clears it.
    pub fn apply_brush_system(
        mouse: Res<Input<MouseButton>>,
        cursor: Res<BrushCursor>,
        mut contexts: EguiContexts,
        mut pending: ResMut<PendingCommands>,
    ) {
        let over_gui = contexts.ctx_mut().is_pointer_over_area();
        let paint = brush_paint(mouse.pressed(MouseButton::Left), over_gui, cursor.cell);
        if pending.0.paint != paint {
            if let Some(cell) = paint {
                debug!("Applying brush at {:?}", cell);
            }
            pending.0.paint = paint;
        }
    }

    /// Draw a small red square at the top left of the brush cell
    pub fn draw_brush_system(
        windows: Query<&Window, With<PrimaryWindow>>,
        sandbox: Res<SandBoxData>,
        cursor: Res<BrushCursor>,
        mut gizmos: Gizmos,
    ) {
        let Ok(window) = windows.get_single() else {
            return;
        };
        let size = window_size(window);
        let corner = cell_to_screen(cursor.cell, size, sandbox.engine.dimensions());
        let center = screen_to_world(corner + Vec2::splat(CURSOR_SIZE / 2.0), size);
        gizmos.rect_2d(center, 0.0, Vec2::splat(CURSOR_SIZE), Color::RED);
    }
}
