//! Keyboard shortcuts.
//! 1, 2, 3 pick the brush, G flips gravity, S toggles snow, R resets and Q quits.

use bevy::app::{App, AppExit, Plugin, Update};
use bevy::ecs::event::EventWriter;
use bevy::ecs::system::{Res, ResMut};
use bevy::input::keyboard::KeyCode;
use bevy::input::Input;
use bevy::log::info;

use crate::entities::sandbox::PendingCommands;
use crate::physics::fallingsand::elements::tile::TileType;
use crate::physics::fallingsand::engine::commands::TickCommands;

/// Which key selects which brush
pub const BRUSH_KEYS: [(KeyCode, TileType); 3] = [
    (KeyCode::Key1, TileType::Sand),
    (KeyCode::Key2, TileType::Wall),
    (KeyCode::Key3, TileType::Blank),
];

pub const FLIP_GRAVITY_KEY: KeyCode = KeyCode::G;
pub const TOGGLE_SNOW_KEY: KeyCode = KeyCode::S;
pub const RESET_KEY: KeyCode = KeyCode::R;
pub const QUIT_KEY: KeyCode = KeyCode::Q;

/// Turns key presses into commands for the next tick
pub struct ControlsPlugin;

impl Plugin for ControlsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, Self::keyboard_system);
    }
}

/// Everything requested by keys pressed this frame
pub fn commands_from_keys(keys: &Input<KeyCode>) -> TickCommands {
    TickCommands {
        paint: None,
        flip_gravity: keys.just_pressed(FLIP_GRAVITY_KEY),
        toggle_snow: keys.just_pressed(TOGGLE_SNOW_KEY),
        // If more than one is pressed at once the last one listed wins
        select_mode: BRUSH_KEYS
            .iter()
            .filter(|(key, _)| keys.just_pressed(*key))
            .map(|(_, tile_type)| *tile_type)
            .last(),
        reset: keys.just_pressed(RESET_KEY),
    }
}

/// Bevy Systems
impl ControlsPlugin {
    pub fn keyboard_system(
        keys: Res<Input<KeyCode>>,
        mut pending: ResMut<PendingCommands>,
        mut exit: EventWriter<AppExit>,
    ) {
        if keys.just_pressed(QUIT_KEY) {
            info!("Quitting");
            exit.send(AppExit);
            return;
        }
        let commands = commands_from_keys(&keys);
        if !commands.is_empty() {
            pending.0.merge(commands);
        }
    }
}
