//! The sand box, one board drawn as a single sprite filling the window.

use bevy::app::{App, FixedUpdate, Plugin, Startup, Update};
use bevy::asset::{Assets, Handle};
use bevy::core_pipeline::{
    clear_color::ClearColorConfig,
    core_2d::{Camera2d, Camera2dBundle},
};
use bevy::ecs::change_detection::DetectChanges;
use bevy::ecs::component::Component;
use bevy::ecs::query::With;
use bevy::ecs::system::{Commands, Query, Res, ResMut, Resource};
use bevy::log::debug;
use bevy::math::Vec2;
use bevy::render::color::Color;
use bevy::render::texture::Image;
use bevy::sprite::{Sprite, SpriteBundle};
use bevy::time::{Fixed, Time};
use bevy::window::{PrimaryWindow, Window};
use rand::rngs::StdRng;

use crate::physics::fallingsand::engine::commands::TickCommands;
use crate::physics::fallingsand::engine::SandEngine;

/// Ticks per second, independent of the frame rate
pub const TICKS_PER_SECOND: f64 = 60.0;

/// Owns the engine for the lifetime of the app
#[derive(Resource)]
pub struct SandBoxData {
    pub engine: SandEngine<StdRng>,
}

impl SandBoxData {
    pub fn new(engine: SandEngine<StdRng>) -> Self {
        Self { engine }
    }
}

/// Commands gathered from input since the last tick
/// Input systems write here every frame, the fixed step drains it
#[derive(Resource, Default, Debug, Clone, Copy)]
pub struct PendingCommands(pub TickCommands);

impl PendingCommands {
    /// Everything for the next tick
    /// One shot commands are drained, the paint stays until the brush lets go of it
    /// so every tick paints while the mouse is held, however many run per frame
    pub fn drain(&mut self) -> TickCommands {
        let commands = std::mem::take(&mut self.0);
        self.0.paint = commands.paint;
        commands
    }
}

/// Put this alongside the sprite that shows the board
#[derive(Component, Debug, Clone, Copy)]
pub struct SandBoxTexture;

/// Steps the engine on a fixed clock and keeps the sprite in sync with it
/// Expects a [`SandBoxData`] resource to have been inserted already
pub struct SandBoxPlugin;

impl Plugin for SandBoxPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PendingCommands>();
        app.insert_resource(Time::<Fixed>::from_hz(TICKS_PER_SECOND));
        app.add_systems(Startup, Self::setup);
        app.add_systems(FixedUpdate, Self::process_system);
        app.add_systems(
            Update,
            (Self::update_texture_system, Self::fit_to_window_system),
        );
    }
}

/// Bevy Systems
impl SandBoxPlugin {
    /// Create the camera and the sprite the board is drawn to
    pub fn setup(
        mut commands: Commands,
        mut images: ResMut<Assets<Image>>,
        sandbox: Res<SandBoxData>,
        windows: Query<&Window, With<PrimaryWindow>>,
    ) {
        commands.spawn(Camera2dBundle {
            camera_2d: Camera2d {
                clear_color: ClearColorConfig::Custom(Color::rgb(0.0, 0.0, 0.0)),
            },
            ..Default::default()
        });

        let size = windows
            .get_single()
            .map(|window| Vec2::new(window.width(), window.height()))
            .unwrap_or(Vec2::ONE);
        let texture = sandbox.engine.active_grid().get_texture();
        commands.spawn((
            SpriteBundle {
                texture: images.add(texture.to_bevy_image()),
                sprite: Sprite {
                    custom_size: Some(size),
                    ..Default::default()
                },
                ..Default::default()
            },
            SandBoxTexture,
        ));
    }

    /// Run one tick with whatever input has piled up
    pub fn process_system(
        mut sandbox: ResMut<SandBoxData>,
        mut pending: ResMut<PendingCommands>,
    ) {
        let commands = pending.drain();
        sandbox.engine.tick(&commands);
    }

    /// Copy the board into the sprite's texture whenever it changed
    pub fn update_texture_system(
        sandbox: Res<SandBoxData>,
        mut images: ResMut<Assets<Image>>,
        query: Query<&Handle<Image>, With<SandBoxTexture>>,
    ) {
        if !sandbox.is_changed() {
            return;
        }
        let texture = sandbox.engine.active_grid().get_texture();
        for handle in query.iter() {
            match images.get_mut(handle) {
                Some(image) => image.data = texture.pixels.clone(),
                None => debug!("Sand box texture not loaded yet"),
            }
        }
    }

    /// Stretch the board over the whole window
    pub fn fit_to_window_system(
        windows: Query<&Window, With<PrimaryWindow>>,
        mut query: Query<&mut Sprite, With<SandBoxTexture>>,
    ) {
        let Ok(window) = windows.get_single() else {
            return;
        };
        let size = Vec2::new(window.width(), window.height());
        for mut sprite in query.iter_mut() {
            if sprite.custom_size != Some(size) {
                sprite.custom_size = Some(size);
            }
        }
    }
}
