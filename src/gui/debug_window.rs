//! The egui overlay with the engine state and buttons for the keyboard controls.

use bevy::app::{App, Plugin, Update};
use bevy::diagnostic::{DiagnosticsStore, FrameTimeDiagnosticsPlugin};
use bevy::ecs::system::{Res, ResMut};
use bevy_egui::{egui, EguiContexts};
use rand::Rng;
use strum::IntoEnumIterator;

use crate::entities::sandbox::{PendingCommands, SandBoxData};
use crate::physics::fallingsand::elements::tile::TileType;
use crate::physics::fallingsand::engine::commands::TickCommands;
use crate::physics::fallingsand::engine::SandEngine;

/// A small window in the corner showing the engine state, with buttons for the same controls as the keyboard
pub struct DebugWindowPlugin;

impl Plugin for DebugWindowPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, debug_window_system);
    }
}

/// The lines of text at the top of the debug window
pub fn status_lines<R: Rng>(engine: &SandEngine<R>) -> [String; 4] {
    [
        format!("Brush (1, 2, 3): {}", engine.brush_mode()),
        format!("Gravity (g): {}", engine.gravity().sign()),
        format!("Snow (s): {}", engine.snowing()),
        "Reset: R".to_string(),
    ]
}

pub fn debug_window_system(
    mut contexts: EguiContexts,
    diagnostics: Res<DiagnosticsStore>,
    sandbox: Res<SandBoxData>,
    mut pending: ResMut<PendingCommands>,
) {
    let fps = diagnostics
        .get(FrameTimeDiagnosticsPlugin::FPS)
        .and_then(|fps| fps.smoothed())
        .unwrap_or(0.0);
    let engine = &sandbox.engine;

    let mut requested = TickCommands::NONE;
    let mut brush = engine.brush_mode();
    let mut snowing = engine.snowing();
    egui::Window::new("Sand")
        .anchor(egui::Align2::LEFT_TOP, egui::Vec2::new(5.0, 5.0))
        .resizable(false)
        .show(contexts.ctx_mut(), |ui| {
            for line in status_lines(engine) {
                ui.label(line);
            }
            ui.label(format!("FPS: {:.0}", fps));
            ui.label(format!("Ticks: {}", engine.ticks()));

            ui.separator();
            for tile_type in TileType::iter() {
                ui.radio_value(&mut brush, tile_type, tile_type.to_string());
            }
            ui.checkbox(&mut snowing, "Snow");
            ui.horizontal(|ui| {
                requested.flip_gravity = ui.button("Flip gravity").clicked();
                requested.reset = ui.button("Reset").clicked();
            });
        });

    if brush != engine.brush_mode() {
        requested.select_mode = Some(brush);
    }
    requested.toggle_snow = snowing != engine.snowing();
    if !requested.is_empty() {
        pending.0.merge(requested);
    }
}
