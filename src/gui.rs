//! This module contains all the GUI related code.
//! Things that are drawn to via screen coordinates rather than world coordinates.

use bevy::app::{PluginGroup, PluginGroupBuilder};

pub mod brush;
pub mod controls;
pub mod debug_window;

pub const WINDOW_TITLE: &str = "Sand";
pub const WINDOW_WIDTH: f32 = 640.0;
pub const WINDOW_HEIGHT: f32 = 480.0;

pub struct GuiPluginGroup;

impl PluginGroup for GuiPluginGroup {
    fn build(self) -> PluginGroupBuilder {
        PluginGroupBuilder::start::<Self>()
            .add(brush::BrushPlugin)
            .add(controls::ControlsPlugin)
            .add(debug_window::DebugWindowPlugin)
    }
}
