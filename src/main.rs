use bevy::diagnostic::FrameTimeDiagnosticsPlugin;
use bevy::{log::LogPlugin, prelude::*, window::WindowResolution};
use bevy_egui::EguiPlugin;
use rand::rngs::StdRng;
use rand::SeedableRng;

use falling_sand::entities::sandbox::SandBoxData;
use falling_sand::entities::EntitiesPluginGroup;
use falling_sand::gui::{GuiPluginGroup, WINDOW_HEIGHT, WINDOW_TITLE, WINDOW_WIDTH};
use falling_sand::physics::fallingsand::engine::builder::{
    SandEngineBuilder, SandEngineConfigError,
};

fn main() -> Result<(), SandEngineConfigError> {
    let engine = SandEngineBuilder::new().build(StdRng::from_entropy())?;

    App::new()
        .add_plugins(
            DefaultPlugins
                .set(LogPlugin {
                    level: bevy::log::Level::INFO,
                    ..Default::default()
                })
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: WINDOW_TITLE.to_string(),
                        resolution: WindowResolution::new(WINDOW_WIDTH, WINDOW_HEIGHT),
                        ..Default::default()
                    }),
                    ..Default::default()
                })
                .set(ImagePlugin::default_nearest()),
        )
        .add_plugins(EguiPlugin)
        .add_plugins(FrameTimeDiagnosticsPlugin)
        .insert_resource(SandBoxData::new(engine))
        .add_plugins(EntitiesPluginGroup)
        .add_plugins(GuiPluginGroup)
        .run();
    Ok(())
}
