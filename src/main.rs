//! Eclipse Watch - sun, earth and moon demo
//!
//! Renders three orbiting bodies and watches for solar and lunar eclipses.
//! G/H arm a watch, J resets, W/A/S/D and the mouse fly the camera.

use bevy::prelude::*;
use bevy::window::WindowResolution;
use bevy_egui::EguiPlugin;

use eclipse_watch::camera::CameraPlugin;
use eclipse_watch::render::viewport::{WINDOW_HEIGHT, WINDOW_WIDTH};
use eclipse_watch::render::RenderPlugin;
use eclipse_watch::simulation::SimulationPlugin;
use eclipse_watch::ui::UiPlugin;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Eclipse Watch".into(),
                resolution: WindowResolution::new(WINDOW_WIDTH, WINDOW_HEIGHT),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(EguiPlugin::default())
        // Simulation first: rendering reads its resources at startup
        .add_plugins(SimulationPlugin)
        .add_plugins((CameraPlugin, RenderPlugin, UiPlugin))
        .run();
}
