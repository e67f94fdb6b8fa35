//! Headless simulation core: clock, orbits, eclipse watch and exit key.
//!
//! Everything here runs without a window or GPU, so integration tests can
//! drive it with `MinimalPlugins`.

use bevy::prelude::*;

use crate::eclipse::EclipsePlugin;
use crate::input::InputPlugin;
use crate::orbit::OrbitPlugin;
use crate::time::TimePlugin;
use crate::types::FrameSet;

/// Plugin providing the per-frame simulation pipeline.
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            Update,
            (
                FrameSet::Input,
                FrameSet::Watch,
                FrameSet::Clock,
                FrameSet::Orbits,
                FrameSet::Lighting,
            )
                .chain(),
        )
        .add_plugins((InputPlugin, EclipsePlugin, TimePlugin, OrbitPlugin));
    }
}
