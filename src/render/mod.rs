//! Rendering systems for the eclipse scene.
//!
//! This module provides the visual representation of the bodies, their
//! textures, the eclipse-driven lighting and viewport tracking.

pub mod bodies;
pub mod lighting;
mod sync;
pub mod textures;
pub mod viewport;

use bevy::prelude::*;

use self::bodies::CelestialBodyPlugin;
use self::lighting::{apply_lighting, LightingPlugin};
use self::sync::sync_body_transforms;
use self::textures::TexturePlugin;
use self::viewport::ViewportPlugin;
use crate::orbit::EvaluateOrbitsSet;
use crate::types::FrameSet;

// Re-export for use in other modules
pub use self::bodies::CelestialBody;
pub use self::lighting::LightingParams;
pub use self::textures::{AssetError, TextureStatus};
pub use self::viewport::ViewportSize;

/// Plugin aggregating all rendering functionality.
pub struct RenderPlugin;

impl Plugin for RenderPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((
            TexturePlugin,
            CelestialBodyPlugin,
            LightingPlugin,
            ViewportPlugin,
        ))
        // Transforms follow the snapshot; lights follow the transforms
        .add_systems(
            Update,
            (
                sync_body_transforms
                    .after(EvaluateOrbitsSet)
                    .in_set(FrameSet::Orbits),
                apply_lighting.in_set(FrameSet::Lighting),
            ),
        );
    }
}
