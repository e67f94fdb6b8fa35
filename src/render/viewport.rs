//! Window resize tracking.
//!
//! Bevy resizes the surface and the camera aspect itself; this keeps the
//! latest size around for anything that needs it (the HUD shows it).

use bevy::prelude::*;
use bevy::window::WindowResized;

/// Initial window width in pixels.
pub const WINDOW_WIDTH: u32 = 1280;

/// Initial window height in pixels.
pub const WINDOW_HEIGHT: u32 = 720;

/// Last known window size, in logical pixels.
#[derive(Resource, Clone, Copy, Debug, PartialEq)]
pub struct ViewportSize {
    pub width: f32,
    pub height: f32,
}

impl Default for ViewportSize {
    fn default() -> Self {
        Self {
            width: WINDOW_WIDTH as f32,
            height: WINDOW_HEIGHT as f32,
        }
    }
}

impl ViewportSize {
    /// Width over height; 1.0 for a degenerate (minimized) window.
    pub fn aspect_ratio(&self) -> f32 {
        if self.height <= 0.0 || self.width <= 0.0 {
            return 1.0;
        }
        self.width / self.height
    }
}

/// Plugin providing resize tracking.
pub struct ViewportPlugin;

impl Plugin for ViewportPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ViewportSize>()
            .add_systems(PreUpdate, track_viewport);
    }
}

/// Consume resize messages, keeping the latest size.
pub fn track_viewport(
    mut resized: MessageReader<WindowResized>,
    mut viewport: ResMut<ViewportSize>,
) {
    let Some(last) = resized.read().last() else {
        return;
    };
    viewport.width = last.width;
    viewport.height = last.height;
    debug!("Viewport resized to {}x{}", last.width, last.height);
}
