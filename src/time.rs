//! Scene clock advancement.
//!
//! Handles progression of scene time based on the current time factor.

use bevy::prelude::*;

use crate::types::{FrameSet, SceneClock};

/// Plugin providing scene clock advancement.
pub struct TimePlugin;

impl Plugin for TimePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SceneClock>()
            .add_systems(Update, advance_clock.in_set(FrameSet::Clock));
    }
}

/// Advance scene time by the real frame delta scaled by the time factor.
pub fn advance_clock(mut clock: ResMut<SceneClock>, time: Res<Time>) {
    // Skip the write when frozen so change detection stays quiet
    if clock.is_frozen() {
        return;
    }
    clock.advance(time.delta_secs());
}
