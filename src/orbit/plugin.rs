//! Bevy wiring for the orbit evaluator.

use bevy::prelude::*;

use super::OrbitSnapshot;
use crate::types::{FrameSet, SceneClock};

/// System set label for the snapshot update (runs before transform sync).
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct EvaluateOrbitsSet;

/// Plugin keeping `OrbitSnapshot` in step with the scene clock.
pub struct OrbitPlugin;

impl Plugin for OrbitPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<OrbitSnapshot>().add_systems(
            Update,
            evaluate_orbits
                .in_set(EvaluateOrbitsSet)
                .in_set(FrameSet::Orbits),
        );
    }
}

/// Re-evaluate every body at the current scene time.
pub fn evaluate_orbits(clock: Res<SceneClock>, mut snapshot: ResMut<OrbitSnapshot>) {
    *snapshot = OrbitSnapshot::evaluate(clock.scene_time);
}
