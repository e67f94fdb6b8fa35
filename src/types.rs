//! Core simulation types and constants shared by the frame systems.

use bevy::prelude::*;

/// System sets for the per-frame pipeline.
///
/// The sets are chained in declaration order: input is read first, the
/// eclipse watch reacts to it using last frame's positions, the clock
/// advances, orbits are re-evaluated, and lighting follows the new positions.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrameSet {
    /// Keyboard, mouse and camera handling
    Input,
    /// Eclipse state machine
    Watch,
    /// Scene clock advancement
    Clock,
    /// Orbit evaluation and transform sync
    Orbits,
    /// Light and tint updates derived from the eclipse flags
    Lighting,
}

/// Time factor while the scene runs at normal speed.
pub const TIME_FACTOR_NORMAL: f32 = 1.0;

/// Time factor while an eclipse watch searches for an alignment.
pub const TIME_FACTOR_FAST_FORWARD: f32 = 5.0;

/// Time factor of a frozen clock.
pub const TIME_FACTOR_FROZEN: f32 = 0.0;

/// Simulation clock resource.
///
/// `scene_time` is the single input of the orbit evaluator. It only ever
/// grows; a zero `time_factor` freezes it.
#[derive(Resource, Clone, Copy, Debug, PartialEq)]
pub struct SceneClock {
    /// Accumulated scene time in scene seconds
    pub scene_time: f32,
    /// Scene seconds per real second
    pub time_factor: f32,
}

impl Default for SceneClock {
    fn default() -> Self {
        Self {
            scene_time: 0.0,
            time_factor: TIME_FACTOR_NORMAL,
        }
    }
}

impl SceneClock {
    /// Create a clock at a specific scene time, running at normal speed.
    pub fn at(scene_time: f32) -> Self {
        Self {
            scene_time,
            time_factor: TIME_FACTOR_NORMAL,
        }
    }

    /// Advance by `real_delta` real seconds scaled by the time factor.
    ///
    /// Negative or non-finite deltas are ignored.
    pub fn advance(&mut self, real_delta: f32) {
        if !real_delta.is_finite() || real_delta <= 0.0 {
            return;
        }
        self.scene_time += real_delta * self.time_factor;
    }

    /// Whether the clock is currently stopped.
    pub fn is_frozen(&self) -> bool {
        self.time_factor == TIME_FACTOR_FROZEN
    }

    /// Stop the clock until the factor is set again.
    pub fn freeze(&mut self) {
        self.time_factor = TIME_FACTOR_FROZEN;
    }
}
