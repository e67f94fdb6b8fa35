//! Eclipse watch state machine.
//!
//! G arms a solar watch and H a lunar watch: both fast-forward the scene
//! clock until earth and moon line up with the sun, then freeze it and latch
//! an eclipse flag. J resets everything. The flags stay set until reset or
//! until the opposite watch is armed, whatever the clock does afterwards.

use bevy::math::Vec3;
use bevy::prelude::*;

use crate::orbit::{BodyId, OrbitSnapshot};
use crate::types::{
    FrameSet, SceneClock, TIME_FACTOR_FAST_FORWARD, TIME_FACTOR_NORMAL,
};

/// Key arming the solar watch.
pub const ARM_SOLAR_KEY: KeyCode = KeyCode::KeyG;

/// Key arming the lunar watch.
pub const ARM_LUNAR_KEY: KeyCode = KeyCode::KeyH;

/// Key resetting the watch and the clock speed.
pub const RESET_KEY: KeyCode = KeyCode::KeyJ;

/// Which alignment the watch is searching for.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WatchMode {
    /// Plain playback, no alignment tests.
    #[default]
    Normal,
    /// Fast-forwarding until the moon passes between sun and earth.
    ArmedSolar,
    /// Fast-forwarding until the moon passes behind earth.
    ArmedLunar,
}

impl WatchMode {
    pub fn label(&self) -> &'static str {
        match self {
            WatchMode::Normal => "Normal",
            WatchMode::ArmedSolar => "Solar watch",
            WatchMode::ArmedLunar => "Lunar watch",
        }
    }
}

/// Kind of eclipse detected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EclipseKind {
    /// Moon between sun and earth
    Solar,
    /// Moon beyond earth, in its shadow
    Lunar,
}

impl EclipseKind {
    /// Console label printed on detection ("KOSOF" / "KHOSOF").
    pub fn label(&self) -> &'static str {
        match self {
            EclipseKind::Solar => "KOSOF",
            EclipseKind::Lunar => "KHOSOF",
        }
    }
}

/// Message sent on the frame an eclipse is detected.
#[derive(Message, Clone, Copy, Debug)]
pub struct EclipseDetected {
    pub kind: EclipseKind,
    pub scene_time: f32,
}

/// Held state of the watch keys for one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EclipseKeys {
    pub arm_solar: bool,
    pub arm_lunar: bool,
    pub reset: bool,
}

impl EclipseKeys {
    /// Snapshot the watch keys. Keys are polled while held, not on press edges.
    pub fn from_input(keys: &ButtonInput<KeyCode>) -> Self {
        Self {
            arm_solar: keys.pressed(ARM_SOLAR_KEY),
            arm_lunar: keys.pressed(ARM_LUNAR_KEY),
            reset: keys.pressed(RESET_KEY),
        }
    }
}

/// Eclipse watch resource: current mode plus the two sticky display flags.
#[derive(Resource, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EclipseWatch {
    pub mode: WatchMode,
    /// Dims the point lights while set
    pub solar_active: bool,
    /// Tints the moon while set
    pub lunar_active: bool,
}

/// Floored 2D cross product of earth and moon world positions (X/Y only).
///
/// Zero means earth, moon and the origin are collinear within the floor's
/// precision, i.e. the cross product lies in `[0, 1)`.
pub fn alignment_residual(earth: Vec3, moon: Vec3) -> f32 {
    (earth.y * moon.x - earth.x * moon.y).floor()
}

/// Whether earth and moon line up with the sun at the origin.
pub fn is_aligned(earth: Vec3, moon: Vec3) -> bool {
    alignment_residual(earth, moon) == 0.0
}

impl EclipseWatch {
    /// Advance the state machine by one frame.
    ///
    /// `earth` and `moon` are the world positions from the latest orbit
    /// evaluation. The rules run in a fixed order (solar arm, solar test,
    /// lunar arm, lunar test, reset), so holding several keys resolves to
    /// the later rule. Returns the eclipse detected this frame, if any.
    pub fn step(
        &mut self,
        keys: EclipseKeys,
        clock: &mut SceneClock,
        earth: Vec3,
        moon: Vec3,
    ) -> Option<EclipseKind> {
        let mut detected = None;

        if keys.arm_solar {
            self.mode = WatchMode::ArmedSolar;
            self.lunar_active = false;
            clock.time_factor = TIME_FACTOR_FAST_FORWARD;
        }

        if self.mode == WatchMode::ArmedSolar
            && !clock.is_frozen()
            && is_aligned(earth, moon)
            && moon.y.abs() < earth.y.abs()
        {
            self.solar_active = true;
            clock.freeze();
            detected = Some(EclipseKind::Solar);
        }

        if keys.arm_lunar {
            self.mode = WatchMode::ArmedLunar;
            self.solar_active = false;
            clock.time_factor = TIME_FACTOR_FAST_FORWARD;
        }

        if self.mode == WatchMode::ArmedLunar
            && !clock.is_frozen()
            && is_aligned(earth, moon)
            && moon.y.abs() > earth.y.abs()
        {
            self.lunar_active = true;
            clock.freeze();
            detected = Some(EclipseKind::Lunar);
        }

        if keys.reset {
            self.reset(clock);
        }

        detected
    }

    /// Return to `Normal`, clear both flags and restore normal speed.
    pub fn reset(&mut self, clock: &mut SceneClock) {
        *self = Self::default();
        clock.time_factor = TIME_FACTOR_NORMAL;
    }

    /// Whether either watch is armed.
    pub fn is_armed(&self) -> bool {
        self.mode != WatchMode::Normal
    }
}

/// Plugin providing the eclipse watch.
pub struct EclipsePlugin;

impl Plugin for EclipsePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<EclipseWatch>()
            .add_message::<EclipseDetected>()
            .add_systems(Update, watch_for_eclipse.in_set(FrameSet::Watch));
    }
}

/// Feed the held keys and last frame's positions into the watch.
pub fn watch_for_eclipse(
    keys: Res<ButtonInput<KeyCode>>,
    snapshot: Res<OrbitSnapshot>,
    mut clock: ResMut<SceneClock>,
    mut watch: ResMut<EclipseWatch>,
    mut detected: MessageWriter<EclipseDetected>,
) {
    let input = EclipseKeys::from_input(&keys);
    let earth = snapshot.position(BodyId::Earth);
    let moon = snapshot.position(BodyId::Moon);

    // Work on copies so idle frames don't trip change detection
    let mut next_watch = *watch;
    let mut next_clock = *clock;
    let kind = next_watch.step(input, &mut next_clock, earth, moon);

    if next_watch != *watch {
        if next_watch.mode != watch.mode {
            info!("Eclipse watch: {}", next_watch.mode.label());
        }
        *watch = next_watch;
    }
    if next_clock != *clock {
        *clock = next_clock;
    }

    if let Some(kind) = kind {
        info!(
            "{} at scene time {:.3} (earth {:?}, moon {:?})",
            kind.label(),
            clock.scene_time,
            earth,
            moon
        );
        detected.write(EclipseDetected {
            kind,
            scene_time: clock.scene_time,
        });
    }
}
