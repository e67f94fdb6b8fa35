//! Free-fly camera for viewing the sun, earth and moon.
//!
//! W/A/S/D move along the view and right vectors, mouse motion turns the
//! camera. The cursor is locked while the app runs.

use bevy::{
    input::mouse::AccumulatedMouseMotion,
    prelude::*,
    window::{CursorGrabMode, CursorOptions, PrimaryWindow},
};

use crate::types::FrameSet;

/// Initial camera position, looking down -Z at the sun.
pub const START_POSITION: Vec3 = Vec3::new(0.0, 0.0, 30.0);

/// Vertical field of view in degrees.
pub const FOV_DEGREES: f32 = 45.0;

/// Near clip plane.
pub const NEAR: f32 = 0.1;

/// Far clip plane.
pub const FAR: f32 = 100.0;

/// Movement speed in scene units per real second.
pub const MOVE_SPEED: f32 = 2.5;

/// Degrees of turn per pixel of mouse motion.
pub const MOUSE_SENSITIVITY: f32 = 0.1;

/// Pitch limit in degrees, short of straight up/down.
pub const PITCH_LIMIT: f32 = 89.0;

/// Marker component for the main camera.
#[derive(Component)]
pub struct MainCamera;

/// Direction of a movement key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Movement {
    Forward,
    Backward,
    Left,
    Right,
}

/// Yaw/pitch fly camera state. Angles are in degrees.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct FlyCamera {
    pub yaw: f32,
    pub pitch: f32,
    pub speed: f32,
    pub sensitivity: f32,
}

impl Default for FlyCamera {
    fn default() -> Self {
        // yaw -90 faces -Z
        Self {
            yaw: -90.0,
            pitch: 0.0,
            speed: MOVE_SPEED,
            sensitivity: MOUSE_SENSITIVITY,
        }
    }
}

impl FlyCamera {
    /// Unit vector the camera looks along.
    pub fn front(&self) -> Vec3 {
        let (yaw, pitch) = (self.yaw.to_radians(), self.pitch.to_radians());
        Vec3::new(yaw.cos() * pitch.cos(), pitch.sin(), yaw.sin() * pitch.cos()).normalize()
    }

    /// Unit vector to the camera's right, kept horizontal.
    pub fn right(&self) -> Vec3 {
        self.front().cross(Vec3::Y).normalize()
    }

    /// Displacement for one movement key held for `dt` seconds.
    pub fn displacement(&self, movement: Movement, dt: f32) -> Vec3 {
        let distance = self.speed * dt;
        match movement {
            Movement::Forward => self.front() * distance,
            Movement::Backward => -self.front() * distance,
            Movement::Left => -self.right() * distance,
            Movement::Right => self.right() * distance,
        }
    }

    /// Turn by a mouse offset in pixels. Positive `dy` looks up.
    pub fn look(&mut self, dx: f32, dy: f32) {
        self.yaw += dx * self.sensitivity;
        self.pitch = (self.pitch + dy * self.sensitivity).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    /// Orientation matching `front()` with +Y up.
    pub fn rotation(&self) -> Quat {
        Transform::IDENTITY.looking_to(self.front(), Vec3::Y).rotation
    }
}

/// Tracks whether the first mouse sample has been consumed.
///
/// The first sample after startup carries the jump from wherever the
/// cursor was, so it is dropped.
#[derive(Resource, Default)]
pub struct MouseLook {
    pub primed: bool,
}

/// Plugin providing camera functionality.
pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MouseLook>()
            .add_systems(Startup, (setup_camera, grab_cursor))
            .add_systems(Update, (camera_look, camera_move).chain().in_set(FrameSet::Input));
    }
}

/// Spawn the main camera with a perspective projection.
fn setup_camera(mut commands: Commands) {
    let fly = FlyCamera::default();
    commands.spawn((
        Camera3d::default(),
        Projection::from(PerspectiveProjection {
            fov: FOV_DEGREES.to_radians(),
            near: NEAR,
            far: FAR,
            ..default()
        }),
        Transform::from_translation(START_POSITION).with_rotation(fly.rotation()),
        fly,
        MainCamera,
    ));
}

/// Lock and hide the cursor on the primary window.
fn grab_cursor(mut cursors: Query<&mut CursorOptions, With<PrimaryWindow>>) {
    let Ok(mut cursor) = cursors.single_mut() else {
        return;
    };
    cursor.grab_mode = CursorGrabMode::Locked;
    cursor.visible = false;
}

/// Turn the camera from accumulated mouse motion.
pub fn camera_look(
    mouse_motion: Res<AccumulatedMouseMotion>,
    mut mouse_look: ResMut<MouseLook>,
    mut camera_query: Query<(&mut Transform, &mut FlyCamera), With<MainCamera>>,
) {
    if mouse_motion.delta == Vec2::ZERO {
        return;
    }

    if !mouse_look.primed {
        mouse_look.primed = true;
        return;
    }

    let Ok((mut transform, mut fly)) = camera_query.single_mut() else {
        return;
    };

    // Screen y grows downward
    fly.look(mouse_motion.delta.x, -mouse_motion.delta.y);
    transform.rotation = fly.rotation();
}

/// Move the camera with W/A/S/D, scaled by the real frame delta.
pub fn camera_move(
    keys: Res<ButtonInput<KeyCode>>,
    time: Res<Time>,
    mut camera_query: Query<(&mut Transform, &FlyCamera), With<MainCamera>>,
) {
    let Ok((mut transform, fly)) = camera_query.single_mut() else {
        return;
    };

    let dt = time.delta_secs();
    for (key, movement) in [
        (KeyCode::KeyW, Movement::Forward),
        (KeyCode::KeyS, Movement::Backward),
        (KeyCode::KeyA, Movement::Left),
        (KeyCode::KeyD, Movement::Right),
    ] {
        if keys.pressed(key) {
            transform.translation += fly.displacement(movement, dt);
        }
    }
}
