//! Closed-form orbit evaluation for the sun, earth and moon.
//!
//! Every transform is a pure function of scene time. Evaluating the same
//! time twice gives bit-identical matrices; nothing is integrated.

pub mod data;
pub mod ellipse;
mod plugin;

#[cfg(test)]
mod proptest_orbit;

pub use data::{BodyId, CarrierOffset, OrbitParams};
pub use ellipse::EllipticalPath;
pub use plugin::{evaluate_orbits, EvaluateOrbitsSet, OrbitPlugin};

use bevy::math::{Mat4, Vec3};
use bevy::prelude::*;

/// Model matrix of a body at scene time `t`.
///
/// Composition order: tilt, translate to the ellipse point, spin, then the
/// optional carrier offset (translate by a fraction of `earth_translation`
/// in X/Y, spin again), then scale. `earth_translation` is ignored by bodies
/// without a carrier offset.
pub fn body_transform(params: &OrbitParams, t: f32, earth_translation: Vec3) -> Mat4 {
    let mut model = match params.path {
        Some(path) => path.placement(t),
        None => Mat4::IDENTITY,
    };

    model *= Mat4::from_rotation_z(t * params.spin_rate);

    if let Some(carrier) = params.carrier {
        let offset = Vec3::new(
            earth_translation.x * carrier.fraction,
            earth_translation.y * carrier.fraction,
            0.0,
        );
        model *= Mat4::from_translation(offset);
        model *= Mat4::from_rotation_z(t * carrier.spin_rate);
    }

    model * Mat4::from_scale(Vec3::splat(params.scale))
}

/// Self-rotation angle of a body at scene time `t`, in radians.
pub fn spin_angle(body: BodyId, t: f32) -> f32 {
    t * body.params().spin_rate
}

/// Translation column of a model matrix.
pub fn world_position(model: &Mat4) -> Vec3 {
    model.w_axis.truncate()
}

/// Last evaluated model matrices for every body.
///
/// Overwritten each frame; other systems read world positions from here
/// instead of querying the body entities.
#[derive(Resource, Clone, Copy, Debug, PartialEq)]
pub struct OrbitSnapshot {
    /// Scene time the matrices were evaluated at
    pub scene_time: f32,
    pub sun: Mat4,
    pub earth: Mat4,
    pub moon: Mat4,
}

impl Default for OrbitSnapshot {
    fn default() -> Self {
        Self::evaluate(0.0)
    }
}

impl OrbitSnapshot {
    /// Evaluate all bodies at scene time `t`.
    pub fn evaluate(t: f32) -> Self {
        let sun = body_transform(&data::SUN, t, Vec3::ZERO);
        let earth = body_transform(&data::EARTH, t, Vec3::ZERO);
        let moon = body_transform(&data::MOON, t, world_position(&earth));
        Self {
            scene_time: t,
            sun,
            earth,
            moon,
        }
    }

    /// Model matrix of a body.
    pub fn transform(&self, body: BodyId) -> Mat4 {
        match body {
            BodyId::Sun => self.sun,
            BodyId::Earth => self.earth,
            BodyId::Moon => self.moon,
        }
    }

    /// World position of a body.
    pub fn position(&self, body: BodyId) -> Vec3 {
        world_position(&self.transform(body))
    }
}
