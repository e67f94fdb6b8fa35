//! Parametric elliptical path in a tilted plane.

use bevy::math::{Mat4, Vec3};

/// An axis-aligned ellipse `(a·cos t, b·sin t, 0)` rotated about Z by `tilt`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EllipticalPath {
    /// Semi-major axis (along local X)
    pub semi_major: f32,
    /// Semi-minor axis (along local Y)
    pub semi_minor: f32,
    /// Rotation of the path about Z, in radians
    pub tilt: f32,
}

impl EllipticalPath {
    pub const fn new(semi_major: f32, semi_minor: f32, tilt: f32) -> Self {
        Self {
            semi_major,
            semi_minor,
            tilt,
        }
    }

    /// Point on the untilted ellipse at parameter `t`.
    pub fn local_point(&self, t: f32) -> Vec3 {
        Vec3::new(self.semi_major * t.cos(), self.semi_minor * t.sin(), 0.0)
    }

    /// Tilt rotation followed by translation to the ellipse point.
    ///
    /// This is the leading factor of every orbiting body's model matrix.
    pub fn placement(&self, t: f32) -> Mat4 {
        Mat4::from_rotation_z(self.tilt) * Mat4::from_translation(self.local_point(t))
    }
}
