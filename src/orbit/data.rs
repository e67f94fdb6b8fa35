//! Per-body orbit constants for the sun, earth and moon.
//! Units are scene units and radians; rates are radians per scene second.

use std::f32::consts::PI;

use super::ellipse::EllipticalPath;

/// Tilt of the shared orbital plane about the Z axis.
pub const ORBIT_TILT: f32 = 25.0 * PI / 180.0;

/// Semi-major axis shared by earth and moon orbits.
pub const ORBIT_SEMI_MAJOR: f32 = 15.0;

/// Semi-minor axis shared by earth and moon orbits.
pub const ORBIT_SEMI_MINOR: f32 = 12.0;

/// Identifier for bodies in the scene.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BodyId {
    Sun,
    Earth,
    Moon,
}

impl BodyId {
    /// All bodies, in evaluation order (the moon needs earth's position).
    pub const ALL: [BodyId; 3] = [BodyId::Sun, BodyId::Earth, BodyId::Moon];

    /// Human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            BodyId::Sun => "Sun",
            BodyId::Earth => "Earth",
            BodyId::Moon => "Moon",
        }
    }

    /// Orbit constants for this body.
    pub fn params(&self) -> OrbitParams {
        match self {
            BodyId::Sun => SUN,
            BodyId::Earth => EARTH,
            BodyId::Moon => MOON,
        }
    }

    /// Whether the body emits light.
    pub fn is_luminous(&self) -> bool {
        matches!(self, BodyId::Sun)
    }
}

/// Secondary offset that drags a body along with earth.
///
/// Applied after the primary spin: translate by `fraction` of earth's
/// world X/Y, then spin again at `spin_rate`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CarrierOffset {
    pub fraction: f32,
    pub spin_rate: f32,
}

/// Constants describing how a body moves.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitParams {
    /// Elliptical path, or `None` for an origin-centred body
    pub path: Option<EllipticalPath>,
    /// Self-rotation rate
    pub spin_rate: f32,
    /// Nested offset around earth (moon only)
    pub carrier: Option<CarrierOffset>,
    /// Uniform scale
    pub scale: f32,
}

pub const SUN: OrbitParams = OrbitParams {
    path: None,
    spin_rate: 0.5,
    carrier: None,
    scale: 0.8,
};

pub const EARTH: OrbitParams = OrbitParams {
    path: Some(EllipticalPath::new(ORBIT_SEMI_MAJOR, ORBIT_SEMI_MINOR, ORBIT_TILT)),
    spin_rate: 2.0,
    carrier: None,
    scale: 0.5,
};

// Same ellipse as earth; the carrier offset is what makes it circle earth.
pub const MOON: OrbitParams = OrbitParams {
    path: Some(EllipticalPath::new(ORBIT_SEMI_MAJOR, ORBIT_SEMI_MINOR, ORBIT_TILT)),
    spin_rate: 1.5,
    carrier: Some(CarrierOffset {
        fraction: 0.25,
        spin_rate: 1.0,
    }),
    scale: 0.1,
};
