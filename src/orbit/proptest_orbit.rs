//! Property-based tests for orbit evaluation using proptest.
//!
//! These tests verify properties that must hold for every scene time.

use bevy::math::Vec3;
use proptest::prelude::*;

use super::data::{ORBIT_SEMI_MAJOR, ORBIT_SEMI_MINOR};
use super::{spin_angle, BodyId, OrbitSnapshot};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Evaluating twice at the same time must give bit-identical matrices.
    #[test]
    fn prop_evaluation_is_deterministic(t in 0.0f32..10_000.0) {
        let a = OrbitSnapshot::evaluate(t);
        let b = OrbitSnapshot::evaluate(t);
        for body in BodyId::ALL {
            prop_assert_eq!(
                a.transform(body).to_cols_array(),
                b.transform(body).to_cols_array()
            );
        }
    }

    /// The sun never leaves the origin.
    #[test]
    fn prop_sun_stays_at_origin(t in 0.0f32..10_000.0) {
        prop_assert_eq!(OrbitSnapshot::evaluate(t).position(BodyId::Sun), Vec3::ZERO);
    }

    /// The sun's spin angle grows with time.
    #[test]
    fn prop_sun_spin_monotonic(t in 0.0f32..1_000.0, dt in 0.001f32..100.0) {
        prop_assert!(spin_angle(BodyId::Sun, t + dt) > spin_angle(BodyId::Sun, t));
    }

    /// Earth's distance from the sun stays between the ellipse axes.
    ///
    /// The tilt is a rotation, so it preserves the ellipse point's length.
    #[test]
    fn prop_earth_distance_within_axes(t in 0.0f32..1_000.0) {
        let r = OrbitSnapshot::evaluate(t).position(BodyId::Earth).length();
        prop_assert!(r >= ORBIT_SEMI_MINOR - 1e-3, "r={} below semi-minor", r);
        prop_assert!(r <= ORBIT_SEMI_MAJOR + 1e-3, "r={} above semi-major", r);
    }

    /// Every body stays in the z = 0 plane.
    #[test]
    fn prop_bodies_stay_planar(t in 0.0f32..1_000.0) {
        let snapshot = OrbitSnapshot::evaluate(t);
        for body in BodyId::ALL {
            prop_assert!(snapshot.position(body).z.abs() < 1e-4);
        }
    }
}
