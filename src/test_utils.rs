//! Test utilities for the eclipse scene.
//!
//! Provides fixtures for hand-built alignments and a frame driver that runs
//! the watch/clock/orbit pipeline in the same order as the app, without Bevy.

use bevy::math::Vec3;

use crate::eclipse::{EclipseKeys, EclipseKind, EclipseWatch};
use crate::orbit::{BodyId, OrbitSnapshot};
use crate::types::SceneClock;

/// Fixtures for key snapshots and body positions.
pub mod fixtures {
    use super::*;

    pub fn keys(arm_solar: bool, arm_lunar: bool, reset: bool) -> EclipseKeys {
        EclipseKeys {
            arm_solar,
            arm_lunar,
            reset,
        }
    }

    pub fn solar_key() -> EclipseKeys {
        keys(true, false, false)
    }

    pub fn lunar_key() -> EclipseKeys {
        keys(false, true, false)
    }

    pub fn reset_key() -> EclipseKeys {
        keys(false, false, true)
    }

    /// Moon placed on the earth-sun line at `fraction` of earth's distance.
    ///
    /// Below 1.0 the moon sits between sun and earth, above 1.0 beyond earth.
    pub fn moon_on_line(earth: Vec3, fraction: f32) -> Vec3 {
        earth * fraction
    }
}

/// Runs frames in app order: watch step, clock advance, orbit evaluation.
pub struct FrameDriver {
    pub clock: SceneClock,
    pub watch: EclipseWatch,
    pub snapshot: OrbitSnapshot,
    /// Real seconds per frame
    pub dt: f32,
    pub frames: usize,
}

impl FrameDriver {
    pub fn new(dt: f32) -> Self {
        Self {
            clock: SceneClock::default(),
            watch: EclipseWatch::default(),
            snapshot: OrbitSnapshot::evaluate(0.0),
            dt,
            frames: 0,
        }
    }

    /// Run one frame with the given keys held.
    pub fn frame(&mut self, keys: EclipseKeys) -> Option<EclipseKind> {
        let earth = self.snapshot.position(BodyId::Earth);
        let moon = self.snapshot.position(BodyId::Moon);
        let detected = self.watch.step(keys, &mut self.clock, earth, moon);
        self.clock.advance(self.dt);
        self.snapshot = OrbitSnapshot::evaluate(self.clock.scene_time);
        self.frames += 1;
        detected
    }

    /// Run idle frames until an eclipse is detected or `max_frames` pass.
    pub fn run_until_eclipse(&mut self, max_frames: usize) -> Option<EclipseKind> {
        (0..max_frames).find_map(|_| self.frame(EclipseKeys::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eclipse::{is_aligned, WatchMode};
    use crate::types::TIME_FACTOR_FAST_FORWARD;

    const DT: f32 = 1.0 / 60.0;
    const MAX_FRAMES: usize = 200_000;

    #[test]
    fn test_fixture_alignment() {
        let earth = Vec3::new(12.0, 4.0, 0.0);
        assert!(is_aligned(earth, fixtures::moon_on_line(earth, 0.5)));
        assert!(is_aligned(earth, fixtures::moon_on_line(earth, 1.5)));
    }

    #[test]
    fn test_driver_idle_advances_at_normal_speed() {
        let mut driver = FrameDriver::new(0.5);
        for _ in 0..4 {
            assert_eq!(driver.frame(EclipseKeys::default()), None);
        }
        assert_eq!(driver.clock.scene_time, 2.0);
        assert_eq!(driver.snapshot.scene_time, 2.0);
    }

    #[test]
    fn test_solar_watch_finds_solar_eclipse() {
        let mut driver = FrameDriver::new(DT);
        driver.frame(fixtures::solar_key());
        assert_eq!(driver.clock.time_factor, TIME_FACTOR_FAST_FORWARD);

        let kind = driver.run_until_eclipse(MAX_FRAMES);

        assert_eq!(kind, Some(EclipseKind::Solar));
        assert!(driver.watch.solar_active);
        assert!(!driver.watch.lunar_active);
        assert!(driver.clock.is_frozen());

        // Positions at detection satisfy the solar condition
        let earth = driver.snapshot.position(BodyId::Earth);
        let moon = driver.snapshot.position(BodyId::Moon);
        assert!(is_aligned(earth, moon));
        assert!(moon.y.abs() < earth.y.abs());
    }

    #[test]
    fn test_lunar_watch_finds_lunar_eclipse() {
        let mut driver = FrameDriver::new(DT);
        driver.frame(fixtures::lunar_key());

        let kind = driver.run_until_eclipse(MAX_FRAMES);

        assert_eq!(kind, Some(EclipseKind::Lunar));
        assert!(driver.watch.lunar_active);
        assert!(!driver.watch.solar_active);
        assert!(driver.clock.is_frozen());

        let earth = driver.snapshot.position(BodyId::Earth);
        let moon = driver.snapshot.position(BodyId::Moon);
        assert!(is_aligned(earth, moon));
        assert!(moon.y.abs() > earth.y.abs());
    }

    #[test]
    fn test_frozen_scene_stays_put_until_reset() {
        let mut driver = FrameDriver::new(DT);
        driver.frame(fixtures::solar_key());
        assert!(driver.run_until_eclipse(MAX_FRAMES).is_some());

        let frozen_at = driver.clock.scene_time;
        for _ in 0..120 {
            driver.frame(EclipseKeys::default());
        }
        assert_eq!(driver.clock.scene_time, frozen_at);
        assert!(driver.watch.solar_active);

        driver.frame(fixtures::reset_key());
        assert_eq!(driver.watch.mode, WatchMode::Normal);
        assert!(!driver.watch.solar_active);
        assert!(driver.clock.scene_time > frozen_at);
    }

    #[test]
    fn test_normal_mode_never_freezes() {
        let mut driver = FrameDriver::new(DT);
        assert_eq!(driver.run_until_eclipse(20_000), None);
        assert!(!driver.clock.is_frozen());
    }
}
