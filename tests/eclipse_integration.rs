//! Eclipse watch scenarios run through the full headless frame pipeline.
//!
//! Run with: cargo test --test eclipse_integration

mod common;

use bevy::prelude::*;
use eclipse_watch::eclipse::{is_aligned, EclipseKind, EclipseWatch, WatchMode};
use eclipse_watch::orbit::{BodyId, OrbitSnapshot};
use eclipse_watch::types::{SceneClock, TIME_FACTOR_FAST_FORWARD};

use common::{create_simulation_app, run_until, tap, Detections};

const MAX_FRAMES: usize = 100_000;

fn watch(app: &App) -> EclipseWatch {
    *app.world().resource::<EclipseWatch>()
}

fn clock(app: &App) -> SceneClock {
    *app.world().resource::<SceneClock>()
}

#[test]
fn test_solar_watch_end_to_end() {
    let mut app = create_simulation_app();
    app.update();

    tap(&mut app, KeyCode::KeyG);
    assert_eq!(watch(&app).mode, WatchMode::ArmedSolar);

    let frames = run_until(&mut app, MAX_FRAMES, |w| w.solar_active);
    assert!(frames.is_some(), "no solar eclipse within {} frames", MAX_FRAMES);

    let w = watch(&app);
    assert!(w.solar_active);
    assert!(!w.lunar_active);
    assert!(clock(&app).is_frozen());

    let snapshot = *app.world().resource::<OrbitSnapshot>();
    let earth = snapshot.position(BodyId::Earth);
    let moon = snapshot.position(BodyId::Moon);
    assert!(is_aligned(earth, moon));
    assert!(moon.y.abs() < earth.y.abs());

    let detections = &app.world().resource::<Detections>().0;
    assert_eq!(detections.as_slice(), &[EclipseKind::Solar]);
}

#[test]
fn test_lunar_watch_end_to_end() {
    let mut app = create_simulation_app();
    app.update();

    tap(&mut app, KeyCode::KeyH);
    let frames = run_until(&mut app, MAX_FRAMES, |w| w.lunar_active);
    assert!(frames.is_some(), "no lunar eclipse within {} frames", MAX_FRAMES);

    let w = watch(&app);
    assert!(w.lunar_active);
    assert!(!w.solar_active);
    assert!(clock(&app).is_frozen());
    assert_eq!(
        app.world().resource::<Detections>().0.as_slice(),
        &[EclipseKind::Lunar]
    );
}

#[test]
fn test_solar_flag_survives_frozen_frames() {
    let mut app = create_simulation_app();
    app.update();
    tap(&mut app, KeyCode::KeyG);
    assert!(run_until(&mut app, MAX_FRAMES, |w| w.solar_active).is_some());

    let frozen_at = clock(&app).scene_time;
    for _ in 0..60 {
        app.update();
    }

    assert!(watch(&app).solar_active);
    assert_eq!(clock(&app).scene_time, frozen_at);
    // Only one detection: a frozen clock stops further tests
    assert_eq!(app.world().resource::<Detections>().0.len(), 1);
}

#[test]
fn test_reset_after_eclipse() {
    let mut app = create_simulation_app();
    app.update();
    tap(&mut app, KeyCode::KeyH);
    assert!(run_until(&mut app, MAX_FRAMES, |w| w.lunar_active).is_some());

    tap(&mut app, KeyCode::KeyJ);

    assert_eq!(watch(&app), EclipseWatch::default());
    assert_eq!(clock(&app).time_factor, 1.0);

    let resumed_at = clock(&app).scene_time;
    app.update();
    assert!(clock(&app).scene_time > resumed_at);
}

#[test]
fn test_arming_lunar_clears_solar_flag() {
    let mut app = create_simulation_app();
    app.update();
    tap(&mut app, KeyCode::KeyG);
    assert!(run_until(&mut app, MAX_FRAMES, |w| w.solar_active).is_some());

    tap(&mut app, KeyCode::KeyH);

    let w = watch(&app);
    assert!(!w.solar_active);
    assert_eq!(w.mode, WatchMode::ArmedLunar);
    assert_eq!(clock(&app).time_factor, TIME_FACTOR_FAST_FORWARD);
}
