//! Common test utilities for integration tests.

#![allow(dead_code)]

use std::time::Duration;

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use eclipse_watch::eclipse::{EclipseDetected, EclipseKind, EclipseWatch};
use eclipse_watch::simulation::SimulationPlugin;
use eclipse_watch::types::FrameSet;

/// Real seconds per simulated frame.
pub const FRAME_SECONDS: f32 = 1.0 / 60.0;

/// Eclipses seen so far, in order.
#[derive(Resource, Default)]
pub struct Detections(pub Vec<EclipseKind>);

fn record_detections(mut reader: MessageReader<EclipseDetected>, mut seen: ResMut<Detections>) {
    seen.0.extend(reader.read().map(|detected| detected.kind));
}

/// Headless app running the simulation pipeline at a fixed frame delta.
pub fn create_simulation_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_secs_f32(
            FRAME_SECONDS,
        )))
        .init_resource::<ButtonInput<KeyCode>>()
        .init_resource::<Detections>()
        .add_plugins(SimulationPlugin)
        .add_systems(Update, record_detections.after(FrameSet::Watch));
    app
}

pub fn press(app: &mut App, key: KeyCode) {
    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .press(key);
}

pub fn release(app: &mut App, key: KeyCode) {
    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .release(key);
}

/// Hold `key` for exactly one frame.
pub fn tap(app: &mut App, key: KeyCode) {
    press(app, key);
    app.update();
    release(app, key);
}

/// Update until `done` holds or `max_frames` pass. Returns the frames run.
pub fn run_until(
    app: &mut App,
    max_frames: usize,
    done: impl Fn(&EclipseWatch) -> bool,
) -> Option<usize> {
    for frame in 0..max_frames {
        if done(app.world().resource::<EclipseWatch>()) {
            return Some(frame);
        }
        app.update();
    }
    None
}
