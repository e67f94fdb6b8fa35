//! Eclipse Watch - sun, earth and moon demo
//!
//! A library crate providing the simulation and rendering plugins
//! for testing and integration purposes.

pub mod camera;
pub mod eclipse;
pub mod input;
pub mod orbit;
pub mod render;
pub mod simulation;
pub mod time;
pub mod types;
pub mod ui;

#[cfg(test)]
pub mod test_utils;
