//! Phosphor icon definitions for the HUD.
//!
//! Icons are initialized via `setup_fonts` when the app starts.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

/// Resource to track if fonts have been initialized.
#[derive(Resource, Default)]
pub struct FontsInitialized(pub bool);

/// System to initialize Phosphor icon fonts.
/// Runs in EguiPrimaryContextPass where the egui context is guaranteed to be ready.
pub fn setup_fonts(mut contexts: EguiContexts, mut initialized: ResMut<FontsInitialized>) {
    if initialized.0 {
        return;
    }

    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    let mut fonts = egui::FontDefinitions::default();
    egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);

    ctx.set_fonts(fonts);
    initialized.0 = true;

    info!("Phosphor icon fonts initialized");
}

// Browse all icons at https://phosphoricons.com/

/// Sun icon
pub const SUN: &str = egui_phosphor::regular::SUN;
/// Dimmed sun, shown during a solar eclipse
pub const SUN_DIM: &str = egui_phosphor::regular::SUN_DIM;
/// Moon icon
pub const MOON: &str = egui_phosphor::regular::MOON;
/// Planet/globe icon
pub const PLANET: &str = egui_phosphor::regular::GLOBE;
/// Clock/time icon
pub const CLOCK: &str = egui_phosphor::regular::CLOCK;
/// Fast-forward icon
pub const FAST_FORWARD: &str = egui_phosphor::regular::FAST_FORWARD;
/// Pause icon (frozen clock)
pub const PAUSE: &str = egui_phosphor::regular::PAUSE;
/// Play icon (normal speed)
pub const PLAY: &str = egui_phosphor::regular::PLAY;
/// Watch armed
pub const TARGET: &str = egui_phosphor::regular::CROSSHAIR;
/// Keyboard legend
pub const KEYBOARD: &str = egui_phosphor::regular::KEYBOARD;
/// Warning/alert icon
pub const WARNING: &str = egui_phosphor::regular::WARNING;
