//! Status overlay in the top-left corner.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use super::icons;
use crate::eclipse::{EclipseKind, EclipseWatch};
use crate::render::{TextureStatus, ViewportSize};
use crate::types::SceneClock;

/// Clock state as shown to the user.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClockBadge {
    Frozen,
    Normal,
    FastForward,
}

impl ClockBadge {
    pub fn from_clock(clock: &SceneClock) -> Self {
        if clock.is_frozen() {
            ClockBadge::Frozen
        } else if clock.time_factor > 1.0 {
            ClockBadge::FastForward
        } else {
            ClockBadge::Normal
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            ClockBadge::Frozen => icons::PAUSE,
            ClockBadge::Normal => icons::PLAY,
            ClockBadge::FastForward => icons::FAST_FORWARD,
        }
    }
}

/// Active eclipse banner, if any. Solar wins when both flags are set.
pub fn active_eclipse(watch: &EclipseWatch) -> Option<EclipseKind> {
    if watch.solar_active {
        Some(EclipseKind::Solar)
    } else if watch.lunar_active {
        Some(EclipseKind::Lunar)
    } else {
        None
    }
}

const KEY_LEGEND: [(&str, &str); 5] = [
    ("W A S D", "fly"),
    ("G", "solar watch"),
    ("H", "lunar watch"),
    ("J", "reset"),
    ("Esc", "quit"),
];

/// System that renders the HUD.
pub fn hud_system(
    mut contexts: EguiContexts,
    clock: Res<SceneClock>,
    watch: Res<EclipseWatch>,
    textures: Res<TextureStatus>,
    viewport: Res<ViewportSize>,
) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    let badge = ClockBadge::from_clock(&clock);

    egui::Area::new(egui::Id::new("eclipse_hud"))
        .anchor(egui::Align2::LEFT_TOP, egui::vec2(12.0, 12.0))
        .show(ctx, |ui| {
            egui::Frame::NONE
                .fill(egui::Color32::from_rgba_unmultiplied(20, 20, 30, 200))
                .inner_margin(egui::Margin::same(10))
                .corner_radius(6.0)
                .show(ui, |ui| {
                    ui.label(
                        egui::RichText::new(format!(
                            "{} t = {:>8.2}   {} x{:.1}",
                            icons::CLOCK,
                            clock.scene_time,
                            badge.icon(),
                            clock.time_factor
                        ))
                        .monospace(),
                    );

                    let mode_icon = if watch.is_armed() {
                        icons::TARGET
                    } else {
                        icons::PLANET
                    };
                    ui.label(format!("{} {}", mode_icon, watch.mode.label()));

                    match active_eclipse(&watch) {
                        Some(EclipseKind::Solar) => {
                            ui.colored_label(
                                egui::Color32::from_rgb(255, 200, 80),
                                format!(
                                    "{} Solar eclipse ({})",
                                    icons::SUN_DIM,
                                    EclipseKind::Solar.label()
                                ),
                            );
                        }
                        Some(EclipseKind::Lunar) => {
                            ui.colored_label(
                                egui::Color32::from_rgb(170, 170, 200),
                                format!(
                                    "{} Lunar eclipse ({})",
                                    icons::MOON,
                                    EclipseKind::Lunar.label()
                                ),
                            );
                        }
                        None => {
                            ui.weak(format!("{} No eclipse", icons::SUN));
                        }
                    }

                    if !textures.failed.is_empty() {
                        ui.colored_label(
                            egui::Color32::from_rgb(230, 120, 80),
                            format!(
                                "{} {} texture(s) missing",
                                icons::WARNING,
                                textures.failed.len()
                            ),
                        );
                    }

                    ui.separator();
                    ui.weak(format!("{} keys", icons::KEYBOARD));
                    for (key, action) in KEY_LEGEND {
                        ui.label(
                            egui::RichText::new(format!("{key:>7}  {action}"))
                                .monospace()
                                .small(),
                        );
                    }
                    ui.weak(format!(
                        "{:.0}x{:.0} ({:.2}:1)",
                        viewport.width,
                        viewport.height,
                        viewport.aspect_ratio()
                    ));
                });
        });
}
