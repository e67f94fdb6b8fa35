//! Program-level keyboard handling.
//!
//! Eclipse keys are read by the watch system and movement keys by the
//! camera; this module only owns the exit key.

use bevy::prelude::*;

use crate::types::FrameSet;

/// Key that ends the app.
pub const EXIT_KEY: KeyCode = KeyCode::Escape;

/// Plugin providing the exit shortcut.
pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, exit_on_escape.in_set(FrameSet::Input));
    }
}

/// Request app exit while ESC is held. Checked once per frame.
pub fn exit_on_escape(keys: Res<ButtonInput<KeyCode>>, mut exit: MessageWriter<AppExit>) {
    if keys.pressed(EXIT_KEY) {
        info!("Exit requested");
        exit.write(AppExit::Success);
    }
}
