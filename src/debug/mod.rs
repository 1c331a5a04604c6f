//! Debug domain: locomotion readout and hotkeys for tuning the controller by hand.
//!
//! - F1 toggles the readout (state, contacts, timers, glide boost)
//! - F2 requests WallSliding
//! - F3 reloads the tuning file

mod state;
mod systems;

pub use state::{DebugInfoOverlay, DebugState};

use bevy::prelude::*;

use crate::debug::systems::{
    handle_debug_hotkeys, toggle_debug_info, update_debug_info_overlay, update_status_message,
};

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>()
            .add_systems(
                Update,
                (toggle_debug_info, handle_debug_hotkeys, update_status_message).chain(),
            )
            .add_systems(
                Update,
                update_debug_info_overlay.run_if(|state: Res<DebugState>| state.show_info),
            );
    }
}
