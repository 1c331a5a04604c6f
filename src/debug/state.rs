//! Debug domain: state for the locomotion debug tooling.

use bevy::prelude::*;

/// Resource tracking debug mode state
#[derive(Resource, Debug, Default)]
pub struct DebugState {
    /// Whether the locomotion readout is visible
    pub show_info: bool,
    /// Message to display temporarily in the readout
    pub status_message: Option<(String, f32)>,
}

impl DebugState {
    /// Set a status message that will fade after a duration
    pub fn set_message(&mut self, message: impl Into<String>, duration: f32) {
        self.status_message = Some((message.into(), duration));
    }

    pub fn tick_message(&mut self, dt: f32) {
        let expired = match &mut self.status_message {
            Some((_, remaining)) => {
                *remaining -= dt;
                *remaining <= 0.0
            }
            None => false,
        };
        if expired {
            self.status_message = None;
        }
    }
}

/// Marker for the locomotion readout text
#[derive(Component, Debug)]
pub struct DebugInfoOverlay;
