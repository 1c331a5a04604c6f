//! Movement domain: tuning and input binding resources.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LocomotionTuning {
    /// Horizontal speed in world units per second
    pub move_speed: f32,
    pub jump_impulse: f32,
    /// Maximum air jumps between landings (0 = no double jump)
    pub max_air_jumps: u32,
    pub wall_jump_horizontal_impulse: f32,
    pub wall_jump_vertical_impulse: f32,
    /// Gravity scale applied while gliding
    pub glide_gravity_scale: f32,
    pub glide_horizontal_multiplier: f32,
    /// Extra speed multiplier for the first moments of a glide
    pub glide_boost_multiplier: f32,
    pub glide_boost_duration: f32,
    /// Gliding is blocked for this long after a wall jump
    pub glide_lockout_after_wall_jump: f32,
    /// Window after a wall jump where reversing input kills horizontal velocity
    pub wall_jump_cancel_duration: f32,
    pub jump_buffer_time: f32,
    pub wall_coyote_time: f32,
    pub away_buffer_time: f32,
    /// Minimum time spent in the wall-jumping state before anything can interrupt it
    pub wall_jump_state_duration: f32,
    /// Contacts closer than this to the body center on an axis are ignored for that axis
    pub contact_offset_epsilon: f32,
    pub ground_normal_min: f32,
    pub wall_normal_min: f32,
    /// Wall contacts with a steeper vertical normal component are corners, not walls
    pub wall_normal_max_vertical: f32,
}

impl Default for LocomotionTuning {
    fn default() -> Self {
        Self {
            move_speed: 5.0,
            jump_impulse: 5.0,
            max_air_jumps: 2,
            wall_jump_horizontal_impulse: 4.5,
            wall_jump_vertical_impulse: 7.5,
            glide_gravity_scale: 0.3,
            glide_horizontal_multiplier: 1.2,
            glide_boost_multiplier: 2.0,
            glide_boost_duration: 0.75,
            glide_lockout_after_wall_jump: 0.4,
            wall_jump_cancel_duration: 0.5,
            jump_buffer_time: 0.12,
            wall_coyote_time: 0.12,
            away_buffer_time: 0.12,
            wall_jump_state_duration: 0.2,
            contact_offset_epsilon: 0.05,
            ground_normal_min: 0.5,
            wall_normal_min: 0.5,
            wall_normal_max_vertical: 0.9,
        }
    }
}

impl LocomotionTuning {
    /// Apex height of a ground jump for a body with the given inverse mass.
    /// Uses h = v^2 / (2g) with v = impulse / mass.
    pub fn single_jump_height(&self, inverse_mass: f32, gravity: f32) -> f32 {
        if gravity <= 0.0 {
            return f32::INFINITY;
        }
        let launch_velocity = self.jump_impulse * inverse_mass;
        launch_velocity * launch_velocity / (2.0 * gravity)
    }

    /// Height reachable by chaining every air jump at the apex of the previous one.
    pub fn max_reachable_height(&self, inverse_mass: f32, gravity: f32) -> f32 {
        self.single_jump_height(inverse_mass, gravity) * (1.0 + self.max_air_jumps as f32)
    }
}

/// Keyboard bindings for the four locomotion controls.
#[derive(Resource, Debug, Clone)]
pub struct LocomotionBindings {
    pub left: Vec<KeyCode>,
    pub right: Vec<KeyCode>,
    pub jump: Vec<KeyCode>,
    pub glide: Vec<KeyCode>,
}

impl Default for LocomotionBindings {
    fn default() -> Self {
        Self {
            left: vec![KeyCode::KeyA, KeyCode::ArrowLeft],
            right: vec![KeyCode::KeyD, KeyCode::ArrowRight],
            jump: vec![KeyCode::KeyW, KeyCode::ArrowUp],
            glide: vec![KeyCode::Space],
        }
    }
}
