//! Movement domain: plain-data view of the player's rigid body.

use bevy::prelude::*;

/// Snapshot of the physics body the actuators read and write.
/// The host copies it out of the physics engine before an update and back afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyState {
    pub position: Vec2,
    pub velocity: Vec2,
    pub gravity_scale: f32,
    /// Rotation in radians
    pub rotation: f32,
    pub angular_velocity: f32,
    pub inverse_mass: f32,
}

impl Default for BodyState {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            gravity_scale: 1.0,
            rotation: 0.0,
            angular_velocity: 0.0,
            inverse_mass: 1.0,
        }
    }
}

impl BodyState {
    pub fn apply_impulse(&mut self, impulse: Vec2) {
        self.velocity += impulse * self.inverse_mass;
    }

    pub fn is_falling(&self) -> bool {
        self.velocity.y < 0.0
    }
}
