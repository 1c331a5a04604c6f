//! Movement domain: jump impulses, air-jump budget and glide lockout.

use bevy::prelude::*;

use crate::movement::{BodyState, LocomotionTuning, MovementActuator, TimerBank, TimerId};

#[derive(Debug, Clone)]
pub struct JumpActuator {
    jump_impulse: f32,
    max_air_jumps: u32,
    wall_jump_horizontal_impulse: f32,
    wall_jump_vertical_impulse: f32,
    air_jumps_used: u32,
}

impl JumpActuator {
    pub fn new(tuning: &LocomotionTuning) -> Self {
        Self {
            jump_impulse: tuning.jump_impulse,
            max_air_jumps: tuning.max_air_jumps,
            wall_jump_horizontal_impulse: tuning.wall_jump_horizontal_impulse,
            wall_jump_vertical_impulse: tuning.wall_jump_vertical_impulse,
            air_jumps_used: 0,
        }
    }

    pub fn air_jumps_used(&self) -> u32 {
        self.air_jumps_used
    }

    pub fn max_air_jumps(&self) -> u32 {
        self.max_air_jumps
    }

    pub fn is_glide_locked(&self, timers: &TimerBank) -> bool {
        timers.is_active(TimerId::GlideLockout)
    }

    pub fn can_ground_jump(&self, is_grounded: bool) -> bool {
        is_grounded
    }

    pub fn can_air_jump(&self) -> bool {
        self.air_jumps_used < self.max_air_jumps
    }

    pub fn can_wall_jump(&self, touching_wall: bool) -> bool {
        touching_wall
    }

    pub fn perform_ground_jump(&self, body: &mut BodyState) {
        body.apply_impulse(Vec2::Y * self.jump_impulse);
        debug!("Ground jump: velocity={:?}", body.velocity);
    }

    pub fn perform_air_jump(&mut self, body: &mut BodyState) {
        body.velocity.y = 0.0;
        body.apply_impulse(Vec2::Y * self.jump_impulse);
        self.air_jumps_used += 1;
        debug!(
            "Air jump: air_jumps_used now {}/{}",
            self.air_jumps_used, self.max_air_jumps
        );
    }

    /// `direction_away_from_wall` is 1 when jumping off a left wall, -1 off a right wall.
    pub fn perform_wall_jump(
        &mut self,
        body: &mut BodyState,
        timers: &mut TimerBank,
        movement: &mut MovementActuator,
        direction_away_from_wall: i8,
    ) {
        body.velocity.y = 0.0;
        body.apply_impulse(Vec2::new(
            self.wall_jump_horizontal_impulse * f32::from(direction_away_from_wall),
            self.wall_jump_vertical_impulse,
        ));

        timers.trigger(TimerId::GlideLockout);

        movement.reset_glide_boost();
        movement.start_wall_jump_cancel_window(timers, direction_away_from_wall);

        debug!(
            "Wall jump: direction={}, velocity={:?}",
            direction_away_from_wall, body.velocity
        );
    }

    pub fn reset_air_jumps(&mut self) {
        self.air_jumps_used = 0;
    }

    pub fn clear_glide_lockout(&self, timers: &mut TimerBank) {
        timers.consume(TimerId::GlideLockout);
    }
}
