//! Movement domain: horizontal motion, gravity, glide boost and wall-jump cancel.

use bevy::prelude::*;

use crate::movement::{BodyState, LocomotionTuning, TimerBank, TimerId};

/// -1, 0 or 1 for a signed axis value.
pub fn direction_sign(value: f32) -> i8 {
    if value > 0.0 {
        1
    } else if value < 0.0 {
        -1
    } else {
        0
    }
}

#[derive(Debug, Clone)]
pub struct MovementActuator {
    move_speed: f32,
    glide_gravity_scale: f32,
    glide_horizontal_multiplier: f32,
    glide_boost_multiplier: f32,
    glide_boost_duration: f32,
    default_gravity_scale: f32,
    glide_boost_time_left: f32,
    glide_boost_direction: i8,
    was_gliding: bool,
    last_wall_jump_direction: i8,
}

impl MovementActuator {
    /// `default_gravity_scale` is captured once and restored by every non-gliding state.
    pub fn new(tuning: &LocomotionTuning, default_gravity_scale: f32) -> Self {
        Self {
            move_speed: tuning.move_speed,
            glide_gravity_scale: tuning.glide_gravity_scale,
            glide_horizontal_multiplier: tuning.glide_horizontal_multiplier,
            glide_boost_multiplier: tuning.glide_boost_multiplier,
            glide_boost_duration: tuning.glide_boost_duration,
            default_gravity_scale,
            glide_boost_time_left: 0.0,
            glide_boost_direction: 0,
            was_gliding: false,
            last_wall_jump_direction: 0,
        }
    }

    pub fn default_gravity_scale(&self) -> f32 {
        self.default_gravity_scale
    }

    pub fn glide_gravity_scale(&self) -> f32 {
        self.glide_gravity_scale
    }

    pub fn glide_boost_time_left(&self) -> f32 {
        self.glide_boost_time_left
    }

    pub fn glide_boost_direction(&self) -> i8 {
        self.glide_boost_direction
    }

    pub fn was_gliding(&self) -> bool {
        self.was_gliding
    }

    pub fn last_wall_jump_direction(&self) -> i8 {
        self.last_wall_jump_direction
    }

    /// Moves the body directly; no velocity is involved so nothing carries over.
    pub fn apply_horizontal_movement(
        &self,
        body: &mut BodyState,
        direction: f32,
        multiplier: f32,
        dt: f32,
    ) {
        body.position.x += direction * self.move_speed * multiplier * dt;
    }

    pub fn set_gravity_scale(&self, body: &mut BodyState, scale: f32) {
        body.gravity_scale = scale;
    }

    pub fn start_glide_boost(&mut self, body: &BodyState, direction: f32) {
        self.glide_boost_time_left = self.glide_boost_duration;
        self.glide_boost_direction = if direction != 0.0 {
            direction_sign(direction)
        } else {
            direction_sign(body.velocity.x)
        };
    }

    pub fn update_glide_boost(&mut self, direction: f32, is_gliding: bool, dt: f32) {
        if is_gliding
            && self.glide_boost_time_left > 0.0
            && direction != 0.0
            && self.glide_boost_direction != 0
            && direction_sign(direction) != self.glide_boost_direction
        {
            self.glide_boost_time_left = 0.0;
        }

        if !is_gliding {
            self.glide_boost_time_left = 0.0;
            self.glide_boost_direction = 0;
        } else if self.glide_boost_time_left > 0.0 {
            self.glide_boost_time_left = (self.glide_boost_time_left - dt).max(0.0);
        }
    }

    pub fn calculate_glide_multiplier(&self) -> f32 {
        let boost = if self.glide_boost_time_left > 0.0 {
            self.glide_boost_multiplier
        } else {
            1.0
        };
        self.glide_horizontal_multiplier * boost
    }

    pub fn reset_glide_boost(&mut self) {
        self.glide_boost_time_left = 0.0;
        self.glide_boost_direction = 0;
        self.was_gliding = false;
    }

    pub fn set_was_gliding(&mut self, value: bool) {
        self.was_gliding = value;
    }

    pub fn start_wall_jump_cancel_window(&mut self, timers: &mut TimerBank, direction: i8) {
        self.last_wall_jump_direction = direction;
        timers.trigger(TimerId::WallJumpCancel);
    }

    /// Kills horizontal velocity when the player reverses out of a fresh wall jump.
    /// Returns true when it fired; the caller then skips normal movement this frame.
    pub fn try_cancel_wall_jump(
        &mut self,
        body: &mut BodyState,
        timers: &mut TimerBank,
        input_direction: f32,
    ) -> bool {
        if timers.is_active(TimerId::WallJumpCancel)
            && input_direction != 0.0
            && self.last_wall_jump_direction != 0
            && direction_sign(input_direction) != self.last_wall_jump_direction
        {
            body.velocity.x = 0.0;
            timers.consume(TimerId::WallJumpCancel);
            self.last_wall_jump_direction = 0;
            debug!("Wall jump canceled by reversed input");
            return true;
        }
        false
    }

    pub fn clear_wall_jump_state(&mut self, timers: &mut TimerBank) {
        timers.consume(TimerId::WallJumpCancel);
        self.last_wall_jump_direction = 0;
    }

    /// The body never tilts, whatever torque the collisions produced.
    pub fn ensure_no_rotation(&self, body: &mut BodyState) {
        body.rotation = 0.0;
        body.angular_velocity = 0.0;
    }
}
