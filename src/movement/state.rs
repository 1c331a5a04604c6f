//! Movement domain: the five-state locomotion machine.
//!
//! Each state has `enter`, `update` and `exit` handlers dispatched by `match`.
//! Buffering and jump attempts are shared by every state and live as free
//! functions below the machine.

use bevy::prelude::*;

use crate::movement::{
    BodyState, ContactState, InputSnapshot, JumpActuator, LocomotionTuning, MovementActuator,
    TimerBank, TimerId,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Reflect)]
pub enum PlayerState {
    #[default]
    Grounded,
    Airborne,
    Gliding,
    /// Nothing transitions here on its own; entered through an explicit request.
    WallSliding,
    WallJumping,
}

impl PlayerState {
    pub const ALL: [PlayerState; 5] = [
        PlayerState::Grounded,
        PlayerState::Airborne,
        PlayerState::Gliding,
        PlayerState::WallSliding,
        PlayerState::WallJumping,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateTransition {
    pub from: PlayerState,
    pub to: PlayerState,
}

/// Everything a state handler may read or mutate during one frame.
pub struct StepContext<'a> {
    pub dt: f32,
    pub input: &'a InputSnapshot,
    pub contacts: &'a ContactState,
    pub timers: &'a mut TimerBank,
    pub movement: &'a mut MovementActuator,
    pub jumping: &'a mut JumpActuator,
    pub body: &'a mut BodyState,
}

#[derive(Debug, Clone)]
pub struct PlayerStateMachine {
    current: PlayerState,
    wall_jump_state_duration: f32,
    /// Countdown owned by the WallJumping state; persists across entries.
    wall_jump_time_left: f32,
}

impl PlayerStateMachine {
    pub fn new(tuning: &LocomotionTuning) -> Self {
        Self {
            current: PlayerState::Grounded,
            wall_jump_state_duration: tuning.wall_jump_state_duration,
            wall_jump_time_left: 0.0,
        }
    }

    pub fn current(&self) -> PlayerState {
        self.current
    }

    /// Enters the initial state without running any exit handler.
    pub fn start(&mut self, initial: PlayerState, ctx: &mut StepContext) {
        self.current = initial;
        self.enter(initial, ctx);
    }

    pub fn change_state(&mut self, next: PlayerState, ctx: &mut StepContext) -> StateTransition {
        let from = self.current;
        self.exit(from, ctx);
        self.current = next;
        self.enter(next, ctx);
        StateTransition { from, to: next }
    }

    pub fn update(&mut self, ctx: &mut StepContext) -> Option<StateTransition> {
        let next = match self.current {
            PlayerState::Grounded => update_grounded(ctx),
            PlayerState::Airborne => update_airborne(ctx),
            PlayerState::Gliding => update_gliding(ctx),
            PlayerState::WallSliding => update_wall_sliding(ctx),
            PlayerState::WallJumping => self.update_wall_jumping(ctx),
        };
        next.map(|state| self.change_state(state, ctx))
    }

    fn enter(&mut self, state: PlayerState, ctx: &mut StepContext) {
        match state {
            PlayerState::Grounded => {
                ctx.jumping.reset_air_jumps();
                ctx.jumping.clear_glide_lockout(ctx.timers);
                restore_default_gravity(ctx);
                ctx.movement.clear_wall_jump_state(ctx.timers);
                ctx.timers.consume(TimerId::WallLeftCoyote);
                ctx.timers.consume(TimerId::WallRightCoyote);
            }
            PlayerState::Airborne | PlayerState::WallSliding => restore_default_gravity(ctx),
            PlayerState::Gliding => {
                let glide_scale = ctx.movement.glide_gravity_scale();
                ctx.movement.set_gravity_scale(ctx.body, glide_scale);
                if !ctx.movement.was_gliding() {
                    ctx.movement.start_glide_boost(ctx.body, ctx.input.horizontal);
                }
            }
            PlayerState::WallJumping => {
                restore_default_gravity(ctx);
                self.wall_jump_time_left = self.wall_jump_state_duration;
            }
        }
    }

    fn exit(&mut self, state: PlayerState, ctx: &mut StepContext) {
        if state == PlayerState::Gliding {
            ctx.movement.set_was_gliding(true);
        }
    }

    fn update_wall_jumping(&mut self, ctx: &mut StepContext) -> Option<PlayerState> {
        self.wall_jump_time_left -= ctx.dt;

        handle_input_buffering(ctx);

        if ctx.contacts.is_grounded {
            return Some(PlayerState::Grounded);
        }

        if self.wall_jump_time_left <= 0.0 {
            return Some(if glide_conditions_hold(ctx) {
                PlayerState::Gliding
            } else {
                PlayerState::Airborne
            });
        }

        handle_movement_input(ctx);
        None
    }
}

fn update_grounded(ctx: &mut StepContext) -> Option<PlayerState> {
    handle_input_buffering(ctx);

    if !ctx.contacts.is_grounded {
        return Some(PlayerState::Airborne);
    }

    if let Some(next) = try_ground_jump(ctx) {
        return Some(next);
    }

    handle_movement_input(ctx);
    None
}

fn update_airborne(ctx: &mut StepContext) -> Option<PlayerState> {
    handle_input_buffering(ctx);

    if ctx.contacts.is_grounded {
        return Some(PlayerState::Grounded);
    }

    if let Some(next) = try_wall_jump(ctx).or_else(|| try_air_jump(ctx)) {
        return Some(next);
    }

    if glide_conditions_hold(ctx) {
        return Some(PlayerState::Gliding);
    }

    handle_movement_input(ctx);
    None
}

fn update_gliding(ctx: &mut StepContext) -> Option<PlayerState> {
    handle_input_buffering(ctx);

    if ctx.contacts.is_grounded {
        return Some(PlayerState::Grounded);
    }

    if let Some(next) = try_wall_jump(ctx).or_else(|| try_air_jump(ctx)) {
        return Some(next);
    }

    if !glide_conditions_hold(ctx) {
        return Some(PlayerState::Airborne);
    }

    let direction = ctx.input.horizontal;
    ctx.movement.update_glide_boost(direction, true, ctx.dt);
    let multiplier = ctx.movement.calculate_glide_multiplier();
    ctx.movement
        .apply_horizontal_movement(ctx.body, direction, multiplier, ctx.dt);
    ctx.movement.ensure_no_rotation(ctx.body);
    None
}

fn update_wall_sliding(ctx: &mut StepContext) -> Option<PlayerState> {
    handle_input_buffering(ctx);

    if ctx.contacts.is_grounded {
        return Some(PlayerState::Grounded);
    }

    if !ctx.contacts.touching_any_wall() {
        return Some(PlayerState::Airborne);
    }

    if let Some(next) = try_wall_jump(ctx).or_else(|| try_air_jump(ctx)) {
        return Some(next);
    }

    if glide_conditions_hold(ctx) {
        return Some(PlayerState::Gliding);
    }

    handle_movement_input(ctx);
    None
}

fn restore_default_gravity(ctx: &mut StepContext) {
    let scale = ctx.movement.default_gravity_scale();
    ctx.movement.set_gravity_scale(ctx.body, scale);
}

/// Falling, glide held, and not locked out by a recent wall jump.
fn glide_conditions_hold(ctx: &StepContext) -> bool {
    ctx.body.is_falling() && ctx.input.glide_held && !ctx.jumping.is_glide_locked(ctx.timers)
}

fn left_away_active(ctx: &StepContext) -> bool {
    ctx.timers.is_active(TimerId::LeftAway) || ctx.input.left_held
}

fn right_away_active(ctx: &StepContext) -> bool {
    ctx.timers.is_active(TimerId::RightAway) || ctx.input.right_held
}

fn handle_input_buffering(ctx: &mut StepContext) {
    if ctx.input.jump_pressed {
        ctx.timers.trigger(TimerId::JumpBuffer);
    }
    if ctx.input.left_pressed {
        ctx.timers.trigger(TimerId::LeftAway);
    }
    if ctx.input.right_pressed {
        ctx.timers.trigger(TimerId::RightAway);
    }
    if ctx.contacts.touching_wall_left {
        ctx.timers.trigger(TimerId::WallLeftCoyote);
    }
    if ctx.contacts.touching_wall_right {
        ctx.timers.trigger(TimerId::WallRightCoyote);
    }
}

/// Highest-priority jump. Needs a wall (contact or coyote) plus an away input.
fn try_wall_jump(ctx: &mut StepContext) -> Option<PlayerState> {
    if !ctx.timers.is_active(TimerId::JumpBuffer) || ctx.contacts.is_grounded {
        return None;
    }

    let can_use_left = ctx.jumping.can_wall_jump(
        ctx.contacts.touching_wall_left || ctx.timers.is_active(TimerId::WallLeftCoyote),
    );
    let can_use_right = ctx.jumping.can_wall_jump(
        ctx.contacts.touching_wall_right || ctx.timers.is_active(TimerId::WallRightCoyote),
    );

    let direction = if can_use_left && right_away_active(ctx) {
        1
    } else if can_use_right && left_away_active(ctx) {
        -1
    } else {
        return None;
    };

    ctx.jumping
        .perform_wall_jump(ctx.body, ctx.timers, ctx.movement, direction);
    ctx.timers.consume(TimerId::JumpBuffer);
    ctx.timers.consume(TimerId::LeftAway);
    ctx.timers.consume(TimerId::RightAway);
    Some(PlayerState::WallJumping)
}

fn try_ground_jump(ctx: &mut StepContext) -> Option<PlayerState> {
    if ctx.timers.is_active(TimerId::JumpBuffer)
        && ctx.jumping.can_ground_jump(ctx.contacts.is_grounded)
    {
        ctx.jumping.perform_ground_jump(ctx.body);
        ctx.timers.consume(TimerId::JumpBuffer);
        return Some(PlayerState::Airborne);
    }
    None
}

fn try_air_jump(ctx: &mut StepContext) -> Option<PlayerState> {
    if ctx.timers.is_active(TimerId::JumpBuffer) && ctx.jumping.can_air_jump() {
        ctx.jumping.perform_air_jump(ctx.body);
        ctx.timers.consume(TimerId::JumpBuffer);
        return Some(PlayerState::Airborne);
    }
    None
}

fn handle_movement_input(ctx: &mut StepContext) {
    let direction = ctx.input.horizontal;

    if !ctx
        .movement
        .try_cancel_wall_jump(ctx.body, ctx.timers, direction)
    {
        ctx.movement
            .apply_horizontal_movement(ctx.body, direction, 1.0, ctx.dt);
    }

    ctx.movement.ensure_no_rotation(ctx.body);
}
