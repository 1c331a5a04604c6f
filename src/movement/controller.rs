//! Movement domain: the assembled locomotion controller.
//!
//! Owns the timers, contact flags, actuators and state machine, and exposes the
//! two entry points the host drives: `physics_step` on the fixed clock and
//! `update` once per rendered frame.

use bevy::prelude::*;

use crate::movement::{
    BodyState, ContactSample, ContactState, ContactThresholds, InputSnapshot, JumpActuator,
    LocomotionTuning, MovementActuator, PlayerState, PlayerStateMachine, StateTransition,
    StepContext, TimerBank,
};

#[derive(Debug, Clone)]
pub struct LocomotionController {
    thresholds: ContactThresholds,
    timers: TimerBank,
    contacts: ContactState,
    input: InputSnapshot,
    movement: MovementActuator,
    jumping: JumpActuator,
    machine: PlayerStateMachine,
}

impl LocomotionController {
    /// Builds every collaborator and enters `Grounded`.
    /// `body.gravity_scale` at this moment becomes the default gravity scale.
    pub fn new(tuning: &LocomotionTuning, body: &mut BodyState) -> Self {
        let mut controller = Self {
            thresholds: ContactThresholds::from(tuning),
            timers: TimerBank::new(tuning),
            contacts: ContactState::default(),
            input: InputSnapshot::default(),
            movement: MovementActuator::new(tuning, body.gravity_scale),
            jumping: JumpActuator::new(tuning),
            machine: PlayerStateMachine::new(tuning),
        };

        let Self {
            timers,
            contacts,
            input,
            movement,
            jumping,
            machine,
            ..
        } = &mut controller;
        let mut ctx = StepContext {
            dt: 0.0,
            input,
            contacts,
            timers,
            movement,
            jumping,
            body,
        };
        machine.start(PlayerState::Grounded, &mut ctx);

        controller
    }

    /// Builds a controller for new tuning that keeps this one's contact flags,
    /// so a standing player is not seen as airborne until the next physics step.
    pub fn rebuild(&self, tuning: &LocomotionTuning, body: &mut BodyState) -> Self {
        let mut controller = Self::new(tuning, body);
        controller.contacts = self.contacts;
        controller
    }

    pub fn state(&self) -> PlayerState {
        self.machine.current()
    }

    pub fn contacts(&self) -> &ContactState {
        &self.contacts
    }

    pub fn timers(&self) -> &TimerBank {
        &self.timers
    }

    pub fn movement(&self) -> &MovementActuator {
        &self.movement
    }

    pub fn jumping(&self) -> &JumpActuator {
        &self.jumping
    }

    /// Reclassifies contacts for the physics step that just ran.
    pub fn physics_step(&mut self, contacts: &[ContactSample], body_center: Vec2) {
        self.contacts
            .classify(contacts, body_center, &self.thresholds);
    }

    /// One rendered frame: store input, tick timers, then run the active state.
    pub fn update(
        &mut self,
        dt: f32,
        input: InputSnapshot,
        body: &mut BodyState,
    ) -> Option<StateTransition> {
        self.input = input;
        self.timers.tick(dt);

        let Self {
            timers,
            contacts,
            input,
            movement,
            jumping,
            machine,
            ..
        } = self;
        let mut ctx = StepContext {
            dt,
            input,
            contacts,
            timers,
            movement,
            jumping,
            body,
        };
        machine.update(&mut ctx)
    }

    /// Latches `prev_grounded` once all frame logic has read the current value.
    pub fn end_frame(&mut self) {
        self.contacts.latch();
    }

    /// Switches state from outside the machine's own transition rules.
    /// This is the only way into `WallSliding`.
    pub fn force_state(&mut self, state: PlayerState, body: &mut BodyState) -> StateTransition {
        let Self {
            timers,
            contacts,
            input,
            movement,
            jumping,
            machine,
            ..
        } = self;
        let mut ctx = StepContext {
            dt: 0.0,
            input,
            contacts,
            timers,
            movement,
            jumping,
            body,
        };
        machine.change_state(state, &mut ctx)
    }

    /// Enters `WallSliding` when airborne against a wall. Returns the transition if it happened.
    pub fn request_wall_slide(&mut self, body: &mut BodyState) -> Option<StateTransition> {
        if self.contacts.is_grounded
            || !self.contacts.touching_any_wall()
            || self.state() == PlayerState::WallSliding
        {
            return None;
        }
        Some(self.force_state(PlayerState::WallSliding, body))
    }
}
