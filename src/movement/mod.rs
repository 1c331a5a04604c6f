//! Movement domain: the player locomotion controller and its Bevy wiring.
//!
//! The controller itself (`LocomotionController`) is plain data driven by two
//! calls: `physics_step` after each avian step and `update` once per frame. The
//! systems in this module copy avian body state in and out around those calls.

mod actuator;
mod body;
mod bootstrap;
mod components;
mod contacts;
mod controller;
mod controls;
#[cfg(feature = "dev-tools")]
pub mod dev;
mod events;
mod jumping;
mod resources;
mod state;
pub(crate) mod systems;
mod timers;

pub use actuator::{MovementActuator, direction_sign};
pub use body::BodyState;
pub use components::{ControllerStatus, GameLayer, Ground, Player, PlayerController, Wall};
pub use contacts::{ContactSample, ContactState, ContactThresholds};
pub use controller::LocomotionController;
pub use controls::{ButtonSample, InputSnapshot, RawControls};
pub use events::{LocomotionStateChanged, RequestWallSlide};
pub use jumping::JumpActuator;
pub use resources::{LocomotionBindings, LocomotionTuning};
pub use state::{PlayerState, PlayerStateMachine, StateTransition, StepContext};
pub use timers::{TimerBank, TimerId};

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::bootstrap::{initialize_controllers, rebuild_on_tuning_change};
use crate::movement::systems::{
    apply_wall_slide_requests, classify_contacts, drive_controllers, latch_contacts, read_input,
};

/// Control snapshot for the current frame
#[derive(Resource, Debug, Default)]
pub struct MovementInput {
    pub snapshot: InputSnapshot,
}

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<LocomotionTuning>()
            .init_resource::<LocomotionBindings>()
            .init_resource::<MovementInput>()
            .add_message::<LocomotionStateChanged>()
            .add_message::<RequestWallSlide>()
            .add_systems(
                FixedPostUpdate,
                classify_contacts.after(PhysicsSystems::StepSimulation),
            )
            .add_systems(
                Update,
                (
                    rebuild_on_tuning_change,
                    initialize_controllers,
                    read_input,
                    apply_wall_slide_requests,
                    drive_controllers,
                )
                    .chain(),
            )
            .add_systems(PostUpdate, latch_contacts);
    }
}
