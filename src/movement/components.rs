//! Movement domain: components and physics layers for locomotion.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{LocomotionController, PlayerState};

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Ground surfaces (floors, platforms)
    Ground,
    /// Wall surfaces
    Wall,
    /// Player character
    Player,
}

#[derive(Component, Debug)]
pub struct Player;

/// Marker for ground colliders
#[derive(Component, Debug)]
pub struct Ground;

/// Marker for wall colliders
#[derive(Component, Debug)]
pub struct Wall;

#[derive(Debug, Default)]
pub enum ControllerStatus {
    /// Waiting for the body's physics components to show up
    #[default]
    Uninitialized,
    Ready(Box<LocomotionController>),
}

/// Drives a player body through the locomotion state machine.
#[derive(Component, Debug, Default)]
pub struct PlayerController {
    pub status: ControllerStatus,
    /// Set once the "waiting" message has been logged
    pub(crate) waiting_logged: bool,
}

impl PlayerController {
    pub fn is_ready(&self) -> bool {
        matches!(self.status, ControllerStatus::Ready(_))
    }

    /// Current state tag, or `None` until the controller is built.
    pub fn state(&self) -> Option<PlayerState> {
        self.controller().map(LocomotionController::state)
    }

    pub fn controller(&self) -> Option<&LocomotionController> {
        match &self.status {
            ControllerStatus::Ready(controller) => Some(&**controller),
            ControllerStatus::Uninitialized => None,
        }
    }

    pub fn controller_mut(&mut self) -> Option<&mut LocomotionController> {
        match &mut self.status {
            ControllerStatus::Ready(controller) => Some(&mut **controller),
            ControllerStatus::Uninitialized => None,
        }
    }
}
