//! Movement domain: messages exchanged with the rest of the game.

use bevy::ecs::message::Message;
use bevy::prelude::*;

use crate::movement::PlayerState;

/// Fired whenever a controller runs an exit/enter pair, re-entries included
#[derive(Debug, Clone, Copy)]
pub struct LocomotionStateChanged {
    pub entity: Entity,
    pub from: PlayerState,
    pub to: PlayerState,
}

impl Message for LocomotionStateChanged {}

/// Asks every player controller to enter `WallSliding`.
/// Only honored while airborne against a wall.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestWallSlide;

impl Message for RequestWallSlide {}
