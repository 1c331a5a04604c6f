//! Movement domain: deferred controller construction.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::systems::controller::read_body;
use crate::movement::{
    ControllerStatus, LocomotionController, LocomotionTuning, Player, PlayerController,
};

/// Builds the controller for every player whose physics body is complete.
/// Players still missing components are retried on the next frame.
pub(crate) fn initialize_controllers(
    tuning: Res<LocomotionTuning>,
    mut query: Query<
        (
            Entity,
            &mut PlayerController,
            Option<&Position>,
            Option<&LinearVelocity>,
            Option<&mut GravityScale>,
            Option<&Rotation>,
            Option<&AngularVelocity>,
            Option<&ComputedMass>,
        ),
        With<Player>,
    >,
) {
    for (entity, mut player, position, velocity, gravity, rotation, angular, mass) in &mut query {
        if player.is_ready() {
            continue;
        }

        let (
            Some(position),
            Some(velocity),
            Some(mut gravity),
            Some(rotation),
            Some(angular),
            Some(mass),
        ) = (position, velocity, gravity, rotation, angular, mass)
        else {
            if !player.waiting_logged {
                info!(
                    "Player {:?} has no complete physics body yet, deferring controller setup",
                    entity
                );
                player.waiting_logged = true;
            }
            continue;
        };

        let mut body = read_body(position, velocity, &gravity, rotation, angular, mass);
        let controller = LocomotionController::new(&tuning, &mut body);
        gravity.0 = body.gravity_scale;

        info!(
            "Locomotion controller ready for {:?}: state={:?}, default_gravity={}, max_air_jumps={}",
            entity,
            controller.state(),
            controller.movement().default_gravity_scale(),
            controller.jumping().max_air_jumps()
        );

        player.status = ControllerStatus::Ready(Box::new(controller));
        player.waiting_logged = false;
    }
}

/// Rebuilds every built controller after a tuning change.
/// Gravity is put back to the captured default first so the rebuild captures the same one,
/// and the last classified contacts carry over.
pub(crate) fn rebuild_on_tuning_change(
    tuning: Res<LocomotionTuning>,
    mut query: Query<
        (
            Entity,
            &mut PlayerController,
            &Position,
            &LinearVelocity,
            &mut GravityScale,
            &Rotation,
            &AngularVelocity,
            &ComputedMass,
        ),
        With<Player>,
    >,
) {
    if !tuning.is_changed() || tuning.is_added() {
        return;
    }

    for (entity, mut player, position, velocity, mut gravity, rotation, angular, mass) in &mut query {
        let Some(old) = player.controller() else {
            continue;
        };

        let mut body = read_body(position, velocity, &gravity, rotation, angular, mass);
        body.gravity_scale = old.movement().default_gravity_scale();
        let controller = old.rebuild(&tuning, &mut body);
        gravity.0 = body.gravity_scale;

        info!(
            "Locomotion controller rebuilt for {:?} with new tuning: state={:?}",
            entity,
            controller.state()
        );
        player.status = ControllerStatus::Ready(Box::new(controller));
    }
}
