//! Movement domain: per-frame controller updates and body writeback.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::movement::{
    BodyState, LocomotionStateChanged, MovementInput, Player, PlayerController, PlayerState,
    RequestWallSlide, StateTransition,
};

type BodyComponents = (
    &'static mut Position,
    &'static mut LinearVelocity,
    &'static mut GravityScale,
    &'static mut Rotation,
    &'static mut AngularVelocity,
    &'static ComputedMass,
);

pub(crate) fn read_body(
    position: &Position,
    velocity: &LinearVelocity,
    gravity: &GravityScale,
    rotation: &Rotation,
    angular_velocity: &AngularVelocity,
    mass: &ComputedMass,
) -> BodyState {
    BodyState {
        position: position.0,
        velocity: velocity.0,
        gravity_scale: gravity.0,
        rotation: rotation.as_radians(),
        angular_velocity: angular_velocity.0,
        inverse_mass: mass.inverse(),
    }
}

fn write_body(
    body: &BodyState,
    position: &mut Position,
    velocity: &mut LinearVelocity,
    gravity: &mut GravityScale,
    rotation: &mut Rotation,
    angular_velocity: &mut AngularVelocity,
) {
    position.0 = body.position;
    velocity.0 = body.velocity;
    gravity.0 = body.gravity_scale;
    *rotation = Rotation::radians(body.rotation);
    angular_velocity.0 = body.angular_velocity;
}

fn announce(
    entity: Entity,
    transition: StateTransition,
    writer: &mut MessageWriter<LocomotionStateChanged>,
) {
    debug!(
        "Locomotion {:?}: {:?} -> {:?}",
        entity, transition.from, transition.to
    );
    writer.write(LocomotionStateChanged {
        entity,
        from: transition.from,
        to: transition.to,
    });
}

pub(crate) fn drive_controllers(
    time: Res<Time>,
    input: Res<MovementInput>,
    mut writer: MessageWriter<LocomotionStateChanged>,
    mut query: Query<(Entity, &mut PlayerController, BodyComponents), With<Player>>,
) {
    let dt = time.delta_secs();

    for (entity, mut player, (mut pos, mut vel, mut gravity, mut rot, mut ang, mass)) in &mut query {
        let Some(controller) = player.controller_mut() else {
            continue;
        };

        let mut body = read_body(&pos, &vel, &gravity, &rot, &ang, mass);
        let transition = controller.update(dt, input.snapshot, &mut body);
        write_body(&body, &mut pos, &mut vel, &mut gravity, &mut rot, &mut ang);

        if let Some(transition) = transition {
            announce(entity, transition, &mut writer);
        }
    }
}

pub(crate) fn apply_wall_slide_requests(
    mut requests: MessageReader<RequestWallSlide>,
    mut writer: MessageWriter<LocomotionStateChanged>,
    mut query: Query<(Entity, &mut PlayerController, BodyComponents), With<Player>>,
) {
    for _ in requests.read() {
        for (entity, mut player, (mut pos, mut vel, mut gravity, mut rot, mut ang, mass)) in
            &mut query
        {
            let Some(controller) = player.controller_mut() else {
                continue;
            };

            if controller.state() == PlayerState::WallSliding {
                debug!("Ignored wall slide request on {:?}: already sliding", entity);
                continue;
            }

            let mut body = read_body(&pos, &vel, &gravity, &rot, &ang, mass);
            let Some(transition) = controller.request_wall_slide(&mut body) else {
                debug!(
                    "Ignored wall slide request on {:?}: not airborne against a wall",
                    entity
                );
                continue;
            };
            write_body(&body, &mut pos, &mut vel, &mut gravity, &mut rot, &mut ang);
            announce(entity, transition, &mut writer);
        }
    }
}

/// Runs after every frame-rate system so landing edges stay one frame late.
pub(crate) fn latch_contacts(mut query: Query<&mut PlayerController, With<Player>>) {
    for mut player in &mut query {
        if let Some(controller) = player.controller_mut() {
            if controller.contacts().just_landed() {
                debug!(
                    "Landed: air_jumps_used={}",
                    controller.jumping().air_jumps_used()
                );
            }
            controller.end_frame();
        }
    }
}
