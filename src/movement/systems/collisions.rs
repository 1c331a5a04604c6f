//! Movement domain: contact sampling on the fixed physics clock.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{ContactSample, Player, PlayerController};

/// Speculative contacts further apart than this are not real touches
const MAX_CONTACT_SEPARATION: f32 = 0.02;

/// Flattens every touching manifold of `entity` into world-space samples whose
/// normals point from the other collider toward `entity`.
pub(crate) fn gather_contact_samples(collisions: &Collisions, entity: Entity) -> Vec<ContactSample> {
    let mut samples = Vec::new();

    for pair in collisions.collisions_with(entity) {
        if !pair.is_touching() {
            continue;
        }

        // Manifold normals point from collider1 to collider2
        let flip = if pair.collider1 == entity { -1.0 } else { 1.0 };

        for manifold in &pair.manifolds {
            let normal = manifold.normal * flip;
            for point in manifold.points.iter() {
                if point.penetration < -MAX_CONTACT_SEPARATION {
                    continue;
                }
                samples.push(ContactSample::new(point.point, normal));
            }
        }
    }

    samples
}

/// Runs right after avian's simulation step, so the flags describe the step that just ran.
pub(crate) fn classify_contacts(
    collisions: Collisions,
    mut query: Query<(Entity, &Position, &mut PlayerController), With<Player>>,
) {
    for (entity, position, mut player) in &mut query {
        let Some(controller) = player.controller_mut() else {
            continue;
        };

        let samples = gather_contact_samples(&collisions, entity);
        let was_grounded = controller.contacts().is_grounded;
        controller.physics_step(&samples, position.0);

        if controller.contacts().is_grounded != was_grounded {
            debug!(
                "Ground contact changed: on_ground={}, contacts={}",
                controller.contacts().is_grounded,
                samples.len()
            );
        }
    }
}
