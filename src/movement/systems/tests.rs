//! Movement domain: tests for the avian bridge systems.

use std::time::Duration;

use avian2d::prelude::*;
use bevy::mesh::MeshPlugin;
use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;

use crate::movement::{
    ContactState, LocomotionTuning, MovementPlugin, Player, PlayerController, PlayerState,
    RequestWallSlide,
};

const TIMESTEP: Duration = Duration::from_micros(15_625);
const PLAYER_SIZE: Vec2 = Vec2::new(0.6, 1.0);
const SETTLE_FRAMES: usize = 30;

// -----------------------------------------------------------------------------
// Harness
// -----------------------------------------------------------------------------

fn create_app() -> App {
    let mut app = App::new();
    app.add_plugins((
        MinimalPlugins,
        TransformPlugin,
        AssetPlugin::default(),
        bevy::scene::ScenePlugin,
        MeshPlugin,
        bevy::input::InputPlugin,
        PhysicsPlugins::default(),
        MovementPlugin,
    ));

    // One physics step per app update
    app.insert_resource(Time::<Fixed>::from_duration(TIMESTEP));
    app.insert_resource(TimeUpdateStrategy::ManualDuration(TIMESTEP));

    app.finish();
    app.cleanup();

    app
}

fn spawn_block(app: &mut App, size: Vec2, position: Vec2) -> Entity {
    app.world_mut()
        .spawn((
            Transform::from_translation(position.extend(0.0)),
            RigidBody::Static,
            Collider::rectangle(size.x, size.y),
        ))
        .id()
}

fn spawn_floor(app: &mut App) -> Entity {
    // Top face at y = 0
    spawn_block(app, Vec2::new(20.0, 1.0), Vec2::new(0.0, -0.5))
}

/// Player standing on the floor, sunk 0.01 into it.
fn spawn_player(app: &mut App) -> Entity {
    app.world_mut()
        .spawn((
            Player,
            PlayerController::default(),
            Transform::from_xyz(0.0, PLAYER_SIZE.y / 2.0 - 0.01, 0.0),
            RigidBody::Dynamic,
            Collider::rectangle(PLAYER_SIZE.x, PLAYER_SIZE.y),
            Mass(1.0),
            LockedAxes::ROTATION_LOCKED,
            GravityScale(1.0),
            Friction::new(0.0),
        ))
        .id()
}

fn settle(app: &mut App) {
    for _ in 0..SETTLE_FRAMES {
        app.update();
    }
}

fn controller_state(app: &App, player: Entity) -> PlayerState {
    app.world()
        .get::<PlayerController>(player)
        .and_then(PlayerController::state)
        .expect("controller is built")
}

fn contacts(app: &App, player: Entity) -> ContactState {
    *app.world()
        .get::<PlayerController>(player)
        .and_then(PlayerController::controller)
        .expect("controller is built")
        .contacts()
}

// -----------------------------------------------------------------------------
// Contact sampling tests
// -----------------------------------------------------------------------------

#[test]
fn test_floor_grounds_player_in_either_spawn_order() {
    // Spawn order changes which side of the contact pair the player lands on
    for player_first in [true, false] {
        let mut app = create_app();
        let player = if player_first {
            let player = spawn_player(&mut app);
            spawn_floor(&mut app);
            player
        } else {
            spawn_floor(&mut app);
            spawn_player(&mut app)
        };

        settle(&mut app);

        let flags = contacts(&app, player);
        assert!(flags.is_grounded, "player_first={player_first}");
        assert!(!flags.touching_wall_left, "player_first={player_first}");
        assert!(!flags.touching_wall_right, "player_first={player_first}");
        assert_eq!(controller_state(&app, player), PlayerState::Grounded);
    }
}

#[test]
fn test_shaft_walls_are_classified_by_side() {
    for player_first in [true, false] {
        let mut app = create_app();
        let spawn_room = |app: &mut App| {
            spawn_floor(app);
            // Inner faces at x = -0.29 and x = 0.29, 0.01 inside the player on each side
            spawn_block(app, Vec2::new(1.0, 4.0), Vec2::new(-0.79, 1.5));
            spawn_block(app, Vec2::new(1.0, 4.0), Vec2::new(0.79, 1.5));
        };
        let player = if player_first {
            let player = spawn_player(&mut app);
            spawn_room(&mut app);
            player
        } else {
            spawn_room(&mut app);
            spawn_player(&mut app)
        };

        settle(&mut app);

        let flags = contacts(&app, player);
        assert!(flags.is_grounded, "player_first={player_first}");
        assert!(flags.touching_wall_left, "player_first={player_first}");
        assert!(flags.touching_wall_right, "player_first={player_first}");
    }
}

#[test]
fn test_contacts_reflect_the_step_that_just_ran() {
    let mut app = create_app();
    spawn_floor(&mut app);
    let player = spawn_player(&mut app);
    settle(&mut app);
    assert!(contacts(&app, player).is_grounded);

    // Teleport far above the floor; the very next frame must see no contact
    let lifted = Vec2::new(0.0, 50.0);
    {
        let mut entity = app.world_mut().entity_mut(player);
        if let Some(mut position) = entity.get_mut::<Position>() {
            position.0 = lifted;
        }
        if let Some(mut transform) = entity.get_mut::<Transform>() {
            transform.translation = lifted.extend(0.0);
        }
        if let Some(mut velocity) = entity.get_mut::<LinearVelocity>() {
            velocity.0 = Vec2::ZERO;
        }
    }
    app.update();

    assert!(!contacts(&app, player).is_grounded);
    assert_eq!(controller_state(&app, player), PlayerState::Airborne);
}

// -----------------------------------------------------------------------------
// Host message and tuning tests
// -----------------------------------------------------------------------------

#[test]
fn test_wall_slide_request_ignored_on_the_ground() {
    let mut app = create_app();
    spawn_floor(&mut app);
    let player = spawn_player(&mut app);
    settle(&mut app);

    app.world_mut().write_message(RequestWallSlide);
    app.update();

    assert_eq!(controller_state(&app, player), PlayerState::Grounded);
}

#[test]
fn test_tuning_change_rebuilds_without_leaving_the_ground() {
    let mut app = create_app();
    spawn_floor(&mut app);
    let player = spawn_player(&mut app);
    settle(&mut app);

    app.world_mut()
        .resource_mut::<LocomotionTuning>()
        .max_air_jumps = 5;
    app.update();

    assert_eq!(controller_state(&app, player), PlayerState::Grounded);
    let max_air_jumps = app
        .world()
        .get::<PlayerController>(player)
        .and_then(PlayerController::controller)
        .map(|controller| controller.jumping().max_air_jumps());
    assert_eq!(max_air_jumps, Some(5));
}
