//! Movement domain: debug-only player and test room spawning.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{GameLayer, Ground, LocomotionTuning, Player, PlayerController, Wall};

const PLAYER_SIZE: Vec2 = Vec2::new(0.6, 1.0);

pub fn spawn_player(mut commands: Commands) {
    commands.spawn((
        // Identity & Locomotion
        (Player, PlayerController::default()),
        // Rendering
        Sprite {
            color: Color::srgb(0.9, 0.9, 0.9),
            custom_size: Some(PLAYER_SIZE),
            ..default()
        },
        Transform::from_xyz(0.0, -2.0, 0.0),
        // Physics
        (
            RigidBody::Dynamic,
            Collider::rectangle(PLAYER_SIZE.x, PLAYER_SIZE.y),
            Mass(1.0),
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity::default(),
            GravityScale(1.0),
            Friction::new(0.0),
            CollisionLayers::new(GameLayer::Player, [GameLayer::Ground, GameLayer::Wall]),
        ),
    ));
}

fn spawn_block<M: Component>(
    commands: &mut Commands,
    marker: M,
    color: Color,
    size: Vec2,
    position: Vec2,
    layers: CollisionLayers,
) {
    commands.spawn((
        marker,
        Sprite {
            color,
            custom_size: Some(size),
            ..default()
        },
        Transform::from_translation(position.extend(0.0)),
        RigidBody::Static,
        Collider::rectangle(size.x, size.y),
        layers,
    ));
}

pub fn spawn_test_room(mut commands: Commands, tuning: Res<LocomotionTuning>) {
    let wall_color = Color::srgb(0.3, 0.3, 0.4);
    let ground_color = Color::srgb(0.4, 0.5, 0.4);
    let platform_color = Color::srgb(0.5, 0.4, 0.3);

    let ground_layers = CollisionLayers::new(GameLayer::Ground, [GameLayer::Player]);
    let wall_layers = CollisionLayers::new(GameLayer::Wall, [GameLayer::Player]);

    // Floor
    spawn_block(
        &mut commands,
        Ground,
        ground_color,
        Vec2::new(18.0, 0.8),
        Vec2::new(0.0, -4.5),
        ground_layers,
    );

    // Outer walls
    for x in [-9.0, 9.0] {
        spawn_block(
            &mut commands,
            Wall,
            wall_color,
            Vec2::new(0.8, 12.0),
            Vec2::new(x, 1.5),
            wall_layers,
        );
    }

    // Platforms at increasing heights
    for (size, position) in [
        (Vec2::new(3.0, 0.4), Vec2::new(-5.0, -1.5)),
        (Vec2::new(3.0, 0.4), Vec2::new(5.0, 0.5)),
        (Vec2::new(2.5, 0.4), Vec2::new(0.0, 3.0)),
    ] {
        spawn_block(
            &mut commands,
            Ground,
            platform_color,
            size,
            position,
            ground_layers,
        );
    }

    // Narrow shaft for wall jump practice
    for x in [-2.2, -0.8] {
        spawn_block(
            &mut commands,
            Wall,
            wall_color,
            Vec2::new(0.4, 5.0),
            Vec2::new(x, -1.6),
            wall_layers,
        );
    }

    let gravity = 9.81;
    info!(
        "Test room spawned: ground jump height={:.2}, with air jumps={:.2}",
        tuning.single_jump_height(1.0, gravity),
        tuning.max_reachable_height(1.0, gravity)
    );
}
