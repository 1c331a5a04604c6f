//! Debug domain: systems for the locomotion readout and hotkeys.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::content::{TuningSource, load_validated_tuning};
use crate::debug::{DebugInfoOverlay, DebugState};
use crate::movement::{
    LocomotionController, LocomotionTuning, Player, PlayerController, RequestWallSlide, TimerId,
};

/// Toggle the readout with F1
pub(crate) fn toggle_debug_info(
    mut commands: Commands,
    keyboard: Res<ButtonInput<KeyCode>>,
    mut debug_state: ResMut<DebugState>,
    existing_overlay: Query<Entity, With<DebugInfoOverlay>>,
) {
    if !keyboard.just_pressed(KeyCode::F1) {
        return;
    }

    debug_state.show_info = !debug_state.show_info;

    if debug_state.show_info {
        spawn_debug_info_overlay(&mut commands);
    } else {
        for entity in &existing_overlay {
            commands.entity(entity).despawn();
        }
    }
}

/// F2 requests a wall slide, F3 reloads tuning from disk
pub(crate) fn handle_debug_hotkeys(
    keyboard: Res<ButtonInput<KeyCode>>,
    source: Res<TuningSource>,
    mut debug_state: ResMut<DebugState>,
    mut tuning: ResMut<LocomotionTuning>,
    mut wall_slide: MessageWriter<RequestWallSlide>,
) {
    if keyboard.just_pressed(KeyCode::F2) {
        wall_slide.write(RequestWallSlide);
        debug_state.set_message("Requested WallSliding", 2.0);
        info!("[DEBUG] Requested WallSliding");
    }

    if keyboard.just_pressed(KeyCode::F3) {
        match load_validated_tuning(&source.path) {
            Some(loaded) if loaded == *tuning => {
                debug_state.set_message("Tuning unchanged", 2.0);
            }
            Some(loaded) => {
                *tuning = loaded;
                debug_state.set_message("Tuning reloaded", 2.0);
                info!("[DEBUG] Reloaded tuning from {}", source.path.display());
            }
            None => debug_state.set_message("Tuning reload failed, see log", 3.0),
        }
    }
}

pub(crate) fn update_status_message(time: Res<Time>, mut debug_state: ResMut<DebugState>) {
    if debug_state.status_message.is_some() {
        debug_state.tick_message(time.delta_secs());
    }
}

/// Multi-line summary of a built controller
pub(crate) fn describe_controller(controller: &LocomotionController) -> String {
    let contacts = controller.contacts();
    let timers = controller.timers();
    let movement = controller.movement();
    let jumping = controller.jumping();

    let mut active: Vec<String> = TimerId::ALL
        .iter()
        .filter(|id| timers.is_active(**id))
        .map(|id| format!("{:?}={:.2}", id, timers.remaining(*id)))
        .collect();
    if active.is_empty() {
        active.push("none".to_string());
    }

    format!(
        "State: {:?}\nGround: {} | Wall L: {} | Wall R: {}\nAir jumps: {}/{}\nGlide boost: {:.2}s dir {}\nTimers: {}",
        controller.state(),
        contacts.is_grounded,
        contacts.touching_wall_left,
        contacts.touching_wall_right,
        jumping.air_jumps_used(),
        jumping.max_air_jumps(),
        movement.glide_boost_time_left(),
        movement.glide_boost_direction(),
        active.join(", ")
    )
}

/// Update the readout with current player locomotion state
pub(crate) fn update_debug_info_overlay(
    debug_state: Res<DebugState>,
    player_query: Query<(&Transform, &PlayerController), With<Player>>,
    mut overlay_query: Query<&mut Text, With<DebugInfoOverlay>>,
) {
    let Ok(mut text) = overlay_query.single_mut() else {
        return;
    };

    let body = match player_query.iter().next() {
        Some((transform, player)) => {
            let pos = transform.translation;
            let summary = match player.controller() {
                Some(controller) => describe_controller(controller),
                None => "Controller not ready".to_string(),
            };
            format!("Pos: ({:.2}, {:.2})\n{}", pos.x, pos.y, summary)
        }
        None => "No player".to_string(),
    };

    **text = match &debug_state.status_message {
        Some((message, _)) => format!("{}\n> {}", body, message),
        None => body,
    };
}

fn spawn_debug_info_overlay(commands: &mut Commands) {
    commands.spawn((
        DebugInfoOverlay,
        Text::new("Loading..."),
        TextFont {
            font_size: 12.0,
            ..default()
        },
        TextColor(Color::srgb(0.8, 0.9, 0.8)),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(20.0),
            bottom: Val::Px(20.0),
            padding: UiRect::all(Val::Px(8.0)),
            ..default()
        },
        BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.7)),
        ZIndex(500),
    ));
}
