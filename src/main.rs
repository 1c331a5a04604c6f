use avian2d::prelude::*;
use bevy::prelude::*;

use glide_runner::{ContentPlugin, CorePlugin, MovementPlugin};

fn main() {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Glide Runner".to_string(),
            resolution: (1280, 720).into(),
            resizable: true,
            ..default()
        }),
        ..default()
    }))
    .add_plugins(PhysicsPlugins::default())
    .add_plugins((CorePlugin, ContentPlugin, MovementPlugin));

    #[cfg(feature = "dev-tools")]
    {
        use glide_runner::debug::DebugPlugin;
        use glide_runner::movement::dev::{spawn_player, spawn_test_room};

        app.add_plugins(DebugPlugin)
            .add_systems(PostStartup, (spawn_test_room, spawn_player));
    }

    app.run();
}
