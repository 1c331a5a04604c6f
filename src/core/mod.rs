//! Core domain: camera and world setup shared by every scene.

use avian2d::prelude::*;
use bevy::prelude::*;

/// World units are meters; this many screen pixels per meter
pub const PIXELS_PER_METER: f32 = 48.0;

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(Gravity(Vec2::NEG_Y * 9.81))
            .add_systems(Startup, setup_camera);
    }
}

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn((
        Camera2d,
        Projection::from(OrthographicProjection {
            scale: 1.0 / PIXELS_PER_METER,
            ..OrthographicProjection::default_2d()
        }),
    ));
}
