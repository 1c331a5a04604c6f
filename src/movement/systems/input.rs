//! Movement domain: input sampling for locomotion.

use bevy::prelude::*;

use crate::movement::{ButtonSample, InputSnapshot, LocomotionBindings, MovementInput, RawControls};

fn sample(keyboard: &ButtonInput<KeyCode>, keys: &[KeyCode]) -> ButtonSample {
    ButtonSample {
        held: keyboard.any_pressed(keys.iter().copied()),
        just_pressed: keyboard.any_just_pressed(keys.iter().copied()),
    }
}

pub(crate) fn read_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    bindings: Res<LocomotionBindings>,
    mut input: ResMut<MovementInput>,
) {
    let raw = RawControls {
        left: sample(&keyboard, &bindings.left),
        right: sample(&keyboard, &bindings.right),
        jump: sample(&keyboard, &bindings.jump),
        glide: sample(&keyboard, &bindings.glide),
    };

    input.snapshot = InputSnapshot::from_raw(raw);
}
