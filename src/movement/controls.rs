//! Movement domain: per-frame control snapshot.

/// State of one button for the current frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ButtonSample {
    pub held: bool,
    pub just_pressed: bool,
}

impl ButtonSample {
    pub fn held() -> Self {
        Self {
            held: true,
            just_pressed: false,
        }
    }

    pub fn pressed() -> Self {
        Self {
            held: true,
            just_pressed: true,
        }
    }
}

/// Raw device state for the four locomotion controls.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RawControls {
    pub left: ButtonSample,
    pub right: ButtonSample,
    pub jump: ButtonSample,
    pub glide: ButtonSample,
}

/// Edge- and level-triggered view of the controls, rebuilt every frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputSnapshot {
    /// -1, 0 or 1. Left wins when both directions are held.
    pub horizontal: f32,
    pub jump_pressed: bool,
    pub jump_held: bool,
    pub glide_held: bool,
    pub left_pressed: bool,
    pub right_pressed: bool,
    pub left_held: bool,
    pub right_held: bool,
}

impl InputSnapshot {
    pub fn from_raw(raw: RawControls) -> Self {
        let horizontal = if raw.left.held {
            -1.0
        } else if raw.right.held {
            1.0
        } else {
            0.0
        };

        Self {
            horizontal,
            jump_pressed: raw.jump.just_pressed,
            jump_held: raw.jump.held,
            glide_held: raw.glide.held,
            left_pressed: raw.left.just_pressed,
            right_pressed: raw.right.just_pressed,
            left_held: raw.left.held,
            right_held: raw.right.held,
        }
    }
}
