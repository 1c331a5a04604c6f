//! Platformer locomotion: a buffered, coyote-timed state machine for ground,
//! air and wall jumps, wall slides and glides, hosted on Bevy and avian2d.

pub mod content;
pub mod core;
#[cfg(feature = "dev-tools")]
pub mod debug;
pub mod movement;

pub use crate::content::ContentPlugin;
pub use crate::core::CorePlugin;
pub use crate::movement::MovementPlugin;
