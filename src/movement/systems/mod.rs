//! Movement domain: system modules bridging the controller and the physics engine.

pub(crate) mod collisions;
pub(crate) mod controller;
pub(crate) mod input;
#[cfg(test)]
mod tests;

pub(crate) use collisions::classify_contacts;
pub(crate) use controller::{apply_wall_slide_requests, drive_controllers, latch_contacts};
pub(crate) use input::read_input;
