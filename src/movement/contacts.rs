//! Movement domain: classification of raw contacts into ground and wall flags.

use bevy::prelude::*;

use crate::movement::LocomotionTuning;

/// One contact point reported by the physics step.
/// `normal` points from the touched surface toward the player.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContactSample {
    pub point: Vec2,
    pub normal: Vec2,
}

impl ContactSample {
    pub fn new(point: Vec2, normal: Vec2) -> Self {
        Self { point, normal }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContactThresholds {
    pub offset_epsilon: f32,
    pub ground_normal_min: f32,
    pub wall_normal_min: f32,
    pub wall_normal_max_vertical: f32,
}

impl From<&LocomotionTuning> for ContactThresholds {
    fn from(tuning: &LocomotionTuning) -> Self {
        Self {
            offset_epsilon: tuning.contact_offset_epsilon,
            ground_normal_min: tuning.ground_normal_min,
            wall_normal_min: tuning.wall_normal_min,
            wall_normal_max_vertical: tuning.wall_normal_max_vertical,
        }
    }
}

impl Default for ContactThresholds {
    fn default() -> Self {
        Self::from(&LocomotionTuning::default())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContactState {
    pub is_grounded: bool,
    pub touching_wall_left: bool,
    pub touching_wall_right: bool,
    pub prev_grounded: bool,
}

impl ContactState {
    /// Re-derives the three contact flags from this step's contacts.
    /// Nothing carries over from the previous step except `prev_grounded`.
    pub fn classify(
        &mut self,
        contacts: &[ContactSample],
        body_center: Vec2,
        thresholds: &ContactThresholds,
    ) {
        self.is_grounded = false;
        self.touching_wall_left = false;
        self.touching_wall_right = false;

        for contact in contacts {
            self.register(contact, body_center, thresholds);
        }
    }

    fn register(&mut self, contact: &ContactSample, body_center: Vec2, t: &ContactThresholds) {
        let offset = contact.point - body_center;
        let n = contact.normal;

        if offset.y < -t.offset_epsilon && n.y > t.ground_normal_min {
            self.is_grounded = true;
        }

        if offset.x < -t.offset_epsilon
            && n.x > t.wall_normal_min
            && n.y.abs() < t.wall_normal_max_vertical
        {
            self.touching_wall_left = true;
        }

        if offset.x > t.offset_epsilon
            && n.x < -t.wall_normal_min
            && n.y.abs() < t.wall_normal_max_vertical
        {
            self.touching_wall_right = true;
        }
    }

    /// Called once at the end of the frame, after all logic read `is_grounded`.
    pub fn latch(&mut self) {
        self.prev_grounded = self.is_grounded;
    }

    pub fn just_landed(&self) -> bool {
        self.is_grounded && !self.prev_grounded
    }

    pub fn touching_any_wall(&self) -> bool {
        self.touching_wall_left || self.touching_wall_right
    }
}
