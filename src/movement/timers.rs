//! Movement domain: countdown timers for input buffers and grace windows.

use crate::movement::LocomotionTuning;

/// Every countdown the controller keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerId {
    JumpBuffer,
    WallLeftCoyote,
    WallRightCoyote,
    LeftAway,
    RightAway,
    GlideLockout,
    WallJumpCancel,
}

impl TimerId {
    pub const ALL: [TimerId; 7] = [
        TimerId::JumpBuffer,
        TimerId::WallLeftCoyote,
        TimerId::WallRightCoyote,
        TimerId::LeftAway,
        TimerId::RightAway,
        TimerId::GlideLockout,
        TimerId::WallJumpCancel,
    ];

    fn index(self) -> usize {
        self as usize
    }

    fn duration(self, tuning: &LocomotionTuning) -> f32 {
        match self {
            TimerId::JumpBuffer => tuning.jump_buffer_time,
            TimerId::WallLeftCoyote | TimerId::WallRightCoyote => tuning.wall_coyote_time,
            TimerId::LeftAway | TimerId::RightAway => tuning.away_buffer_time,
            TimerId::GlideLockout => tuning.glide_lockout_after_wall_jump,
            TimerId::WallJumpCancel => tuning.wall_jump_cancel_duration,
        }
    }
}

/// Fixed set of independent countdowns, each floored at zero.
#[derive(Debug, Clone, PartialEq)]
pub struct TimerBank {
    durations: [f32; 7],
    remaining: [f32; 7],
}

impl TimerBank {
    pub fn new(tuning: &LocomotionTuning) -> Self {
        Self {
            durations: TimerId::ALL.map(|id| id.duration(tuning)),
            remaining: [0.0; 7],
        }
    }

    pub fn trigger(&mut self, id: TimerId) {
        self.remaining[id.index()] = self.durations[id.index()];
    }

    pub fn consume(&mut self, id: TimerId) {
        self.remaining[id.index()] = 0.0;
    }

    pub fn tick(&mut self, dt: f32) {
        for value in &mut self.remaining {
            *value = (*value - dt).max(0.0);
        }
    }

    pub fn is_active(&self, id: TimerId) -> bool {
        self.remaining[id.index()] > 0.0
    }

    pub fn remaining(&self, id: TimerId) -> f32 {
        self.remaining[id.index()]
    }
}
