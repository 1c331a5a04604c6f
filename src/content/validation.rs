//! Range checks for locomotion tuning values.

use crate::movement::LocomotionTuning;

/// A validation error with context about what failed.
#[derive(Debug, Clone, PartialEq)]
pub struct TuningValidationError {
    pub field: &'static str,
    pub value: f32,
    pub rule: &'static str,
}

impl std::fmt::Display for TuningValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "field '{}' has value {} but must be {}",
            self.field, self.value, self.rule
        )
    }
}

impl std::error::Error for TuningValidationError {}

/// Helper macro for checking one field against a predicate
macro_rules! check_field {
    ($errors:expr, $tuning:expr, $field:ident, $rule:expr, $ok:expr) => {
        let value = $tuning.$field;
        let ok: fn(f32) -> bool = $ok;
        if !value.is_finite() || !ok(value) {
            $errors.push(TuningValidationError {
                field: stringify!($field),
                value,
                rule: $rule,
            });
        }
    };
}

/// Validate every tunable.
/// Returns a list of validation errors, empty if all values are usable.
pub fn validate_tuning(tuning: &LocomotionTuning) -> Vec<TuningValidationError> {
    let mut errors = Vec::new();

    let non_negative = |v: f32| v >= 0.0;
    let positive = |v: f32| v > 0.0;
    let unit = |v: f32| (0.0..=1.0).contains(&v);

    // Speeds and impulses
    check_field!(errors, tuning, move_speed, "finite and >= 0", non_negative);
    check_field!(errors, tuning, jump_impulse, "finite and >= 0", non_negative);
    check_field!(errors, tuning, wall_jump_horizontal_impulse, "finite and >= 0", non_negative);
    check_field!(errors, tuning, wall_jump_vertical_impulse, "finite and >= 0", non_negative);

    // Glide
    check_field!(errors, tuning, glide_gravity_scale, "finite and >= 0", non_negative);
    check_field!(errors, tuning, glide_horizontal_multiplier, "finite and > 0", positive);
    check_field!(errors, tuning, glide_boost_multiplier, "finite and > 0", positive);

    // Durations
    check_field!(errors, tuning, glide_boost_duration, "finite and >= 0", non_negative);
    check_field!(errors, tuning, glide_lockout_after_wall_jump, "finite and >= 0", non_negative);
    check_field!(errors, tuning, wall_jump_cancel_duration, "finite and >= 0", non_negative);
    check_field!(errors, tuning, jump_buffer_time, "finite and >= 0", non_negative);
    check_field!(errors, tuning, wall_coyote_time, "finite and >= 0", non_negative);
    check_field!(errors, tuning, away_buffer_time, "finite and >= 0", non_negative);
    check_field!(errors, tuning, wall_jump_state_duration, "finite and >= 0", non_negative);

    // Contact thresholds
    check_field!(errors, tuning, contact_offset_epsilon, "in [0, 1]", unit);
    check_field!(errors, tuning, ground_normal_min, "in [0, 1]", unit);
    check_field!(errors, tuning, wall_normal_min, "in [0, 1]", unit);
    check_field!(errors, tuning, wall_normal_max_vertical, "in [0, 1]", unit);

    errors
}
