//! Range checks for controller tunables.

use super::data::*;

/// A validation error naming the offending field.
#[derive(Debug)]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "'{}' {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Helper macro for checking a numeric field against a predicate
macro_rules! check_value {
    ($errors:expr, $field:expr, $value:expr, $ok:expr, $expectation:expr) => {
        let value = $value;
        if !value.is_finite() || !$ok(value) {
            $errors.push(ValidationError {
                field: $field,
                message: format!("must be {}, got {}", $expectation, value),
            });
        }
    };
}

fn positive(v: f32) -> bool {
    v > 0.0
}

fn non_negative(v: f32) -> bool {
    v >= 0.0
}

/// Validate every tunable in a controller file.
/// Returns a list of validation errors, empty if the file is usable.
pub fn validate_controller_file(file: &ControllerFile) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if file.schema_version != SUPPORTED_SCHEMA_VERSION {
        errors.push(ValidationError {
            field: "schema_version",
            message: format!(
                "must be {}, got {}",
                SUPPORTED_SCHEMA_VERSION, file.schema_version
            ),
        });
    }

    let def = &file.controller;

    // Movement
    check_value!(errors, "movement.move_speed", def.movement.move_speed, positive, "> 0");
    if let Some(air_speed) = def.movement.air_move_speed {
        check_value!(errors, "movement.air_move_speed", air_speed, positive, "> 0");
    }

    // Jump
    check_value!(errors, "jump.jump_power", def.jump.jump_power, positive, "> 0");
    check_value!(
        errors,
        "jump.jump_cut_multiplier",
        def.jump.jump_cut_multiplier,
        |v: f32| v > 0.0 && v < 1.0,
        "in (0, 1)"
    );
    check_value!(
        errors,
        "jump.coyote_duration",
        def.jump.coyote_duration,
        non_negative,
        ">= 0"
    );

    // Gravity
    check_value!(
        errors,
        "gravity.base_gravity_scale",
        def.gravity.base_gravity_scale,
        non_negative,
        ">= 0"
    );
    check_value!(
        errors,
        "gravity.fall_gravity_scale",
        def.gravity.fall_gravity_scale,
        non_negative,
        ">= 0"
    );

    // Ground probe
    check_value!(errors, "ground_probe.radius", def.ground_probe.radius, positive, "> 0");
    let (offset_x, offset_y) = def.ground_probe.offset;
    if !offset_x.is_finite() || !offset_y.is_finite() {
        errors.push(ValidationError {
            field: "ground_probe.offset",
            message: format!("must be finite, got ({}, {})", offset_x, offset_y),
        });
    }

    // Cane
    check_value!(errors, "cane.jump_force", def.cane.jump_force, positive, "> 0");
    check_value!(
        errors,
        "cane.ricochet_impulse_delay",
        def.cane.ricochet_impulse_delay,
        non_negative,
        ">= 0"
    );
    check_value!(
        errors,
        "cane.ricochet_restore_delay",
        def.cane.ricochet_restore_delay,
        |v: f32| v >= def.cane.ricochet_impulse_delay,
        "at least cane.ricochet_impulse_delay"
    );

    errors
}
