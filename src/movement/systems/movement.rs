//! Movement domain: per-physics-step locomotion systems.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{ControllerInput, ControllerTuning, Player, PlayerState};

/// Downward speed past which the falling gravity scale applies.
/// The deadband keeps the scale from flickering at the jump apex.
pub const FALL_THRESHOLD: f32 = -0.1;

/// Target horizontal velocity for an input axis value.
pub fn horizontal_velocity(axis: f32, grounded: bool, tuning: &ControllerTuning) -> f32 {
    tuning.horizontal_speed(grounded) * axis
}

/// Gravity scale policy: purely a function of vertical velocity, never of grounded state.
pub fn gravity_scale_for(vertical_velocity: f32, tuning: &ControllerTuning) -> f32 {
    if vertical_velocity < FALL_THRESHOLD {
        tuning.fall_gravity_scale
    } else {
        tuning.base_gravity_scale
    }
}

pub(crate) fn apply_horizontal_movement(
    input: Res<ControllerInput>,
    tuning: Res<ControllerTuning>,
    mut query: Query<(&PlayerState, &mut LinearVelocity), With<Player>>,
) {
    for (state, mut velocity) in &mut query {
        // Vertical velocity passes through untouched
        velocity.x = horizontal_velocity(input.horizontal, state.grounded, &tuning);
    }
}

pub(crate) fn apply_gravity_scale(
    tuning: Res<ControllerTuning>,
    mut query: Query<(&LinearVelocity, &mut GravityScale), With<Player>>,
) {
    for (velocity, mut gravity_scale) in &mut query {
        gravity_scale.0 = gravity_scale_for(velocity.y, &tuning);
    }
}

pub(crate) fn refresh_jump_eligibility(
    time: Res<Time<Virtual>>,
    mut query: Query<&mut PlayerState, With<Player>>,
) {
    let now = time.elapsed_secs_f64();

    for mut state in &mut query {
        state.refresh_eligibility(now);
    }
}
