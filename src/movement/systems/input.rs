//! Movement domain: input sampling and jump input dispatch.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{ControllerInput, ControllerTuning, Player, PlayerState};

const JUMP_KEYS: [KeyCode; 2] = [KeyCode::Space, KeyCode::KeyK];
const CANE_KEYS: [KeyCode; 2] = [KeyCode::ShiftLeft, KeyCode::KeyJ];

pub(crate) fn read_input(keyboard: Res<ButtonInput<KeyCode>>, mut input: ResMut<ControllerInput>) {
    // Horizontal axis
    let mut x = 0.0;
    if keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft) {
        x -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight) {
        x += 1.0;
    }

    input.horizontal = x;
    input.jump_just_pressed = keyboard.any_just_pressed(JUMP_KEYS);
    input.jump_just_released = keyboard.any_just_released(JUMP_KEYS);
    input.cane_held = keyboard.any_pressed(CANE_KEYS);
    input.cane_just_released = keyboard.any_just_released(CANE_KEYS);
}

/// Jump press triggers a jump, jump release cuts it short.
pub(crate) fn dispatch_jump_input(
    time: Res<Time<Virtual>>,
    input: Res<ControllerInput>,
    tuning: Res<ControllerTuning>,
    mut query: Query<(&mut PlayerState, &mut LinearVelocity), With<Player>>,
) {
    for (mut state, mut velocity) in &mut query {
        if input.jump_just_pressed {
            if state.try_jump(&mut velocity.0, tuning.jump_power) {
                debug!("Jump: velocity={:?}", velocity.0);
            } else {
                debug!("Jump ignored: phase={:?}", state.phase(time.elapsed_secs_f64()));
            }
        }

        if input.jump_just_released && state.cut_jump(&mut velocity.0, tuning.jump_cut_multiplier)
        {
            debug!("Jump cut: vy={}", velocity.y);
        }
    }
}
