//! Core domain: camera setup and pause flow.

use bevy::prelude::*;

use crate::core::state::GameState;

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

/// Escape toggles between running and paused.
/// Virtual time is paused alongside the state so fixed steps, the coyote clock,
/// and deferred cane actions all freeze together.
pub(crate) fn toggle_pause(
    keyboard: Res<ButtonInput<KeyCode>>,
    state: Res<State<GameState>>,
    mut next_state: ResMut<NextState<GameState>>,
    mut time: ResMut<Time<Virtual>>,
) {
    if !keyboard.just_pressed(KeyCode::Escape) {
        return;
    }

    match state.get() {
        GameState::Run => {
            time.pause();
            next_state.set(GameState::Paused);
            info!("Paused");
        }
        GameState::Paused => {
            time.unpause();
            next_state.set(GameState::Run);
            info!("Resumed");
        }
        GameState::Boot => {}
    }
}
