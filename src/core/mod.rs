//! Core domain: game state, pause handling, and the per-character delay scheduler.

mod deferred;
mod state;
mod systems;

#[cfg(test)]
mod tests;

pub use deferred::DelayScheduler;
pub use state::GameState;

use bevy::prelude::*;

use crate::core::systems::{setup_camera, toggle_pause};

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameState>()
            .add_systems(Startup, setup_camera)
            .add_systems(
                Update,
                toggle_pause.run_if(in_state(GameState::Run).or(in_state(GameState::Paused))),
            );
    }
}
