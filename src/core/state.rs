//! Core domain: game state definitions.

use bevy::prelude::*;

#[derive(States, Debug, Hash, Eq, PartialEq, Clone, Default)]
pub enum GameState {
    /// Configuration is loading and the player has not been spawned yet
    #[default]
    Boot,
    Run,
    Paused,
}
