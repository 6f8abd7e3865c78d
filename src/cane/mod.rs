//! Cane domain: the deployable cane and its landing ricochet.

mod components;
mod systems;

#[cfg(test)]
mod tests;

pub use components::{Cane, CaneAction, CaneRicochet, CaneScheduler, PlayerCane};

use bevy::prelude::*;

use crate::cane::systems::{
    cancel_cane_actions, handle_cane_input, run_cane_actions, trigger_cane_ricochet,
};
use crate::movement::ControllerSet;

pub struct CanePlugin;

impl Plugin for CanePlugin {
    fn build(&self, app: &mut App) {
        app.add_observer(cancel_cane_actions)
            .add_systems(Update, handle_cane_input.in_set(ControllerSet::Dispatch))
            .add_systems(Update, trigger_cane_ricochet.in_set(ControllerSet::Landing))
            .add_systems(Update, run_cane_actions.in_set(ControllerSet::Deferred));
    }
}
