//! Movement domain: player controller plugin wiring and public exports.
//!
//! The frame hook (`Update`) samples input, dispatches jump edges, and routes
//! physics contacts. The physics hook (`FixedUpdate`) sets horizontal
//! velocity, picks the gravity scale, probes for ground, and recomputes jump
//! eligibility, in that order.

mod bootstrap;
mod components;
mod dev;
mod events;
mod resources;
mod state;
mod systems;


pub use components::{GameLayer, Ground, GroundContacts, GroundSensor, Player, Wall};
pub use events::GroundTouchedEvent;
pub use resources::{ControllerInput, ControllerTuning};
pub use state::PlayerState;

use bevy::prelude::*;

use crate::content::load_controller_config;
use crate::core::GameState;
use crate::movement::bootstrap::spawn_player;
#[cfg(feature = "dev-tools")]
use crate::movement::dev::draw_ground_probe;
use crate::movement::dev::spawn_test_room;
use crate::movement::systems::{
    apply_gravity_scale, apply_horizontal_movement, detect_ground, dispatch_jump_input,
    read_input, refresh_jump_eligibility, route_ground_contacts,
};

/// Frame-hook ordering shared by every controller domain.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum ControllerSet {
    /// Input devices are sampled into `ControllerInput`
    Sample,
    /// Input edges are turned into state changes
    Dispatch,
    /// Physics contacts are routed into the state machine
    Contacts,
    /// Ground-touch listeners react to this frame's landings
    Landing,
    /// Deferred actions are ticked
    Deferred,
}

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ControllerInput>()
            .add_message::<GroundTouchedEvent>()
            .configure_sets(
                Update,
                (
                    ControllerSet::Sample,
                    ControllerSet::Dispatch,
                    ControllerSet::Contacts,
                    ControllerSet::Landing,
                    ControllerSet::Deferred,
                )
                    .chain(),
            )
            .configure_sets(
                Update,
                (
                    ControllerSet::Sample.run_if(in_state(GameState::Run)),
                    ControllerSet::Dispatch.run_if(in_state(GameState::Run)),
                ),
            )
            .add_systems(
                Startup,
                (spawn_test_room, spawn_player.after(load_controller_config)),
            )
            .add_systems(Update, read_input.in_set(ControllerSet::Sample))
            .add_systems(Update, dispatch_jump_input.in_set(ControllerSet::Dispatch))
            .add_systems(Update, route_ground_contacts.in_set(ControllerSet::Contacts))
            .add_systems(
                FixedUpdate,
                (
                    apply_horizontal_movement,
                    apply_gravity_scale,
                    detect_ground,
                    refresh_jump_eligibility,
                )
                    .chain()
                    .run_if(in_state(GameState::Run)),
            );

        #[cfg(feature = "dev-tools")]
        app.add_systems(Update, draw_ground_probe);
    }
}
