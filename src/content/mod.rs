//! Content domain: data-driven controller configuration loaded from RON.

mod data;
mod loader;
mod validation;

pub use data::ControllerDef;
pub use loader::load_controller_config;

use bevy::prelude::*;

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<ControllerDef>()
            .add_systems(Startup, load_controller_config);
    }
}
