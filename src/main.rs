mod cane;
mod content;
mod core;
mod movement;

use avian2d::prelude::*;
use bevy::prelude::*;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Cane Hop".to_string(),
                resizable: true,
                ..default()
            }),
            ..default()
        }))
        .add_plugins(PhysicsPlugins::default())
        // World units are pixels, so gravity is scaled to match
        .insert_resource(Gravity(Vec2::NEG_Y * 1800.0))
        .add_plugins((
            core::CorePlugin,
            content::ContentPlugin,
            movement::MovementPlugin,
            cane::CanePlugin,
        ))
        .run();
}
