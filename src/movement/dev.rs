//! Movement domain: test level and dev-only probe visualisation.

use avian2d::prelude::*;
use bevy::prelude::*;

#[cfg(feature = "dev-tools")]
use crate::movement::{GroundSensor, Player};
use crate::movement::{GameLayer, Ground, Wall};

const GROUND_COLOR: Color = Color::srgb(0.4, 0.5, 0.4);
const PLATFORM_COLOR: Color = Color::srgb(0.5, 0.4, 0.3);
const WALL_COLOR: Color = Color::srgb(0.3, 0.3, 0.4);

fn ground_block(commands: &mut Commands, color: Color, size: Vec2, position: Vec2) {
    commands.spawn((
        Ground,
        Sprite {
            color,
            custom_size: Some(size),
            ..default()
        },
        Transform::from_translation(position.extend(0.0)),
        RigidBody::Static,
        Collider::rectangle(size.x, size.y),
        CollisionLayers::new(GameLayer::Ground, [GameLayer::Player]),
    ));
}

fn wall_block(commands: &mut Commands, size: Vec2, position: Vec2) {
    commands.spawn((
        Wall,
        Sprite {
            color: WALL_COLOR,
            custom_size: Some(size),
            ..default()
        },
        Transform::from_translation(position.extend(0.0)),
        RigidBody::Static,
        Collider::rectangle(size.x, size.y),
        CollisionLayers::new(GameLayer::Wall, [GameLayer::Player]),
    ));
}

pub(crate) fn spawn_test_room(mut commands: Commands) {
    // Floor is two overlapping pieces so a landing on the seam touches both
    ground_block(
        &mut commands,
        GROUND_COLOR,
        Vec2::new(420.0, 40.0),
        Vec2::new(-195.0, -200.0),
    );
    ground_block(
        &mut commands,
        GROUND_COLOR,
        Vec2::new(420.0, 40.0),
        Vec2::new(195.0, -200.0),
    );

    wall_block(&mut commands, Vec2::new(40.0, 500.0), Vec2::new(-420.0, 50.0));
    wall_block(&mut commands, Vec2::new(40.0, 500.0), Vec2::new(420.0, 50.0));

    // Platforms, each a little higher than the last
    for (size, position) in [
        (Vec2::new(150.0, 20.0), Vec2::new(-250.0, -50.0)),
        (Vec2::new(150.0, 20.0), Vec2::new(250.0, 50.0)),
        (Vec2::new(120.0, 20.0), Vec2::new(0.0, 150.0)),
    ] {
        ground_block(&mut commands, PLATFORM_COLOR, size, position);
    }
}

/// Draws the ground probe circle around each player.
#[cfg(feature = "dev-tools")]
pub(crate) fn draw_ground_probe(
    mut gizmos: Gizmos,
    query: Query<(&Transform, &GroundSensor), With<Player>>,
) {
    for (transform, sensor) in &query {
        let point = sensor.probe_point(transform.translation.truncate());
        gizmos.circle_2d(
            Isometry2d::from_translation(point),
            sensor.radius,
            Color::srgb(1.0, 0.0, 0.0),
        );
    }
}
