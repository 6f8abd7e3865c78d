//! Movement domain: player bootstrap from loaded tuning.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::cane::{Cane, CaneRicochet, CaneScheduler, PlayerCane};
use crate::core::GameState;
use crate::movement::{
    ControllerTuning, GameLayer, GroundContacts, GroundSensor, Player, PlayerState,
};

const PLAYER_SIZE: Vec2 = Vec2::new(24.0, 48.0);
const CANE_SIZE: Vec2 = Vec2::new(6.0, 40.0);

/// Spawn the player and its cane once `ControllerTuning` is available,
/// then hand control over to the run.
pub(crate) fn spawn_player(
    mut commands: Commands,
    tuning: Res<ControllerTuning>,
    existing_player: Query<Entity, With<Player>>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    // Don't spawn if player already exists
    if !existing_player.is_empty() {
        info!("Player already exists, skipping spawn");
        return;
    }

    // Hidden until raised in the air; the scale is what the ricochet squashes
    let cane = commands
        .spawn((
            Cane,
            Sprite {
                color: Color::srgb(0.55, 0.35, 0.2),
                custom_size: Some(CANE_SIZE),
                ..default()
            },
            Transform::from_xyz(PLAYER_SIZE.x * 0.5 + 2.0, -8.0, 0.1),
            Visibility::Hidden,
        ))
        .id();

    let player = commands
        .spawn((
            // Identity & controller state
            (
                Player,
                PlayerState::default(),
                GroundContacts::default(),
                GroundSensor::new(tuning.ground_probe_offset, tuning.ground_radius),
            ),
            // Cane
            (
                PlayerCane(cane),
                CaneRicochet::default(),
                CaneScheduler::default(),
            ),
            // Rendering
            Sprite {
                color: Color::srgb(0.9, 0.9, 0.9),
                custom_size: Some(PLAYER_SIZE),
                ..default()
            },
            Transform::from_xyz(0.0, 100.0, 0.0),
            // Physics
            (
                RigidBody::Dynamic,
                Collider::rectangle(PLAYER_SIZE.x, PLAYER_SIZE.y),
                LockedAxes::ROTATION_LOCKED,
                LinearVelocity::default(),
                GravityScale(tuning.base_gravity_scale),
                Friction::new(0.0),
                CollisionEventsEnabled,
                CollisionLayers::new(GameLayer::Player, [GameLayer::Ground, GameLayer::Wall]),
            ),
        ))
        .add_child(cane)
        .id();

    info!(
        "Spawned player {:?} with cane {:?}: probe offset={}, radius={}",
        player, cane, tuning.ground_probe_offset, tuning.ground_radius
    );

    next_state.set(GameState::Run);
}
