//! Movement domain: ground probing and contact routing.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::movement::{
    ControllerTuning, Ground, GroundContacts, GroundSensor, GroundTouchedEvent, Player,
    PlayerState,
};

pub(crate) fn detect_ground(
    spatial_query: SpatialQuery,
    mut query: Query<(&Transform, &GroundSensor, &mut PlayerState), With<Player>>,
) {
    for (transform, sensor, mut state) in &mut query {
        let was_grounded = state.grounded;
        state.grounded = sensor.probe(&spatial_query, transform.translation.truncate());

        if state.grounded != was_grounded {
            debug!("Ground probe: grounded={}", state.grounded);
        }
    }
}

/// Splits a contact pair into (player, other) if one side is a player.
fn player_contact(
    collider1: Entity,
    collider2: Entity,
    players: &Query<(&mut PlayerState, &mut GroundContacts), With<Player>>,
) -> Option<(Entity, Entity)> {
    if players.contains(collider1) {
        Some((collider1, collider2))
    } else if players.contains(collider2) {
        Some((collider2, collider1))
    } else {
        None
    }
}

/// Feeds physics contact events into the jump state machine.
///
/// A landing clears the jump flag and then notifies ground-touch listeners
/// through `GroundTouchedEvent`. Leaving the last ground collider opens the
/// coyote window.
pub(crate) fn route_ground_contacts(
    time: Res<Time<Virtual>>,
    tuning: Res<ControllerTuning>,
    mut collision_start_events: MessageReader<CollisionStart>,
    mut collision_end_events: MessageReader<CollisionEnd>,
    ground_query: Query<(), With<Ground>>,
    mut players: Query<(&mut PlayerState, &mut GroundContacts), With<Player>>,
    mut touched: MessageWriter<GroundTouchedEvent>,
) {
    let now = time.elapsed_secs_f64();

    for event in collision_start_events.read() {
        let Some((player, other)) = player_contact(event.collider1, event.collider2, &players)
        else {
            continue;
        };
        if !ground_query.contains(other) {
            continue;
        }

        let Ok((mut state, mut contacts)) = players.get_mut(player) else {
            continue;
        };
        if contacts.begin(other) {
            state.land();
            debug!("Landed on {:?} ({} ground contacts)", other, contacts.count());
            touched.write(GroundTouchedEvent { entity: player });
        }
    }

    for event in collision_end_events.read() {
        let Some((player, other)) = player_contact(event.collider1, event.collider2, &players)
        else {
            continue;
        };

        // Matched by identity; the ground entity may already be gone
        let Ok((mut state, mut contacts)) = players.get_mut(player) else {
            continue;
        };
        if contacts.end(other) {
            state.leave_ground(now, tuning.coyote_duration);
            debug!(
                "Left ground: coyote window open until {:.3}",
                state.coyote_expiry
            );
        }
    }
}
