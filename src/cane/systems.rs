//! Cane domain: raising, lowering, and the landing ricochet.

use avian2d::prelude::*;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;
use std::time::Duration;

use crate::cane::{Cane, CaneAction, CaneRicochet, CaneScheduler, PlayerCane};
use crate::movement::{ControllerInput, ControllerTuning, GroundTouchedEvent, Player, PlayerState};

/// Deploy the cane. Only possible while airborne; returns whether it is held.
pub(crate) fn raise_cane(state: &mut PlayerState) -> bool {
    if state.grounded {
        return false;
    }
    state.holding_cane = true;
    true
}

/// Put the cane away, airborne or not.
pub(crate) fn lower_cane(state: &mut PlayerState) {
    state.holding_cane = false;
}

fn set_cane_visibility(
    canes: &mut Query<&mut Visibility, With<Cane>>,
    cane: Entity,
    visibility: Visibility,
) {
    match canes.get_mut(cane) {
        Ok(mut current) => {
            current.set_if_neq(visibility);
        }
        Err(_) => warn!("Cane {:?} is missing, cannot set {:?}", cane, visibility),
    }
}

/// Holding the cane input raises the cane in the air; releasing it lowers it.
pub(crate) fn handle_cane_input(
    input: Res<ControllerInput>,
    mut players: Query<(&mut PlayerState, &PlayerCane), With<Player>>,
    mut canes: Query<&mut Visibility, With<Cane>>,
) {
    for (mut state, cane) in &mut players {
        if input.cane_held {
            let was_holding = state.holding_cane;
            if raise_cane(&mut state) && !was_holding {
                set_cane_visibility(&mut canes, cane.0, Visibility::Visible);
                debug!("Cane raised");
            }
        }

        if input.cane_just_released {
            lower_cane(&mut state);
            set_cane_visibility(&mut canes, cane.0, Visibility::Hidden);
            debug!("Cane lowered");
        }
    }
}

/// Ground-touch listener: landing with the cane out squashes the cane now,
/// launches the player shortly after, and restores the cane last.
pub(crate) fn trigger_cane_ricochet(
    time: Res<Time<Virtual>>,
    tuning: Res<ControllerTuning>,
    mut touched: MessageReader<GroundTouchedEvent>,
    mut players: Query<
        (&PlayerState, &PlayerCane, &mut CaneRicochet, &mut CaneScheduler),
        With<Player>,
    >,
    mut canes: Query<&mut Transform, With<Cane>>,
) {
    let now = time.elapsed();

    for event in touched.read() {
        let Ok((state, cane, mut ricochet, mut scheduler)) = players.get_mut(event.entity) else {
            continue;
        };
        if !state.holding_cane {
            continue;
        }

        let Ok(mut transform) = canes.get_mut(cane.0) else {
            warn!("Cane {:?} is missing, skipping ricochet", cane.0);
            continue;
        };

        let Some(squashed) = ricochet.begin(transform.scale) else {
            debug!("Ricochet already in flight, ignoring landing");
            continue;
        };

        transform.scale = squashed;
        scheduler.schedule(
            now,
            Duration::from_secs_f32(tuning.ricochet_impulse_delay),
            CaneAction::Impulse,
        );
        scheduler.schedule(
            now,
            Duration::from_secs_f32(tuning.ricochet_restore_delay),
            CaneAction::RestoreScale,
        );
        debug!("Ricochet started: cane squashed to {:?}", squashed);
    }
}

/// Runs every cane step whose deadline has passed on the virtual clock.
pub(crate) fn run_cane_actions(
    time: Res<Time<Virtual>>,
    tuning: Res<ControllerTuning>,
    mut players: Query<
        (
            &PlayerCane,
            &mut CaneRicochet,
            &mut CaneScheduler,
            &mut LinearVelocity,
        ),
        With<Player>,
    >,
    mut canes: Query<&mut Transform, With<Cane>>,
) {
    let now = time.elapsed();

    for (cane, mut ricochet, mut scheduler, mut velocity) in &mut players {
        for action in scheduler.take_due(now) {
            match action {
                CaneAction::Impulse => {
                    velocity.y += tuning.cane_jump_force;
                    debug!("Ricochet impulse: vy={}", velocity.y);
                }
                CaneAction::RestoreScale => {
                    let Some(rest_scale) = ricochet.finish() else {
                        continue;
                    };
                    match canes.get_mut(cane.0) {
                        Ok(mut transform) => {
                            transform.scale = rest_scale;
                            debug!("Ricochet finished: cane restored to {:?}", rest_scale);
                        }
                        Err(_) => warn!("Cane {:?} is missing, cannot restore scale", cane.0),
                    }
                }
            }
        }
    }
}

/// Nothing scheduled for a player may run once it stops being a player,
/// whether the component is removed or the entity is despawned. A squashed
/// cane is put back right away so the next sequence starts from rest.
pub(crate) fn cancel_cane_actions(
    remove: On<Remove, Player>,
    mut players: Query<(&PlayerCane, &mut CaneRicochet, &mut CaneScheduler)>,
    mut canes: Query<&mut Transform, With<Cane>>,
) {
    let Ok((cane, mut ricochet, mut scheduler)) = players.get_mut(remove.entity) else {
        return;
    };

    let dropped = scheduler.cancel_all();
    if dropped > 0 {
        debug!(
            "Cancelled {} pending cane actions for {:?}",
            dropped, remove.entity
        );
    }

    if let Some(rest_scale) = ricochet.finish()
        && let Ok(mut transform) = canes.get_mut(cane.0)
    {
        transform.scale = rest_scale;
    }
}
