//! Cane domain: tests for raising the cane and the ricochet sequence.

use avian2d::prelude::*;
use bevy::ecs::message::Messages;
use bevy::ecs::system::RunSystemOnce;
use bevy::prelude::*;
use std::time::Duration;

use super::systems::{
    cancel_cane_actions, handle_cane_input, lower_cane, raise_cane, run_cane_actions,
    trigger_cane_ricochet,
};
use super::{Cane, CaneRicochet, CaneScheduler, PlayerCane};
use crate::movement::{ControllerInput, ControllerTuning, GroundTouchedEvent, Player, PlayerState};

const REST_SCALE: Vec3 = Vec3::new(1.0, 2.0, 1.0);
const SQUASHED_SCALE: Vec3 = Vec3::new(1.0, 1.0, 1.0);

// -----------------------------------------------------------------------------
// Raising and lowering
// -----------------------------------------------------------------------------

#[test]
fn test_cane_raises_only_in_the_air() {
    let mut airborne = PlayerState::default();
    assert!(raise_cane(&mut airborne));
    assert!(airborne.holding_cane);

    let mut grounded = PlayerState {
        grounded: true,
        ..default()
    };
    assert!(!raise_cane(&mut grounded));
    assert!(!grounded.holding_cane);
}

#[test]
fn test_cane_lowers_anywhere() {
    let mut state = PlayerState::default();
    raise_cane(&mut state);
    state.grounded = true;

    lower_cane(&mut state);
    assert!(!state.holding_cane);
}

// -----------------------------------------------------------------------------
// Ricochet bookkeeping
// -----------------------------------------------------------------------------

#[test]
fn test_ricochet_halves_height_and_restores_once() {
    let mut ricochet = CaneRicochet::default();

    assert_eq!(ricochet.begin(REST_SCALE), Some(SQUASHED_SCALE));
    assert!(ricochet.in_flight());

    // A second landing mid-sequence must not capture the squashed scale
    assert_eq!(ricochet.begin(SQUASHED_SCALE), None);

    assert_eq!(ricochet.finish(), Some(REST_SCALE));
    assert_eq!(ricochet.finish(), None);
    assert!(!ricochet.in_flight());
}

// -----------------------------------------------------------------------------
// Systems
// -----------------------------------------------------------------------------

struct Scene {
    world: World,
    player: Entity,
    cane: Entity,
}

impl Scene {
    fn new(state: PlayerState) -> Self {
        let mut world = World::new();
        world.insert_resource(Time::<Virtual>::default());
        world.insert_resource(ControllerTuning {
            cane_jump_force: 12.0,
            ..default()
        });
        world.insert_resource(ControllerInput::default());
        world.init_resource::<Messages<GroundTouchedEvent>>();

        let cane = world
            .spawn((Cane, Transform::from_scale(REST_SCALE), Visibility::Hidden))
            .id();
        let player = world
            .spawn((
                Player,
                state,
                PlayerCane(cane),
                CaneRicochet::default(),
                CaneScheduler::default(),
                LinearVelocity(Vec2::new(4.0, -3.0)),
            ))
            .id();

        Self {
            world,
            player,
            cane,
        }
    }

    fn holding() -> Self {
        Self::new(PlayerState {
            holding_cane: true,
            ..default()
        })
    }

    fn land(&mut self) {
        self.world.write_message(GroundTouchedEvent {
            entity: self.player,
        });
        self.world.run_system_once(trigger_cane_ricochet).unwrap();
    }

    fn advance(&mut self, millis: u64) {
        self.world
            .resource_mut::<Time<Virtual>>()
            .advance_by(Duration::from_millis(millis));
        self.world.run_system_once(run_cane_actions).unwrap();
    }

    fn cane_scale(&self) -> Vec3 {
        self.world.get::<Transform>(self.cane).unwrap().scale
    }

    fn velocity(&self) -> Vec2 {
        self.world.get::<LinearVelocity>(self.player).unwrap().0
    }

    fn pending(&self) -> usize {
        self.world.get::<CaneScheduler>(self.player).unwrap().pending()
    }
}

#[test]
fn test_ricochet_sequence_timing() {
    let mut scene = Scene::holding();

    scene.land();
    assert_eq!(scene.cane_scale(), SQUASHED_SCALE);
    assert_eq!(scene.pending(), 2);

    // Before the impulse delay nothing changes
    scene.advance(40);
    assert_eq!(scene.velocity(), Vec2::new(4.0, -3.0));

    // Impulse combines current vertical velocity with the cane force
    scene.advance(11);
    assert_eq!(scene.velocity(), Vec2::new(4.0, 9.0));
    assert_eq!(scene.cane_scale(), SQUASHED_SCALE);

    scene.advance(150);
    assert_eq!(scene.cane_scale(), REST_SCALE);
    assert_eq!(scene.pending(), 0);
    assert!(
        !scene
            .world
            .get::<CaneRicochet>(scene.player)
            .unwrap()
            .in_flight()
    );
}

#[test]
fn test_long_frame_before_landing_does_not_count_toward_delay() {
    let mut scene = Scene::holding();

    // A 60ms frame in which the landing happens, with cane steps drained after it
    scene
        .world
        .resource_mut::<Time<Virtual>>()
        .advance_by(Duration::from_millis(60));
    scene.land();
    scene.world.run_system_once(run_cane_actions).unwrap();
    assert_eq!(scene.velocity(), Vec2::new(4.0, -3.0));
    assert_eq!(scene.pending(), 2);

    scene.advance(49);
    assert_eq!(scene.velocity(), Vec2::new(4.0, -3.0));

    scene.advance(2);
    assert_eq!(scene.velocity(), Vec2::new(4.0, 9.0));
    assert_eq!(scene.cane_scale(), SQUASHED_SCALE);
}

#[test]
fn test_landing_without_cane_does_nothing() {
    let mut scene = Scene::new(PlayerState::default());

    scene.land();
    scene.advance(500);

    assert_eq!(scene.cane_scale(), REST_SCALE);
    assert_eq!(scene.velocity(), Vec2::new(4.0, -3.0));
}

#[test]
fn test_second_landing_mid_sequence_is_ignored() {
    let mut scene = Scene::holding();

    scene.land();
    scene.advance(20);
    scene.land();

    assert_eq!(scene.cane_scale(), SQUASHED_SCALE);
    assert_eq!(scene.pending(), 2);

    scene.advance(300);
    assert_eq!(scene.cane_scale(), REST_SCALE);
    // One impulse only
    assert_eq!(scene.velocity(), Vec2::new(4.0, 9.0));
}

#[test]
fn test_despawn_mid_sequence_runs_nothing() {
    let mut scene = Scene::holding();

    scene.land();
    scene.world.despawn(scene.player);
    scene.advance(500);

    // The restore never ran, so the cane keeps the squashed scale
    assert_eq!(scene.cane_scale(), SQUASHED_SCALE);
}

#[test]
fn test_removing_player_cancels_pending_actions() {
    let mut scene = Scene::holding();
    scene.world.add_observer(cancel_cane_actions);

    scene.land();
    scene.world.entity_mut(scene.player).remove::<Player>();
    assert_eq!(scene.pending(), 0);
    assert_eq!(scene.cane_scale(), REST_SCALE);

    // Re-enabling the controller does not resurrect the old sequence
    scene.world.entity_mut(scene.player).insert(Player);
    scene.advance(500);
    assert_eq!(scene.velocity(), Vec2::new(4.0, -3.0));
    assert!(
        !scene
            .world
            .get::<CaneRicochet>(scene.player)
            .unwrap()
            .in_flight()
    );
}

#[test]
fn test_cane_input_toggles_visibility_in_the_air() {
    let mut scene = Scene::new(PlayerState::default());
    scene.world.resource_mut::<ControllerInput>().cane_held = true;

    scene.world.run_system_once(handle_cane_input).unwrap();
    assert!(scene.world.get::<PlayerState>(scene.player).unwrap().holding_cane);
    assert_eq!(
        *scene.world.get::<Visibility>(scene.cane).unwrap(),
        Visibility::Visible
    );

    {
        let mut input = scene.world.resource_mut::<ControllerInput>();
        input.cane_held = false;
        input.cane_just_released = true;
    }
    scene.world.run_system_once(handle_cane_input).unwrap();
    assert!(!scene.world.get::<PlayerState>(scene.player).unwrap().holding_cane);
    assert_eq!(
        *scene.world.get::<Visibility>(scene.cane).unwrap(),
        Visibility::Hidden
    );
}

#[test]
fn test_cane_input_ignored_on_ground() {
    let mut scene = Scene::new(PlayerState {
        grounded: true,
        ..default()
    });
    scene.world.resource_mut::<ControllerInput>().cane_held = true;

    scene.world.run_system_once(handle_cane_input).unwrap();
    assert!(!scene.world.get::<PlayerState>(scene.player).unwrap().holding_cane);
    assert_eq!(
        *scene.world.get::<Visibility>(scene.cane).unwrap(),
        Visibility::Hidden
    );
}
