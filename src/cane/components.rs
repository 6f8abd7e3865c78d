//! Cane domain: components for the cane and its ricochet sequence.

use bevy::prelude::*;

use crate::core::DelayScheduler;

/// Marker for the cane scene object
#[derive(Component, Debug)]
pub struct Cane;

/// Links a player to its cane entity
#[derive(Component, Debug)]
pub struct PlayerCane(pub Entity);

/// Steps of the ricochet sequence that run after a delay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaneAction {
    /// Launch the player upward off the cane
    Impulse,
    /// Return the cane to the scale captured when the sequence started
    RestoreScale,
}

pub type CaneScheduler = DelayScheduler<CaneAction>;

/// Ricochet bookkeeping on the player.
///
/// `rest_scale` is `Some` exactly while a sequence is in flight. It is set
/// when the sequence starts and taken once by the restore step.
#[derive(Component, Debug, Default)]
pub struct CaneRicochet {
    pub rest_scale: Option<Vec3>,
}

impl CaneRicochet {
    pub fn in_flight(&self) -> bool {
        self.rest_scale.is_some()
    }

    /// Start a sequence from the cane's current scale and return the squashed
    /// scale to apply now. Returns `None` if a sequence is already running.
    pub fn begin(&mut self, current_scale: Vec3) -> Option<Vec3> {
        if self.in_flight() {
            return None;
        }
        self.rest_scale = Some(current_scale);
        Some(Vec3::new(
            current_scale.x,
            current_scale.y * 0.5,
            current_scale.z,
        ))
    }

    /// End the sequence, yielding the scale to restore.
    pub fn finish(&mut self) -> Option<Vec3> {
        self.rest_scale.take()
    }
}
