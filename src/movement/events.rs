//! Movement domain: ground contact events.

use bevy::ecs::message::Message;
use bevy::prelude::*;

/// Emitted once per landing, after the jump flag has been cleared.
/// Any system can listen for it; the cane ricochet is one such listener.
#[derive(Debug)]
pub struct GroundTouchedEvent {
    pub entity: Entity,
}

impl Message for GroundTouchedEvent {}

