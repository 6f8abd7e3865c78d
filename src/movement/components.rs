//! Movement domain: components and physics layers for locomotion.

use avian2d::prelude::*;
use bevy::prelude::*;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Ground surfaces (floors, platforms)
    Ground,
    /// Wall surfaces
    Wall,
    /// Player character
    Player,
}

#[derive(Component, Debug)]
pub struct Player;

/// Marker for ground colliders
#[derive(Component, Debug)]
pub struct Ground;

/// Marker for wall colliders
#[derive(Component, Debug)]
pub struct Wall;

/// Overlap probe used to decide whether the player is standing on ground.
#[derive(Component, Debug, Clone)]
pub struct GroundSensor {
    /// Probe point relative to the character origin
    pub offset: Vec2,
    pub radius: f32,
    shape: Collider,
}

impl GroundSensor {
    pub fn new(offset: Vec2, radius: f32) -> Self {
        Self {
            offset,
            radius,
            shape: Collider::circle(radius),
        }
    }

    pub fn probe_point(&self, origin: Vec2) -> Vec2 {
        origin + self.offset
    }

    /// Overlap test against the ground layer. No side effects.
    pub fn probe(&self, spatial_query: &SpatialQuery, origin: Vec2) -> bool {
        let filter = SpatialQueryFilter::from_mask(GameLayer::Ground);
        !spatial_query
            .shape_intersections(&self.shape, self.probe_point(origin), 0.0, &filter)
            .is_empty()
    }
}

/// Ground colliders currently in contact with the player.
///
/// Overlapping ground pieces each raise their own contact events; tracking
/// them as a set turns those into one landing and one take-off.
#[derive(Component, Debug, Default)]
pub struct GroundContacts {
    touching: Vec<Entity>,
}

impl GroundContacts {
    /// Record a contact with a ground collider. Returns true if this is a landing.
    pub fn begin(&mut self, ground: Entity) -> bool {
        if self.touching.contains(&ground) {
            return false;
        }
        self.touching.push(ground);
        self.touching.len() == 1
    }

    /// Forget a contact. Returns true if the last ground contact just ended.
    pub fn end(&mut self, ground: Entity) -> bool {
        let before = self.touching.len();
        self.touching.retain(|&e| e != ground);
        before > 0 && self.touching.is_empty()
    }

    pub fn count(&self) -> usize {
        self.touching.len()
    }
}
