//! Data definitions for the controller RON file.
//!
//! These structs mirror assets/data/controller.ron and are only used for
//! deserialization. Gameplay reads the validated `ControllerTuning` resource.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Schema versions this build knows how to read.
pub const SUPPORTED_SCHEMA_VERSION: u32 = 1;

// ============================================================================
// File wrapper with schema_version
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ControllerFile {
    pub schema_version: u32,
    pub controller: ControllerDef,
}

// ============================================================================
// Controller tunables (controller.ron)
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize, Reflect)]
pub struct ControllerDef {
    pub movement: MovementDef,
    pub jump: JumpDef,
    pub gravity: GravityDef,
    pub ground_probe: GroundProbeDef,
    pub cane: CaneDef,
}

#[derive(Debug, Clone, Deserialize, Serialize, Reflect)]
pub struct MovementDef {
    pub move_speed: f32,
    /// Horizontal speed while airborne. Falls back to `move_speed` when absent.
    #[serde(default)]
    pub air_move_speed: Option<f32>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Reflect)]
pub struct JumpDef {
    pub jump_power: f32,
    pub jump_cut_multiplier: f32,
    pub coyote_duration: f32,
}

#[derive(Debug, Clone, Deserialize, Serialize, Reflect)]
pub struct GravityDef {
    pub base_gravity_scale: f32,
    pub fall_gravity_scale: f32,
}

#[derive(Debug, Clone, Deserialize, Serialize, Reflect)]
pub struct GroundProbeDef {
    pub radius: f32,
    /// Probe point relative to the character origin
    pub offset: (f32, f32),
}

#[derive(Debug, Clone, Deserialize, Serialize, Reflect)]
pub struct CaneDef {
    pub jump_force: f32,
    #[serde(default = "default_impulse_delay")]
    pub ricochet_impulse_delay: f32,
    #[serde(default = "default_restore_delay")]
    pub ricochet_restore_delay: f32,
}

fn default_impulse_delay() -> f32 {
    0.05
}

fn default_restore_delay() -> f32 {
    0.2
}
