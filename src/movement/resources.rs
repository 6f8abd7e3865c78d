//! Movement domain: tuning and input resources.

use bevy::prelude::*;

use crate::content::ControllerDef;

#[derive(Resource, Debug, Clone, PartialEq)]
pub struct ControllerTuning {
    pub move_speed: f32,
    /// Airborne horizontal speed; `None` keeps `move_speed` in the air too
    pub air_move_speed: Option<f32>,
    pub jump_power: f32,
    /// Applied to rising velocity when jump is released early, in (0, 1)
    pub jump_cut_multiplier: f32,
    pub coyote_duration: f32,
    pub base_gravity_scale: f32,
    pub fall_gravity_scale: f32,
    pub ground_radius: f32,
    pub ground_probe_offset: Vec2,
    pub cane_jump_force: f32,
    pub ricochet_impulse_delay: f32,
    pub ricochet_restore_delay: f32,
}

impl Default for ControllerTuning {
    fn default() -> Self {
        Self {
            move_speed: 320.0,
            air_move_speed: None,
            jump_power: 680.0,
            jump_cut_multiplier: 0.5,
            coyote_duration: 0.12,
            base_gravity_scale: 1.0,
            fall_gravity_scale: 2.0,
            ground_radius: 6.0,
            ground_probe_offset: Vec2::new(0.0, -24.0),
            cane_jump_force: 900.0,
            ricochet_impulse_delay: 0.05,
            ricochet_restore_delay: 0.2,
        }
    }
}

impl From<&ControllerDef> for ControllerTuning {
    fn from(def: &ControllerDef) -> Self {
        let (offset_x, offset_y) = def.ground_probe.offset;
        Self {
            move_speed: def.movement.move_speed,
            air_move_speed: def.movement.air_move_speed,
            jump_power: def.jump.jump_power,
            jump_cut_multiplier: def.jump.jump_cut_multiplier,
            coyote_duration: def.jump.coyote_duration,
            base_gravity_scale: def.gravity.base_gravity_scale,
            fall_gravity_scale: def.gravity.fall_gravity_scale,
            ground_radius: def.ground_probe.radius,
            ground_probe_offset: Vec2::new(offset_x, offset_y),
            cane_jump_force: def.cane.jump_force,
            ricochet_impulse_delay: def.cane.ricochet_impulse_delay,
            ricochet_restore_delay: def.cane.ricochet_restore_delay,
        }
    }
}

impl ControllerTuning {
    /// Horizontal speed for the current grounded state.
    pub fn horizontal_speed(&self, grounded: bool) -> f32 {
        match self.air_move_speed {
            Some(air_speed) if !grounded => air_speed,
            _ => self.move_speed,
        }
    }
}

/// Input sampled once per rendered frame and held until the next physics step.
#[derive(Resource, Debug, Default)]
pub struct ControllerInput {
    /// Signed horizontal axis in [-1, 1]
    pub horizontal: f32,
    pub jump_just_pressed: bool,
    pub jump_just_released: bool,
    pub cane_held: bool,
    pub cane_just_released: bool,
}
