//! Movement domain: system modules for locomotion updates.

pub(crate) mod collisions;
pub(crate) mod input;
pub(crate) mod movement;

pub(crate) use collisions::{detect_ground, route_ground_contacts};
pub(crate) use input::{dispatch_jump_input, read_input};
pub(crate) use movement::{apply_gravity_scale, apply_horizontal_movement, refresh_jump_eligibility};
