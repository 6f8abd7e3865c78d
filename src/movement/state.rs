//! Movement domain: jump/ground state machine for the player.

use bevy::prelude::*;

/// Vertical speed above which a released jump is still rising and can be cut.
pub const JUMP_CUT_THRESHOLD: f32 = 0.1;

/// Conceptual jump phase, derived from [`PlayerState`] flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpPhase {
    /// Ground probe reports contact
    Grounded,
    /// Off the ground, but still inside the coyote window
    CoyoteWindow,
    /// Airborne because of a jump, until the next landing
    Jumping,
    /// Airborne without a jump and outside the coyote window
    Falling,
}

/// Jump and ground flags for the player character.
///
/// `can_jump` is only ever written by [`PlayerState::refresh_eligibility`];
/// input handlers read it but never set it.
#[derive(Component, Debug, Clone)]
pub struct PlayerState {
    /// Result of the last ground probe
    pub grounded: bool,
    /// Set by a jump, cleared by the next ground contact
    pub jumping: bool,
    /// Cached eligibility from the last physics step
    pub can_jump: bool,
    /// Virtual time (seconds) at which the coyote window closes
    pub coyote_expiry: f64,
    /// Cane deployed while airborne
    pub holding_cane: bool,
}

impl Default for PlayerState {
    fn default() -> Self {
        Self {
            grounded: false,
            jumping: false,
            can_jump: false,
            coyote_expiry: f64::NEG_INFINITY,
            holding_cane: false,
        }
    }
}

impl PlayerState {
    pub fn in_coyote_window(&self, now: f64) -> bool {
        now < self.coyote_expiry
    }

    /// Pure eligibility policy: on the ground or inside the coyote window,
    /// not already jumping, and not holding the cane.
    pub fn eligible(&self, now: f64) -> bool {
        (self.grounded || self.in_coyote_window(now)) && !self.jumping && !self.holding_cane
    }

    /// Recompute `can_jump`. Runs once per physics step.
    pub fn refresh_eligibility(&mut self, now: f64) {
        self.can_jump = self.eligible(now);
    }

    pub fn phase(&self, now: f64) -> JumpPhase {
        if self.jumping {
            JumpPhase::Jumping
        } else if self.grounded {
            JumpPhase::Grounded
        } else if self.in_coyote_window(now) {
            JumpPhase::CoyoteWindow
        } else {
            JumpPhase::Falling
        }
    }

    /// Jump press: adds `jump_power` to vertical velocity if eligible.
    /// Returns whether the jump happened; an ineligible press is ignored.
    pub fn try_jump(&mut self, velocity: &mut Vec2, jump_power: f32) -> bool {
        // `can_jump` is stale until the next physics step; `jumping` blocks a second press meanwhile
        if !self.can_jump || self.jumping {
            return false;
        }

        self.jumping = true;
        velocity.y += jump_power;
        true
    }

    /// Jump release: shortens a rising jump for variable jump height.
    /// Returns whether the cut was applied.
    pub fn cut_jump(&self, velocity: &mut Vec2, cut_multiplier: f32) -> bool {
        if self.jumping && velocity.y > JUMP_CUT_THRESHOLD {
            velocity.y *= cut_multiplier;
            true
        } else {
            false
        }
    }

    /// First contact with ground after being airborne.
    pub fn land(&mut self) {
        self.jumping = false;
    }

    /// Last ground contact ended: open the coyote window.
    pub fn leave_ground(&mut self, now: f64, coyote_duration: f32) {
        self.coyote_expiry = now + coyote_duration as f64;
    }
}
