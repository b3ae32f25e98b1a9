//! Input-driven rolling movement for the player.
//!
//! [`PlayerController`] holds the movement tunables and the can-move gate.
//! The force rule lives here as plain functions so it can be checked without
//! a world:
//!
//! - thrust is `ground_thrust` on the ground and `air_thrust` in the air;
//! - the horizontal force is `input * thrust`, except when the body is already
//!   faster than `max_thrust_velocity` and the input pushes the same way the
//!   body is moving horizontally. Zero input, zero horizontal velocity, and
//!   opposite signs never suppress, so braking and reversing always work.
//!
//! Systems in [`crate::systems::playercontroller`] apply the result.

use bevy_ecs::prelude::Component;
use glam::Vec2;

/// Marker for the player entity.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct Player;

#[derive(Component, Clone, Debug)]
pub struct PlayerController {
    /// Force per input unit while grounded.
    pub ground_thrust: f32,
    /// Force per input unit while airborne.
    pub air_thrust: f32,
    /// Upward impulse applied once per jump.
    pub jump_thrust: f32,
    /// Speed above which same-direction input stops adding force.
    pub max_thrust_velocity: f32,
    /// Movement and jumping are ignored while false.
    pub can_move: bool,
}

impl Default for PlayerController {
    fn default() -> Self {
        Self {
            ground_thrust: 1200.0,
            air_thrust: 500.0,
            jump_thrust: 800.0,
            max_thrust_velocity: 25.0,
            can_move: false,
        }
    }
}

impl PlayerController {
    pub fn set_can_move(&mut self, can_move: bool) {
        self.can_move = can_move;
    }

    pub fn thrust(&self, grounded: bool) -> f32 {
        if grounded {
            self.ground_thrust
        } else {
            self.air_thrust
        }
    }

    /// Horizontal force for this tick.
    pub fn horizontal_force(&self, grounded: bool, input: f32, velocity: Vec2) -> Vec2 {
        if thrust_allowed(velocity, input, self.max_thrust_velocity) {
            Vec2::new(input * self.thrust(grounded), 0.0)
        } else {
            Vec2::ZERO
        }
    }

    /// Upward jump impulse.
    pub fn jump_impulse(&self) -> Vec2 {
        Vec2::new(0.0, self.jump_thrust)
    }
}

/// Sign with zero mapped to zero.
fn strict_sign(v: f32) -> i8 {
    if v > 0.0 {
        1
    } else if v < 0.0 {
        -1
    } else {
        0
    }
}

/// False only when the body is over the cap and the input pushes the same way
/// it already moves horizontally.
pub fn thrust_allowed(velocity: Vec2, input: f32, max_thrust_velocity: f32) -> bool {
    let over_cap = velocity.length() > max_thrust_velocity;
    let input_sign = strict_sign(input);
    let same_direction = input_sign != 0 && input_sign == strict_sign(velocity.x);
    !(over_cap && same_direction)
}
