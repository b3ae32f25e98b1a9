//! Motion trail component.
//!
//! The renderer draws a fading trail behind the player using the current
//! [`Gradient`]. Gameplay only swaps the gradient; it never draws.

use bevy_ecs::prelude::Component;

use crate::components::tint::Color;

/// Two-stop color gradient from the head of the trail to its tail.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Gradient {
    pub head: Color,
    pub tail: Color,
}

impl Gradient {
    pub fn new(head: Color, tail: Color) -> Self {
        Self { head, tail }
    }
}

#[derive(Component, Clone, Copy, Debug)]
pub struct Trail {
    pub gradient: Gradient,
}
