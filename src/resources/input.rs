//! Per-tick input resource.
//!
//! Captures the subset of controls the game cares about: a horizontal axis,
//! the jump button, and the menu button. Systems read [`InputState`] instead
//! of polling a device; whatever feeds it (a device layer, or the scripted
//! [`InputScript`](crate::resources::inputscript::InputScript) used by the
//! headless runner) calls [`InputState::apply_frame`] once per tick.
use bevy_ecs::prelude::*;

use crate::resources::inputscript::InputFrame;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Button state with edge detection.
pub struct BoolState {
    /// Whether the button is held this tick.
    pub active: bool,
    /// Whether the button went down this tick.
    pub just_pressed: bool,
    /// Whether the button went up this tick.
    pub just_released: bool,
}

impl BoolState {
    /// Feed the raw held state for this tick and derive the edges.
    pub fn update(&mut self, pressed: bool) {
        self.just_pressed = pressed && !self.active;
        self.just_released = !pressed && self.active;
        self.active = pressed;
    }
}

/// Resource capturing the per-tick control state relevant to gameplay.
#[derive(Resource, Debug, Clone, Default)]
pub struct InputState {
    /// Horizontal axis in `[-1, 1]`.
    pub horizontal: f32,
    pub jump: BoolState,
    pub menu: BoolState,
}

impl InputState {
    /// Apply one tick of raw input. The axis is clamped to `[-1, 1]`.
    pub fn apply_frame(&mut self, frame: &InputFrame) {
        self.horizontal = frame.horizontal.clamp(-1.0, 1.0);
        self.jump.update(frame.jump);
        self.menu.update(frame.menu);
    }
}
