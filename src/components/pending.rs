//! One-shot effects waiting on a polled condition.
//!
//! Instead of suspended control flow, an entity that has to wait for
//! something carries a pending-predicate component. A system re-evaluates the
//! predicate every tick; the first time it holds, the effect is applied once
//! and the component is removed so it never re-arms.
//!
//! See [`crate::systems::pending::pending_visibility_system`].

use bevy_ecs::prelude::Component;

/// What to do once the camera can see the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VisibilityEffect {
    /// Let the player move (on the player entity).
    EnableMovement,
    /// Hide the instruction overlay (on the overlay entity).
    HideOverlay,
}

/// Waits until the player's position is inside the camera viewport.
#[derive(Component, Clone, Copy, Debug)]
pub struct WaitUntilPlayerVisible {
    pub effect: VisibilityEffect,
}

impl WaitUntilPlayerVisible {
    pub fn new(effect: VisibilityEffect) -> Self {
        Self { effect }
    }
}
