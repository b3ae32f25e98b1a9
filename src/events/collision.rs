//! Contact events emitted by the collision pass.
//!
//! [`collision_detector`](crate::systems::collision::collision_detector)
//! triggers a [`CollisionEvent`] for every contact between a dynamic body and
//! another collider. Observers react to it in a decoupled way: the player's
//! impact sound debounce listens to solid contacts, the orb listens to
//! trigger contacts.

use bevy_ecs::prelude::*;

/// How a contact relates to the previous tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactKind {
    /// Solid contact that did not exist last tick.
    Enter,
    /// Solid contact that also existed last tick.
    Stay,
    /// First tick of overlap with a trigger collider.
    TriggerEnter,
}

/// Event fired when a dynamic body touches another collider.
///
/// `a` is always the dynamic body, `b` the collider it touched.
#[derive(Event, Debug, Clone, Copy)]
pub struct CollisionEvent {
    pub a: Entity,
    pub b: Entity,
    pub kind: ContactKind,
}
