//! Named group tag.
//!
//! Groups stand in for physics layers: ground probes filter surfaces by
//! group name, and the orb only reacts to bodies in the `"player"` group.

use bevy_ecs::prelude::Component;

/// Group name used by the player body.
pub const PLAYER_GROUP: &str = "player";

#[derive(Component, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Group(pub String);

impl Group {
    pub fn new(name: impl Into<String>) -> Self {
        Group(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}
