//! Orb systems.
//!
//! - [`orb_rotation_system`] spins idle orbs.
//! - [`orb_trigger_observer`] turns the first trigger contact from a body in
//!   the player group into a [`PlayerPickedUpOrb`] event.
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;

use crate::components::group::{Group, PLAYER_GROUP};
use crate::components::orb::Orb;
use crate::components::rotation::Rotation;
use crate::events::collision::{CollisionEvent, ContactKind};
use crate::events::orb::PlayerPickedUpOrb;
use crate::resources::worldtime::WorldTime;

pub fn orb_rotation_system(mut query: Query<(&Orb, &mut Rotation)>, time: Res<WorldTime>) {
    for (orb, mut rotation) in query.iter_mut() {
        if orb.is_idle() {
            rotation.rotate(orb.rotate_speed * time.delta);
        }
    }
}

/// Consume the orb on its first contact with the player.
pub fn orb_trigger_observer(
    trigger: On<CollisionEvent>,
    mut commands: Commands,
    mut orbs: Query<&mut Orb>,
    groups: Query<&Group>,
) {
    let event = trigger.event();
    if event.kind != ContactKind::TriggerEnter {
        return;
    }
    let is_player = groups
        .get(event.a)
        .map(|g| g.name() == PLAYER_GROUP)
        .unwrap_or(false);
    if !is_player {
        return;
    }
    let Ok(mut orb) = orbs.get_mut(event.b) else {
        return;
    };
    if orb.consume() {
        log::info!("Player picked up orb {:?}", event.b);
        commands.trigger(PlayerPickedUpOrb { orb: event.b });
    }
}
