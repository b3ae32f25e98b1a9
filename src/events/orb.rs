use bevy_ecs::prelude::*;

/// Fired once when the player picks up an orb.
///
/// Handled by [`on_player_picked_up_orb`](crate::systems::gamebrain::on_player_picked_up_orb).
#[derive(Event, Debug, Clone, Copy)]
pub struct PlayerPickedUpOrb {
    pub orb: Entity,
}
