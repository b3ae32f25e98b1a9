//! Pending-predicate system.
//!
//! Polls every [`WaitUntilPlayerVisible`] once per tick. The first tick the
//! camera viewport contains the player, the effect is applied and the
//! component removed.
use bevy_ecs::prelude::*;

use crate::components::mapposition::MapPosition;
use crate::components::orb::InstructionOverlay;
use crate::components::pending::{VisibilityEffect, WaitUntilPlayerVisible};
use crate::components::playercontroller::{Player, PlayerController};
use crate::resources::camera2d::Camera2DRes;

pub fn pending_visibility_system(
    mut commands: Commands,
    mut waiting: Query<(
        Entity,
        &WaitUntilPlayerVisible,
        Option<&mut PlayerController>,
        Option<&mut InstructionOverlay>,
    )>,
    players: Query<&MapPosition, With<Player>>,
    camera: Res<Camera2DRes>,
) {
    if waiting.is_empty() {
        return;
    }
    let player_visible = players.iter().any(|p| camera.sees(p.pos));
    if !player_visible {
        return;
    }
    for (entity, wait, controller, overlay) in waiting.iter_mut() {
        match wait.effect {
            VisibilityEffect::EnableMovement => {
                if let Some(mut controller) = controller {
                    log::info!("Player in view, movement enabled");
                    controller.set_can_move(true);
                }
            }
            VisibilityEffect::HideOverlay => {
                if let Some(mut overlay) = overlay {
                    overlay.visible = false;
                }
            }
        }
        commands.entity(entity).remove::<WaitUntilPlayerVisible>();
    }
}
