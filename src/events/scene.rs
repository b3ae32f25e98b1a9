//! Scene change event and observer.
//!
//! Systems request a scene by name through
//! [`NextScene`](crate::resources::scene::NextScene). Emitting a
//! [`SceneChangedEvent`] then triggers the observer in this module, which
//! tears down the current scene and runs the setup system registered for the
//! new one in [`SystemsStore`].
//!
//! This decouples the intent to change scene from the mechanics of despawning
//! and spawning and avoids borrowing conflicts.
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{debug, info, warn};

use crate::components::scenescoped::SceneScoped;
use crate::resources::gamesession::GameSession;
use crate::resources::scene::NextScenes::{Pending, Unchanged};
use crate::resources::scene::{NextScene, SceneState};
use crate::resources::systemsstore::SystemsStore;

/// Event used to indicate that a pending scene load should be applied.
#[derive(Event, Debug, Clone, Copy)]
pub struct SceneChangedEvent {}

/// Observer that applies a pending scene load.
///
/// Contract
/// - Reads the request from [`NextScene`] and clears it.
/// - Unknown scene names (no setup system registered) are logged and ignored;
///   the current scene keeps running.
/// - Otherwise despawns every [`SceneScoped`] entity, ends the
///   [`GameSession`] of the old scene, records the load in [`SceneState`],
///   and runs the new scene's setup system.
pub fn observe_scene_change_event(
    _trigger: On<SceneChangedEvent>,
    mut commands: Commands,
    mut next_scene: ResMut<NextScene>,
    mut scene_state: ResMut<SceneState>,
    systems_store: Res<SystemsStore>,
    mut session: ResMut<GameSession>,
    scoped: Query<Entity, With<SceneScoped>>,
) {
    debug!("SceneChangedEvent triggered");
    let requested = next_scene.get().clone();
    next_scene.reset();
    match requested {
        Pending(name) => {
            let Some(setup) = systems_store.setup_for(&name) else {
                warn!("No scene named '{}' is registered; ignoring load", name);
                return;
            };
            info!(
                "Loading scene '{}' (was {:?})",
                name,
                scene_state.current()
            );
            for entity in scoped.iter() {
                commands.entity(entity).try_despawn();
            }
            session.reset();
            scene_state.record_load(name);
            commands.run_system(setup);
        }
        Unchanged => {
            debug!("No scene change pending.");
        }
    }
}
