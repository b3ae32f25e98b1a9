//! Scene transition check.
use bevy_ecs::prelude::*;

use crate::events::scene::SceneChangedEvent;
use crate::resources::scene::NextScene;

/// Trigger [`SceneChangedEvent`] when a scene load is pending.
pub fn check_pending_scene(mut commands: Commands, next_scene: Res<NextScene>) {
    if next_scene.is_pending() {
        commands.trigger(SceneChangedEvent {});
    }
}
