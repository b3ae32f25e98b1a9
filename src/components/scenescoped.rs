//! Scene-scoped entity marker component.
//!
//! Entities with the [`SceneScoped`] component are despawned when the active
//! scene changes. Everything else (observers, registered systems, global
//! helpers) survives scene transitions.

use bevy_ecs::prelude::Component;

/// Tag component for entities owned by the current scene.
#[derive(Component, Clone, Debug)]
pub struct SceneScoped;
