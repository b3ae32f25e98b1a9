//! Scene resources.
//!
//! [`SceneState`] is the authoritative record of which scene is running and
//! which scenes have been loaded; [`NextScene`] carries a pending load
//! requested by gameplay. See
//! [`crate::events::scene::observe_scene_change_event`] for how a load is
//! applied.

use bevy_ecs::prelude::Resource;

/// Representation of a requested scene load.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum NextScenes {
    #[default]
    Unchanged,
    Pending(String),
}

/// Intent to load a scene by name.
#[derive(Resource, Debug, Clone, Default, PartialEq, Eq)]
pub struct NextScene {
    next: NextScenes,
}

impl NextScene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> &NextScenes {
        &self.next
    }

    /// Request a load of `name`. A later request in the same tick wins.
    pub fn set(&mut self, name: impl Into<String>) {
        self.next = NextScenes::Pending(name.into());
        // `check_pending_scene` will emit the SceneChangedEvent.
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.next, NextScenes::Pending(_))
    }

    pub fn reset(&mut self) {
        self.next = NextScenes::Unchanged;
    }
}

/// Which scene is running, plus every load performed this session.
#[derive(Resource, Debug, Clone, Default)]
pub struct SceneState {
    current: Option<String>,
    history: Vec<String>,
    /// Set when the session should end (the headless runner stops).
    pub quit_requested: bool,
}

impl SceneState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// How many times `name` has been loaded.
    pub fn load_count(&self, name: &str) -> usize {
        self.history.iter().filter(|n| *n == name).count()
    }

    pub fn record_load(&mut self, name: impl Into<String>) {
        let name = name.into();
        self.history.push(name.clone());
        self.current = Some(name);
    }
}
