//! Scene setup registry.
//!
//! Each scene name maps to the one-shot system that spawns it. Names are
//! matched exactly; see [`crate::events::scene::observe_scene_change_event`]
//! for how an unregistered name is handled.

use bevy_ecs::prelude::{Resource, World};
use bevy_ecs::system::{IntoSystem, SystemId};
use log::warn;
use rustc_hash::FxHashMap;

#[derive(Resource, Default)]
pub struct SystemsStore {
    scenes: FxHashMap<String, SystemId>,
}

impl SystemsStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `setup` in `world` and file it under `scene`. Registering a
    /// name twice replaces the earlier setup.
    pub fn register_scene<M>(
        &mut self,
        world: &mut World,
        scene: impl Into<String>,
        setup: impl IntoSystem<(), (), M> + 'static,
    ) {
        let scene = scene.into();
        let id = world.register_system(setup);
        if self.scenes.insert(scene.clone(), id).is_some() {
            warn!("Scene '{}' registered twice; keeping the latest setup", scene);
        }
    }

    pub fn setup_for(&self, scene: &str) -> Option<SystemId> {
        self.scenes.get(scene).copied()
    }

    pub fn contains(&self, scene: &str) -> bool {
        self.scenes.contains_key(scene)
    }

    /// Registered scene names, sorted.
    pub fn scene_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.scenes.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Resource, Default)]
    struct Entered(Vec<&'static str>);

    fn enter_a(mut entered: bevy_ecs::prelude::ResMut<Entered>) {
        entered.0.push("a");
    }

    fn enter_b(mut entered: bevy_ecs::prelude::ResMut<Entered>) {
        entered.0.push("b");
    }

    #[test]
    fn test_register_and_run() {
        let mut world = World::new();
        world.init_resource::<Entered>();
        let mut store = SystemsStore::new();
        store.register_scene(&mut world, "Level", enter_a);
        store.register_scene(&mut world, "Menu", enter_b);

        assert_eq!(store.scene_names(), vec!["Level", "Menu"]);
        assert!(store.setup_for("Nowhere").is_none());

        let id = store.setup_for("Menu").unwrap();
        world.run_system(id).unwrap();
        assert_eq!(world.resource::<Entered>().0, vec!["b"]);
    }

    #[test]
    fn test_reregister_replaces() {
        let mut world = World::new();
        world.init_resource::<Entered>();
        let mut store = SystemsStore::new();
        store.register_scene(&mut world, "Level", enter_a);
        store.register_scene(&mut world, "Level", enter_b);
        assert_eq!(store.scene_names().len(), 1);
        let id = store.setup_for("Level").unwrap();
        world.run_system(id).unwrap();
        assert_eq!(world.resource::<Entered>().0, vec!["b"]);
    }
}
