//! Contact pairs seen on the previous tick, used to tell new contacts from
//! ongoing ones.

use bevy_ecs::prelude::{Entity, Resource};
use rustc_hash::FxHashSet;

#[derive(Resource, Debug, Clone, Default)]
pub struct ActiveContacts {
    /// `(body, other)` pairs touching on the last collision pass.
    pub pairs: FxHashSet<(Entity, Entity)>,
}
