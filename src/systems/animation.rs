//! Animation playback clock.
//!
//! Advances [`Animator::time`] for entities with a clip playing. Frame
//! selection belongs to the renderer.
use bevy_ecs::prelude::*;

use crate::components::animation::Animator;
use crate::resources::worldtime::WorldTime;

pub fn animation_system(mut query: Query<&mut Animator>, time: Res<WorldTime>) {
    for mut animator in query.iter_mut() {
        if animator.current.is_some() {
            animator.time += time.delta;
        }
    }
}
