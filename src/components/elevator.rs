use bevy_ecs::prelude::Component;

/// Entities lifted upward during the ending cutscene. The player carries one
/// too so it rises with the rest of the scenery.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct Elevator;
