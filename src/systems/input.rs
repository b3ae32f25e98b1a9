//! Input systems.
//!
//! - [`update_input_state`] samples the scripted input timeline at the
//!   current simulation time and writes the result into
//!   [`crate::resources::input::InputState`], deriving button edges.
use bevy_ecs::prelude::*;

use crate::resources::input::InputState;
use crate::resources::inputscript::{InputFrame, InputScript};
use crate::resources::worldtime::WorldTime;

/// Feed this tick's raw controls into the `InputState` resource.
///
/// Without an [`InputScript`] every control reads as released.
pub fn update_input_state(
    mut input: ResMut<InputState>,
    script: Option<Res<InputScript>>,
    time: Res<WorldTime>,
) {
    let frame = script
        .map(|s| s.sample(time.elapsed))
        .unwrap_or(InputFrame::default());
    input.apply_frame(&frame);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_jump_produces_single_edge() {
        let mut world = World::new();
        world.insert_resource(InputState::default());
        world.insert_resource(WorldTime::default());
        world.insert_resource(
            InputScript::from_json(
                r#"{ "frames": [ { "at": 0.1, "jump": true, "horizontal": 2.0 } ] }"#,
            )
            .unwrap(),
        );
        let mut schedule = Schedule::default();
        schedule.add_systems(update_input_state);

        world.resource_mut::<WorldTime>().elapsed = 0.1;
        schedule.run(&mut world);
        let input = world.resource::<InputState>();
        assert!(input.jump.just_pressed);
        assert_eq!(input.horizontal, 1.0);

        world.resource_mut::<WorldTime>().elapsed = 0.2;
        schedule.run(&mut world);
        let input = world.resource::<InputState>();
        assert!(input.jump.active);
        assert!(!input.jump.just_pressed);
    }
}
