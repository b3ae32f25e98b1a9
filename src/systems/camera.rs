//! Camera follow system.
//!
//! Pans [`Camera2DRes::target`] toward the followed entity, closing
//! `follow_speed * dt` of the remaining distance per tick. With no follow
//! target the camera stays put.
use bevy_ecs::prelude::*;

use crate::components::mapposition::MapPosition;
use crate::resources::camera2d::Camera2DRes;
use crate::resources::worldtime::WorldTime;

pub fn camera_follow_system(
    mut camera: ResMut<Camera2DRes>,
    positions: Query<&MapPosition>,
    time: Res<WorldTime>,
) {
    let Some(follow) = camera.follow else {
        return;
    };
    let Ok(position) = positions.get(follow) else {
        return;
    };
    let t = (camera.follow_speed * time.delta).clamp(0.0, 1.0);
    camera.target = camera.target.lerp(position.pos, t);
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn test_follow_and_release() {
        let mut world = World::new();
        world.insert_resource(WorldTime {
            delta: 0.25,
            ..Default::default()
        });
        let target = world.spawn(MapPosition::new(10.0, 0.0)).id();
        world.insert_resource(Camera2DRes {
            follow: Some(target),
            ..Default::default()
        });
        let mut schedule = Schedule::default();
        schedule.add_systems(camera_follow_system);

        schedule.run(&mut world);
        assert_eq!(world.resource::<Camera2DRes>().target, Vec2::new(5.0, 0.0));

        world.resource_mut::<Camera2DRes>().follow = None;
        schedule.run(&mut world);
        assert_eq!(world.resource::<Camera2DRes>().target, Vec2::new(5.0, 0.0));
    }
}
