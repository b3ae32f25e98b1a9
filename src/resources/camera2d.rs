//! Shared 2D camera resource.
//!
//! Holds where the camera looks, how much of the world it frames, and which
//! entity (if any) it follows. Gameplay uses it for one query: whether a
//! world point is inside the viewport. Clearing `follow` leaves the camera
//! holding its last framing.

use bevy_ecs::prelude::{Entity, Resource};
use glam::Vec2;

/// ECS resource that holds the active 2D camera parameters.
#[derive(Resource, Debug, Clone)]
pub struct Camera2DRes {
    /// World point at the center of the view.
    pub target: Vec2,
    /// Half of the visible world width and height.
    pub half_extents: Vec2,
    /// Entity the camera pans toward, if any.
    pub follow: Option<Entity>,
    /// Fraction of the remaining distance closed per second while following.
    pub follow_speed: f32,
}

impl Default for Camera2DRes {
    fn default() -> Self {
        Self {
            target: Vec2::ZERO,
            half_extents: Vec2::new(8.0, 4.5),
            follow: None,
            follow_speed: 2.0,
        }
    }
}

impl Camera2DRes {
    /// Normalized viewport coordinates of a world point: `(0, 0)` is the
    /// bottom-left corner of the view and `(1, 1)` the top-right.
    pub fn world_to_viewport(&self, point: Vec2) -> Vec2 {
        (point - self.target) / (self.half_extents * 2.0) + Vec2::splat(0.5)
    }

    /// Whether `point` is strictly inside the view.
    pub fn sees(&self, point: Vec2) -> bool {
        let v = self.world_to_viewport(point);
        v.x > 0.0 && v.x < 1.0 && v.y > 0.0 && v.y < 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_world_to_viewport_center_and_corners() {
        let cam = Camera2DRes {
            target: Vec2::new(10.0, 5.0),
            half_extents: Vec2::new(4.0, 2.0),
            ..Default::default()
        };
        assert_eq!(cam.world_to_viewport(Vec2::new(10.0, 5.0)), Vec2::splat(0.5));
        assert_eq!(cam.world_to_viewport(Vec2::new(6.0, 3.0)), Vec2::ZERO);
        assert_eq!(cam.world_to_viewport(Vec2::new(14.0, 7.0)), Vec2::ONE);
    }

    #[test]
    fn test_sees_is_strict() {
        let cam = Camera2DRes::default();
        assert!(cam.sees(Vec2::new(1.0, 1.0)));
        assert!(!cam.sees(Vec2::new(8.0, 0.0)));
        assert!(!cam.sees(Vec2::new(0.0, -20.0)));
    }
}
