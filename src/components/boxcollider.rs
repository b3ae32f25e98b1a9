use bevy_ecs::prelude::Component;
use glam::Vec2;

/// Axis-aligned box collider used for static level geometry.
#[derive(Debug, Clone, Copy, PartialEq, Component)]
pub struct BoxCollider {
    pub size: Vec2,
    pub offset: Vec2,
}

impl BoxCollider {
    /// Create a BoxCollider with given size
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vec2::new(width, height),
            offset: Vec2::ZERO,
        }
    }

    /// Create a BoxCollider of the given size centered on the entity position
    pub fn centered(width: f32, height: f32) -> Self {
        Self::new(width, height).with_offset(Vec2::new(-width / 2.0, -height / 2.0))
    }

    /// Modify BoxCollider with given offset
    pub fn with_offset(mut self, offset: Vec2) -> Self {
        self.offset = offset;
        self
    }

    /// Returns (min, max) of the collider AABB for a given entity position.
    /// Handles negative size by normalizing to proper min/max.
    pub fn aabb(&self, position: Vec2) -> (Vec2, Vec2) {
        let p0 = position + self.offset;
        let p1 = p0 + self.size;
        (p0.min(p1), p0.max(p1))
    }

    /// Point containment in world space.
    pub fn contains_point(&self, position: Vec2, point: Vec2) -> bool {
        let (min, max) = self.aabb(position);
        point.x >= min.x && point.x <= max.x && point.y >= min.y && point.y <= max.y
    }

    /// Closest point of the box to `point`, in world space.
    pub fn closest_point(&self, position: Vec2, point: Vec2) -> Vec2 {
        let (min, max) = self.aabb(position);
        point.clamp(min, max)
    }

    /// Whether a ray cast straight down from `origin` hits the box within
    /// `length`. A ray starting inside the box counts as a hit.
    pub fn hit_by_downward_ray(&self, position: Vec2, origin: Vec2, length: f32) -> bool {
        let (min, max) = self.aabb(position);
        if origin.x < min.x || origin.x > max.x {
            return false;
        }
        let ray_bottom = origin.y - length;
        ray_bottom <= max.y && origin.y >= min.y
    }
}
