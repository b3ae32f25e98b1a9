//! Circle collider component.
//!
//! The player body is a solid circle. The orb is a trigger circle: it reports
//! contacts but never pushes anything.

use bevy_ecs::prelude::Component;
use glam::Vec2;

#[derive(Debug, Clone, Copy, PartialEq, Component)]
pub struct CircleCollider {
    pub radius: f32,
    pub offset: Vec2,
    /// Triggers report enter contacts and are never resolved.
    pub is_trigger: bool,
}

impl CircleCollider {
    pub fn new(radius: f32) -> Self {
        Self {
            radius,
            offset: Vec2::ZERO,
            is_trigger: false,
        }
    }

    pub fn trigger(radius: f32) -> Self {
        Self {
            is_trigger: true,
            ..Self::new(radius)
        }
    }

    pub fn center(&self, position: Vec2) -> Vec2 {
        position + self.offset
    }

    /// Circle vs circle overlap test.
    pub fn overlaps_circle(&self, position: Vec2, other: &Self, other_position: Vec2) -> bool {
        let r = self.radius + other.radius;
        self.center(position)
            .distance_squared(other.center(other_position))
            < r * r
    }
}
