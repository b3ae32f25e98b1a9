//! Contact detection and resolution.
//!
//! [`collision_detector`] stands in for the physics engine's contact pass.
//! Dynamic bodies are circles ([`CircleCollider`] + [`RigidBody`]):
//!
//! - against static [`BoxCollider`]s they are pushed out along the contact
//!   normal and lose the velocity component pointing into the surface;
//! - against static trigger circles they only report the first tick of
//!   overlap.
//!
//! Every contact is reported by triggering a [`CollisionEvent`]. Pairs are
//! remembered in [`ActiveContacts`] so a contact that persists is reported as
//! [`ContactKind::Stay`] after its first tick.
use bevy_ecs::prelude::*;
use glam::Vec2;
use rustc_hash::FxHashSet;

use crate::components::boxcollider::BoxCollider;
use crate::components::circlecollider::CircleCollider;
use crate::components::mapposition::MapPosition;
use crate::components::rigidbody::RigidBody;
use crate::events::collision::{CollisionEvent, ContactKind};
use crate::resources::contacts::ActiveContacts;

/// Push-out vector for a circle overlapping a box, or `None` when they do
/// not touch. A center inside the box is pushed out through the nearest face.
pub fn circle_box_penetration(
    center: Vec2,
    radius: f32,
    collider: &BoxCollider,
    box_position: Vec2,
) -> Option<Vec2> {
    let closest = collider.closest_point(box_position, center);
    let delta = center - closest;
    let dist_sq = delta.length_squared();
    if dist_sq >= radius * radius {
        return None;
    }
    if dist_sq > 0.0 {
        let dist = dist_sq.sqrt();
        return Some(delta / dist * (radius - dist));
    }
    let (min, max) = collider.aabb(box_position);
    let exits = [
        (center.x - min.x, Vec2::NEG_X),
        (max.x - center.x, Vec2::X),
        (center.y - min.y, Vec2::NEG_Y),
        (max.y - center.y, Vec2::Y),
    ];
    let (depth, normal) = exits
        .into_iter()
        .min_by(|a, b| a.0.total_cmp(&b.0))
        .unwrap_or((0.0, Vec2::Y));
    Some(normal * (depth + radius))
}

/// Detect contacts, resolve solid ones, and trigger [`CollisionEvent`]s.
pub fn collision_detector(
    mut commands: Commands,
    mut bodies: Query<(Entity, &mut MapPosition, &mut RigidBody, &CircleCollider)>,
    solids: Query<(Entity, &MapPosition, &BoxCollider), Without<RigidBody>>,
    triggers: Query<(Entity, &MapPosition, &CircleCollider), Without<RigidBody>>,
    mut contacts: ResMut<ActiveContacts>,
) {
    let mut current: FxHashSet<(Entity, Entity)> = FxHashSet::default();

    for (body, mut position, mut rigidbody, circle) in bodies.iter_mut() {
        if circle.is_trigger {
            continue;
        }

        if !rigidbody.kinematic {
            for (solid, solid_pos, collider) in solids.iter() {
                let center = circle.center(position.pos);
                let Some(push) = circle_box_penetration(center, circle.radius, collider, solid_pos.pos)
                else {
                    continue;
                };
                position.pos += push;
                if let Some(normal) = push.try_normalize() {
                    let into_surface = rigidbody.velocity.dot(normal);
                    if into_surface < 0.0 {
                        rigidbody.velocity -= normal * into_surface;
                    }
                }
                current.insert((body, solid));
                let kind = if contacts.pairs.contains(&(body, solid)) {
                    ContactKind::Stay
                } else {
                    ContactKind::Enter
                };
                commands.trigger(CollisionEvent {
                    a: body,
                    b: solid,
                    kind,
                });
            }
        }

        for (trigger, trigger_pos, trigger_circle) in triggers.iter() {
            if !trigger_circle.is_trigger
                || !circle.overlaps_circle(position.pos, trigger_circle, trigger_pos.pos)
            {
                continue;
            }
            current.insert((body, trigger));
            if !contacts.pairs.contains(&(body, trigger)) {
                commands.trigger(CollisionEvent {
                    a: body,
                    b: trigger,
                    kind: ContactKind::TriggerEnter,
                });
            }
        }
    }

    contacts.pairs = current;
}
