//! Rigid body integration.
//!
//! [`physics_step`] is the stand-in for the physics engine's fixed step:
//! named accelerations, the force and impulse accumulated this tick, then
//! friction, then position. Kinematic bodies are left where they are; their
//! pending input is dropped so nothing leaks into the tick they are released.
use bevy_ecs::prelude::*;

use crate::components::mapposition::MapPosition;
use crate::components::rigidbody::RigidBody;
use crate::resources::worldtime::WorldTime;

/// Integrate velocity and position of every non-kinematic body.
pub fn physics_step(mut query: Query<(&mut MapPosition, &mut RigidBody)>, time: Res<WorldTime>) {
    let dt = time.delta;
    for (mut position, mut rigidbody) in query.iter_mut() {
        if rigidbody.kinematic {
            rigidbody.clear_pending();
            continue;
        }
        let inv_mass = 1.0 / rigidbody.mass;
        let acceleration = rigidbody.total_acceleration() + rigidbody.pending_force * inv_mass;
        let impulse = rigidbody.pending_impulse * inv_mass;
        rigidbody.velocity += acceleration * dt + impulse;
        if rigidbody.friction > 0.0 {
            let damping = (1.0 - rigidbody.friction * dt).max(0.0);
            rigidbody.velocity *= damping;
        }
        position.pos += rigidbody.velocity * dt;
        rigidbody.clear_pending();
    }
}
