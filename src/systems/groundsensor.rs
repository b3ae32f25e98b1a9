//! Ground probe system.
//!
//! Casts the three downward probes of every [`GroundSensor`] against the box
//! colliders whose group the sensor accepts, and stores the result in
//! [`GroundSensor::grounded`]. Runs before anything that reads the flag.
use bevy_ecs::prelude::*;

use crate::components::boxcollider::BoxCollider;
use crate::components::circlecollider::CircleCollider;
use crate::components::group::Group;
use crate::components::groundsensor::{GroundSensor, probe_origins};
use crate::components::mapposition::MapPosition;

/// Update the grounded flag of every sensor.
///
/// The probe radius comes from the entity's [`CircleCollider`] when it has
/// one; otherwise all three probes start at the center.
pub fn ground_sensor_system(
    mut sensors: Query<(&MapPosition, &mut GroundSensor, Option<&CircleCollider>)>,
    surfaces: Query<(&MapPosition, &BoxCollider, &Group)>,
) {
    for (position, mut sensor, circle) in sensors.iter_mut() {
        let (center, radius) = match circle {
            Some(c) => (c.center(position.pos), c.radius),
            None => (position.pos, 0.0),
        };
        let origins = probe_origins(center, radius);
        let grounded = surfaces
            .iter()
            .filter(|(_, _, group)| sensor.accepts(group.name()))
            .any(|(surface_pos, collider, _)| {
                origins.iter().any(|origin| {
                    collider.hit_by_downward_ray(surface_pos.pos, *origin, sensor.distance_to_ground)
                })
            });
        if sensor.grounded != grounded {
            log::trace!("ground sensor: grounded={}", grounded);
        }
        sensor.grounded = grounded;
    }
}
