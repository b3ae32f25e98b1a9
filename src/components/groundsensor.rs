//! Downward ground probes.
//!
//! A [`GroundSensor`] casts three parallel rays straight down from its
//! entity: one from the center and one on each side at `radius / 1.5`. Each
//! ray has the same fixed length and only considers surfaces whose
//! [`Group`](crate::components::group::Group) is in `ground_groups`. The
//! entity is grounded when any ray hits.

use bevy_ecs::prelude::Component;
use glam::Vec2;
use smallvec::SmallVec;

/// Horizontal probe offsets as fractions of `radius / 1.5`.
pub const PROBE_OFFSETS: [f32; 3] = [-1.0, 0.0, 1.0];

#[derive(Component, Clone, Debug)]
pub struct GroundSensor {
    /// Length of each downward probe.
    pub distance_to_ground: f32,
    /// Group names that count as ground.
    pub ground_groups: SmallVec<[String; 2]>,
    /// Result of the last probe pass.
    pub grounded: bool,
}

impl GroundSensor {
    pub fn new<I, S>(distance_to_ground: f32, ground_groups: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            distance_to_ground,
            ground_groups: ground_groups.into_iter().map(Into::into).collect(),
            grounded: false,
        }
    }

    /// Whether a surface in `group` is considered ground.
    pub fn accepts(&self, group: &str) -> bool {
        self.ground_groups.iter().any(|g| g == group)
    }
}

/// Ray origins for a body centered at `center` with collision radius `radius`.
pub fn probe_origins(center: Vec2, radius: f32) -> [Vec2; 3] {
    let spacing = radius / 1.5;
    PROBE_OFFSETS.map(|i| Vec2::new(center.x + i * spacing, center.y))
}
