//! The win-condition pickup and its instruction overlay.
//!
//! An [`Orb`] starts [`OrbState::Idle`], spinning in place. The first time a
//! body in the player group touches it, it becomes [`OrbState::Consumed`]:
//! hidden, no longer spinning, and deaf to further contacts. The transition is
//! one-way, so a single orb can produce at most one pickup event.

use bevy_ecs::prelude::Component;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OrbState {
    Idle,
    Consumed,
}

#[derive(Component, Clone, Debug)]
pub struct Orb {
    pub state: OrbState,
    /// Spin speed in degrees per second.
    pub rotate_speed: f32,
    /// Whether the orb mesh is drawn.
    pub mesh_visible: bool,
}

impl Orb {
    pub fn new(rotate_speed: f32) -> Self {
        Self {
            state: OrbState::Idle,
            rotate_speed,
            mesh_visible: true,
        }
    }

    pub fn is_idle(&self) -> bool {
        self.state == OrbState::Idle
    }

    /// Consume the orb. Returns true only on the first call.
    pub fn consume(&mut self) -> bool {
        if self.state == OrbState::Consumed {
            return false;
        }
        self.state = OrbState::Consumed;
        self.mesh_visible = false;
        true
    }
}

/// On-screen hint telling the player to go get the orb.
#[derive(Component, Clone, Copy, Debug)]
pub struct InstructionOverlay {
    pub visible: bool,
}
