use bevy_ecs::prelude::Component;

#[derive(Component, Clone, Debug, Copy, Default)]
pub struct Rotation {
    pub degrees: f32,
}

impl Rotation {
    /// Rotate by `delta` degrees, wrapping into `[0, 360)`.
    pub fn rotate(&mut self, delta: f32) {
        self.degrees = (self.degrees + delta).rem_euclid(360.0);
    }
}
