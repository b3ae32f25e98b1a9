//! Minimal animation playback state.
//!
//! Sprite sheets and clip data belong to the renderer. Gameplay only records
//! which clip was requested and how long it has been playing so the renderer
//! can pick the right frame.

use bevy_ecs::prelude::Component;

/// Clip name played when the player jumps.
pub const JUMP_CLIP: &str = "player_jump";

#[derive(Component, Clone, Debug, Default)]
pub struct Animator {
    /// Clip currently playing, if any.
    pub current: Option<String>,
    /// Seconds since `current` started.
    pub time: f32,
}

impl Animator {
    /// Start `clip` from its first frame, restarting it if already playing.
    pub fn play(&mut self, clip: impl Into<String>) {
        self.current = Some(clip.into());
        self.time = 0.0;
    }

    pub fn is_playing(&self, clip: &str) -> bool {
        self.current.as_deref() == Some(clip)
    }
}
