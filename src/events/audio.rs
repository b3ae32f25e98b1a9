//! Audio commands and replies exchanged with the audio thread.
//!
//! Gameplay systems write [`AudioCmd`] messages; they are forwarded each tick
//! to the audio thread, which answers with [`AudioMessage`]s.

use bevy_ecs::message::Message;

/// Looping channel that follows the player's rolling speed.
pub const ROLL_CHANNEL: &str = "roll";
/// One-shot channel for the jump sound.
pub const JUMP_CHANNEL: &str = "jump";
/// One-shot channel for the impact ("whack") sound.
pub const HIT_CHANNEL: &str = "hit";

/// Commands sent *to* the audio thread
#[derive(Message, Debug, Clone, PartialEq)]
pub enum AudioCmd {
    /// Start a loop at `vol`.
    PlayLoop { id: String, vol: f32 },
    StopLoop { id: String },
    Volume { id: String, vol: f32 },
    PlayFx { id: String, pitch: f32 },
    Shutdown,
}

/// Events sent *back* from the audio thread
#[derive(Message, Debug, Clone, PartialEq)]
pub enum AudioMessage {
    LoopStarted { id: String, vol: f32 },
    LoopStopped { id: String },
    VolumeChanged { id: String, vol: f32 },
    FxPlayed { id: String, pitch: f32 },
}
