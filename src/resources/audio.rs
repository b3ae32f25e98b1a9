//! ECS resources that bridge the main thread with the background audio thread.
//!
//! Use [`setup_audio`] once during initialization to spawn the audio thread
//! and insert the [`AudioBridge`]. Call [`shutdown_audio`] during teardown to
//! stop the thread. Without a bridge (as in tests), audio commands stay in the
//! ECS message queue and are never forwarded.
//!
//! [`AudioRng`] supplies the random pitch used by the one-shot sounds.

use bevy_ecs::prelude::*;
use crossbeam_channel::{Receiver, Sender, unbounded};

use crate::events::audio::{AudioCmd, AudioMessage};
use crate::systems::audio::audio_thread;

/// Lowest pitch a one-shot sound is played at.
pub const MIN_PITCH: f32 = 0.8;
/// Highest pitch a one-shot sound is played at.
pub const MAX_PITCH: f32 = 1.2;

/// Shared bridge between the ECS world and the audio thread.
#[derive(Resource)]
pub struct AudioBridge {
    /// Sender for [`AudioCmd`] messages (ECS -> audio thread).
    pub tx_cmd: Sender<AudioCmd>,
    /// Receiver for [`AudioMessage`] messages (audio thread -> ECS).
    pub rx_msg: Receiver<AudioMessage>,
    /// Join handle for the background audio thread.
    pub handle: std::thread::JoinHandle<()>,
}

/// Spawn the audio thread and register the bridge resource.
pub fn setup_audio(world: &mut World) {
    let (tx_cmd, rx_cmd) = unbounded::<AudioCmd>();
    let (tx_msg, rx_msg) = unbounded::<AudioMessage>();

    let handle = std::thread::spawn(move || audio_thread(rx_cmd, tx_msg));

    world.insert_resource(AudioBridge {
        tx_cmd,
        rx_msg,
        handle,
    });
}

/// Gracefully request shutdown of the audio thread and join it.
pub fn shutdown_audio(world: &mut World) {
    if let Some(bridge) = world.remove_resource::<AudioBridge>() {
        let _ = bridge.tx_cmd.send(AudioCmd::Shutdown);
        let _ = bridge.handle.join();
    }
}

/// Random source for pitch variation. Seedable so runs can be replayed.
#[derive(Resource, Debug, Clone)]
pub struct AudioRng(pub fastrand::Rng);

impl AudioRng {
    pub fn with_seed(seed: u64) -> Self {
        AudioRng(fastrand::Rng::with_seed(seed))
    }

    /// Uniform pitch in `[MIN_PITCH, MAX_PITCH]`.
    pub fn random_pitch(&mut self) -> f32 {
        MIN_PITCH + self.0.f32() * (MAX_PITCH - MIN_PITCH)
    }
}

impl Default for AudioRng {
    fn default() -> Self {
        AudioRng(fastrand::Rng::new())
    }
}
