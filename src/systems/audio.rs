//! Audio systems and the background mixer thread.
//!
//! This module hosts the background audio thread and the systems that bridge
//! it with the ECS world:
//! - [`audio_thread`] runs on its own OS thread and processes
//!   [`AudioCmd`](crate::events::audio::AudioCmd) messages, emitting
//!   [`AudioMessage`](crate::events::audio::AudioMessage) responses.
//! - [`forward_audio_cmds`] sends the commands written this tick to the
//!   thread.
//! - [`poll_audio_messages`] non-blockingly drains the thread's replies into
//!   the ECS message queue.
//! - [`update_bevy_audio_cmds`] and [`update_bevy_audio_messages`] advance
//!   the ECS message queues once per tick.
//!
//! The output device is outside this crate; the thread keeps the channel
//! state (which loops play, at what volume) and logs every change, so a real
//! mixer can be dropped in behind the same commands.
//!
//! Without an [`AudioBridge`] (tests, or a failed setup) the forwarding
//! systems do nothing and commands stay readable in `Messages<AudioCmd>`
//! until the queue rotates them out.
//!
//! See also: [`crate::events::audio`] and [`crate::resources::audio`].

use crate::events::audio::{AudioCmd, AudioMessage};
use crate::resources::audio::AudioBridge;
use bevy_ecs::prelude::{MessageReader, MessageWriter, Messages, Res, ResMut};
use crossbeam_channel::{Receiver, Sender};
use log::{debug, info};
use rustc_hash::FxHashMap;

/// Drain any pending replies from the audio thread and enqueue them into the
/// ECS [`Messages<AudioMessage>`] mailbox.
pub fn poll_audio_messages(
    bridge: Option<Res<AudioBridge>>,
    mut writer: MessageWriter<AudioMessage>,
) {
    if let Some(bridge) = bridge {
        writer.write_batch(bridge.rx_msg.try_iter());
    }
}

/// Advance the ECS message queue for [`AudioMessage`].
pub fn update_bevy_audio_messages(mut msgs: ResMut<Messages<AudioMessage>>) {
    msgs.update();
}

/// Forward ECS AudioCmd messages to the audio thread via the AudioBridge sender.
pub fn forward_audio_cmds(bridge: Option<Res<AudioBridge>>, mut reader: MessageReader<AudioCmd>) {
    let Some(bridge) = bridge else {
        return;
    };
    for cmd in reader.read() {
        // Ignore send errors on shutdown
        let _ = bridge.tx_cmd.send(cmd.clone());
    }
}

/// Advance the ECS message queue for AudioCmd.
pub fn update_bevy_audio_cmds(mut msgs: ResMut<Messages<AudioCmd>>) {
    msgs.update();
}

/// Entry point of the dedicated audio thread.
///
/// Blocks on the command channel and answers every state change with an
/// [`AudioMessage`]. Loop channels are tracked by id with their volume;
/// stopping a loop that is not playing is a no-op. Returns on
/// [`AudioCmd::Shutdown`] or when the sender side is dropped.
pub fn audio_thread(rx_cmd: Receiver<AudioCmd>, tx_msg: Sender<AudioMessage>) {
    info!(
        "[audio] thread starting (id={:?})",
        std::thread::current().id()
    );

    let mut loops: FxHashMap<String, f32> = FxHashMap::default();

    while let Ok(cmd) = rx_cmd.recv() {
        match cmd {
            AudioCmd::PlayLoop { id, vol } => {
                debug!("[audio] loop start id='{}' vol={:.3}", id, vol);
                loops.insert(id.clone(), vol);
                let _ = tx_msg.send(AudioMessage::LoopStarted { id, vol });
            }
            AudioCmd::StopLoop { id } => {
                if loops.remove(&id).is_some() {
                    debug!("[audio] loop stop id='{}'", id);
                    let _ = tx_msg.send(AudioMessage::LoopStopped { id });
                }
            }
            AudioCmd::Volume { id, vol } => {
                if let Some(v) = loops.get_mut(&id) {
                    *v = vol;
                    let _ = tx_msg.send(AudioMessage::VolumeChanged { id, vol });
                }
            }
            AudioCmd::PlayFx { id, pitch } => {
                debug!("[audio] fx id='{}' pitch={:.3}", id, pitch);
                let _ = tx_msg.send(AudioMessage::FxPlayed { id, pitch });
            }
            AudioCmd::Shutdown => {
                break;
            }
        }
    }

    info!("[audio] thread exiting ({} loops still open)", loops.len());
}
