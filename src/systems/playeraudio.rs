//! Player audio systems.
//!
//! - [`rolling_sound_system`] advances the rolling channel's grace delay and
//!   fade every tick and writes the resulting commands.
//! - [`impact_debounce_system`] advances the impact window; a stably grounded
//!   player (committed grounded visuals) keeps it closed.
//! - [`player_contact_observer`] plays the impact sound on a new solid
//!   contact once the window has elapsed.
//!
//! Jump and impact one-shots get a random pitch from [`AudioRng`].
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;

use crate::components::groundsensor::GroundSensor;
use crate::components::playeraudio::{ImpactDebounce, RollCue, RollingSound};
use crate::components::playervisuals::PlayerVisuals;
use crate::components::rigidbody::RigidBody;
use crate::events::audio::{AudioCmd, HIT_CHANNEL, ROLL_CHANNEL};
use crate::events::collision::{CollisionEvent, ContactKind};
use crate::resources::audio::AudioRng;
use crate::resources::worldtime::WorldTime;

/// Command for the rolling channel.
pub fn roll_cue_cmd(cue: RollCue) -> AudioCmd {
    let id = ROLL_CHANNEL.to_string();
    match cue {
        RollCue::Play(vol) => AudioCmd::PlayLoop { id, vol },
        RollCue::Volume(vol) => AudioCmd::Volume { id, vol },
        RollCue::Stop => AudioCmd::StopLoop { id },
    }
}

/// Advance grace delays and fades of every rolling channel.
pub fn rolling_sound_system(
    mut query: Query<(&mut RollingSound, &GroundSensor, &RigidBody)>,
    time: Res<WorldTime>,
    mut writer: MessageWriter<AudioCmd>,
) {
    for (mut rolling, sensor, rigidbody) in query.iter_mut() {
        let cues = rolling.advance(time.delta, sensor.grounded, rigidbody.speed());
        writer.write_batch(cues.into_iter().map(roll_cue_cmd));
    }
}

/// Advance the impact debounce window.
pub fn impact_debounce_system(
    mut query: Query<(&mut ImpactDebounce, &PlayerVisuals)>,
    time: Res<WorldTime>,
) {
    for (mut debounce, visuals) in query.iter_mut() {
        debounce.advance(time.delta, visuals.check_for_visuals_grounded_state());
    }
}

/// Feed solid contacts of the player body into its impact debounce.
pub fn player_contact_observer(
    trigger: On<CollisionEvent>,
    mut query: Query<&mut ImpactDebounce>,
    mut rng: ResMut<AudioRng>,
    mut writer: MessageWriter<AudioCmd>,
) {
    let event = trigger.event();
    let new_contact = match event.kind {
        ContactKind::Enter => true,
        ContactKind::Stay => false,
        ContactKind::TriggerEnter => return,
    };
    let Ok(mut debounce) = query.get_mut(event.a) else {
        return;
    };
    if debounce.on_contact(new_contact) {
        let pitch = rng.random_pitch();
        log::debug!("impact sound, pitch {:.3}", pitch);
        writer.write(AudioCmd::PlayFx {
            id: HIT_CHANNEL.to_string(),
            pitch,
        });
    }
}
