//! Player control systems.
//!
//! - [`player_jump_system`] handles the jump: grounded, allowed to move, and
//!   the jump button went down this tick. It applies the upward impulse,
//!   plays the jump sound and animation, and fades out the rolling sound.
//! - [`player_movement_system`] applies the horizontal force and makes the
//!   rolling sound start/stop decisions. Both only run while the player can
//!   move.
//!
//! The force rule itself lives on
//! [`PlayerController`](crate::components::playercontroller::PlayerController).
use bevy_ecs::prelude::*;

use crate::components::animation::{Animator, JUMP_CLIP};
use crate::components::groundsensor::GroundSensor;
use crate::components::playeraudio::RollingSound;
use crate::components::playercontroller::{Player, PlayerController};
use crate::components::rigidbody::RigidBody;
use crate::events::audio::{AudioCmd, JUMP_CHANNEL};
use crate::resources::audio::AudioRng;
use crate::resources::input::InputState;
use crate::systems::playeraudio::roll_cue_cmd;

/// Jump on the just-pressed edge of the jump button.
pub fn player_jump_system(
    mut query: Query<
        (
            &GroundSensor,
            &PlayerController,
            &mut RigidBody,
            Option<&mut RollingSound>,
            Option<&mut Animator>,
        ),
        With<Player>,
    >,
    input: Res<InputState>,
    mut rng: ResMut<AudioRng>,
    mut writer: MessageWriter<AudioCmd>,
) {
    if !input.jump.just_pressed {
        return;
    }
    for (sensor, controller, mut rigidbody, rolling, animator) in query.iter_mut() {
        if !sensor.grounded || !controller.can_move {
            continue;
        }
        if let Some(mut rolling) = rolling {
            rolling.fade_if_rolling();
        }
        writer.write(AudioCmd::PlayFx {
            id: JUMP_CHANNEL.to_string(),
            pitch: rng.random_pitch(),
        });
        if let Some(mut animator) = animator {
            animator.play(JUMP_CLIP);
        }
        rigidbody.apply_impulse(controller.jump_impulse());
    }
}

/// Apply this tick's horizontal force and update the rolling sound.
pub fn player_movement_system(
    mut query: Query<
        (
            &GroundSensor,
            &PlayerController,
            &mut RigidBody,
            Option<&mut RollingSound>,
        ),
        With<Player>,
    >,
    input: Res<InputState>,
    mut writer: MessageWriter<AudioCmd>,
) {
    for (sensor, controller, mut rigidbody, rolling) in query.iter_mut() {
        if !controller.can_move {
            continue;
        }
        let grounded = sensor.grounded;
        if let Some(mut rolling) = rolling
            && let Some(cue) =
                rolling.update_from_movement(grounded, input.horizontal, rigidbody.speed())
        {
            writer.write(roll_cue_cmd(cue));
        }
        let force = controller.horizontal_force(grounded, input.horizontal, rigidbody.velocity);
        rigidbody.apply_force(force);
    }
}
