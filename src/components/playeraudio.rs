//! Audio feedback state carried by the player.
//!
//! - [`RollingSound`] drives the looping rolling channel: it starts when the
//!   player rolls on the ground, tracks speed with its volume, and fades out
//!   after a grace delay once the player stops or leaves the ground.
//! - [`ImpactDebounce`] rate-limits the impact ("whack") sound so continuous
//!   scraping contact does not spam it.
//!
//! Both are explicit state machines advanced once per tick; the systems in
//! [`crate::systems::playeraudio`] turn the returned [`RollCue`]s into
//! [`AudioCmd`](crate::events::audio::AudioCmd) messages.

use bevy_ecs::prelude::Component;

/// Phase of the rolling channel. Exactly one applies at a time, so the
/// channel is never fading while its volume tracks speed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RollPhase {
    Stopped,
    /// Playing with volume following speed.
    Playing,
    /// Stop condition seen; waiting out the grace delay before fading.
    /// `input` is the horizontal input at the time the grace started. The
    /// delay starts counting on the tick after the one that began it, which
    /// is when `counting` turns true.
    PendingFade {
        elapsed: f32,
        input: f32,
        counting: bool,
    },
    /// Volume ramping down to zero.
    Fading,
}

/// Side effect requested on the rolling channel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RollCue {
    /// Start the loop at the given volume.
    Play(f32),
    Volume(f32),
    Stop,
}

#[derive(Component, Clone, Debug)]
pub struct RollingSound {
    /// Volume the channel starts at and returns to after stopping.
    pub default_volume: f32,
    pub volume: f32,
    pub phase: RollPhase,
    /// Seconds the stop condition must persist before fading.
    pub grace_delay: f32,
    /// Volume units removed per second while fading.
    pub fade_rate: f32,
    /// Speed above which the player counts as rolling.
    pub start_speed: f32,
}

impl RollingSound {
    pub fn new(default_volume: f32) -> Self {
        Self {
            default_volume,
            volume: default_volume,
            phase: RollPhase::Stopped,
            grace_delay: 0.5,
            fade_rate: 5.0,
            start_speed: 1.0,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.phase != RollPhase::Stopped
    }

    fn should_stop(&self, grounded: bool, input: f32, speed: f32) -> bool {
        !grounded || (input == 0.0 && speed < self.start_speed)
    }

    /// Volume for the given speed, clamped to `[0, default_volume]`.
    pub fn volume_for_speed(&self, speed: f32) -> f32 {
        (speed * (self.default_volume / 10.0)).clamp(0.0, self.default_volume)
    }

    /// Per-tick movement bookkeeping while the player can move: track speed
    /// with the volume, start the channel, or begin the grace delay.
    pub fn update_from_movement(
        &mut self,
        grounded: bool,
        input: f32,
        speed: f32,
    ) -> Option<RollCue> {
        match self.phase {
            RollPhase::Stopped => {
                if grounded && (input.abs() > 0.0 || speed > self.start_speed) {
                    self.phase = RollPhase::Playing;
                    Some(RollCue::Play(self.volume))
                } else {
                    None
                }
            }
            RollPhase::Playing => {
                if self.should_stop(grounded, input, speed) {
                    self.phase = RollPhase::PendingFade {
                        elapsed: 0.0,
                        input,
                        counting: false,
                    };
                    None
                } else {
                    let vol = self.volume_for_speed(speed);
                    if vol != self.volume {
                        self.volume = vol;
                        Some(RollCue::Volume(vol))
                    } else {
                        None
                    }
                }
            }
            RollPhase::PendingFade { .. } | RollPhase::Fading => None,
        }
    }

    /// Advance the grace delay and the fade. Runs every tick regardless of
    /// whether the player can move.
    pub fn advance(&mut self, dt: f32, grounded: bool, speed: f32) -> Vec<RollCue> {
        let mut cues = Vec::new();
        match self.phase {
            RollPhase::PendingFade {
                counting: false,
                input,
                ..
            } => {
                self.phase = RollPhase::PendingFade {
                    elapsed: 0.0,
                    input,
                    counting: true,
                };
            }
            RollPhase::PendingFade { elapsed, input, .. } => {
                let elapsed = elapsed + dt;
                if elapsed < self.grace_delay {
                    self.phase = RollPhase::PendingFade {
                        elapsed,
                        input,
                        counting: true,
                    };
                } else if self.should_stop(grounded, input, speed) {
                    self.phase = RollPhase::Fading;
                } else {
                    self.phase = RollPhase::Playing;
                }
            }
            RollPhase::Fading => {
                self.volume -= dt * self.fade_rate;
                if self.volume <= 0.0 {
                    self.volume = 0.0;
                    cues.push(RollCue::Volume(0.0));
                    cues.push(RollCue::Stop);
                    self.volume = self.default_volume;
                    self.phase = RollPhase::Stopped;
                } else {
                    cues.push(RollCue::Volume(self.volume));
                }
            }
            RollPhase::Stopped | RollPhase::Playing => {}
        }
        cues
    }

    /// Fade out right away, skipping (and replacing) any grace delay.
    /// Does nothing when the channel is already stopped.
    pub fn stop_rolling_sound_if_needed(&mut self) {
        if self.phase != RollPhase::Stopped {
            self.phase = RollPhase::Fading;
        }
    }

    /// Fade out right away only if the channel is playing and not already on
    /// its way out. Used when the player jumps.
    pub fn fade_if_rolling(&mut self) {
        if self.phase == RollPhase::Playing {
            self.phase = RollPhase::Fading;
        }
    }
}

/// Phase of the impact debounce window.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum WhackPhase {
    /// Waiting for `window` seconds without contact or stable ground.
    Counting { elapsed: f32 },
    /// The next new contact plays the impact sound.
    Armed,
}

#[derive(Component, Clone, Debug)]
pub struct ImpactDebounce {
    pub window: f32,
    pub phase: WhackPhase,
    made_collision: bool,
}

impl ImpactDebounce {
    pub fn new(window: f32) -> Self {
        Self {
            window,
            phase: WhackPhase::Counting { elapsed: 0.0 },
            made_collision: false,
        }
    }

    pub fn is_armed(&self) -> bool {
        self.phase == WhackPhase::Armed
    }

    /// Record a contact. Returns true when the impact sound should play,
    /// which only happens on a new contact while armed.
    pub fn on_contact(&mut self, new_contact: bool) -> bool {
        self.made_collision = true;
        if new_contact && self.is_armed() {
            self.phase = WhackPhase::Counting { elapsed: 0.0 };
            true
        } else {
            false
        }
    }

    /// Advance the window. Contact since the last tick, or a stably grounded
    /// player, resets it.
    pub fn advance(&mut self, dt: f32, stably_grounded: bool) {
        if let WhackPhase::Counting { elapsed } = self.phase {
            let mut elapsed = elapsed;
            if self.made_collision || stably_grounded {
                elapsed = 0.0;
                self.made_collision = false;
            }
            elapsed += dt;
            self.phase = if elapsed >= self.window {
                WhackPhase::Armed
            } else {
                WhackPhase::Counting { elapsed }
            };
        }
    }
}

impl Default for ImpactDebounce {
    fn default() -> Self {
        Self::new(0.25)
    }
}
