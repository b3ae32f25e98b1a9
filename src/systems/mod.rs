//! Gameplay systems.
//!
//! This module groups all ECS systems that advance simulation, input, audio
//! and scene flow. [`crate::game::tick_schedule`] wires them in order.
//!
//! Submodules overview
//! - [`animation`] – advance the animation clock of playing clips
//! - [`audio`] – bridge with the audio thread (forward/poll/update message queues)
//! - [`camera`] – pan the camera toward its follow target
//! - [`collision`] – circle-vs-box contacts, trigger overlaps, collision events
//! - [`gamebrain`] – win sequence, ending cutscene, menu button
//! - [`groundsensor`] – three-probe ground detection
//! - [`input`] – feed scripted controls into [`crate::resources::input::InputState`]
//! - [`orb`] – orb spin and pickup detection
//! - [`pending`] – one-shot effects waiting for the player to come into view
//! - [`physics`] – integrate rigid bodies
//! - [`playeraudio`] – rolling sound, impact debounce, impact sound
//! - [`playercontroller`] – jump and horizontal movement
//! - [`playervisuals`] – debounced grounded/airborne colors
//! - [`scene`] – check for pending scene loads and trigger events
//! - [`time`] – update simulation time and delta

pub mod animation;
pub mod audio;
pub mod camera;
pub mod collision;
pub mod gamebrain;
pub mod groundsensor;
pub mod input;
pub mod orb;
pub mod pending;
pub mod physics;
pub mod playeraudio;
pub mod playercontroller;
pub mod playervisuals;
pub mod scene;
pub mod time;
