//! ECS components for entities.
//!
//! This module groups all component types that can be attached to entities in
//! the game world: physics bodies and colliders, the player's movement, visual
//! and audio state, the orb, and scene bookkeeping.
//!
//! Submodules overview:
//! - [`animation`] – requested animation clip and its playback time
//! - [`boxcollider`] – axis-aligned box collider for level geometry
//! - [`circlecollider`] – circle collider for the player body and the orb trigger
//! - [`elevator`] – marker for entities lifted by the ending cutscene
//! - [`groundsensor`] – three downward probes deciding grounded/airborne
//! - [`group`] – named group tag used as a physics layer filter
//! - [`mapposition`] – world-space position (y-up)
//! - [`orb`] – the win-condition pickup and its instruction overlay
//! - [`pending`] – one-shot effects waiting on a polled predicate
//! - [`playeraudio`] – rolling sound and impact debounce state machines
//! - [`playercontroller`] – movement tunables, can-move gate, force rule
//! - [`playervisuals`] – debounced grounded/airborne color state
//! - [`rigidbody`] – dynamic body with velocity, mass, forces and impulses
//! - [`rotation`] – rotation angle in degrees
//! - [`scenescoped`] – marker for entities despawned on scene change
//! - [`tint`] – RGBA color and outline tint
//! - [`trail`] – motion trail gradient

pub mod animation;
pub mod boxcollider;
pub mod circlecollider;
pub mod elevator;
pub mod groundsensor;
pub mod group;
pub mod mapposition;
pub mod orb;
pub mod pending;
pub mod playeraudio;
pub mod playercontroller;
pub mod playervisuals;
pub mod rigidbody;
pub mod rotation;
pub mod scenescoped;
pub mod tint;
pub mod trail;
