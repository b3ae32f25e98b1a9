//! orbclimb library.
//!
//! The gameplay layer of a small 2D platformer: a rolling player with ground
//! probes, debounced visuals and audio feedback, an orb that wins the level,
//! and the scene flow around it. Built on `bevy_ecs`; rendering, audio
//! output and input devices sit behind the resources in [`resources`].
//!
//! This module exposes the ECS components, resources, systems, and events
//! for use in integration tests and by the headless runner.

pub mod components;
pub mod events;
pub mod game;
pub mod resources;
pub mod systems;
