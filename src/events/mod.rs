//! Event types and observers used by the game.
//!
//! This module groups the domain events exchanged across systems and the
//! corresponding observers that react to them. Events provide a decoupled
//! way for systems to communicate without direct dependencies.
//!
//! Submodules:
//! - [`audio`] – commands and messages for the background audio thread
//! - [`collision`] – contact notifications emitted by the collision pass
//! - [`orb`] – the player picked up the orb
//! - [`scene`] – scene load notifications and the observer applying them
//!
//! See each submodule for concrete event data, semantics, and example usage.
pub mod audio;
pub mod collision;
pub mod orb;
pub mod scene;
