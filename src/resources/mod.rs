//! ECS resources made available to systems.
//!
//! This module groups the long-lived data injected into the ECS world and
//! accessed by systems during execution: input state, timing, the camera,
//! configuration, the scene registry and the session state. Each submodule
//! documents the semantics and intended usage of its resource(s).
//!
//! Overview
//! - `audio` – bridge and channels for the background audio thread, pitch RNG
//! - `camera2d` – shared 2D camera used for the "player in view" query
//! - `contacts` – contact pairs from the previous collision pass
//! - `gameconfig` – gameplay tunables loaded from `config.ini`
//! - `gamesession` – win latch and ending cutscene state machine
//! - `input` – per-tick control state relevant to the game
//! - `inputscript` – scripted input timeline for headless runs
//! - `levellayout` – what the level scene spawns
//! - `scene` – current and pending scene
//! - `systemsstore` – registry of scene setup systems by name
//! - `worldtime` – simulation time and delta
pub mod audio;
pub mod camera2d;
pub mod contacts;
pub mod gameconfig;
pub mod gamesession;
pub mod input;
pub mod inputscript;
pub mod levellayout;
pub mod scene;
pub mod systemsstore;
pub mod worldtime;
