//! orbclimb headless runner.
//!
//! Loads `config.ini`, a level layout and an optional scripted input
//! timeline, then runs the gameplay tick at a fixed step until the session
//! ends (the menu scene is entered) or the time limit is reached.
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --input assets/input/demo.json --seconds 30
//! ```

use bevy_ecs::prelude::*;
use clap::Parser;
use log::{info, warn};
use std::path::PathBuf;

use orbclimb::components::orb::Orb;
use orbclimb::components::playercontroller::Player;
use orbclimb::components::mapposition::MapPosition;
use orbclimb::game::{init_world, start_game, step, tick_schedule};
use orbclimb::resources::audio::{setup_audio, shutdown_audio};
use orbclimb::resources::gameconfig::GameConfig;
use orbclimb::resources::inputscript::InputScript;
use orbclimb::resources::levellayout::LevelLayout;
use orbclimb::resources::scene::SceneState;
use orbclimb::resources::worldtime::WorldTime;

/// Headless runner for the orbclimb gameplay layer.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Configuration file.
    #[arg(long, value_name = "PATH", default_value = "config.ini")]
    config: PathBuf,

    /// Level layout JSON. The built-in sample level is used when omitted.
    #[arg(long, value_name = "PATH")]
    level: Option<PathBuf>,

    /// Scripted input timeline JSON. No input when omitted.
    #[arg(long, value_name = "PATH")]
    input: Option<PathBuf>,

    /// Stop after this many simulated seconds.
    #[arg(long, default_value_t = 60.0)]
    seconds: f32,

    /// Fixed tick length in seconds.
    #[arg(long, default_value_t = 1.0 / 60.0)]
    dt: f32,

    /// Seed for pitch variation.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = GameConfig::with_path(&cli.config);
    if let Err(e) = config.load_from_file() {
        warn!("{}; using defaults", e);
    }

    let layout = match &cli.level {
        Some(path) => LevelLayout::load(path).unwrap_or_else(|e| {
            warn!("{}; using the sample level", e);
            LevelLayout::sample()
        }),
        None => LevelLayout::sample(),
    };

    let mut world = World::new();
    init_world(&mut world, config, layout, cli.seed);

    if let Some(path) = &cli.input {
        match InputScript::load(path) {
            Ok(script) => {
                info!("Loaded {} input frames from {:?}", script.frames.len(), path);
                world.insert_resource(script);
            }
            Err(e) => warn!("{}; running without input", e),
        }
    }

    // Init audio
    setup_audio(&mut world);

    start_game(&mut world);

    let dt = if cli.dt > 0.0 { cli.dt } else { 1.0 / 60.0 };
    let mut schedule = tick_schedule();

    // --------------- Main loop ---------------
    while !world.resource::<SceneState>().quit_requested
        && world.resource::<WorldTime>().elapsed < cli.seconds
    {
        step(&mut world, &mut schedule, dt);
    }

    let time = *world.resource::<WorldTime>();
    let mut players = world.query_filtered::<&MapPosition, With<Player>>();
    let player_pos = players.iter(&world).next().map(|p| p.pos);
    let mut orbs = world.query::<&Orb>();
    let orbs_left = orbs.iter(&world).filter(|o| o.is_idle()).count();
    info!(
        "Stopped after {:.2}s ({} ticks); scenes loaded: {:?}; player at {:?}; idle orbs: {}",
        time.elapsed,
        time.frame_count,
        world.resource::<SceneState>().history(),
        player_pos,
        orbs_left
    );

    shutdown_audio(&mut world);
}
