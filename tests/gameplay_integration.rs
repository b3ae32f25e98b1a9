//! Gameplay integration tests driving a world with the real tick schedule.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use bevy_ecs::system::SystemState;
use glam::Vec2;

use orbclimb::components::groundsensor::GroundSensor;
use orbclimb::components::mapposition::MapPosition;
use orbclimb::components::orb::{InstructionOverlay, Orb};
use orbclimb::components::playeraudio::RollingSound;
use orbclimb::components::playercontroller::{Player, PlayerController};
use orbclimb::components::playervisuals::{ColorState, PlayerVisuals, VisualPalette};
use orbclimb::components::rigidbody::RigidBody;
use orbclimb::components::tint::Tint;
use orbclimb::events::audio::{AudioCmd, JUMP_CHANNEL, ROLL_CHANNEL};
use orbclimb::events::orb::PlayerPickedUpOrb;
use orbclimb::game::{init_world, start_game, step, tick_schedule};
use orbclimb::resources::audio::{MAX_PITCH, MIN_PITCH};
use orbclimb::resources::camera2d::Camera2DRes;
use orbclimb::resources::gameconfig::GameConfig;
use orbclimb::resources::gamesession::{Cutscene, GameSession};
use orbclimb::resources::inputscript::InputScript;
use orbclimb::resources::levellayout::{Block, LevelLayout};
use orbclimb::resources::scene::SceneState;
use orbclimb::resources::worldtime::WorldTime;

const DT: f32 = 1.0 / 60.0;

#[derive(Resource, Default)]
struct Pickups(u32);

/// Long flat floor with the orb far away unless placed explicitly.
fn flat_layout(orb: Vec2) -> LevelLayout {
    LevelLayout {
        player_spawn: Vec2::new(0.0, 0.5),
        camera_start: Vec2::new(0.0, 0.5),
        orb,
        overlay: Vec2::new(0.0, 3.0),
        ground: vec![Block {
            pos: Vec2::new(0.0, -0.5),
            size: Vec2::new(400.0, 1.0),
        }],
        elevators: vec![Block {
            pos: Vec2::new(5.0, 4.0),
            size: Vec2::new(2.0, 0.5),
        }],
    }
}

fn make_game(layout: LevelLayout, delay_before_start: bool) -> World {
    let mut config = GameConfig::new();
    config.player.delay_before_start = delay_before_start;
    let mut world = World::new();
    init_world(&mut world, config, layout, Some(42));
    world.insert_resource(Pickups::default());
    world.add_observer(|_t: On<PlayerPickedUpOrb>, mut p: ResMut<Pickups>| p.0 += 1);
    world.flush();
    start_game(&mut world);
    world
}

fn set_script(world: &mut World, json: &str) {
    world.insert_resource(InputScript::from_json(json).unwrap());
}

fn player(world: &mut World) -> Entity {
    let mut q = world.query_filtered::<Entity, With<Player>>();
    q.iter(world).next().expect("player spawned")
}

/// Runs ticks while collecting every audio command written.
struct Runner {
    schedule: Schedule,
    reader: SystemState<MessageReader<'static, 'static, AudioCmd>>,
    cmds: Vec<AudioCmd>,
}

impl Runner {
    fn new(world: &mut World) -> Self {
        Self {
            schedule: tick_schedule(),
            reader: SystemState::new(world),
            cmds: Vec::new(),
        }
    }

    fn tick(&mut self, world: &mut World) {
        step(world, &mut self.schedule, DT);
        let mut reader = self.reader.get_mut(world);
        self.cmds.extend(reader.read().cloned());
    }

    fn run_for(&mut self, world: &mut World, seconds: f32) {
        let ticks = (seconds / DT).round() as usize;
        for _ in 0..ticks {
            self.tick(world);
        }
    }

    fn roll_cmds(&self) -> Vec<AudioCmd> {
        self.cmds
            .iter()
            .filter(|c| match c {
                AudioCmd::PlayLoop { id, .. } | AudioCmd::StopLoop { id } => id == ROLL_CHANNEL,
                AudioCmd::Volume { id, .. } => id == ROLL_CHANNEL,
                _ => false,
            })
            .cloned()
            .collect()
    }
}

#[test]
fn test_level_spawns_player_grounded_with_movement() {
    let mut world = make_game(flat_layout(Vec2::new(100.0, 0.5)), false);
    let mut runner = Runner::new(&mut world);
    runner.tick(&mut world);
    let p = player(&mut world);
    assert!(world.get::<GroundSensor>(p).unwrap().grounded);
    assert!(world.get::<PlayerController>(p).unwrap().can_move);
    assert_eq!(
        world.resource::<SceneState>().current(),
        Some("SampleLevel")
    );
}

#[test]
fn test_first_tick_of_rightward_input_pushes_and_starts_rolling() {
    let mut world = make_game(flat_layout(Vec2::new(100.0, 0.5)), false);
    set_script(&mut world, r#"{ "frames": [ { "at": 0.0, "horizontal": 1.0 } ] }"#);
    let mut runner = Runner::new(&mut world);
    runner.tick(&mut world);

    let p = player(&mut world);
    assert!(world.get::<RigidBody>(p).unwrap().velocity.x > 0.0);
    assert!(world.get::<RollingSound>(p).unwrap().is_playing());
    assert!(runner.cmds.contains(&AudioCmd::PlayLoop {
        id: ROLL_CHANNEL.into(),
        vol: 0.5
    }));
}

#[test]
fn test_jump_leaves_ground_and_turns_orange() {
    let mut world = make_game(flat_layout(Vec2::new(100.0, 0.5)), false);
    set_script(&mut world, r#"{ "frames": [ { "at": 0.0, "jump": true } ] }"#);
    let mut runner = Runner::new(&mut world);
    runner.tick(&mut world);

    let p = player(&mut world);
    assert!(world.get::<RigidBody>(p).unwrap().velocity.y > 0.0);
    let pitches: Vec<f32> = runner
        .cmds
        .iter()
        .filter_map(|c| match c {
            AudioCmd::PlayFx { id, pitch } if id == JUMP_CHANNEL => Some(*pitch),
            _ => None,
        })
        .collect();
    assert_eq!(pitches.len(), 1);
    assert!((MIN_PITCH..=MAX_PITCH).contains(&pitches[0]));

    // Holding the button does not jump again; the player is airborne long
    // enough for the visuals to commit.
    runner.run_for(&mut world, 0.3);
    assert!(!world.get::<GroundSensor>(p).unwrap().grounded);
    let visuals = world.get::<PlayerVisuals>(p).unwrap();
    assert_eq!(visuals.committed(), ColorState::Airborne);
    assert_eq!(
        world.get::<Tint>(p).unwrap().color,
        VisualPalette::default().outline(ColorState::Airborne)
    );
    let jumps = runner
        .cmds
        .iter()
        .filter(|c| matches!(c, AudioCmd::PlayFx { id, .. } if id == JUMP_CHANNEL))
        .count();
    assert_eq!(jumps, 1);
}

#[test]
fn test_ground_flicker_never_commits() {
    let mut world = make_game(flat_layout(Vec2::new(100.0, 0.5)), false);
    let mut runner = Runner::new(&mut world);
    let p = player(&mut world);
    world.get_mut::<RigidBody>(p).unwrap().freeze();
    let green = VisualPalette::default().outline(ColorState::Grounded);

    for i in 0..60 {
        let y = if i % 2 == 0 { 3.0 } else { 0.5 };
        world.get_mut::<MapPosition>(p).unwrap().pos.y = y;
        runner.tick(&mut world);
        let visuals = world.get::<PlayerVisuals>(p).unwrap();
        assert_eq!(visuals.committed(), ColorState::Grounded);
        assert_eq!(world.get::<Tint>(p).unwrap().color, green);
    }

    // Staying up commits after the settle delay.
    world.get_mut::<MapPosition>(p).unwrap().pos.y = 3.0;
    runner.run_for(&mut world, 0.2);
    assert_eq!(
        world.get::<PlayerVisuals>(p).unwrap().committed(),
        ColorState::Airborne
    );
}

#[test]
fn test_rolling_volume_bounded_and_fades_to_exact_zero() {
    let mut world = make_game(flat_layout(Vec2::new(1000.0, 0.5)), false);
    set_script(
        &mut world,
        r#"{ "frames": [
            { "at": 0.0, "horizontal": 1.0 },
            { "at": 1.0, "horizontal": 0.0 }
        ] }"#,
    );
    let mut runner = Runner::new(&mut world);
    runner.run_for(&mut world, 10.0);

    let roll = runner.roll_cmds();
    assert_eq!(
        roll.first(),
        Some(&AudioCmd::PlayLoop {
            id: ROLL_CHANNEL.into(),
            vol: 0.5
        })
    );
    for cmd in &roll {
        if let AudioCmd::Volume { vol, .. } = cmd {
            assert!((0.0..=0.5).contains(vol), "volume {} out of range", vol);
        }
    }
    let n = roll.len();
    assert!(n >= 3);
    assert_eq!(
        roll[n - 2],
        AudioCmd::Volume {
            id: ROLL_CHANNEL.into(),
            vol: 0.0
        }
    );
    assert_eq!(
        roll[n - 1],
        AudioCmd::StopLoop {
            id: ROLL_CHANNEL.into()
        }
    );
    let p = player(&mut world);
    assert!(!world.get::<RollingSound>(p).unwrap().is_playing());
}

#[test]
fn test_orb_pickup_runs_cutscene_and_loads_menu_once() {
    let mut world = make_game(flat_layout(Vec2::new(0.8, 0.5)), false);
    set_script(&mut world, r#"{ "frames": [ { "at": 0.0, "horizontal": 1.0 } ] }"#);
    let mut runner = Runner::new(&mut world);
    let p = player(&mut world);
    let lift_start = {
        let mut q = world.query_filtered::<&MapPosition, (
            With<orbclimb::components::elevator::Elevator>,
            Without<Player>,
        )>();
        q.iter(&world).next().unwrap().pos
    };
    runner.tick(&mut world);

    assert_eq!(world.resource::<Pickups>().0, 1);
    let rb = world.get::<RigidBody>(p).unwrap();
    assert!(rb.kinematic);
    assert_eq!(rb.velocity, Vec2::ZERO);
    assert!(!world.get::<PlayerController>(p).unwrap().can_move);
    assert!(world.resource::<Camera2DRes>().follow.is_none());
    let mut orbs = world.query::<&Orb>();
    assert!(orbs.iter(&world).all(|o| !o.is_idle()));

    let mut loaded_at = None;
    let mut lift_before_menu = lift_start;
    for _ in 0..(12.0 / DT) as usize {
        if world.resource::<SceneState>().quit_requested {
            break;
        }
        let mut q = world.query_filtered::<&MapPosition, (
            With<orbclimb::components::elevator::Elevator>,
            Without<Player>,
        )>();
        if let Some(pos) = q.iter(&world).next() {
            lift_before_menu = pos.pos;
        }
        runner.tick(&mut world);
        if world.resource::<SceneState>().quit_requested && loaded_at.is_none() {
            loaded_at = Some(world.resource::<WorldTime>().elapsed);
        }
    }

    let scenes = world.resource::<SceneState>();
    assert_eq!(scenes.load_count("MainMenu"), 1);
    assert_eq!(scenes.current(), Some("MainMenu"));
    let loaded_at = loaded_at.expect("menu loaded");
    assert!((loaded_at - 9.0).abs() < 0.1, "menu loaded at {}", loaded_at);
    assert_eq!(world.resource::<Pickups>().0, 1);
    // Elevators rose 4 units/s for about 5 s.
    assert!(lift_before_menu.y - lift_start.y > 19.0);
    // Scene teardown removed the level.
    let mut players = world.query_filtered::<Entity, With<Player>>();
    assert_eq!(players.iter(&world).count(), 0);
}

#[test]
fn test_player_waits_for_camera_before_moving() {
    let mut layout = flat_layout(Vec2::new(100.0, 0.5));
    layout.camera_start = Vec2::new(-30.0, 0.5);
    let mut world = make_game(layout, true);
    let mut runner = Runner::new(&mut world);
    let p = player(&mut world);

    runner.tick(&mut world);
    assert!(!world.get::<PlayerController>(p).unwrap().can_move);
    let mut overlays = world.query::<&InstructionOverlay>();
    assert!(overlays.iter(&world).all(|o| o.visible));

    runner.run_for(&mut world, 2.0);
    assert!(world.get::<PlayerController>(p).unwrap().can_move);
    let mut overlays = world.query::<&InstructionOverlay>();
    assert!(overlays.iter(&world).all(|o| !o.visible));
}

#[test]
fn test_menu_button_returns_to_menu() {
    let mut world = make_game(flat_layout(Vec2::new(100.0, 0.5)), false);
    set_script(
        &mut world,
        r#"{ "frames": [ { "at": 0.0 }, { "at": 0.05, "menu": true } ] }"#,
    );
    let mut runner = Runner::new(&mut world);
    runner.run_for(&mut world, 0.1);
    let scenes = world.resource::<SceneState>();
    assert_eq!(scenes.current(), Some("MainMenu"));
    assert!(scenes.quit_requested);
    assert_eq!(scenes.history(), &["SampleLevel".to_string(), "MainMenu".to_string()]);
}

#[test]
fn test_menu_during_cutscene_ends_it() {
    let mut world = make_game(flat_layout(Vec2::new(0.8, 0.5)), false);
    set_script(
        &mut world,
        r#"{ "frames": [
            { "at": 0.0, "horizontal": 1.0 },
            { "at": 3.0, "menu": true }
        ] }"#,
    );
    let mut runner = Runner::new(&mut world);
    runner.tick(&mut world);
    assert_eq!(world.resource::<Pickups>().0, 1);

    runner.run_for(&mut world, 12.0);
    let scenes = world.resource::<SceneState>();
    assert_eq!(
        scenes.history(),
        &["SampleLevel".to_string(), "MainMenu".to_string()]
    );
    let session = world.resource::<GameSession>();
    assert_eq!(session.cutscene, Cutscene::Inactive);
    assert!(!session.win_triggered());
}
