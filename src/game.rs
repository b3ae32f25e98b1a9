//! Game setup and scene management.
//!
//! - [`init_world`] inserts every resource, spawns the observers and
//!   registers the scene setup systems in [`SystemsStore`].
//! - [`tick_schedule`] builds the per-tick schedule. Systems are chained so
//!   the order is fixed: input, ground probes, jump, movement, physics,
//!   contacts, visuals, audio, then camera/pending/cutscene and finally the
//!   scene check and the audio bridge.
//! - [`enter_level`] and [`enter_menu`] are the scene setup systems.
//! - [`load_scene`] requests a scene and applies it immediately, which is how
//!   the first scene is entered.
use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use glam::Vec2;
use log::info;

use crate::components::animation::Animator;
use crate::components::boxcollider::BoxCollider;
use crate::components::circlecollider::CircleCollider;
use crate::components::elevator::Elevator;
use crate::components::groundsensor::GroundSensor;
use crate::components::group::{Group, PLAYER_GROUP};
use crate::components::mapposition::MapPosition;
use crate::components::orb::{InstructionOverlay, Orb};
use crate::components::pending::{VisibilityEffect, WaitUntilPlayerVisible};
use crate::components::playeraudio::{ImpactDebounce, RollingSound};
use crate::components::playercontroller::{Player, PlayerController};
use crate::components::playervisuals::PlayerVisuals;
use crate::components::rigidbody::RigidBody;
use crate::components::rotation::Rotation;
use crate::components::scenescoped::SceneScoped;
use crate::components::tint::Tint;
use crate::components::trail::Trail;
use crate::events::audio::{AudioCmd, AudioMessage};
use crate::events::scene::{SceneChangedEvent, observe_scene_change_event};
use crate::resources::audio::AudioRng;
use crate::resources::camera2d::Camera2DRes;
use crate::resources::contacts::ActiveContacts;
use crate::resources::gameconfig::GameConfig;
use crate::resources::gamesession::GameSession;
use crate::resources::input::InputState;
use crate::resources::levellayout::LevelLayout;
use crate::resources::scene::{NextScene, SceneState};
use crate::resources::systemsstore::SystemsStore;
use crate::resources::worldtime::WorldTime;
use crate::systems::animation::animation_system;
use crate::systems::audio::{
    forward_audio_cmds, poll_audio_messages, update_bevy_audio_cmds, update_bevy_audio_messages,
};
use crate::systems::camera::camera_follow_system;
use crate::systems::collision::collision_detector;
use crate::systems::gamebrain::{cutscene_system, menu_button_system, on_player_picked_up_orb};
use crate::systems::groundsensor::ground_sensor_system;
use crate::systems::input::update_input_state;
use crate::systems::orb::{orb_rotation_system, orb_trigger_observer};
use crate::systems::pending::pending_visibility_system;
use crate::systems::physics::physics_step;
use crate::systems::playeraudio::{
    impact_debounce_system, player_contact_observer, rolling_sound_system,
};
use crate::systems::playercontroller::{player_jump_system, player_movement_system};
use crate::systems::playervisuals::player_visuals_system;
use crate::systems::scene::check_pending_scene;
use crate::systems::time::update_world_time;

/// Radius of the orb's trigger circle.
const ORB_RADIUS: f32 = 0.5;

/// Insert resources, observers and scene systems.
///
/// `seed` makes the pitch variation reproducible. The audio bridge is not
/// created here; call [`crate::resources::audio::setup_audio`] separately
/// when a mixer thread is wanted.
pub fn init_world(world: &mut World, config: GameConfig, layout: LevelLayout, seed: Option<u64>) {
    world.insert_resource(WorldTime::default().with_time_scale(1.0));
    world.insert_resource(InputState::default());
    world.insert_resource(ActiveContacts::default());
    world.insert_resource(Camera2DRes {
        half_extents: config.camera.half_extents,
        follow_speed: config.camera.follow_speed,
        ..Default::default()
    });
    world.insert_resource(GameSession::new(config.cutscene));
    world.insert_resource(NextScene::new());
    world.insert_resource(SceneState::new());
    world.insert_resource(match seed {
        Some(seed) => AudioRng::with_seed(seed),
        None => AudioRng::default(),
    });
    world.init_resource::<Messages<AudioCmd>>();
    world.init_resource::<Messages<AudioMessage>>();

    let menu = config.scenes.menu.clone();
    let level = config.scenes.level.clone();
    world.insert_resource(layout);
    world.insert_resource(config);

    world.spawn(Observer::new(observe_scene_change_event));
    world.spawn(Observer::new(player_contact_observer));
    world.spawn(Observer::new(orb_trigger_observer));
    world.spawn(Observer::new(on_player_picked_up_orb));

    let mut systems_store = SystemsStore::new();
    systems_store.register_scene(world, level, enter_level);
    systems_store.register_scene(world, menu, enter_menu);
    world.insert_resource(systems_store);

    // Ensure the observers are registered before anything triggers events.
    world.flush();
}

/// Request `name` and apply the load right away.
pub fn load_scene(world: &mut World, name: &str) {
    world.resource_mut::<NextScene>().set(name);
    world.trigger(SceneChangedEvent {});
    world.flush();
}

/// Enter the configured level scene.
pub fn start_game(world: &mut World) {
    let level = world.resource::<GameConfig>().scenes.level.clone();
    load_scene(world, &level);
}

/// The per-tick schedule.
pub fn tick_schedule() -> Schedule {
    let mut schedule = Schedule::default();
    schedule.add_systems(
        (
            (
                update_input_state,
                ground_sensor_system,
                player_jump_system,
                player_movement_system,
                physics_step,
                collision_detector,
            )
                .chain(),
            (
                player_visuals_system,
                impact_debounce_system,
                rolling_sound_system,
                animation_system,
            )
                .chain(),
            (
                orb_rotation_system,
                camera_follow_system,
                pending_visibility_system,
                cutscene_system,
                menu_button_system,
                check_pending_scene,
            )
                .chain(),
            // audio systems must be together
            (
                update_bevy_audio_cmds,
                forward_audio_cmds,
                poll_audio_messages,
                update_bevy_audio_messages,
            )
                .chain(),
        )
            .chain(),
    );
    schedule
}

/// Advance the clock by `dt` and run one tick.
pub fn step(world: &mut World, schedule: &mut Schedule, dt: f32) {
    update_world_time(world, dt);
    schedule.run(world);
    world.clear_trackers();
}

/// Setup system of the level scene: spawns the layout.
pub fn enter_level(
    mut commands: Commands,
    config: Res<GameConfig>,
    layout: Res<LevelLayout>,
    mut camera: ResMut<Camera2DRes>,
    mut session: ResMut<GameSession>,
    mut contacts: ResMut<ActiveContacts>,
) {
    *session = GameSession::new(config.cutscene);
    contacts.pairs.clear();

    let ground_group = config
        .player
        .ground_groups
        .first()
        .cloned()
        .unwrap_or_else(|| "ground".to_string());

    for block in &layout.ground {
        commands.spawn((
            SceneScoped,
            Group::new(ground_group.clone()),
            MapPosition::from_vec(block.pos),
            BoxCollider::centered(block.size.x, block.size.y),
        ));
    }
    for block in &layout.elevators {
        commands.spawn((
            SceneScoped,
            Elevator,
            Group::new(ground_group.clone()),
            MapPosition::from_vec(block.pos),
            BoxCollider::centered(block.size.x, block.size.y),
        ));
    }

    commands.spawn((
        SceneScoped,
        Group::new("orb"),
        MapPosition::from_vec(layout.orb),
        CircleCollider::trigger(ORB_RADIUS),
        Orb::new(config.orb.rotate_speed),
        Rotation::default(),
    ));

    let mut overlay = commands.spawn((
        SceneScoped,
        MapPosition::from_vec(layout.overlay),
        InstructionOverlay {
            visible: config.orb.instruction_text,
        },
    ));
    if config.orb.instruction_text {
        overlay.insert(WaitUntilPlayerVisible::new(VisibilityEffect::HideOverlay));
    }

    let player = spawn_player(&mut commands, &config, layout.player_spawn);

    camera.target = if config.player.delay_before_start {
        layout.camera_start
    } else {
        layout.player_spawn
    };
    camera.follow = Some(player);

    info!(
        "Level spawned: {} ground blocks, {} elevators, player at {:?}",
        layout.ground.len(),
        layout.elevators.len(),
        layout.player_spawn
    );
}

fn spawn_player(commands: &mut Commands, config: &GameConfig, at: Vec2) -> Entity {
    let p = &config.player;
    let visuals = &config.visuals;
    let audio = &config.audio;

    let mut rigidbody =
        RigidBody::with_mass(config.physics.mass).with_friction(config.physics.friction);
    rigidbody.add_force("gravity", Vec2::new(0.0, config.physics.gravity));

    let controller = PlayerController {
        ground_thrust: p.ground_thrust,
        air_thrust: p.air_thrust,
        jump_thrust: p.jump_thrust,
        max_thrust_velocity: p.max_thrust_velocity,
        can_move: !p.delay_before_start,
    };

    let mut rolling = RollingSound::new(audio.roll_volume);
    rolling.grace_delay = audio.roll_grace_delay;
    rolling.fade_rate = audio.roll_fade_rate;
    rolling.start_speed = audio.roll_start_speed;

    let initial = visuals.initial_state;

    let mut entity = commands.spawn((
        SceneScoped,
        Player,
        Elevator,
        Group::new(PLAYER_GROUP),
        MapPosition::from_vec(at),
        CircleCollider::new(p.radius),
        rigidbody,
        GroundSensor::new(p.distance_to_ground, p.ground_groups.iter().cloned()),
        controller,
    ));
    entity.insert((
        PlayerVisuals::new(initial, visuals.settle_delay, visuals.palette),
        Tint::new(visuals.palette.outline(initial)),
        Trail {
            gradient: visuals.palette.trail(initial),
        },
        rolling,
        ImpactDebounce::new(audio.whack_window),
        Animator::default(),
    ));
    if p.delay_before_start {
        entity.insert(WaitUntilPlayerVisible::new(VisibilityEffect::EnableMovement));
    }
    entity.id()
}

/// Setup system of the menu scene. The menu itself lives outside this
/// crate, so entering it ends the session.
pub fn enter_menu(mut scene_state: ResMut<SceneState>) {
    info!("Menu scene entered, ending session");
    scene_state.quit_requested = true;
}
