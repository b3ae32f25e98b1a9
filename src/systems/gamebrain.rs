//! Game orchestration: the win sequence and the return to the menu.
//!
//! - [`on_player_picked_up_orb`] reacts to the (first) orb pickup: it takes
//!   control away from the player, silences the rolling sound, freezes the
//!   body, releases the camera and starts the ending cutscene.
//! - [`cutscene_system`] plays the cutscene from
//!   [`GameSession::advance`]: pull the player to the orb, wait, raise the
//!   elevators, then request the menu scene once.
//! - [`menu_button_system`] requests the menu scene on the menu button.
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use glam::Vec2;
use log::{info, warn};

use crate::components::elevator::Elevator;
use crate::components::mapposition::MapPosition;
use crate::components::playeraudio::RollingSound;
use crate::components::playercontroller::{Player, PlayerController};
use crate::components::rigidbody::RigidBody;
use crate::events::orb::PlayerPickedUpOrb;
use crate::resources::camera2d::Camera2DRes;
use crate::resources::gameconfig::GameConfig;
use crate::resources::gamesession::GameSession;
use crate::resources::input::InputState;
use crate::resources::scene::{NextScene, SceneState};
use crate::resources::worldtime::WorldTime;

/// Move `current` toward `target` by at most `max_delta` without overshooting.
pub fn move_towards(current: Vec2, target: Vec2, max_delta: f32) -> Vec2 {
    let to_target = target - current;
    let dist = to_target.length();
    if dist <= max_delta || dist == 0.0 {
        target
    } else {
        current + to_target / dist * max_delta
    }
}

/// Start the win sequence. Only the first pickup of a session counts.
pub fn on_player_picked_up_orb(
    trigger: On<PlayerPickedUpOrb>,
    mut session: ResMut<GameSession>,
    mut camera: ResMut<Camera2DRes>,
    mut players: Query<
        (
            &mut PlayerController,
            &mut RigidBody,
            Option<&mut RollingSound>,
        ),
        With<Player>,
    >,
    positions: Query<&MapPosition>,
) {
    let orb = trigger.event().orb;
    let Ok(orb_pos) = positions.get(orb).map(|p| p.pos) else {
        warn!("Picked up orb {:?} has no position; ignoring", orb);
        return;
    };
    if !session.trigger_win(orb_pos) {
        return;
    }
    info!("Level won, starting ending cutscene");
    for (mut controller, mut rigidbody, rolling) in players.iter_mut() {
        controller.set_can_move(false);
        if let Some(mut rolling) = rolling {
            rolling.stop_rolling_sound_if_needed();
        }
        rigidbody.freeze();
    }
    camera.follow = None;
}

/// Advance the ending cutscene and apply its step to the world.
pub fn cutscene_system(
    mut session: ResMut<GameSession>,
    mut movers: Query<(&mut MapPosition, Has<Player>, Has<Elevator>)>,
    mut next_scene: ResMut<NextScene>,
    config: Res<GameConfig>,
    time: Res<WorldTime>,
) {
    let step = session.advance(time.delta);
    if let Some((target, max_delta)) = step.approach {
        for (mut position, is_player, _) in movers.iter_mut() {
            if is_player {
                position.pos = move_towards(position.pos, target, max_delta);
            }
        }
    }
    if let Some(dy) = step.elevate {
        for (mut position, _, is_elevator) in movers.iter_mut() {
            if is_elevator {
                position.pos.y += dy;
            }
        }
    }
    if step.load_menu {
        info!("Cutscene finished, loading '{}'", config.scenes.menu);
        next_scene.set(config.scenes.menu.clone());
    }
}

/// Go back to the menu on the menu button's just-pressed edge.
pub fn menu_button_system(
    input: Res<InputState>,
    scene_state: Res<SceneState>,
    mut next_scene: ResMut<NextScene>,
    config: Res<GameConfig>,
) {
    if !input.menu.just_pressed {
        return;
    }
    if scene_state.current() == Some(config.scenes.menu.as_str()) {
        return;
    }
    info!("Menu button pressed, loading '{}'", config.scenes.menu);
    next_scene.set(config.scenes.menu.clone());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::playeraudio::RollPhase;
    use crate::resources::gamesession::Cutscene;
    use crate::resources::scene::NextScenes;

    #[test]
    fn test_move_towards_does_not_overshoot() {
        let p = move_towards(Vec2::ZERO, Vec2::new(3.0, 4.0), 1.0);
        assert!((p - Vec2::new(0.6, 0.8)).length() < 1e-6);
        assert_eq!(move_towards(Vec2::ZERO, Vec2::new(0.3, 0.4), 1.0), Vec2::new(0.3, 0.4));
    }

    fn make_world() -> World {
        let mut world = World::new();
        world.insert_resource(GameSession::default());
        world.insert_resource(Camera2DRes::default());
        world.insert_resource(NextScene::new());
        world.insert_resource(GameConfig::new());
        world.insert_resource(WorldTime {
            delta: 0.5,
            ..Default::default()
        });
        world.add_observer(on_player_picked_up_orb);
        world.flush();
        world
    }

    #[test]
    fn test_pickup_freezes_player_once() {
        let mut world = make_world();
        let mut rolling = RollingSound::new(0.5);
        rolling.phase = RollPhase::Playing;
        let mut rb = RigidBody::new();
        rb.velocity = Vec2::new(5.0, 1.0);
        let player = world
            .spawn((
                Player,
                MapPosition::new(0.0, 0.0),
                PlayerController {
                    can_move: true,
                    ..Default::default()
                },
                rb,
                rolling,
            ))
            .id();
        world.resource_mut::<Camera2DRes>().follow = Some(player);
        let orb = world.spawn(MapPosition::new(4.0, 0.0)).id();

        world.trigger(PlayerPickedUpOrb { orb });
        assert!(!world.get::<PlayerController>(player).unwrap().can_move);
        let rb = world.get::<RigidBody>(player).unwrap();
        assert!(rb.kinematic);
        assert_eq!(rb.velocity, Vec2::ZERO);
        assert_eq!(
            world.get::<RollingSound>(player).unwrap().phase,
            RollPhase::Fading
        );
        assert!(world.resource::<Camera2DRes>().follow.is_none());

        // A second pickup does not restart the cutscene.
        world.resource_mut::<GameSession>().cutscene = Cutscene::Hold { elapsed: 1.0 };
        world.trigger(PlayerPickedUpOrb { orb });
        assert_eq!(
            world.resource::<GameSession>().cutscene,
            Cutscene::Hold { elapsed: 1.0 }
        );
    }

    #[test]
    fn test_cutscene_moves_player_and_elevators() {
        let mut world = make_world();
        let player = world.spawn((Player, MapPosition::new(0.0, 0.0))).id();
        let lift = world.spawn((Elevator, MapPosition::new(0.0, 0.0))).id();
        world
            .resource_mut::<GameSession>()
            .trigger_win(Vec2::new(10.0, 0.0));
        let mut schedule = Schedule::default();
        schedule.add_systems(cutscene_system);

        schedule.run(&mut world);
        assert_eq!(world.get::<MapPosition>(player).unwrap().pos, Vec2::new(1.0, 0.0));

        // 2 s approach, 2 s hold, 5 s elevate at 0.5 s per tick.
        for _ in 1..18 {
            schedule.run(&mut world);
        }
        assert_eq!(world.get::<MapPosition>(player).unwrap().pos, Vec2::new(4.0, 0.0));
        assert!((world.get::<MapPosition>(lift).unwrap().pos.y - 20.0).abs() < 1e-4);
        assert_eq!(
            world.resource::<NextScene>().get(),
            &NextScenes::Pending("MainMenu".to_string())
        );
    }

    #[test]
    fn test_menu_button_requests_menu() {
        let mut world = make_world();
        world.insert_resource(SceneState::new());
        let mut input = InputState::default();
        input.menu.update(true);
        world.insert_resource(input);
        let mut schedule = Schedule::default();
        schedule.add_systems(menu_button_system);
        schedule.run(&mut world);
        assert!(world.resource::<NextScene>().is_pending());
    }
}
