//! Game configuration resource.
//!
//! Gameplay tunables loaded from an INI configuration file. Every value has
//! a default taken from the shipped game, so a missing file or a missing key
//! is never fatal: the loader only overrides what it finds.
//!
//! # Configuration File Format
//!
//! ```ini
//! [physics]
//! mass = 40
//! gravity = -30
//! friction = 0.5
//!
//! [player]
//! ground_thrust = 1200
//! air_thrust = 500
//! jump_thrust = 800
//! max_thrust_velocity = 25
//! distance_to_ground = 0.85
//! radius = 0.5
//! ground_groups = ground, platform
//! delay_before_start = true
//!
//! [audio]
//! roll_volume = 0.5
//! roll_fade_rate = 5
//! roll_grace_delay = 0.5
//! roll_start_speed = 1
//! whack_window = 0.25
//!
//! [visuals]
//! settle_delay = 0.1
//! initial_state = green
//! grounded_outline = #3CDC50
//! airborne_outline = #FF9628
//!
//! [orb]
//! rotate_speed = 100
//! instruction_text = true
//!
//! [cutscene]
//! approach_time = 2
//! approach_speed = 2
//! hold_time = 2
//! elevate_time = 5
//! elevate_speed = 4
//!
//! [scenes]
//! menu = MainMenu
//! level = SampleLevel
//!
//! [camera]
//! half_width = 8
//! half_height = 4.5
//! follow_speed = 2
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use glam::Vec2;
use log::{error, info};
use std::path::PathBuf;

use crate::components::playervisuals::{ColorState, DEFAULT_SETTLE_DELAY, VisualPalette};
use crate::components::tint::Color;
use crate::resources::gamesession::CutsceneTimings;

const DEFAULT_CONFIG_PATH: &str = "./config.ini";

#[derive(Debug, Clone, PartialEq)]
pub struct PhysicsSettings {
    pub mass: f32,
    pub gravity: f32,
    pub friction: f32,
}

impl Default for PhysicsSettings {
    fn default() -> Self {
        Self {
            mass: 40.0,
            gravity: -30.0,
            friction: 0.5,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlayerSettings {
    pub ground_thrust: f32,
    pub air_thrust: f32,
    pub jump_thrust: f32,
    pub max_thrust_velocity: f32,
    pub distance_to_ground: f32,
    pub radius: f32,
    pub ground_groups: Vec<String>,
    /// Spawn with movement disabled until the camera sees the player.
    pub delay_before_start: bool,
}

impl Default for PlayerSettings {
    fn default() -> Self {
        Self {
            ground_thrust: 1200.0,
            air_thrust: 500.0,
            jump_thrust: 800.0,
            max_thrust_velocity: 25.0,
            distance_to_ground: 0.85,
            radius: 0.5,
            ground_groups: vec!["ground".to_string()],
            delay_before_start: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AudioSettings {
    pub roll_volume: f32,
    pub roll_fade_rate: f32,
    pub roll_grace_delay: f32,
    pub roll_start_speed: f32,
    pub whack_window: f32,
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            roll_volume: 0.5,
            roll_fade_rate: 5.0,
            roll_grace_delay: 0.5,
            roll_start_speed: 1.0,
            whack_window: 0.25,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct VisualSettings {
    pub settle_delay: f32,
    pub initial_state: ColorState,
    pub palette: VisualPalette,
}

impl Default for VisualSettings {
    fn default() -> Self {
        Self {
            settle_delay: DEFAULT_SETTLE_DELAY,
            initial_state: ColorState::Grounded,
            palette: VisualPalette::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrbSettings {
    /// Degrees per second.
    pub rotate_speed: f32,
    /// Show the instruction overlay until the player comes into view.
    pub instruction_text: bool,
}

impl Default for OrbSettings {
    fn default() -> Self {
        Self {
            rotate_speed: 100.0,
            instruction_text: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SceneSettings {
    pub menu: String,
    pub level: String,
}

impl Default for SceneSettings {
    fn default() -> Self {
        Self {
            menu: "MainMenu".to_string(),
            level: "SampleLevel".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CameraSettings {
    pub half_extents: Vec2,
    pub follow_speed: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            half_extents: Vec2::new(8.0, 4.5),
            follow_speed: 2.0,
        }
    }
}

/// Game configuration resource.
///
/// Groups the tunables per INI section. Inserted into the world at startup
/// and read by scene setup systems when they spawn entities.
#[derive(Resource, Debug, Clone)]
pub struct GameConfig {
    pub physics: PhysicsSettings,
    pub player: PlayerSettings,
    pub audio: AudioSettings,
    pub visuals: VisualSettings,
    pub orb: OrbSettings,
    pub cutscene: CutsceneTimings,
    pub scenes: SceneSettings,
    pub camera: CameraSettings,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn get_f32(config: &Ini, section: &str, key: &str) -> Option<f32> {
    config
        .getfloat(section, key)
        .ok()
        .flatten()
        .map(|v| v as f32)
}

fn set_f32(config: &Ini, section: &str, key: &str, target: &mut f32) {
    if let Some(v) = get_f32(config, section, key) {
        *target = v;
    }
}

fn set_color(config: &Ini, key: &str, target: &mut Color) {
    if let Some(text) = config.get("visuals", key) {
        match Color::from_hex(&text) {
            Ok(color) => *target = color,
            Err(e) => error!("visuals.{}: {}", key, e),
        }
    }
}

impl GameConfig {
    /// Create a new configuration with the default values.
    pub fn new() -> Self {
        Self {
            physics: PhysicsSettings::default(),
            player: PlayerSettings::default(),
            audio: AudioSettings::default(),
            visuals: VisualSettings::default(),
            orb: OrbSettings::default(),
            cutscene: CutsceneTimings::default(),
            scenes: SceneSettings::default(),
            camera: CameraSettings::default(),
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;
        self.apply(&config);
        Ok(())
    }

    /// Load configuration from INI text.
    pub fn load_from_str(&mut self, text: &str) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .read(text.to_string())
            .map_err(|e| format!("Failed to parse config: {}", e))?;
        self.apply(&config);
        Ok(())
    }

    fn apply(&mut self, config: &Ini) {
        // [physics] section
        set_f32(config, "physics", "mass", &mut self.physics.mass);
        set_f32(config, "physics", "gravity", &mut self.physics.gravity);
        set_f32(config, "physics", "friction", &mut self.physics.friction);

        // [player] section
        let p = &mut self.player;
        set_f32(config, "player", "ground_thrust", &mut p.ground_thrust);
        set_f32(config, "player", "air_thrust", &mut p.air_thrust);
        set_f32(config, "player", "jump_thrust", &mut p.jump_thrust);
        set_f32(config, "player", "max_thrust_velocity", &mut p.max_thrust_velocity);
        set_f32(config, "player", "distance_to_ground", &mut p.distance_to_ground);
        set_f32(config, "player", "radius", &mut p.radius);
        if let Some(groups) = config.get("player", "ground_groups") {
            p.ground_groups = groups
                .split(',')
                .map(str::trim)
                .filter(|g| !g.is_empty())
                .map(str::to_string)
                .collect();
        }
        if let Some(delay) = config.getbool("player", "delay_before_start").ok().flatten() {
            p.delay_before_start = delay;
        }

        // [audio] section
        let a = &mut self.audio;
        set_f32(config, "audio", "roll_volume", &mut a.roll_volume);
        set_f32(config, "audio", "roll_fade_rate", &mut a.roll_fade_rate);
        set_f32(config, "audio", "roll_grace_delay", &mut a.roll_grace_delay);
        set_f32(config, "audio", "roll_start_speed", &mut a.roll_start_speed);
        set_f32(config, "audio", "whack_window", &mut a.whack_window);

        // [visuals] section
        let v = &mut self.visuals;
        set_f32(config, "visuals", "settle_delay", &mut v.settle_delay);
        if let Some(name) = config.get("visuals", "initial_state") {
            match name.parse::<ColorState>() {
                Ok(state) => v.initial_state = state,
                Err(e) => error!("{}", e),
            }
        }
        let [grounded, airborne] = &mut v.palette.outlines;
        set_color(config, "grounded_outline", grounded);
        set_color(config, "airborne_outline", airborne);
        let [grounded_trail, airborne_trail] = &mut v.palette.trails;
        set_color(config, "grounded_trail_head", &mut grounded_trail.head);
        set_color(config, "grounded_trail_tail", &mut grounded_trail.tail);
        set_color(config, "airborne_trail_head", &mut airborne_trail.head);
        set_color(config, "airborne_trail_tail", &mut airborne_trail.tail);

        // [orb] section
        set_f32(config, "orb", "rotate_speed", &mut self.orb.rotate_speed);
        if let Some(show) = config.getbool("orb", "instruction_text").ok().flatten() {
            self.orb.instruction_text = show;
        }

        // [cutscene] section
        let c = &mut self.cutscene;
        set_f32(config, "cutscene", "approach_time", &mut c.approach_time);
        set_f32(config, "cutscene", "approach_speed", &mut c.approach_speed);
        set_f32(config, "cutscene", "hold_time", &mut c.hold_time);
        set_f32(config, "cutscene", "elevate_time", &mut c.elevate_time);
        set_f32(config, "cutscene", "elevate_speed", &mut c.elevate_speed);

        // [scenes] section
        if let Some(menu) = config.get("scenes", "menu") {
            self.scenes.menu = menu;
        }
        if let Some(level) = config.get("scenes", "level") {
            self.scenes.level = level;
        }

        // [camera] section
        let cam = &mut self.camera;
        set_f32(config, "camera", "half_width", &mut cam.half_extents.x);
        set_f32(config, "camera", "half_height", &mut cam.half_extents.y);
        set_f32(config, "camera", "follow_speed", &mut cam.follow_speed);

        info!(
            "Loaded config: thrust {}/{}/{}, max velocity {}, scenes {}/{}",
            self.player.ground_thrust,
            self.player.air_thrust,
            self.player.jump_thrust,
            self.player.max_thrust_velocity,
            self.scenes.level,
            self.scenes.menu
        );
    }
}
