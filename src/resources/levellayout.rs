//! Level layout description.
//!
//! A [`LevelLayout`] lists what the level scene spawns: the player start, the
//! camera's intro framing, the orb, the instruction overlay, the ground
//! blocks and the elevator platforms that rise during the ending. Layouts are
//! JSON files; [`LevelLayout::sample`] is a built-in fallback used when no
//! file is given or the file cannot be read.

use std::path::Path;

use bevy_ecs::prelude::Resource;
use glam::Vec2;
use serde::Deserialize;

/// Axis-aligned block centered on `pos`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Block {
    pub pos: Vec2,
    pub size: Vec2,
}

#[derive(Resource, Debug, Clone, PartialEq, Deserialize)]
pub struct LevelLayout {
    pub player_spawn: Vec2,
    pub camera_start: Vec2,
    pub orb: Vec2,
    pub overlay: Vec2,
    #[serde(default)]
    pub ground: Vec<Block>,
    #[serde(default)]
    pub elevators: Vec<Block>,
}

impl LevelLayout {
    /// A flat floor with a step behind the start and the orb at the far
    /// end, between two platforms that rise at the end. The camera starts
    /// away from the player so the start-of-level gate has something to
    /// wait for.
    pub fn sample() -> Self {
        Self {
            player_spawn: Vec2::new(0.0, 0.5),
            camera_start: Vec2::new(-12.0, 3.0),
            orb: Vec2::new(14.0, 1.0),
            overlay: Vec2::new(-12.0, 5.0),
            ground: vec![
                Block {
                    pos: Vec2::new(0.0, -0.5),
                    size: Vec2::new(40.0, 1.0),
                },
                Block {
                    pos: Vec2::new(-6.0, 1.0),
                    size: Vec2::new(4.0, 2.0),
                },
            ],
            elevators: vec![
                Block {
                    pos: Vec2::new(11.0, 4.0),
                    size: Vec2::new(2.0, 0.5),
                },
                Block {
                    pos: Vec2::new(17.0, 4.0),
                    size: Vec2::new(2.0, 0.5),
                },
            ],
        }
    }

    pub fn from_json(text: &str) -> Result<Self, String> {
        serde_json::from_str(text).map_err(|e| format!("Failed to parse level layout: {}", e))
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, String> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read level layout {:?}: {}", path, e))?;
        Self::from_json(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json() {
        let json = r#"{
            "player_spawn": [1.0, 2.0],
            "camera_start": [0.0, 0.0],
            "orb": [5.0, 2.0],
            "overlay": [0.0, 4.0],
            "ground": [{ "pos": [0.0, -0.5], "size": [10.0, 1.0] }]
        }"#;
        let layout = LevelLayout::from_json(json).unwrap();
        assert_eq!(layout.player_spawn, Vec2::new(1.0, 2.0));
        assert_eq!(layout.ground.len(), 1);
        assert!(layout.elevators.is_empty());
    }

    #[test]
    fn test_bad_json_is_an_error() {
        let err = LevelLayout::from_json("{ \"orb\": 3 }").unwrap_err();
        assert!(err.starts_with("Failed to parse level layout"));
    }
}
