//! Scripted input timeline for the headless runner.
//!
//! An input script is a JSON list of keyframes; each keyframe holds from its
//! `at` time until the next one.
//!
//! ```json
//! { "frames": [
//!     { "at": 0.0, "horizontal": 0.0 },
//!     { "at": 1.5, "horizontal": 1.0 },
//!     { "at": 3.0, "horizontal": 1.0, "jump": true },
//!     { "at": 3.1, "horizontal": 1.0 }
//! ] }
//! ```

use std::path::Path;

use bevy_ecs::prelude::Resource;
use serde::Deserialize;

/// Raw control state from `at` seconds onward.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
pub struct InputFrame {
    pub at: f32,
    #[serde(default)]
    pub horizontal: f32,
    #[serde(default)]
    pub jump: bool,
    #[serde(default)]
    pub menu: bool,
}

#[derive(Resource, Debug, Clone, Default, Deserialize)]
pub struct InputScript {
    pub frames: Vec<InputFrame>,
}

impl InputScript {
    /// Parse a script from JSON. Frames are sorted by time.
    pub fn from_json(text: &str) -> Result<Self, String> {
        let mut script: InputScript =
            serde_json::from_str(text).map_err(|e| format!("Failed to parse input script: {}", e))?;
        script.frames.sort_by(|a, b| a.at.total_cmp(&b.at));
        Ok(script)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, String> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read input script {:?}: {}", path, e))?;
        Self::from_json(&text)
    }

    /// The keyframe in effect at `time`; neutral input before the first one.
    pub fn sample(&self, time: f32) -> InputFrame {
        self.frames
            .iter()
            .take_while(|f| f.at <= time)
            .last()
            .copied()
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCRIPT: &str = r#"{ "frames": [
        { "at": 1.0, "horizontal": 1.0, "jump": true },
        { "at": 0.0 },
        { "at": 2.0, "horizontal": -0.5, "menu": true }
    ] }"#;

    #[test]
    fn test_from_json_sorts_frames() {
        let script = InputScript::from_json(SCRIPT).unwrap();
        let times: Vec<f32> = script.frames.iter().map(|f| f.at).collect();
        assert_eq!(times, vec![0.0, 1.0, 2.0]);
    }

    #[test]
    fn test_sample_holds_last_keyframe() {
        let script = InputScript::from_json(SCRIPT).unwrap();
        assert_eq!(script.sample(0.5).horizontal, 0.0);
        let f = script.sample(1.5);
        assert_eq!(f.horizontal, 1.0);
        assert!(f.jump);
        assert!(script.sample(10.0).menu);
    }

    #[test]
    fn test_sample_before_first_frame_is_neutral() {
        let script = InputScript::from_json(r#"{ "frames": [ { "at": 1.0, "jump": true } ] }"#)
            .unwrap();
        assert_eq!(script.sample(0.0), InputFrame::default());
    }

    #[test]
    fn test_from_json_reports_errors() {
        let err = InputScript::from_json("{ nope").unwrap_err();
        assert!(err.starts_with("Failed to parse input script"));
    }
}
