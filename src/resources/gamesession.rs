//! Per-level session state owned by the game orchestrator.
//!
//! [`GameSession`] latches the win (only the first orb pickup counts) and
//! runs the ending [`Cutscene`] as an explicit state machine with stored
//! elapsed time. The cutscene is linear and cannot be cancelled:
//!
//! 1. [`Cutscene::ApproachOrb`] – pull the player toward the orb;
//! 2. [`Cutscene::Hold`] – wait;
//! 3. [`Cutscene::Elevate`] – lift every elevator entity;
//! 4. [`Cutscene::Finished`] – the menu scene has been requested.
//!
//! [`GameSession::advance`] reports what the tick should do as a
//! [`CutsceneStep`]; the system applies it to the world.

use bevy_ecs::prelude::Resource;
use glam::Vec2;

/// Cutscene durations and speeds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CutsceneTimings {
    pub approach_time: f32,
    pub approach_speed: f32,
    pub hold_time: f32,
    pub elevate_time: f32,
    pub elevate_speed: f32,
}

impl Default for CutsceneTimings {
    fn default() -> Self {
        Self {
            approach_time: 2.0,
            approach_speed: 2.0,
            hold_time: 2.0,
            elevate_time: 5.0,
            elevate_speed: 4.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Cutscene {
    Inactive,
    ApproachOrb { elapsed: f32, orb: Vec2 },
    Hold { elapsed: f32 },
    Elevate { elapsed: f32 },
    Finished,
}

/// What the current tick of the cutscene asks for.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CutsceneStep {
    /// Move the player toward this point by at most the given distance.
    pub approach: Option<(Vec2, f32)>,
    /// Raise every elevator by this much.
    pub elevate: Option<f32>,
    /// Request the menu scene.
    pub load_menu: bool,
}

#[derive(Resource, Debug, Clone)]
pub struct GameSession {
    win_triggered: bool,
    pub cutscene: Cutscene,
    pub timings: CutsceneTimings,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(CutsceneTimings::default())
    }
}

impl GameSession {
    pub fn new(timings: CutsceneTimings) -> Self {
        Self {
            win_triggered: false,
            cutscene: Cutscene::Inactive,
            timings,
        }
    }

    /// Drop the win latch and any running cutscene. The session belongs to
    /// the scene that created it, so a scene change ends it.
    pub fn reset(&mut self) {
        self.win_triggered = false;
        self.cutscene = Cutscene::Inactive;
    }

    pub fn win_triggered(&self) -> bool {
        self.win_triggered
    }

    /// Latch the win and start the cutscene. Returns false if the win was
    /// already triggered.
    pub fn trigger_win(&mut self, orb: Vec2) -> bool {
        if self.win_triggered {
            return false;
        }
        self.win_triggered = true;
        self.cutscene = Cutscene::ApproachOrb { elapsed: 0.0, orb };
        true
    }

    /// Advance the cutscene by `dt` seconds.
    pub fn advance(&mut self, dt: f32) -> CutsceneStep {
        let t = self.timings;
        let mut step = CutsceneStep::default();
        self.cutscene = match self.cutscene {
            Cutscene::ApproachOrb { elapsed, orb } => {
                step.approach = Some((orb, dt * t.approach_speed));
                let elapsed = elapsed + dt;
                if elapsed >= t.approach_time {
                    Cutscene::Hold { elapsed: 0.0 }
                } else {
                    Cutscene::ApproachOrb { elapsed, orb }
                }
            }
            Cutscene::Hold { elapsed } => {
                let elapsed = elapsed + dt;
                if elapsed >= t.hold_time {
                    Cutscene::Elevate { elapsed: 0.0 }
                } else {
                    Cutscene::Hold { elapsed }
                }
            }
            Cutscene::Elevate { elapsed } => {
                step.elevate = Some(dt * t.elevate_speed);
                let elapsed = elapsed + dt;
                if elapsed >= t.elevate_time {
                    step.load_menu = true;
                    Cutscene::Finished
                } else {
                    Cutscene::Elevate { elapsed }
                }
            }
            other @ (Cutscene::Inactive | Cutscene::Finished) => other,
        };
        step
    }
}
