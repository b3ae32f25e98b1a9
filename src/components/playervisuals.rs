//! Debounced grounded/airborne visual state.
//!
//! The player's outline color and trail gradient follow whether it is on the
//! ground, but switching on every probe flicker would strobe. A requested
//! state therefore has to stay uncontested for `settle_delay` seconds before
//! it is committed:
//!
//! - a request for the state already in flight is ignored;
//! - a request for the committed state cancels any in-flight transition;
//! - any other request replaces the in-flight transition and restarts the
//!   delay.
//!
//! The committed state doubles as a "stably grounded" signal for the impact
//! sound debounce, see [`PlayerVisuals::check_for_visuals_grounded_state`].

use std::fmt;
use std::str::FromStr;

use bevy_ecs::prelude::Component;
use log::error;

use crate::components::tint::Color;
use crate::components::trail::Gradient;

/// Delay a requested visual state must survive before it is committed.
pub const DEFAULT_SETTLE_DELAY: f32 = 0.1;

/// Visual state of the player. Grounded renders green, airborne orange.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColorState {
    Grounded,
    Airborne,
}

impl ColorState {
    /// Index into the palette arrays.
    pub fn index(self) -> usize {
        match self {
            ColorState::Grounded => 0,
            ColorState::Airborne => 1,
        }
    }

    pub fn from_grounded(grounded: bool) -> Self {
        if grounded {
            ColorState::Grounded
        } else {
            ColorState::Airborne
        }
    }
}

impl FromStr for ColorState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "green" | "grounded" => Ok(ColorState::Grounded),
            "orange" | "airborne" => Ok(ColorState::Airborne),
            other => Err(format!("Did not recognize player color type: {}", other)),
        }
    }
}

impl fmt::Display for ColorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorState::Grounded => write!(f, "green"),
            ColorState::Airborne => write!(f, "orange"),
        }
    }
}

/// Outline colors and trail gradients, indexed by [`ColorState::index`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisualPalette {
    pub outlines: [Color; 2],
    pub trails: [Gradient; 2],
}

impl Default for VisualPalette {
    fn default() -> Self {
        let green = Color::new(60, 220, 80, 255);
        let orange = Color::new(255, 150, 40, 255);
        Self {
            outlines: [green, orange],
            trails: [
                Gradient::new(green, Color::new(60, 220, 80, 0)),
                Gradient::new(orange, Color::new(255, 150, 40, 0)),
            ],
        }
    }
}

impl VisualPalette {
    pub fn outline(&self, state: ColorState) -> Color {
        self.outlines[state.index()]
    }

    pub fn trail(&self, state: ColorState) -> Gradient {
        self.trails[state.index()]
    }
}

/// A visual state waiting out the settle delay.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorTransition {
    pub target: ColorState,
    pub elapsed: f32,
    /// False until the tick that made the request has passed; the settle
    /// delay only counts time after it.
    pub counting: bool,
}

#[derive(Component, Clone, Debug)]
pub struct PlayerVisuals {
    committed: ColorState,
    transition: Option<ColorTransition>,
    pub settle_delay: f32,
    pub palette: VisualPalette,
}

impl PlayerVisuals {
    pub fn new(initial: ColorState, settle_delay: f32, palette: VisualPalette) -> Self {
        Self {
            committed: initial,
            transition: None,
            settle_delay,
            palette,
        }
    }

    pub fn committed(&self) -> ColorState {
        self.committed
    }

    pub fn pending(&self) -> Option<ColorTransition> {
        self.transition
    }

    /// Request a visual state change, debounced by the settle delay.
    pub fn set_player_colors_if_needed(&mut self, state: ColorState) {
        if self.transition.map(|t| t.target) == Some(state) {
            return;
        }
        if state == self.committed {
            self.transition = None;
            return;
        }
        self.transition = Some(ColorTransition {
            target: state,
            elapsed: 0.0,
            counting: false,
        });
    }

    /// Name-based request. Unknown names are logged and dropped.
    pub fn set_player_colors_by_name(&mut self, name: &str) {
        match name.parse::<ColorState>() {
            Ok(state) => self.set_player_colors_if_needed(state),
            Err(e) => error!("{}", e),
        }
    }

    /// Whether the player has been grounded long enough to show green.
    pub fn check_for_visuals_grounded_state(&self) -> bool {
        self.committed == ColorState::Grounded
    }

    /// Advance the in-flight transition. Returns the state committed on this
    /// call, if any. The first call after a request only starts the clock,
    /// so a transition never commits on the tick it was requested.
    pub fn advance(&mut self, dt: f32) -> Option<ColorState> {
        let transition = self.transition.as_mut()?;
        if !transition.counting {
            transition.counting = true;
            return None;
        }
        transition.elapsed += dt;
        if transition.elapsed < self.settle_delay {
            return None;
        }
        let target = transition.target;
        self.committed = target;
        self.transition = None;
        Some(target)
    }
}

impl Default for PlayerVisuals {
    fn default() -> Self {
        Self::new(
            ColorState::Grounded,
            DEFAULT_SETTLE_DELAY,
            VisualPalette::default(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names() {
        assert_eq!("green".parse::<ColorState>(), Ok(ColorState::Grounded));
        assert_eq!(" Orange ".parse::<ColorState>(), Ok(ColorState::Airborne));
        assert_eq!("airborne".parse::<ColorState>(), Ok(ColorState::Airborne));
        assert!("purple".parse::<ColorState>().is_err());
    }

    #[test]
    fn test_commits_after_settle_delay() {
        let mut v = PlayerVisuals::default();
        v.set_player_colors_if_needed(ColorState::Airborne);
        // Request tick.
        assert_eq!(v.advance(0.05), None);
        assert_eq!(v.advance(0.05), None);
        assert_eq!(v.committed(), ColorState::Grounded);
        assert_eq!(v.advance(0.05), Some(ColorState::Airborne));
        assert_eq!(v.committed(), ColorState::Airborne);
        assert!(v.pending().is_none());
    }

    #[test]
    fn test_request_for_committed_state_is_ignored() {
        let mut v = PlayerVisuals::default();
        v.set_player_colors_if_needed(ColorState::Grounded);
        assert!(v.pending().is_none());
        assert_eq!(v.advance(1.0), None);
    }

    #[test]
    fn test_repeated_request_does_not_restart_delay() {
        let mut v = PlayerVisuals::default();
        v.set_player_colors_if_needed(ColorState::Airborne);
        v.advance(0.06);
        v.advance(0.06);
        v.set_player_colors_if_needed(ColorState::Airborne);
        assert_eq!(v.advance(0.05), Some(ColorState::Airborne));
    }

    #[test]
    fn test_never_commits_on_request_tick() {
        let mut v = PlayerVisuals::default();
        v.set_player_colors_if_needed(ColorState::Airborne);
        assert_eq!(v.advance(1.0), None);
        assert_eq!(v.committed(), ColorState::Grounded);
        assert_eq!(v.advance(1.0), Some(ColorState::Airborne));
    }

    #[test]
    fn test_long_tick_flicker_is_still_debounced() {
        let mut v = PlayerVisuals::default();
        for i in 0..10 {
            v.set_player_colors_if_needed(ColorState::from_grounded(i % 2 == 1));
            assert_eq!(v.advance(0.2), None);
        }
        assert_eq!(v.committed(), ColorState::Grounded);
    }

    #[test]
    fn test_commits_on_seventh_tick_at_60hz() {
        let dt = 1.0 / 60.0;
        let mut v = PlayerVisuals::default();
        let mut committed_on = None;
        for tick in 1..=20 {
            v.set_player_colors_if_needed(ColorState::Airborne);
            if v.advance(dt).is_some() {
                committed_on = Some(tick);
                break;
            }
        }
        // Tick 1 made the request; six more ticks cover the 0.1 s delay.
        assert_eq!(committed_on, Some(7));
    }

    #[test]
    fn test_contrary_request_cancels_in_flight_transition() {
        let mut v = PlayerVisuals::default();
        v.set_player_colors_if_needed(ColorState::Airborne);
        v.advance(0.05);
        v.set_player_colors_if_needed(ColorState::Grounded);
        assert!(v.pending().is_none());
        assert_eq!(v.advance(0.2), None);
        assert_eq!(v.committed(), ColorState::Grounded);
    }

    #[test]
    fn test_rapid_alternation_never_commits() {
        let mut v = PlayerVisuals::new(
            ColorState::Airborne,
            DEFAULT_SETTLE_DELAY,
            VisualPalette::default(),
        );
        for i in 0..40 {
            v.set_player_colors_if_needed(ColorState::from_grounded(i % 2 == 0));
            assert_eq!(v.advance(0.04), None);
        }
        assert_eq!(v.committed(), ColorState::Airborne);
        assert!(!v.check_for_visuals_grounded_state());
    }

    #[test]
    fn test_unknown_name_leaves_state_untouched() {
        let mut v = PlayerVisuals::default();
        v.set_player_colors_by_name("purple");
        assert!(v.pending().is_none());
        assert_eq!(v.committed(), ColorState::Grounded);
        v.set_player_colors_by_name("orange");
        assert_eq!(v.pending().map(|t| t.target), Some(ColorState::Airborne));
    }

    #[test]
    fn test_palette_lookup() {
        let p = VisualPalette::default();
        assert_eq!(p.outline(ColorState::Grounded), p.outlines[0]);
        assert_eq!(p.trail(ColorState::Airborne), p.trails[1]);
    }
}
