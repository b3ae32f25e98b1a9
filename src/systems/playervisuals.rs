//! Player visual state system.
//!
//! Requests the visual state matching the ground sensor every tick, advances
//! the settle delay, and on commit copies the palette entry into the outline
//! [`Tint`] and the [`Trail`] gradient.
use bevy_ecs::prelude::*;

use crate::components::groundsensor::GroundSensor;
use crate::components::playervisuals::{ColorState, PlayerVisuals};
use crate::components::tint::Tint;
use crate::components::trail::Trail;
use crate::resources::worldtime::WorldTime;

pub fn player_visuals_system(
    mut query: Query<(
        &GroundSensor,
        &mut PlayerVisuals,
        Option<&mut Tint>,
        Option<&mut Trail>,
    )>,
    time: Res<WorldTime>,
) {
    for (sensor, mut visuals, tint, trail) in query.iter_mut() {
        visuals.set_player_colors_if_needed(ColorState::from_grounded(sensor.grounded));
        let Some(state) = visuals.advance(time.delta) else {
            continue;
        };
        log::debug!("player visuals committed: {}", state);
        if let Some(mut tint) = tint {
            tint.color = visuals.palette.outline(state);
        }
        if let Some(mut trail) = trail {
            trail.gradient = visuals.palette.trail(state);
        }
    }
}
