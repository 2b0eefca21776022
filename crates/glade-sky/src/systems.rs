//! Tick systems for the clock and the derived lighting state.

use bevy_ecs::prelude::*;
use glade_ecs::TimeRes;
use tracing::debug;

use crate::{CelestialParams, CelestialState, ClockAdvance, SimClock};

/// Advances [`SimClock`] by the frame delta scaled into simulated hours.
pub fn advance_clock_system(time: Res<'_, TimeRes>, mut clock: ResMut<'_, SimClock>) {
    if clock.advance(time.delta) == ClockAdvance::Wrapped {
        debug!(tick = time.tick, "simulated day rolled over");
    }
}

/// Recomputes [`CelestialState`] from the current hour.
pub fn update_celestial_system(
    clock: Res<'_, SimClock>,
    params: Res<'_, CelestialParams>,
    mut state: ResMut<'_, CelestialState>,
) {
    let next = CelestialState::from_hour(clock.hour(), &params);
    if next.regime != state.regime {
        debug!(hour = next.hour, regime = ?next.regime, "lighting regime changed");
    }
    *state = next;
}
