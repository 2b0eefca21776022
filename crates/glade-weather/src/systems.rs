//! Tick systems for rain and clouds.

use bevy_ecs::prelude::*;
use glade_ecs::TimeRes;
use tracing::trace;

use crate::{CloudLayer, RainField};

/// Drops every rain particle by one tick.
pub fn rain_fall_system(mut rain: ResMut<'_, RainField>) {
    let respawned = rain.step();
    if respawned > 0 {
        trace!(respawned, "rain particles recycled");
    }
}

/// Drifts clouds by the wall-clock frame delta.
pub fn cloud_drift_system(time: Res<'_, TimeRes>, mut clouds: ResMut<'_, CloudLayer>) {
    clouds.step(time.delta);
}
