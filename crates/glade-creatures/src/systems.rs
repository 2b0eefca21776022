//! Tick system that poses animating creatures.

use bevy_ecs::prelude::*;
use glade_ecs::TimeRes;

use crate::Creatures;

/// Samples every active motion at the accumulated frame time.
pub fn animate_creatures_system(time: Res<'_, TimeRes>, mut creatures: ResMut<'_, Creatures>) {
    creatures.step(time.elapsed);
}
