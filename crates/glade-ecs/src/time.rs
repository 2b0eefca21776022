//! Frame time resource.

use bevy_ecs::prelude::*;

/// Global time resource, written once at the start of every tick.
///
/// `delta` is the wall-clock frame delta the host reported. It is distinct
/// from the simulated hour kept by the sky clock.
#[derive(Resource, Debug, Clone, Default)]
pub struct TimeRes {
    /// Wall-clock seconds elapsed since the previous tick.
    pub delta: f32,
    /// Wall-clock seconds accumulated over all ticks.
    pub elapsed: f64,
    /// Number of ticks run so far.
    pub tick: u64,
}

impl TimeRes {
    /// Record one tick of `delta` seconds. Negative deltas are treated as zero.
    pub fn advance(&mut self, delta: f32) {
        let delta = delta.max(0.0);
        self.delta = delta;
        self.elapsed += f64::from(delta);
        self.tick += 1;
    }
}
